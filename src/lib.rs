#![doc(test(attr(deny(warnings))))]

//! Budget Tracker offers a LIFO-backed transaction ledger with
//! index-addressed editing and reporting primitives that power the bundled
//! CLI shell.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod reports;
pub mod sink;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Budget Tracker tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::from_default_env().add_directive("budget_tracker=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
