//! Read-only reporting services layered on the tracker's forward iterator.

pub mod filter;
pub mod max_min;

pub use filter::FilterReport;
pub use max_min::MaxMinReport;
