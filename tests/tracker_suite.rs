//! Kernel-level behavior: constructors, standard operations, and identity.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use budget_tracker::errors::LedgerError;
use budget_tracker::ledger::{BudgetTracker, Transaction, DEFAULT_ACCOUNT_NAME};

const DELTA: f64 = 0.01;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < DELTA,
        "expected {expected}, got {actual}"
    );
}

fn sample_tracker() -> BudgetTracker {
    let mut tracker = BudgetTracker::new();
    tracker.add(10.0, "Test Transaction 1");
    tracker.add(20.0, "Test Transaction 2");
    tracker.add(30.0, "Test Transaction 3");
    tracker
}

#[test]
fn default_constructor_starts_empty() {
    let tracker = BudgetTracker::new();
    assert_eq!(tracker.account_name(), DEFAULT_ACCOUNT_NAME);
    assert_close(tracker.balance(), 0.0);
    assert_eq!(tracker.len(), 0);
    assert!(tracker.is_empty());
}

#[test]
fn named_constructor_keeps_the_account_name() {
    let tracker = BudgetTracker::named("Test Account");
    assert_eq!(tracker.account_name(), "Test Account");
    assert_close(tracker.balance(), 0.0);
}

#[test]
fn opening_balance_is_independent_of_records() {
    let tracker = BudgetTracker::with_opening_balance("Test Account", 100.0);
    assert_eq!(tracker.account_name(), "Test Account");
    assert_close(tracker.balance(), 100.0);
    assert_eq!(tracker.len(), 0);
}

#[test]
fn clear_restores_the_default_state() {
    let mut tracker = BudgetTracker::with_opening_balance("Test Account", 100.0);
    tracker.add(10.0, "Test Transaction 1");

    tracker.clear();

    assert_eq!(tracker.account_name(), DEFAULT_ACCOUNT_NAME);
    assert_close(tracker.balance(), 0.0);
    assert_eq!(tracker.len(), 0);
}

#[test]
fn transfer_moves_state_and_resets_the_source() {
    let mut source = BudgetTracker::with_opening_balance("Test Account", 100.0);
    source.add(10.0, "Test Transaction 1");
    let mut target = BudgetTracker::new();

    target.transfer_from(&mut source);

    assert_eq!(target.account_name(), "Test Account");
    assert_close(target.balance(), 110.0);
    assert_eq!(target.len(), 1);
    assert_eq!(source.account_name(), DEFAULT_ACCOUNT_NAME);
    assert_close(source.balance(), 0.0);
    assert_eq!(source.len(), 0);
}

#[test]
fn length_counts_records() {
    assert_eq!(sample_tracker().len(), 3);
}

#[test]
fn remove_returns_the_most_recent_record() {
    let mut tracker = sample_tracker();

    let record = tracker.remove().unwrap();

    assert_close(record.amount(), 30.0);
    assert_eq!(record.description(), "Test Transaction 3");
    assert_eq!(tracker.len(), 2);
    assert_close(tracker.balance(), 30.0);
}

#[test]
fn remove_on_an_empty_tracker_is_rejected() {
    let mut tracker = BudgetTracker::new();
    assert_eq!(tracker.remove(), Err(LedgerError::Empty));
}

#[test]
fn add_updates_balance_and_length() {
    let mut tracker = BudgetTracker::new();
    tracker.add(10.0, "Test Transaction 1");
    assert_close(tracker.balance(), 10.0);
    assert_eq!(tracker.len(), 1);
}

#[test]
fn add_record_accepts_a_prebuilt_transaction() {
    let mut tracker = BudgetTracker::new();
    tracker.add_record(Transaction::new(20.0, "Test Transaction 2"));
    assert_close(tracker.balance(), 20.0);
    assert_eq!(tracker.len(), 1);
}

#[test]
fn balance_sums_all_amounts() {
    assert_close(sample_tracker().balance(), 60.0);
}

#[test]
fn rename_replaces_the_account_name() {
    let mut tracker = BudgetTracker::new();
    tracker.set_account_name("New Account Name").unwrap();
    assert_eq!(tracker.account_name(), "New Account Name");
}

#[test]
fn iterator_visits_every_record_most_recent_first() {
    let tracker = sample_tracker();

    let total: f64 = tracker.iter().map(Transaction::amount).sum();
    assert_close(total, tracker.balance());

    let order: Vec<&str> = tracker.iter().map(Transaction::description).collect();
    assert_eq!(
        order,
        [
            "Test Transaction 3",
            "Test Transaction 2",
            "Test Transaction 1"
        ]
    );
}

#[test]
fn iterator_is_restartable() {
    let tracker = sample_tracker();
    let first: Vec<&str> = tracker.iter().map(Transaction::description).collect();
    let second: Vec<&str> = tracker.iter().map(Transaction::description).collect();
    assert_eq!(first, second);
    assert_eq!(tracker.len(), 3);
}

#[test]
fn identity_follows_the_account_name() {
    let a = BudgetTracker::named("Test Account");
    let b = BudgetTracker::named("Test Account");
    assert_eq!(a, b);

    let mut hasher_a = DefaultHasher::new();
    let mut hasher_b = DefaultHasher::new();
    a.hash(&mut hasher_a);
    b.hash(&mut hasher_b);
    assert_eq!(hasher_a.finish(), hasher_b.finish());
}

#[test]
fn display_reports_name_and_record_count() {
    let tracker = BudgetTracker::with_opening_balance("Test Account", 100.0);
    assert_eq!(tracker.to_string(), "Test Account has 0 records.");
}
