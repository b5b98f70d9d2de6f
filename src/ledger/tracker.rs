use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use tracing::debug;

use crate::errors::LedgerError;

use super::stack::TransactionStack;
use super::transaction::Transaction;

/// Account name applied on construction and after every reset.
pub const DEFAULT_ACCOUNT_NAME: &str = "Default Account";

/// Scale factor for two-decimal display rounding.
const ROUNDING: f64 = 100.0;

/// Ordered ledger of transactions with an incrementally maintained balance.
///
/// Records live in a LIFO store: index 0 is the most recently added record
/// and the only one the kernel can reach in O(1). The index-addressed
/// editing operations are synthesized on top of [`remove`] and [`add`]
/// alone, so the balance stays consistent no matter which layer mutates the
/// tracker.
///
/// [`remove`]: BudgetTracker::remove
/// [`add`]: BudgetTracker::add
#[derive(Debug, Clone)]
pub struct BudgetTracker {
    records: TransactionStack,
    account_name: String,
    balance: f64,
}

impl BudgetTracker {
    /// Creates an empty tracker with the default account name.
    pub fn new() -> Self {
        Self::named(DEFAULT_ACCOUNT_NAME)
    }

    /// Creates an empty tracker for the given account.
    pub fn named(account_name: impl Into<String>) -> Self {
        Self::with_opening_balance(account_name, 0.0)
    }

    /// Creates an empty tracker carrying a pre-existing balance.
    ///
    /// The balance field and the record sequence are independent here: the
    /// opening balance is not represented by any record.
    pub fn with_opening_balance(account_name: impl Into<String>, balance: f64) -> Self {
        Self {
            records: TransactionStack::new(),
            account_name: account_name.into(),
            balance,
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records a new most-recent transaction.
    pub fn add(&mut self, amount: f64, description: impl Into<String>) {
        self.add_record(Transaction::new(amount, description));
    }

    /// Records `record` as the new most-recent transaction.
    pub fn add_record(&mut self, record: Transaction) {
        self.balance += record.amount();
        self.records.push(record);
    }

    /// Removes and returns the most recent record.
    pub fn remove(&mut self) -> Result<Transaction, LedgerError> {
        let record = self.records.pop().ok_or(LedgerError::Empty)?;
        self.balance -= record.amount();
        Ok(record)
    }

    /// Current balance rounded to two decimal places.
    ///
    /// The stored balance stays exact; rounding is display-only.
    pub fn balance(&self) -> f64 {
        (self.balance * ROUNDING).round() / ROUNDING
    }

    /// Renames the account. Blank names are rejected.
    pub fn set_account_name(&mut self, name: impl Into<String>) -> Result<(), LedgerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LedgerError::EmptyAccountName);
        }
        self.account_name = name;
        Ok(())
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Resets to the default empty state: default account name, zero
    /// balance, no records.
    pub fn clear(&mut self) {
        self.records = TransactionStack::new();
        self.account_name = DEFAULT_ACCOUNT_NAME.to_string();
        self.balance = 0.0;
    }

    /// Moves `source`'s records, account name, and balance into `self` and
    /// resets `source` to the default empty state.
    pub fn transfer_from(&mut self, source: &mut BudgetTracker) {
        debug!(
            source = %source.account_name,
            records = source.len(),
            "transferring tracker state"
        );
        self.records = mem::take(&mut source.records);
        self.account_name =
            mem::replace(&mut source.account_name, DEFAULT_ACCOUNT_NAME.to_string());
        self.balance = mem::replace(&mut source.balance, 0.0);
    }

    /// Iterates records from most recent to oldest without mutating the
    /// tracker. The iterator is restartable: each call starts a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.records.iter()
    }
}

impl Default for BudgetTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BudgetTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} records.", self.account_name, self.len())
    }
}

/// Identity follows the account name, matching the display form.
impl PartialEq for BudgetTracker {
    fn eq(&self, other: &Self) -> bool {
        self.account_name == other.account_name
    }
}

impl Eq for BudgetTracker {}

impl Hash for BudgetTracker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.account_name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_on_empty_tracker_is_rejected() {
        let mut tracker = BudgetTracker::new();
        assert_eq!(tracker.remove(), Err(LedgerError::Empty));
        assert_eq!(tracker.len(), 0);
    }

    #[test]
    fn balance_view_rounds_to_two_decimals() {
        let mut tracker = BudgetTracker::new();
        tracker.add(0.105, "Rounding sample");
        assert_eq!(tracker.balance(), 0.11);
    }

    #[test]
    fn blank_account_name_is_rejected() {
        let mut tracker = BudgetTracker::new();
        assert_eq!(
            tracker.set_account_name("   "),
            Err(LedgerError::EmptyAccountName)
        );
        assert_eq!(tracker.account_name(), DEFAULT_ACCOUNT_NAME);
    }
}
