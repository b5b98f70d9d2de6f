use crate::errors::LedgerError;
use crate::ledger::BudgetTracker;

/// Locates extreme transactions by their iteration index (0 = most recent).
///
/// When no record carries the sign a finder looks for, it falls back to
/// index 0 even though that record did not match; callers that need the
/// distinction must inspect the record at the returned index themselves.
pub struct MaxMinReport;

impl MaxMinReport {
    /// Index of the strictly greatest positive amount; ties keep the most
    /// recent occurrence.
    pub fn max_income_index(tracker: &BudgetTracker) -> Result<usize, LedgerError> {
        Self::scan(tracker, 0.0, |amount, best| amount > best)
    }

    /// Index of the smallest amount that is still positive.
    pub fn min_income_index(tracker: &BudgetTracker) -> Result<usize, LedgerError> {
        Self::scan(tracker, f64::MAX, |amount, best| {
            amount < best && amount > 0.0
        })
    }

    /// Index of the most negative amount, the largest-magnitude expense.
    pub fn max_expense_index(tracker: &BudgetTracker) -> Result<usize, LedgerError> {
        Self::scan(tracker, 0.0, |amount, best| amount < best)
    }

    /// Index of the negative amount closest to zero.
    pub fn min_expense_index(tracker: &BudgetTracker) -> Result<usize, LedgerError> {
        Self::scan(tracker, f64::NEG_INFINITY, |amount, best| {
            amount > best && amount < 0.0
        })
    }

    fn scan(
        tracker: &BudgetTracker,
        seed: f64,
        better: impl Fn(f64, f64) -> bool,
    ) -> Result<usize, LedgerError> {
        if tracker.is_empty() {
            return Err(LedgerError::Empty);
        }
        let mut best = seed;
        let mut best_index = 0;
        for (index, record) in tracker.iter().enumerate() {
            if better(record.amount(), best) {
                best = record.amount();
                best_index = index;
            }
        }
        Ok(best_index)
    }
}
