use crate::errors::LedgerError;
use crate::ledger::BudgetTracker;
use crate::sink::TextSink;

/// Keyword-driven aggregation over a tracker's records.
pub struct FilterReport;

impl FilterReport {
    /// Sums the amounts of records whose description contains `keyword`,
    /// writing each match to `sink` as it is found.
    ///
    /// Containment is case-sensitive. Returns 0.0 when nothing matches or
    /// the tracker is empty; never mutates the tracker.
    pub fn keyword_total(
        tracker: &BudgetTracker,
        keyword: &str,
        sink: &mut dyn TextSink,
    ) -> Result<f64, LedgerError> {
        if !sink.is_open() {
            return Err(LedgerError::SinkClosed);
        }
        let mut total = 0.0;
        for record in tracker.iter() {
            if record.description().contains(keyword) {
                total += record.amount();
                sink.write_line(&record.to_string());
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn matching_is_case_sensitive() {
        let mut tracker = BudgetTracker::new();
        tracker.add(12.5, "Groceries");
        tracker.add(3.0, "groceries run");

        let mut sink = MemorySink::new();
        let total = FilterReport::keyword_total(&tracker, "Groceries", &mut sink).unwrap();

        assert_eq!(total, 12.5);
        assert_eq!(sink.lines(), ["12.50$ Groceries"]);
    }

    #[test]
    fn empty_tracker_sums_to_zero() {
        let tracker = BudgetTracker::new();
        let mut sink = MemorySink::new();
        let total = FilterReport::keyword_total(&tracker, "anything", &mut sink).unwrap();
        assert_eq!(total, 0.0);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn closed_sink_is_rejected() {
        let tracker = BudgetTracker::new();
        let mut sink = MemorySink::new();
        sink.close();
        assert_eq!(
            FilterReport::keyword_total(&tracker, "x", &mut sink),
            Err(LedgerError::SinkClosed)
        );
    }
}
