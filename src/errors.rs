use thiserror::Error;

/// Error type that captures ledger precondition violations.
///
/// Every variant is detected before any mutation takes place; a failed call
/// leaves the tracker exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("ledger holds no records")]
    Empty,
    #[error("index {index} is out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("account name must not be blank")]
    EmptyAccountName,
    #[error("output sink is closed")]
    SinkClosed,
}
