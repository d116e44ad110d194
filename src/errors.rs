use thiserror::Error;

/// Errors that can abort a conversion run.
///
/// There is deliberately no per-row recovery: any malformed row fails the
/// whole batch rather than silently dropping transactions.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// CSV layer failure: unreadable input, missing column, bad quoting
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    /// `Datum` column did not match the ING `YYYYMMDD` layout
    #[error("Invalid posted date {0:?}")]
    InvalidDate(String),

    /// `Bedrag (EUR)` column was not a decimal amount
    #[error("Invalid amount {0:?}")]
    InvalidAmount(String),

    /// `Af Bij` column held something other than `Af` or `Bij`
    #[error("Unknown debit/credit marker {0:?}")]
    UnknownDirection(String),

    /// Error reading the input file or writing an output file
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient alias for Result with the crate's error type
pub type ConvertResult<T> = Result<T, ConvertError>;
