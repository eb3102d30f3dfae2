use thiserror::Error;

/// Errors raised while writing or reading the account export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed export line '{line}': {reason}")]
    MalformedLine { line: String, reason: String },
}
