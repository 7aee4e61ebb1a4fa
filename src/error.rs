use thiserror::Error;

/// Top-level error type for the polyprep pipeline.
///
/// Components return this at their boundaries; the binaries wrap it in
/// `anyhow` and exit non-zero. There is no retry anywhere - a failed
/// conversion is fatal to the invocation.
#[derive(Debug, Error)]
pub enum PolyError {
    /// Malformed coordinate field: missing `&` separator or a token that
    /// does not parse as a number.
    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A result table row carries neither a `length` nor a `realcost`
    /// timing column.
    #[error("data error: {0}")]
    Data(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PolyError>;
