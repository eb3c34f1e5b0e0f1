//! Conversion error types.

/// Error returned when a document cannot be converted.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
