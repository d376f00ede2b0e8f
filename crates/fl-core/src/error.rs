//! Error types for the core data model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while reading or writing game state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A saved or imported document could not be parsed.
    #[error("malformed save document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// A table name did not match any of the ten tables.
    #[error("unknown table: \"{0}\"")]
    UnknownTable(String),
}
