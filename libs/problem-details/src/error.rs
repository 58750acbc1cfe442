use thiserror::Error;

/// Failure to encode a [`ProblemDetails`](crate::ProblemDetails) document.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EncodeError {
    /// The JSON encoder rejected a value
    #[error("Failed to encode problem as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A validation-error key cannot be used as an XML element name
    #[error("Invalid XML element name: {0:?}")]
    InvalidElementName(String),
}
