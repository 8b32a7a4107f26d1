use thiserror::Error;

/// Errors that can occur when converting a custom upstream format into a
/// Keizu `BlueprintGraph`.
#[derive(Error, Debug, Clone)]
pub enum BlueprintConversionError {
    #[error("Invalid blueprint data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while loading a graph document.
///
/// The resolution and aggregation core itself never errors: dangling ids,
/// missing forms, and cycles all degrade to silent omission or best-effort
/// ordering.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read graph document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse graph document JSON: {0}")]
    Json(#[from] serde_json::Error),
}
