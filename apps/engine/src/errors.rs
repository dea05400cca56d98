use thiserror::Error;

/// Errors raised at the engine's call boundary.
///
/// Scoring itself never fails: partial profiles score against empty collections.
/// These variants only cover contract violations and unreadable input.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Stable machine-readable code, printed by the CLI as `error [CODE]: ...`.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidArgument(_) => "INVALID_ARGUMENT",
            EngineError::Json(_) => "JSON_ERROR",
            EngineError::Io(_) => "IO_ERROR",
        }
    }
}
