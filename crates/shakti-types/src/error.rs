use thiserror::Error;

#[derive(Error, Debug)]
pub enum SingularityError {
    /// Rejected engine parameters (U0 <= 1, or a strict-mode violation).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid sampling request: {0}")]
    InvalidSampling(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SingularityResult<T> = Result<T, SingularityError>;
