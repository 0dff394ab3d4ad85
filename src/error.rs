use thiserror::Error;

/// 스토어 및 경매 서비스 오류
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("Auction not found: {id}")]
    NotFound { id: String },

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("{store} must be used within its provider")]
    MissingProvider { store: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::OperationFailed(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
