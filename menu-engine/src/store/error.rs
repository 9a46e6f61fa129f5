use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store unreachable (network down, not configured); offline fallback applies
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Store reachable but refused the write
    #[error("Write rejected: {0}")]
    Rejected(String),
}

impl StoreError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }

    pub fn not_found(collection: &str, id: &str) -> Self {
        StoreError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::Unavailable(_) => ErrorCode::StoreUnavailable,
            StoreError::NotFound { .. } => ErrorCode::NotFound,
            StoreError::Serialization(_) => ErrorCode::DocumentCorrupted,
            StoreError::Rejected(_) => ErrorCode::StoreError,
        };
        tracing::error!(error = %err, error_code = ?code, "Store error occurred");
        AppError::with_message(code, err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
