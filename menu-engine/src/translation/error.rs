use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("Translation service failed: {0}")]
    Service(String),

    #[error("Malformed translation response: {0}")]
    Malformed(String),

    /// The language changed while the request was in flight
    #[error("Translation for {0} is no longer needed")]
    Stale(String),
}

impl From<serde_json::Error> for TranslationError {
    fn from(err: serde_json::Error) -> Self {
        TranslationError::Malformed(err.to_string())
    }
}

impl From<TranslationError> for AppError {
    fn from(err: TranslationError) -> Self {
        let code = match &err {
            TranslationError::Service(_) | TranslationError::Malformed(_) => {
                ErrorCode::TranslationFailed
            }
            TranslationError::Stale(_) => ErrorCode::TranslationStale,
        };
        AppError::with_message(code, err.to_string())
    }
}
