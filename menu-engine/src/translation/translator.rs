use super::error::TranslationError;
use super::types::{TranslationRequest, TranslationResponse};
use async_trait::async_trait;

/// Batch translation backend
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, TranslationError>;
}

/// Backend for deployments without a translation service; every lookup
/// falls back to the original text
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, TranslationError> {
        tracing::debug!(language = %request.language, "No translation backend configured");
        Ok(TranslationResponse::default())
    }
}
