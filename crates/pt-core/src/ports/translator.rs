//! Translator port - asynchronous translation of one captured selection.

use async_trait::async_trait;

use crate::error::TranslateError;
use crate::translation::TranslationRequest;

/// One request per settled selection, no batching, no automatic retry.
/// Concurrent requests are independent and may resolve out of order.
#[async_trait]
pub trait TranslatorPort: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;
}
