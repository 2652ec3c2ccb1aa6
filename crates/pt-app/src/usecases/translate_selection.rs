use std::sync::Arc;

use tracing::{info, warn};

use pt_core::language::classify;
use pt_core::ports::{PresenterPort, TranslatorPort};
use pt_core::translation::{Presentation, TranslationRequest};

/// Use case that turns one captured selection into exactly one
/// presentation.
///
/// The direction is picked by script classification, the translator is
/// called once (no retry), and the presenter is invoked exactly once with
/// either the full translated text or the fixed failure placeholder. A
/// failed presentation is logged, never propagated; the session ends here
/// either way.
pub struct TranslateSelection {
    translator: Arc<dyn TranslatorPort>,
    presenter: Arc<dyn PresenterPort>,
}

impl TranslateSelection {
    pub fn new(translator: Arc<dyn TranslatorPort>, presenter: Arc<dyn PresenterPort>) -> Self {
        Self {
            translator,
            presenter,
        }
    }

    pub async fn execute(&self, text: String) {
        let direction = classify(&text);
        let request = TranslationRequest::new(text, direction);

        let presentation = match self.translator.translate(&request).await {
            Ok(translated) => {
                info!(?direction, chars = translated.chars().count(), "translation succeeded");
                Presentation::success(translated)
            }
            Err(e) => {
                warn!(?direction, error = %e, "translation failed");
                Presentation::failure()
            }
        };

        if let Err(e) = self.presenter.present(presentation).await {
            warn!(error = %e, "presentation failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::function;
    use pt_core::error::TranslateError;
    use pt_core::language::TranslationDirection;
    use pt_core::translation::{FAILURE_BODY, RESULT_TITLE};

    mock! {
        Translator {}

        #[async_trait]
        impl TranslatorPort for Translator {
            async fn translate(
                &self,
                request: &TranslationRequest,
            ) -> Result<String, TranslateError>;
        }
    }

    mock! {
        Presenter {}

        #[async_trait]
        impl PresenterPort for Presenter {
            async fn present(&self, presentation: Presentation) -> Result<()>;
        }
    }

    #[tokio::test]
    async fn success_presents_full_text_exactly_once() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .times(1)
            .returning(|_| Ok("你好".to_string()));

        let mut presenter = MockPresenter::new();
        presenter
            .expect_present()
            .with(function(|p: &Presentation| {
                p.title == RESULT_TITLE && p.body == "你好"
            }))
            .times(1)
            .returning(|_| Ok(()));

        TranslateSelection::new(Arc::new(translator), Arc::new(presenter))
            .execute("hello".to_string())
            .await;
    }

    #[tokio::test]
    async fn failure_presents_placeholder_exactly_once() {
        let mut translator = MockTranslator::new();
        translator.expect_translate().times(1).returning(|_| {
            Err(TranslateError::ServerRejected {
                code: 500,
                message: None,
            })
        });

        let mut presenter = MockPresenter::new();
        presenter
            .expect_present()
            .with(function(|p: &Presentation| {
                p.title == RESULT_TITLE && p.body == FAILURE_BODY
            }))
            .times(1)
            .returning(|_| Ok(()));

        TranslateSelection::new(Arc::new(translator), Arc::new(presenter))
            .execute("hello".to_string())
            .await;
    }

    #[tokio::test]
    async fn direction_follows_script_classification() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .withf(|request: &TranslationRequest| {
                request.direction == TranslationDirection::ChineseToEnglish
            })
            .times(1)
            .returning(|_| Ok("hello".to_string()));

        let mut presenter = MockPresenter::new();
        presenter.expect_present().times(1).returning(|_| Ok(()));

        TranslateSelection::new(Arc::new(translator), Arc::new(presenter))
            .execute("你好".to_string())
            .await;
    }

    #[tokio::test]
    async fn presentation_errors_are_swallowed() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .times(1)
            .returning(|_| Ok("ok".to_string()));

        let mut presenter = MockPresenter::new();
        presenter
            .expect_present()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("notification daemon gone")));

        // Must not panic or propagate.
        TranslateSelection::new(Arc::new(translator), Arc::new(presenter))
            .execute("hello".to_string())
            .await;
    }
}
