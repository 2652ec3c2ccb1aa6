//! Presentation adapters.
//!
//! The pipeline only ever calls `present(title, body)`; which surface the
//! payload lands on is decided here. Short bodies go to a transient system
//! notification, long ones to the persistent surface.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use pt_core::ports::PresenterPort;
use pt_core::translation::Presentation;

/// Structured-log surface; used as the persistent fallback and for
/// platforms without a notification adapter.
pub struct LogPresenter;

#[async_trait]
impl PresenterPort for LogPresenter {
    async fn present(&self, presentation: Presentation) -> Result<()> {
        info!(title = %presentation.title, body = %presentation.body, "translation result");
        Ok(())
    }
}

/// Transient macOS notification via `osascript`.
pub struct OsaNotificationPresenter;

#[async_trait]
impl PresenterPort for OsaNotificationPresenter {
    async fn present(&self, presentation: Presentation) -> Result<()> {
        let script = format!(
            "display notification {} with title {}",
            applescript_quote(&presentation.body),
            applescript_quote(&presentation.title),
        );

        let status = tokio::process::Command::new("osascript")
            .arg("-e")
            .arg(script)
            .status()
            .await
            .context("spawn osascript")?;

        anyhow::ensure!(status.success(), "osascript exited with {status}");
        Ok(())
    }
}

fn applescript_quote(text: &str) -> String {
    format!(
        "\"{}\"",
        text.replace('\\', "\\\\").replace('"', "\\\"")
    )
}

/// Routes by body length: at most `notification_max_chars` characters go to
/// the notifier, anything longer to the persistent surface. The full body
/// is forwarded either way, never truncated.
pub struct RoutingPresenter {
    notifier: Arc<dyn PresenterPort>,
    persistent: Arc<dyn PresenterPort>,
    notification_max_chars: usize,
}

impl RoutingPresenter {
    pub fn new(
        notifier: Arc<dyn PresenterPort>,
        persistent: Arc<dyn PresenterPort>,
        notification_max_chars: usize,
    ) -> Self {
        Self {
            notifier,
            persistent,
            notification_max_chars,
        }
    }
}

#[async_trait]
impl PresenterPort for RoutingPresenter {
    async fn present(&self, presentation: Presentation) -> Result<()> {
        if presentation.body.chars().count() <= self.notification_max_chars {
            self.notifier.present(presentation).await
        } else {
            self.persistent.present(presentation).await
        }
    }
}
