use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use pt_core::ports::{ClipboardPort, CopyKeystrokePort};

/// Use case that captures the currently selected text by mediating through
/// the system clipboard.
///
/// ## Responsibility
///
/// Triggered once per settled selection. The sequence is:
///
/// 1. snapshot the clipboard's current textual content,
/// 2. synthesize the platform copy chord at the focused application,
/// 3. wait a fixed settle delay for the application to honor the copy,
/// 4. read the clipboard back,
/// 5. restore the snapshot unconditionally.
///
/// The user's clipboard history is never observably altered by this tool;
/// the only exception is the deliberate instant between steps 2 and 5.
///
/// ## What this use case does NOT do
///
/// - It does not distinguish "nothing was selected" from "the selection
///   equals the existing clipboard content"; both return `Ok(None)`.
/// - It does not treat a refused keystroke synthesis as an error; that
///   shows up as an unchanged clipboard and therefore `Ok(None)`.
/// - It does not serialize concurrent invocations. The engine guarantees
///   there is at most one extraction in flight.
pub struct ExtractSelection {
    clipboard: Arc<dyn ClipboardPort>,
    keystrokes: Arc<dyn CopyKeystrokePort>,
    copy_settle: Duration,
}

impl ExtractSelection {
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        keystrokes: Arc<dyn CopyKeystrokePort>,
        copy_settle: Duration,
    ) -> Self {
        Self {
            clipboard,
            keystrokes,
            copy_settle,
        }
    }

    /// Capture the current selection, or `None` when nothing new appeared
    /// on the clipboard.
    pub async fn execute(&self) -> Result<Option<String>> {
        let prior = self
            .clipboard
            .read_text()
            .context("read clipboard before copy")?;

        self.keystrokes
            .synthesize_copy()
            .context("synthesize copy keystroke")?;

        tokio::time::sleep(self.copy_settle).await;

        let captured = self.clipboard.read_text();

        // Restore before looking at the result so the preservation
        // guarantee holds on the error path too.
        self.restore(prior.as_deref());

        let captured = captured.context("read clipboard after copy")?;
        match captured {
            Some(text) if !text.is_empty() && prior.as_deref() != Some(text.as_str()) => {
                Ok(Some(text))
            }
            _ => {
                debug!("clipboard unchanged after copy, treating as no selection");
                Ok(None)
            }
        }
    }

    fn restore(&self, prior: Option<&str>) {
        if let Err(e) = self.clipboard.clear() {
            warn!(error = %e, "failed to clear clipboard during restore");
        }
        if let Some(prior) = prior {
            if let Err(e) = self.clipboard.write_text(prior) {
                warn!(error = %e, "failed to restore prior clipboard content");
            }
        }
    }
}
