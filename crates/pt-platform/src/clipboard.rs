//! System clipboard adapter backed by `arboard`.

use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use arboard::Clipboard;

use pt_core::ports::ClipboardPort;

pub struct SystemClipboard {
    inner: Mutex<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("create clipboard context")?;
        Ok(Self {
            inner: Mutex::new(clipboard),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Clipboard>> {
        self.inner
            .lock()
            .map_err(|e| anyhow::anyhow!("clipboard mutex poisoned: {e}"))
    }
}

impl ClipboardPort for SystemClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        let mut guard = self.lock()?;
        match guard.get_text() {
            Ok(text) => Ok(Some(text)),
            // Empty clipboard and non-text content look the same here.
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e).context("read clipboard text"),
        }
    }

    fn write_text(&self, text: &str) -> Result<()> {
        self.lock()?
            .set_text(text.to_string())
            .context("write clipboard text")
    }

    fn clear(&self) -> Result<()> {
        self.lock()?.clear().context("clear clipboard")
    }
}
