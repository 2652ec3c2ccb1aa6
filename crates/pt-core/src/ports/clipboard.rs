//! Clipboard port - abstracts local clipboard access
//!
//! The clipboard is a process-wide singleton resource shared with every
//! other application; one in-flight extraction holds conceptual ownership
//! of it for the duration of the snapshot/copy/restore sequence.

use anyhow::Result;

pub trait ClipboardPort: Send + Sync {
    /// Current textual content, or `None` when the clipboard is empty or
    /// holds no text representation.
    fn read_text(&self) -> Result<Option<String>>;

    fn write_text(&self, text: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;
}
