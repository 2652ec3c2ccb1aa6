//! Copy-keystroke port - synthesizes the platform copy shortcut.

use anyhow::Result;

/// Posts a synthetic key-down/key-up pair for the platform copy chord into
/// the OS input stream, targeting the currently focused application.
///
/// Synthesis can be refused by the OS or ignored by the target application;
/// that surfaces downstream as an unchanged clipboard, not as an error
/// here.
pub trait CopyKeystrokePort: Send + Sync {
    fn synthesize_copy(&self) -> Result<()>;
}
