//! Copy-keystroke synthesis via `enigo`.

use anyhow::{anyhow, Result};
use enigo::{Direction, Enigo, Key, Keyboard, Settings};

use pt_core::ports::CopyKeystrokePort;

#[cfg(target_os = "macos")]
const COPY_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const COPY_MODIFIER: Key = Key::Control;

/// Posts the platform copy chord (Cmd+C / Ctrl+C) into the OS input
/// stream, targeting whatever application currently has focus.
///
/// The synthesizer is created per invocation; copies are rare (at most one
/// per settled selection) and a fresh handle avoids holding platform input
/// state across the process lifetime.
pub struct EnigoCopyKeystroke;

impl EnigoCopyKeystroke {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnigoCopyKeystroke {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyKeystrokePort for EnigoCopyKeystroke {
    fn synthesize_copy(&self) -> Result<()> {
        let mut enigo = Enigo::new(&Settings::default())
            .map_err(|e| anyhow!("initialize input synthesizer: {e}"))?;

        enigo
            .key(COPY_MODIFIER, Direction::Press)
            .map_err(|e| anyhow!("press copy modifier: {e}"))?;
        let click = enigo.key(Key::Unicode('c'), Direction::Click);
        // Release the modifier even when the click failed; a stuck modifier
        // is worse than a missed copy.
        let release = enigo.key(COPY_MODIFIER, Direction::Release);

        click.map_err(|e| anyhow!("send copy key: {e}"))?;
        release.map_err(|e| anyhow!("release copy modifier: {e}"))?;
        Ok(())
    }
}
