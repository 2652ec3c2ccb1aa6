//! Settings port - load and persist the settings model.

use anyhow::Result;
use async_trait::async_trait;

use crate::settings::Settings;

#[async_trait]
pub trait SettingsPort: Send + Sync {
    /// Load settings, falling back to defaults when none were saved yet.
    async fn load(&self) -> Result<Settings>;

    async fn save(&self, settings: &Settings) -> Result<()>;
}
