use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use pt_core::ports::SettingsPort;
use pt_core::settings::Settings;

/// JSON-file settings repository.
///
/// Loads defaults when no file exists yet and writes atomically (temp file
/// plus rename) so a crash mid-save never leaves a truncated settings file.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conventional location under the platform config directory.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("no config directory on this platform")?;
        Ok(base.join("poptrans").join("settings.json"))
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create settings dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp settings failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp settings to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    async fn load(&self) -> Result<Settings> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read settings failed: {}", self.path.display()))
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("parse settings failed: {}", self.path.display()))
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let content =
            serde_json::to_string_pretty(settings).context("serialize settings failed")?;

        self.atomic_write(&content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_core::settings::TriggerPolicy;

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));

        let settings = repo.load().await.unwrap();

        assert_eq!(settings.trigger.policy, TriggerPolicy::SettleAfterRelease);
        assert_eq!(settings.extraction.copy_settle_ms, 100);
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("nested").join("settings.json"));

        let mut settings = Settings::default();
        settings.translation.api_key = "k".to_string();
        settings.trigger.policy = TriggerPolicy::DoubleClick;
        repo.save(&settings).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.translation.api_key, "k");
        assert_eq!(loaded.trigger.policy, TriggerPolicy::DoubleClick);
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let repo = FileSettingsRepository::new(&path);

        repo.save(&Settings::default()).await.unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error_not_a_silent_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "{not json").await.unwrap();
        let repo = FileSettingsRepository::new(&path);

        assert!(repo.load().await.is_err());
    }
}
