//! Settings model - consumed by the pipeline, owned by the configuration
//! repository in the infrastructure layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::gate::DebouncePolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub translation: TranslationSettings,

    #[serde(default)]
    pub trigger: TriggerSettings,

    #[serde(default)]
    pub extraction: ExtractionSettings,

    #[serde(default)]
    pub presentation: PresentationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSettings {
    /// Bearer token for the translation endpoint. Usually supplied via the
    /// POPTRANS_API_KEY environment variable rather than the settings file.
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: "https://open.bigmodel.cn/api/paas/v4/chat/completions".to_string(),
            model: "glm-4-flash".to_string(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerSettings {
    pub policy: TriggerPolicy,
    pub double_click_threshold_ms: u64,
    pub settle_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerPolicy {
    DoubleClick,
    SettleAfterRelease,
}

impl Default for TriggerSettings {
    fn default() -> Self {
        Self {
            policy: TriggerPolicy::SettleAfterRelease,
            double_click_threshold_ms: 500,
            settle_delay_ms: 100,
        }
    }
}

impl TriggerSettings {
    pub fn debounce_policy(&self) -> DebouncePolicy {
        match self.policy {
            TriggerPolicy::DoubleClick => DebouncePolicy::DoubleClick {
                threshold: Duration::from_millis(self.double_click_threshold_ms),
            },
            TriggerPolicy::SettleAfterRelease => DebouncePolicy::SettleAfterRelease {
                delay: Duration::from_millis(self.settle_delay_ms),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSettings {
    /// How long to wait after the synthesized copy keystroke before reading
    /// the clipboard back.
    pub copy_settle_ms: u64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self { copy_settle_ms: 100 }
    }
}

impl ExtractionSettings {
    pub fn copy_settle(&self) -> Duration {
        Duration::from_millis(self.copy_settle_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationSettings {
    /// Bodies longer than this go to the persistent surface instead of a
    /// transient notification.
    pub notification_max_chars: usize,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            notification_max_chars: 100,
        }
    }
}
