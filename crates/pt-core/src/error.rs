//! Error taxonomy for the selection-translation pipeline.
//!
//! Every failure here is a value, not a fault: monitor errors are reported
//! once at startup and leave the pipeline inert, translation errors yield
//! exactly one failure presentation, and nothing is retried automatically.

use thiserror::Error;

/// Failures installing the global input monitor. Terminal for the
/// pipeline's ability to trigger; the process keeps running without
/// translation capability.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("accessibility permission not granted")]
    PermissionDenied,

    #[error("failed to install input hook: {0}")]
    HookInstallFailed(String),
}

/// Failures of one translation request.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("network error: {0}")]
    Network(String),

    #[error("translation service rejected the request (status {code})")]
    ServerRejected { code: u16, message: Option<String> },

    #[error("malformed response from translation service")]
    MalformedResponse,
}
