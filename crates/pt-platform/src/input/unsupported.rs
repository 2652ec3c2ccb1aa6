//! Stub monitor for platforms without a global pointer tap adapter.
//!
//! The binary still builds and runs everywhere; on these platforms the
//! pipeline reports the install failure once and stays inert.

use tokio::sync::mpsc;

use pt_core::error::MonitorError;
use pt_core::input::InputEvent;
use pt_core::ports::InputMonitorPort;

pub struct UnsupportedInputMonitor;

impl UnsupportedInputMonitor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnsupportedInputMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl InputMonitorPort for UnsupportedInputMonitor {
    fn start(&mut self, _events: mpsc::Sender<InputEvent>) -> Result<(), MonitorError> {
        Err(MonitorError::HookInstallFailed(
            "global pointer monitoring is not supported on this platform".to_string(),
        ))
    }
}
