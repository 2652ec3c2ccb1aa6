//! Global pointer-event monitoring, split per platform.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::QuartzInputMonitor;

#[cfg(not(target_os = "macos"))]
mod unsupported;
#[cfg(not(target_os = "macos"))]
pub use unsupported::UnsupportedInputMonitor;

use pt_core::ports::InputMonitorPort;

/// Monitor for the current platform.
pub fn default_monitor() -> Box<dyn InputMonitorPort> {
    #[cfg(target_os = "macos")]
    {
        Box::new(QuartzInputMonitor::new())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Box::new(UnsupportedInputMonitor::new())
    }
}
