//! Input monitor port - system-wide pointer-button observation.

use tokio::sync::mpsc;

use crate::error::MonitorError;
use crate::input::InputEvent;

/// Installs a process-wide intercept on pointer-button events and forwards
/// them into the given channel.
///
/// Contract for implementations:
///
/// - events are forwarded with a non-blocking send and the OS callback
///   returns within a negligible constant time; all heavier work happens on
///   the receiving side,
/// - observed events are never consumed or altered; normal UI behavior is
///   unaffected,
/// - the required OS capability is checked *before* installation;
///   [`MonitorError::PermissionDenied`] is reported instead of silently
///   observing nothing,
/// - the monitor stays installed for the lifetime of the implementing
///   value.
pub trait InputMonitorPort: Send {
    fn start(&mut self, events: mpsc::Sender<InputEvent>) -> Result<(), MonitorError>;
}
