//! Quartz event tap adapter for the input monitor port.
//!
//! The tap is installed on a dedicated thread that runs its own CFRunLoop
//! for the process lifetime. The tap callback is the only code executing
//! on the OS event-delivery path: it stamps the event, hands it off with a
//! non-blocking send, and returns the event to the OS untouched
//! (listen-only tap).

use std::thread;
use std::time::Instant;

use core_foundation::runloop::{kCFRunLoopCommonModes, CFRunLoop};
use core_graphics::event::{
    CGEventTap, CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement, CGEventType,
};
use tokio::sync::mpsc;

use pt_core::error::MonitorError;
use pt_core::input::InputEvent;
use pt_core::ports::InputMonitorPort;

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXIsProcessTrusted() -> core_foundation_sys::base::Boolean;
}

fn accessibility_trusted() -> bool {
    unsafe { AXIsProcessTrusted() != 0 }
}

pub struct QuartzInputMonitor {
    thread: Option<thread::JoinHandle<()>>,
}

impl QuartzInputMonitor {
    pub fn new() -> Self {
        Self { thread: None }
    }
}

impl Default for QuartzInputMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl InputMonitorPort for QuartzInputMonitor {
    fn start(&mut self, events: mpsc::Sender<InputEvent>) -> Result<(), MonitorError> {
        // Checked before any installation attempt; without the accessibility
        // capability the tap would silently observe nothing.
        if !accessibility_trusted() {
            return Err(MonitorError::PermissionDenied);
        }

        let (install_tx, install_rx) = std::sync::mpsc::channel();

        let handle = thread::Builder::new()
            .name("input-tap".to_string())
            .spawn(move || run_tap_loop(events, install_tx))
            .map_err(|e| MonitorError::HookInstallFailed(e.to_string()))?;
        self.thread = Some(handle);

        // The install outcome is reported back synchronously; afterwards the
        // thread parks in its runloop.
        match install_rx.recv() {
            Ok(Ok(())) => Ok(()),
            Ok(Err(reason)) => Err(MonitorError::HookInstallFailed(reason)),
            Err(_) => Err(MonitorError::HookInstallFailed(
                "input tap thread exited during install".to_string(),
            )),
        }
    }
}

fn run_tap_loop(
    events: mpsc::Sender<InputEvent>,
    install_tx: std::sync::mpsc::Sender<Result<(), String>>,
) {
    let tap = CGEventTap::new(
        CGEventTapLocation::Session,
        CGEventTapPlacement::HeadInsertEventTap,
        CGEventTapOptions::ListenOnly,
        vec![CGEventType::LeftMouseDown, CGEventType::LeftMouseUp],
        move |_proxy, event_type, _event| {
            let event = match event_type {
                CGEventType::LeftMouseDown => InputEvent::press_down(Instant::now()),
                CGEventType::LeftMouseUp => InputEvent::press_up(Instant::now()),
                _ => return None,
            };
            // Never block the OS delivery path: drop on a full queue, the
            // intercepted event itself always passes through.
            let _ = events.try_send(event);
            None
        },
    );

    let tap = match tap {
        Ok(tap) => tap,
        Err(_) => {
            let _ = install_tx.send(Err("event tap creation refused".to_string()));
            return;
        }
    };

    let source = match tap.mach_port.create_runloop_source(0) {
        Ok(source) => source,
        Err(_) => {
            let _ = install_tx.send(Err(
                "event tap runloop source creation failed".to_string()
            ));
            return;
        }
    };

    let runloop = CFRunLoop::get_current();
    unsafe {
        runloop.add_source(&source, kCFRunLoopCommonModes);
    }
    tap.enable();
    let _ = install_tx.send(Ok(()));

    CFRunLoop::run_current();
}
