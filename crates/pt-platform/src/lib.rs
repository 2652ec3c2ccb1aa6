//! # pt-platform
//!
//! Platform adapters behind the ports defined in `pt-core`: the global
//! input tap, the system clipboard, copy-keystroke synthesis, and the
//! presentation router.

pub mod clipboard;
pub mod input;
pub mod keystroke;
pub mod presenter;

pub use clipboard::SystemClipboard;
pub use input::default_monitor;
pub use keystroke::EnigoCopyKeystroke;
pub use presenter::{LogPresenter, OsaNotificationPresenter, RoutingPresenter};
