use std::time::Instant;

/// Pointer-button event forwarded by the platform input monitor.
///
/// Events are stamped at interception time and consumed immediately by the
/// debounce gate; they are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: InputEventKind,
    pub at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEventKind {
    PressDown,
    PressUp,
}

impl InputEvent {
    pub fn press_down(at: Instant) -> Self {
        Self {
            kind: InputEventKind::PressDown,
            at,
        }
    }

    pub fn press_up(at: Instant) -> Self {
        Self {
            kind: InputEventKind::PressUp,
            at,
        }
    }
}
