//! Debounce gate - coalesces raw pointer events into selection triggers
//!
//! The gate consumes the [`InputEvent`] stream and decides when a selection
//! has settled. It supports two interchangeable trigger policies; which one
//! is active is configuration, not a code path fork.

use std::time::{Duration, Instant};

use crate::input::{InputEvent, InputEventKind};

/// Trigger policy for the debounce gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncePolicy {
    /// Trigger immediately when two presses land within `threshold`.
    DoubleClick { threshold: Duration },

    /// On release, wait `delay` and trigger only if no newer release
    /// arrived in the meantime.
    SettleAfterRelease { delay: Duration },
}

/// What the gate decided for one observed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Not trigger-relevant under the active policy.
    Ignore,

    /// The selection settled; attempt extraction now.
    Trigger,

    /// Schedule a settle check after the given delay. The check must be
    /// validated with [`DebounceGate::confirm`] when it fires.
    CheckAfter(Duration),
}

/// Single-owner state machine; written and read only from the engine task,
/// so no locking is involved. The only mutable state is the timestamp of
/// the last trigger-relevant event.
#[derive(Debug)]
pub struct DebounceGate {
    policy: DebouncePolicy,
    last_relevant: Option<Instant>,
}

impl DebounceGate {
    pub fn new(policy: DebouncePolicy) -> Self {
        Self {
            policy,
            last_relevant: None,
        }
    }

    pub fn policy(&self) -> DebouncePolicy {
        self.policy
    }

    /// Feed one event through the gate.
    pub fn observe(&mut self, event: InputEvent) -> GateDecision {
        match (self.policy, event.kind) {
            (DebouncePolicy::DoubleClick { threshold }, InputEventKind::PressDown) => {
                match self.last_relevant {
                    // duration_since saturates to zero for out-of-order stamps
                    Some(prev) if event.at.duration_since(prev) < threshold => {
                        // Reset so a third press within the window starts a
                        // fresh pairing instead of re-triggering.
                        self.last_relevant = None;
                        GateDecision::Trigger
                    }
                    _ => {
                        self.last_relevant = Some(event.at);
                        GateDecision::Ignore
                    }
                }
            }
            (DebouncePolicy::DoubleClick { .. }, InputEventKind::PressUp) => GateDecision::Ignore,
            (DebouncePolicy::SettleAfterRelease { delay }, InputEventKind::PressUp) => {
                self.last_relevant = Some(event.at);
                GateDecision::CheckAfter(delay)
            }
            (DebouncePolicy::SettleAfterRelease { .. }, InputEventKind::PressDown) => {
                GateDecision::Ignore
            }
        }
    }

    /// Validate a settle check scheduled by [`GateDecision::CheckAfter`].
    ///
    /// A check scheduled from event time `scheduled_from` is confirmed only
    /// when no newer release has been observed since; a burst of releases
    /// therefore yields exactly one trigger, from the last check of the
    /// burst. Confirming consumes the pending state.
    pub fn confirm(&mut self, scheduled_from: Instant) -> bool {
        match self.last_relevant {
            Some(last) if last <= scheduled_from => {
                self.last_relevant = None;
                true
            }
            _ => false,
        }
    }
}
