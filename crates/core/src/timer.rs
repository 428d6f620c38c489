//! Timer module - one-shot delays driven by the host's fixed tick
//!
//! Timers never run on their own thread. The host advances them with
//! [`DelayTimer::tick`] from the same loop that dispatches clicks, so a fire is
//! always ordered relative to input and no locking is needed.
//!
//! Arming a pending timer restarts its countdown from the full delay; there is
//! only ever one pending fire per timer.

/// Cancellable one-shot countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayTimer {
    delay_ms: u32,
    remaining_ms: Option<u32>,
}

impl DelayTimer {
    /// Create an idle timer with the given delay
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            remaining_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Start (or restart) the countdown from the full delay
    pub fn arm(&mut self) {
        self.remaining_ms = Some(self.delay_ms);
    }

    /// Replace the delay and restart the countdown
    pub fn arm_for(&mut self, delay_ms: u32) {
        self.delay_ms = delay_ms;
        self.arm();
    }

    /// Drop any pending fire
    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Time left before the fire, `None` when idle
    pub fn remaining_ms(&self) -> Option<u32> {
        self.remaining_ms
    }

    /// Advance the countdown. Returns true exactly once, on the tick that fires.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(remaining) = self.remaining_ms else {
            return false;
        };

        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining == 0 {
            self.remaining_ms = None;
            true
        } else {
            self.remaining_ms = Some(remaining);
            false
        }
    }
}

/// Which timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Face-up peek before the first game
    Preview,
    /// Wait before a mismatched pair is turned back
    Hide,
}

impl TimerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerKind::Preview => "preview",
            TimerKind::Hide => "hide",
        }
    }
}

/// The two game timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timers {
    pub preview: DelayTimer,
    pub hide: DelayTimer,
}

impl Timers {
    pub fn new(preview_ms: u32, hide_delay_ms: u32) -> Self {
        Self {
            preview: DelayTimer::new(preview_ms),
            hide: DelayTimer::new(hide_delay_ms),
        }
    }

    pub fn cancel_all(&mut self) {
        self.preview.cancel();
        self.hide.cancel();
    }
}
