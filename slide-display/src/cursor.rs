//! Pointer cursor idle hiding.
//!
//! The cursor is blanked after a period without pointer motion and restored
//! on the next motion. The timer is one-shot: once the cursor is hidden
//! nothing is scheduled until the pointer moves again.

use crate::host::{DisplayHost, TimerToken};
use std::fmt;
use std::time::Duration;
use tracing::{debug, trace};

/// Cursor images the controller switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    /// The toolkit's default pointer
    Default,
    /// Fully transparent cursor
    Blank,
}

impl fmt::Display for CursorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Blank => write!(f, "Blank"),
        }
    }
}

/// Observable state of the idle timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPhase {
    /// A hide timer is pending
    Armed,
    /// Cursor blanked, no timer pending
    Hidden,
}

/// Idle-timeout state machine for the pointer cursor.
///
/// Holds at most one pending timer: every rearm cancels the previous token
/// before a new one is scheduled.
#[derive(Debug)]
pub struct CursorActivityTimer {
    timeout: Duration,
    pending: Option<TimerToken>,
    phase: CursorPhase,
}

impl CursorActivityTimer {
    /// Create the timer and schedule the first countdown.
    pub fn start(timeout: Duration, host: &mut dyn DisplayHost) -> Self {
        let mut timer = Self {
            timeout,
            pending: None,
            phase: CursorPhase::Armed,
        };
        timer.rearm(host);
        timer
    }

    pub fn phase(&self) -> CursorPhase {
        self.phase
    }

    /// Pointer moved: show the cursor and restart the countdown.
    pub fn on_motion(&mut self, host: &mut dyn DisplayHost) {
        trace!("Pointer motion, restarting cursor idle timer");
        host.set_cursor(CursorShape::Default);
        self.rearm(host);
    }

    /// Handle an elapsed timer. Tokens other than the pending one are stale
    /// and ignored.
    pub fn on_fired(&mut self, token: TimerToken, host: &mut dyn DisplayHost) {
        if self.pending != Some(token) {
            trace!("Ignoring stale {}", token);
            return;
        }
        self.pending = None;

        if host.has_native_handle() {
            host.set_cursor(CursorShape::Blank);
            self.phase = CursorPhase::Hidden;
            debug!("Pointer idle for {:?}, cursor hidden", self.timeout);
        } else {
            // Window not mapped yet: try again later, for as long as it takes.
            debug!("No native window yet, retrying cursor hide");
            self.rearm(host);
        }
    }

    fn rearm(&mut self, host: &mut dyn DisplayHost) {
        if let Some(previous) = self.pending.take() {
            host.cancel_timer(previous);
        }
        self.pending = Some(host.schedule_timer(self.timeout));
        self.phase = CursorPhase::Armed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_shape_display() {
        assert_eq!(CursorShape::Default.to_string(), "Default");
        assert_eq!(CursorShape::Blank.to_string(), "Blank");
    }
}
