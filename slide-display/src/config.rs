//! Construction parameters for a [`DisplayWindow`](crate::DisplayWindow).

use crate::monitor::MonitorSelector;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use slide_common::Size;
use std::time::Duration;

/// Idle time before the pointer cursor is blanked.
pub const DEFAULT_CURSOR_IDLE_TIMEOUT_MS: u64 = 5_000;

/// User-facing display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Which monitor to show the window on.
    pub monitor: MonitorSelector,
    /// Start windowed instead of fullscreen.
    pub windowed: bool,
    /// Windowed width in pixels; 0 means half the monitor width.
    pub windowed_width: u32,
    /// Windowed height in pixels; 0 means half the monitor height.
    pub windowed_height: u32,
    /// Pointer inactivity before the cursor is hidden.
    pub cursor_idle_timeout_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            monitor: MonitorSelector::default(),
            windowed: false,
            windowed_width: 0,
            windowed_height: 0,
            cursor_idle_timeout_ms: DEFAULT_CURSOR_IDLE_TIMEOUT_MS,
        }
    }
}

impl DisplayConfig {
    pub fn requested_windowed_size(&self) -> Size {
        Size::new(self.windowed_width, self.windowed_height)
    }

    pub fn cursor_idle_timeout(&self) -> Duration {
        Duration::from_millis(self.cursor_idle_timeout_ms)
    }
}

bitflags! {
    /// Windowing-system workarounds, decided once at startup by platform
    /// detection and never re-queried.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PlatformQuirks: u8 {
        /// The window manager ignores positioning requests issued before the
        /// window is mapped: run the fullscreen sequence on the first map.
        const DEFER_FULLSCREEN_UNTIL_MAPPED = 1 << 0;
        /// The backend reports physical pixels while scaling on its own:
        /// divide fullscreen geometry by the monitor scale factor.
        const DIVIDE_BY_SCALE = 1 << 1;
    }
}
