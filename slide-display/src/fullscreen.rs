//! Windowed/fullscreen transitions.

use crate::config::PlatformQuirks;
use crate::host::DisplayHost;
use crate::monitor::{MonitorDescriptor, MonitorResolver, MonitorSelector};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullscreenState {
    pub windowed: bool,
    pub target: MonitorDescriptor,
}

/// Outcome of [`FullscreenController::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    EnteredFullscreen,
    LeftFullscreen,
    /// Going fullscreen before the window has a native handle, or while it
    /// sits on no listed monitor: nothing was changed.
    Skipped,
}

#[derive(Debug)]
pub struct FullscreenController {
    state: FullscreenState,
    activation_pending: bool,
}

impl FullscreenController {
    /// Enter the initial mode. In fullscreen mode the activation sequence
    /// runs right away, or on the first map when the window manager ignores
    /// positioning of unmapped windows.
    pub fn start(
        target: MonitorDescriptor,
        windowed: bool,
        quirks: PlatformQuirks,
        host: &mut dyn DisplayHost,
    ) -> Self {
        let mut controller = Self {
            state: FullscreenState { windowed, target },
            activation_pending: false,
        };

        if !windowed {
            if quirks.contains(PlatformQuirks::DEFER_FULLSCREEN_UNTIL_MAPPED) {
                debug!("Deferring fullscreen until the window is mapped");
                controller.activation_pending = true;
            } else {
                controller.activate(host);
            }
        }

        controller
    }

    pub fn state(&self) -> &FullscreenState {
        &self.state
    }

    /// Run a deferred activation. Only the first map after construction
    /// triggers it.
    pub fn on_mapped(&mut self, host: &mut dyn DisplayHost) {
        if !self.activation_pending {
            return;
        }
        self.activation_pending = false;
        if self.state.windowed {
            // Toggled back to windowed before the window ever got mapped.
            return;
        }
        self.activate(host);
    }

    /// Flip between windowed and fullscreen.
    ///
    /// Going fullscreen re-queries the monitors and re-resolves the one
    /// holding the window. Before the window is mapped, or when the window
    /// sits on no listed monitor, the call is a no-op.
    pub fn toggle(&mut self, host: &mut dyn DisplayHost) -> ToggleOutcome {
        if !self.state.windowed {
            self.state.windowed = true;
            self.activation_pending = false;
            host.unfullscreen();
            info!("Left fullscreen");
            return ToggleOutcome::LeftFullscreen;
        }

        if !host.has_native_handle() {
            debug!("Window not mapped yet, ignoring fullscreen request");
            return ToggleOutcome::Skipped;
        }
        let Some(index) = host.monitor_at_window() else {
            debug!("Window is not on any known monitor, ignoring fullscreen request");
            return ToggleOutcome::Skipped;
        };
        let target = match MonitorResolver::resolve(host, MonitorSelector::Index(index)) {
            Ok(target) => target,
            Err(err) => {
                debug!("Cannot resolve window monitor: {}", err);
                return ToggleOutcome::Skipped;
            }
        };

        self.state.windowed = false;
        self.state.target = target;
        self.activate(host);
        ToggleOutcome::EnteredFullscreen
    }

    /// Pre-position the window on the target monitor, then fullscreen it
    /// there. The move is best effort: some backends ignore it, and the
    /// fullscreen call is what decides the final placement.
    fn activate(&self, host: &mut dyn DisplayHost) {
        let target = &self.state.target;
        host.move_window(target.geometry.origin());
        host.fullscreen_on_monitor(target.screen, target.fullscreen_index);
        info!(
            "Fullscreen on monitor {} of {:?} ({})",
            target.fullscreen_index, target.screen, target.geometry
        );
    }
}
