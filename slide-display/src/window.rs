//! The presentation window controller.
//!
//! [`DisplayWindow`] owns every piece of display state and wires the
//! components together. Each host event goes to exactly one component;
//! there is no loop of its own beyond the host's serial event delivery.

use crate::config::{DisplayConfig, PlatformQuirks};
use crate::cursor::{CursorActivityTimer, CursorPhase};
use crate::errors::DisplayError;
use crate::fullscreen::{FullscreenController, ToggleOutcome};
use crate::geometry::{GeometryTracker, WindowGeometry};
use crate::host::{DisplayHost, HostEvent, HostEventKind};
use crate::monitor::{MonitorDescriptor, MonitorResolver};
use crate::overlay::{OverlayCompositor, OverlayKind, SurfaceHandle};
use slide_common::Size;
use tracing::{debug, info};

pub struct DisplayWindow<H: DisplayHost> {
    host: H,
    geometry: GeometryTracker,
    overlays: OverlayCompositor,
    fullscreen: FullscreenController,
    cursor: CursorActivityTimer,
}

impl<H: DisplayHost> DisplayWindow<H> {
    /// Set up the window on `host`.
    ///
    /// Fails only when no usable monitor can be resolved.
    pub fn new(
        mut host: H,
        config: &DisplayConfig,
        quirks: PlatformQuirks,
    ) -> Result<Self, DisplayError> {
        let target = MonitorResolver::resolve(&host, config.monitor)?;

        let geometry = GeometryTracker::initial(
            &target,
            config.windowed,
            config.requested_windowed_size(),
            quirks.contains(PlatformQuirks::DIVIDE_BY_SCALE),
        );
        host.request_size(geometry.current().size());

        for kind in HostEventKind::ALL {
            host.subscribe(kind);
        }

        let overlays = OverlayCompositor::build(&mut host);
        let fullscreen = FullscreenController::start(target, config.windowed, quirks, &mut host);
        let cursor = CursorActivityTimer::start(config.cursor_idle_timeout(), &mut host);

        info!(
            "Display window ready: {} {}",
            geometry.current().size(),
            if config.windowed { "windowed" } else { "fullscreen" }
        );

        Ok(Self {
            host,
            geometry,
            overlays,
            fullscreen,
            cursor,
        })
    }

    /// Dispatch one host event.
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::PointerMotion => self.cursor.on_motion(&mut self.host),
            HostEvent::Configure(size) => {
                self.geometry.on_configure(size);
            }
            HostEvent::Mapped => self.fullscreen.on_mapped(&mut self.host),
            HostEvent::SurfaceRealized(kind) => self.overlays.on_realized(kind, &mut self.host),
            HostEvent::TimerFired(token) => self.cursor.on_fired(token, &mut self.host),
        }
    }

    /// Switch between windowed and fullscreen.
    pub fn toggle_windowed(&mut self) {
        match self.fullscreen.toggle(&mut self.host) {
            ToggleOutcome::Skipped => {}
            ToggleOutcome::EnteredFullscreen | ToggleOutcome::LeftFullscreen => {
                self.geometry.set_windowed(self.fullscreen.state().windowed);
            }
        }
    }

    /// Ask for a specific windowed size.
    pub fn request_windowed_size(&mut self, size: Size) {
        if size.is_empty() {
            debug!("Ignoring empty window size request {}", size);
            return;
        }
        self.geometry.set_size(size);
        self.host.request_size(size);
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry.current()
    }

    pub fn is_windowed(&self) -> bool {
        self.fullscreen.state().windowed
    }

    pub fn target_monitor(&self) -> &MonitorDescriptor {
        &self.fullscreen.state().target
    }

    pub fn overlays(&self) -> &OverlayCompositor {
        &self.overlays
    }

    /// Surface a renderer should draw into.
    pub fn surface(&self, kind: OverlayKind) -> SurfaceHandle {
        self.overlays.handle(kind)
    }

    pub fn cursor_phase(&self) -> CursorPhase {
        self.cursor.phase()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
