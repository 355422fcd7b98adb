//! winit implementation of [`DisplayHost`].
//!
//! winit has a single logical screen, no global pointer query and no child
//! surfaces. The host fills those gaps itself: screen 0 stands for the whole
//! desktop, the pointer position comes from `device_query` (falling back to
//! the last `CursorMoved`), and the overlays are logical layers composited
//! inside the one native window. Monitors are queried live on every call so
//! hot-plugged outputs are seen.

use device_query::{DeviceQuery, DeviceState};
use raw_window_handle::{HasRawWindowHandle, RawWindowHandle};
use slide_common::{Point, Rect, Size};
use slide_display::{
    CursorShape, DisplayHost, HostEventKind, MonitorInfo, OverlayKind, PointerLocation, ScreenId,
    SurfaceId, TimerToken,
};
use std::collections::{BTreeMap, HashSet};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::EventLoopWindowTarget;
use winit::monitor::MonitorHandle;
use winit::window::{Fullscreen, Window, WindowBuilder, WindowId};

const DESKTOP_SCREEN: ScreenId = ScreenId(0);

/// Convert winit monitors to [`MonitorInfo`], keeping winit's order.
pub fn monitor_infos(
    monitors: &[MonitorHandle],
    primary: Option<&MonitorHandle>,
) -> Vec<MonitorInfo> {
    monitors
        .iter()
        .map(|monitor| {
            let position = monitor.position();
            let size = monitor.size();
            let mut info = MonitorInfo::new(
                monitor.name(),
                Rect::new(position.x, position.y, size.width, size.height),
                MonitorInfo::integer_scale(monitor.scale_factor()),
            );
            info.is_primary = primary == Some(monitor);
            info
        })
        .collect()
}

/// Detect monitors on an event loop without creating a window.
pub fn detect_monitors<T>(target: &EventLoopWindowTarget<T>) -> Vec<MonitorInfo> {
    let monitors: Vec<MonitorHandle> = target.available_monitors().collect();
    let primary = target.primary_monitor();
    monitor_infos(&monitors, primary.as_ref())
}

/// Desktop pointer location.
///
/// A global position wins. Otherwise the last window-relative position is
/// offset by the window origin, which needs both to be known.
pub fn desktop_pointer(
    global: Option<Point>,
    window_origin: Option<Point>,
    relative: Option<Point>,
) -> Option<PointerLocation> {
    let position = match global {
        Some(global) => global,
        None => {
            let origin = window_origin?;
            let relative = relative?;
            Point::new(origin.x + relative.x, origin.y + relative.y)
        }
    };
    Some(PointerLocation {
        screen: DESKTOP_SCREEN,
        position,
    })
}

#[derive(Debug)]
struct OverlayLayer {
    kind: OverlayKind,
    passthrough: bool,
}

pub struct WinitHost {
    window: Window,
    /// Global pointer source; absent when no X server is reachable
    pointer_device: Option<DeviceState>,
    mapped: bool,
    /// Last pointer position relative to the window
    pointer: Option<Point>,
    /// Overlay layer currently receiving pointer input
    pointer_layer: Option<OverlayKind>,
    timers: BTreeMap<TimerToken, Instant>,
    next_timer: u64,
    overlays: Vec<OverlayLayer>,
    subscriptions: HashSet<HostEventKind>,
}

impl WinitHost {
    /// Create the (not yet mapped) presentation window.
    pub fn new<T>(target: &EventLoopWindowTarget<T>, title: &str) -> Result<Self, winit::error::OsError> {
        let window = WindowBuilder::new().with_title(title).build(target)?;

        let pointer_device = DeviceState::checked_new();
        if pointer_device.is_none() {
            warn!("Global pointer position unavailable, using window-relative motion");
        }

        Ok(Self {
            window,
            pointer_device,
            mapped: false,
            pointer: None,
            pointer_layer: None,
            timers: BTreeMap::new(),
            next_timer: 1,
            overlays: Vec::new(),
            subscriptions: HashSet::new(),
        })
    }

    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    /// Record that the window is on screen. Returns false if it already was.
    pub fn mark_mapped(&mut self) -> bool {
        if self.mapped {
            return false;
        }
        self.mapped = true;
        if let Some(handle) = self.native_handle() {
            debug!("Window mapped with native handle {:?}", handle);
        }
        true
    }

    pub fn native_handle(&self) -> Option<RawWindowHandle> {
        self.mapped.then(|| self.window.raw_window_handle())
    }

    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Send pointer input to `layer`, or to the base content when `None`.
    pub fn route_pointer(&mut self, layer: Option<OverlayKind>) {
        if self.pointer_layer != layer {
            debug!("Pointer input now goes to {:?}", layer);
            self.pointer_layer = layer;
        }
    }

    pub fn pointer_layer(&self) -> Option<OverlayKind> {
        self.pointer_layer
    }

    pub fn is_subscribed(&self, kind: HostEventKind) -> bool {
        self.subscriptions.contains(&kind)
    }

    /// Whether pointer input falls through the given overlay layer.
    pub fn input_passthrough(&self, kind: OverlayKind) -> bool {
        self.overlays
            .iter()
            .find(|layer| layer.kind == kind)
            .map_or(false, |layer| layer.passthrough)
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().min().copied()
    }

    /// Remove and return every timer due at `now`, oldest token first.
    pub fn take_due_timers(&mut self, now: Instant) -> Vec<TimerToken> {
        let due: Vec<TimerToken> = self
            .timers
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(token, _)| *token)
            .collect();
        for token in &due {
            self.timers.remove(token);
        }
        due
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

impl DisplayHost for WinitHost {
    fn monitors(&self) -> Vec<MonitorInfo> {
        let monitors: Vec<MonitorHandle> = self.window.available_monitors().collect();
        monitor_infos(&monitors, self.window.primary_monitor().as_ref())
    }

    fn default_screen(&self) -> ScreenId {
        DESKTOP_SCREEN
    }

    fn pointer_location(&self) -> Option<PointerLocation> {
        let global = self.pointer_device.as_ref().map(|device| {
            let (x, y) = device.get_mouse().coords;
            Point::new(x, y)
        });
        let origin = match (global, self.pointer) {
            (None, Some(_)) => match self.window.inner_position() {
                Ok(origin) => Some(Point::new(origin.x, origin.y)),
                Err(err) => {
                    debug!("Window position unavailable: {}", err);
                    None
                }
            },
            _ => None,
        };
        desktop_pointer(global, origin, self.pointer)
    }

    fn monitor_at_window(&self) -> Option<usize> {
        if !self.mapped {
            return None;
        }
        let current = self.window.current_monitor()?;
        self.window
            .available_monitors()
            .position(|monitor| monitor == current)
    }

    fn has_native_handle(&self) -> bool {
        self.native_handle().is_some()
    }

    fn request_size(&mut self, size: Size) {
        self.window
            .set_inner_size(PhysicalSize::new(size.width, size.height));
    }

    fn move_window(&mut self, origin: Point) {
        // Ignored on Wayland; the fullscreen request decides placement there.
        self.window
            .set_outer_position(PhysicalPosition::new(origin.x, origin.y));
    }

    fn fullscreen_on_monitor(&mut self, screen: ScreenId, monitor: usize) {
        let handle = self.window.available_monitors().nth(monitor);
        if handle.is_none() {
            debug!(
                "Monitor {} of {:?} unknown, fullscreen on the current monitor",
                monitor, screen
            );
        }
        self.window
            .set_fullscreen(Some(Fullscreen::Borderless(handle)));
    }

    fn unfullscreen(&mut self) {
        self.window.set_fullscreen(None);
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.window
            .set_cursor_visible(cursor == CursorShape::Default);
    }

    fn schedule_timer(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_timer);
        self.next_timer += 1;
        self.timers.insert(token, Instant::now() + delay);
        trace!("Scheduled {} in {:?}", token, delay);
        token
    }

    fn cancel_timer(&mut self, token: TimerToken) {
        self.timers.remove(&token);
    }

    fn add_overlay(&mut self, kind: OverlayKind) -> SurfaceId {
        self.overlays.push(OverlayLayer {
            kind,
            passthrough: false,
        });
        SurfaceId(self.overlays.len() as u64 - 1)
    }

    fn set_input_passthrough(&mut self, surface: SurfaceId, passthrough: bool) {
        if let Some(layer) = self.overlays.get_mut(surface.0 as usize) {
            layer.passthrough = passthrough;
        }
    }

    fn subscribe(&mut self, kind: HostEventKind) {
        self.subscriptions.insert(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_global_pointer_wins() {
        let location = desktop_pointer(
            Some(Point::new(2500, 300)),
            Some(Point::new(100, 100)),
            Some(Point::new(5, 5)),
        );
        assert_eq!(
            location,
            Some(PointerLocation {
                screen: ScreenId(0),
                position: Point::new(2500, 300),
            })
        );
    }

    #[test]
    fn test_window_relative_fallback() {
        let location = desktop_pointer(None, Some(Point::new(1920, 40)), Some(Point::new(10, 20)));
        assert_eq!(location.map(|l| l.position), Some(Point::new(1930, 60)));
    }

    #[test]
    fn test_unknown_without_global_or_window_position() {
        assert_eq!(desktop_pointer(None, None, Some(Point::new(10, 20))), None);
        assert_eq!(desktop_pointer(None, Some(Point::new(0, 0)), None), None);
    }
}
