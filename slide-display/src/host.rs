//! The seam between the display controller and the windowing toolkit.
//!
//! [`DisplayHost`] is the only way the controller talks to a real window.
//! The `slideview` binary implements it on top of winit; the integration
//! tests implement it with a recording double.

use crate::cursor::CursorShape;
use crate::monitor::MonitorInfo;
use crate::overlay::OverlayKind;
use slide_common::{Point, Size};
use std::fmt;
use std::time::Duration;

/// Opaque handle of a logical screen.
///
/// Some fullscreen APIs take a (screen, monitor index) pair instead of a
/// monitor object, so the screen a monitor was resolved on is carried along
/// with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenId(pub u32);

/// Handle of a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

/// Host-side identifier of an overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Where the pointer currently is, as reported by the pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerLocation {
    pub screen: ScreenId,
    pub position: Point,
}

/// Events the host delivers to [`DisplayWindow::handle_event`](crate::DisplayWindow::handle_event).
///
/// Delivery is serial: no two events are ever handled concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The pointer moved over the window.
    PointerMotion,
    /// The window manager changed the window size.
    Configure(Size),
    /// The window has been mapped and now has a native handle.
    Mapped,
    /// An overlay surface obtained its native handle.
    SurfaceRealized(OverlayKind),
    /// A timer scheduled with [`DisplayHost::schedule_timer`] elapsed.
    TimerFired(TimerToken),
}

impl HostEvent {
    pub fn kind(&self) -> HostEventKind {
        match self {
            Self::PointerMotion => HostEventKind::PointerMotion,
            Self::Configure(_) => HostEventKind::Configure,
            Self::Mapped => HostEventKind::Map,
            Self::SurfaceRealized(_) => HostEventKind::SurfaceRealize,
            Self::TimerFired(_) => HostEventKind::Timer,
        }
    }
}

/// Event classes a controller can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    PointerMotion,
    Configure,
    Map,
    SurfaceRealize,
    Timer,
}

impl HostEventKind {
    /// Every event class the display controller listens to.
    pub const ALL: [HostEventKind; 5] = [
        HostEventKind::PointerMotion,
        HostEventKind::Configure,
        HostEventKind::Map,
        HostEventKind::SurfaceRealize,
        HostEventKind::Timer,
    ];
}

/// Windowing operations the display controller needs.
///
/// Every mutating call is a single request to the windowing system. The
/// controller never checks whether a request took effect; the window manager
/// reports the outcome back through [`HostEvent::Configure`].
pub trait DisplayHost {
    /// Monitors of the default display, in index order.
    fn monitors(&self) -> Vec<MonitorInfo>;

    /// The default screen of the default display.
    fn default_screen(&self) -> ScreenId;

    /// Current pointer position, or `None` if the host cannot tell.
    fn pointer_location(&self) -> Option<PointerLocation>;

    /// Index of the monitor currently holding the window, `None` while the
    /// window has no native handle.
    fn monitor_at_window(&self) -> Option<usize>;

    /// Whether the window is mapped and has a native handle.
    fn has_native_handle(&self) -> bool;

    /// Ask for a new window size.
    fn request_size(&mut self, size: Size);

    /// Move the window origin. May be ignored by the window manager.
    fn move_window(&mut self, origin: Point);

    /// Fullscreen the window on monitor `monitor` of `screen`.
    fn fullscreen_on_monitor(&mut self, screen: ScreenId, monitor: usize);

    fn unfullscreen(&mut self);

    fn set_cursor(&mut self, cursor: CursorShape);

    /// Schedule a one-shot timer. The host delivers
    /// [`HostEvent::TimerFired`] with the returned token once it elapses.
    fn schedule_timer(&mut self, delay: Duration) -> TimerToken;

    /// Cancel a pending timer. Cancelling an already fired token is a no-op.
    fn cancel_timer(&mut self, token: TimerToken);

    /// Add an overlay child on top of every previously added overlay.
    fn add_overlay(&mut self, kind: OverlayKind) -> SurfaceId;

    /// Let pointer input fall through `surface` to whatever lies beneath.
    fn set_input_passthrough(&mut self, surface: SurfaceId, passthrough: bool);

    /// Register interest in an event class.
    fn subscribe(&mut self, kind: HostEventKind);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_mapping() {
        assert_eq!(HostEvent::PointerMotion.kind(), HostEventKind::PointerMotion);
        assert_eq!(
            HostEvent::Configure(Size::new(1, 1)).kind(),
            HostEventKind::Configure
        );
        assert_eq!(HostEvent::Mapped.kind(), HostEventKind::Map);
        assert_eq!(
            HostEvent::SurfaceRealized(OverlayKind::Pen).kind(),
            HostEventKind::SurfaceRealize
        );
        assert_eq!(
            HostEvent::TimerFired(TimerToken(7)).kind(),
            HostEventKind::Timer
        );
    }

    #[test]
    fn test_timer_token_display() {
        assert_eq!(TimerToken(42).to_string(), "timer#42");
    }
}
