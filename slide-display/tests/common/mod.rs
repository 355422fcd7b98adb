//! Recording test double for [`DisplayHost`].

#![allow(dead_code)]

use slide_common::{Point, Rect, Size};
use slide_display::{
    CursorShape, DisplayHost, HostEventKind, MonitorInfo, OverlayKind, PointerLocation, ScreenId,
    SurfaceId, TimerToken,
};
use std::collections::BTreeSet;
use std::num::NonZeroU32;
use std::time::Duration;

/// Every mutating call the controller made, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Resize(Size),
    Move(Point),
    Fullscreen { screen: ScreenId, monitor: usize },
    Unfullscreen,
    Cursor(CursorShape),
    Schedule(TimerToken, Duration),
    Cancel(TimerToken),
    AddOverlay(OverlayKind, SurfaceId),
    Passthrough(SurfaceId, bool),
    Subscribe(HostEventKind),
}

pub struct FakeHost {
    pub monitors: Vec<MonitorInfo>,
    pub pointer: Option<PointerLocation>,
    pub mapped: bool,
    /// Monitor the window sits on once mapped. Reported only while it is
    /// still in `monitors`.
    pub window_monitor: usize,
    pub requests: Vec<Request>,
    pub pending_timers: BTreeSet<TimerToken>,
    next_token: u64,
    next_surface: u64,
}

pub fn monitor(x: i32, y: i32, width: u32, height: u32, scale: u32) -> MonitorInfo {
    MonitorInfo::new(
        None,
        Rect::new(x, y, width, height),
        NonZeroU32::new(scale).unwrap(),
    )
}

impl FakeHost {
    pub fn new(monitors: Vec<MonitorInfo>) -> Self {
        Self {
            monitors,
            pointer: None,
            mapped: false,
            window_monitor: 0,
            requests: Vec::new(),
            pending_timers: BTreeSet::new(),
            next_token: 1,
            next_surface: 100,
        }
    }

    /// 1920x1080 at scale 1 on the left, 1920x1080 at scale 2 on the right.
    pub fn dual_head() -> Self {
        Self::new(vec![
            monitor(0, 0, 1920, 1080, 1),
            monitor(1920, 0, 1920, 1080, 2),
        ])
    }

    /// Pop the single pending timer, as the event loop would when it fires.
    pub fn expire_timer(&mut self) -> TimerToken {
        assert_eq!(self.pending_timers.len(), 1, "expected exactly one pending timer");
        let token = *self.pending_timers.iter().next().unwrap();
        self.pending_timers.remove(&token);
        token
    }

    pub fn cursor_requests(&self) -> Vec<CursorShape> {
        self.requests
            .iter()
            .filter_map(|request| match request {
                Request::Cursor(shape) => Some(*shape),
                _ => None,
            })
            .collect()
    }

    pub fn fullscreen_requests(&self) -> Vec<Request> {
        self.requests
            .iter()
            .filter(|request| {
                matches!(
                    request,
                    Request::Move(_) | Request::Fullscreen { .. } | Request::Unfullscreen
                )
            })
            .cloned()
            .collect()
    }

    pub fn clear_requests(&mut self) {
        self.requests.clear();
    }
}

impl DisplayHost for FakeHost {
    fn monitors(&self) -> Vec<MonitorInfo> {
        self.monitors.clone()
    }

    fn default_screen(&self) -> ScreenId {
        ScreenId(0)
    }

    fn pointer_location(&self) -> Option<PointerLocation> {
        self.pointer
    }

    fn monitor_at_window(&self) -> Option<usize> {
        let listed = self.window_monitor < self.monitors.len();
        (self.mapped && listed).then_some(self.window_monitor)
    }

    fn has_native_handle(&self) -> bool {
        self.mapped
    }

    fn request_size(&mut self, size: Size) {
        self.requests.push(Request::Resize(size));
    }

    fn move_window(&mut self, origin: Point) {
        self.requests.push(Request::Move(origin));
    }

    fn fullscreen_on_monitor(&mut self, screen: ScreenId, monitor: usize) {
        self.requests.push(Request::Fullscreen { screen, monitor });
    }

    fn unfullscreen(&mut self) {
        self.requests.push(Request::Unfullscreen);
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.requests.push(Request::Cursor(cursor));
    }

    fn schedule_timer(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending_timers.insert(token);
        self.requests.push(Request::Schedule(token, delay));
        token
    }

    fn cancel_timer(&mut self, token: TimerToken) {
        self.pending_timers.remove(&token);
        self.requests.push(Request::Cancel(token));
    }

    fn add_overlay(&mut self, kind: OverlayKind) -> SurfaceId {
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.requests.push(Request::AddOverlay(kind, id));
        id
    }

    fn set_input_passthrough(&mut self, surface: SurfaceId, passthrough: bool) {
        self.requests.push(Request::Passthrough(surface, passthrough));
    }

    fn subscribe(&mut self, kind: HostEventKind) {
        self.requests.push(Request::Subscribe(kind));
    }
}
