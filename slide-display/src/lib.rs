//! # slide-display: presentation window controller
//!
//! This crate decides where and how the presentation window is shown: which
//! monitor it targets, what size it has, when it goes fullscreen, and when
//! the pointer cursor is hidden. It also owns the three overlay surfaces
//! (video, pen, pointer) that renderers draw into.
//!
//! It does not talk to a windowing toolkit directly. Everything goes through
//! the [`DisplayHost`] trait, which the `slideview` binary implements on top
//! of winit.
//!
//! ## Example
//!
//! ```rust,ignore
//! use slide_display::{DisplayConfig, DisplayWindow, HostEvent, PlatformQuirks};
//!
//! let mut window = DisplayWindow::new(host, &DisplayConfig::default(), PlatformQuirks::empty())?;
//! window.handle_event(HostEvent::Mapped);
//! window.toggle_windowed();
//! ```

mod config;
mod cursor;
mod errors;
mod fullscreen;
mod geometry;
mod host;
mod monitor;
mod overlay;
mod window;

pub use config::{DisplayConfig, PlatformQuirks, DEFAULT_CURSOR_IDLE_TIMEOUT_MS};
pub use cursor::{CursorActivityTimer, CursorPhase, CursorShape};
pub use errors::DisplayError;
pub use fullscreen::{FullscreenController, FullscreenState, ToggleOutcome};
pub use geometry::{fullscreen_size, windowed_size, GeometryTracker, WindowGeometry};
pub use host::{
    DisplayHost, HostEvent, HostEventKind, PointerLocation, ScreenId, SurfaceId, TimerToken,
};
pub use monitor::{
    MonitorDescriptor, MonitorInfo, MonitorResolver, MonitorSelector, ParseSelectorError,
};
pub use overlay::{OverlayCompositor, OverlayKind, OverlaySurface, SurfaceHandle};
pub use window::DisplayWindow;

/// Common result type for display setup
pub type DisplayResult<T> = Result<T, DisplayError>;
