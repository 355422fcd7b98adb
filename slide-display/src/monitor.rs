//! Monitor enumeration and target selection.
//!
//! This module turns a [`MonitorSelector`] (explicit index or "wherever the
//! pointer is") into a [`MonitorDescriptor`] the rest of the controller sizes
//! and positions the window against.

use crate::errors::DisplayError;
use crate::host::{DisplayHost, ScreenId};
use serde::{Deserialize, Serialize};
use slide_common::{Point, Rect};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Information about a display monitor, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Monitor name (if available)
    pub name: Option<String>,
    /// Monitor area in desktop coordinates
    pub geometry: Rect,
    /// Integer ratio between physical and logical pixels
    pub scale_factor: NonZeroU32,
    /// Whether this is the primary monitor
    pub is_primary: bool,
}

impl MonitorInfo {
    pub fn new(name: Option<String>, geometry: Rect, scale_factor: NonZeroU32) -> Self {
        Self {
            name,
            geometry,
            scale_factor,
            is_primary: false,
        }
    }

    /// Round a fractional toolkit scale factor to the integer factor used
    /// for geometry correction. Never returns less than 1.
    pub fn integer_scale(scale_factor: f64) -> NonZeroU32 {
        let rounded = scale_factor.round();
        if rounded.is_finite() && rounded >= 1.0 {
            NonZeroU32::new(rounded as u32).unwrap_or(NonZeroU32::MIN)
        } else {
            NonZeroU32::MIN
        }
    }

    /// Check if a point is within this monitor
    pub fn contains_point(&self, point: Point) -> bool {
        self.geometry.contains_point(point.x, point.y)
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// How the target monitor is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MonitorSelector {
    /// Monitor at this index on the default display
    Index(usize),
    /// Monitor under the pointer at resolution time
    Pointer,
}

impl Default for MonitorSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl fmt::Display for MonitorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index),
            Self::Pointer => write!(f, "pointer"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid monitor selector '{0}': expected \"pointer\" or a monitor index")]
pub struct ParseSelectorError(String);

impl FromStr for MonitorSelector {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pointer") || s.eq_ignore_ascii_case("cursor") {
            return Ok(Self::Pointer);
        }
        s.parse::<usize>()
            .map(Self::Index)
            .map_err(|_| ParseSelectorError(s.to_string()))
    }
}

impl TryFrom<String> for MonitorSelector {
    type Error = ParseSelectorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonitorSelector> for String {
    fn from(selector: MonitorSelector) -> Self {
        selector.to_string()
    }
}

/// A monitor resolved for one construction or one toggle-to-fullscreen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorDescriptor {
    /// The selector this descriptor was resolved from
    pub selector: MonitorSelector,
    /// Monitor area in desktop coordinates
    pub geometry: Rect,
    pub scale_factor: NonZeroU32,
    /// Screen to pass to screen-based fullscreen calls
    pub screen: ScreenId,
    /// Index to pass to screen-based fullscreen calls.
    ///
    /// For [`MonitorSelector::Pointer`] this is always 0: the true index
    /// cannot be recovered from a point. It is only right when the pointer
    /// monitor happens to be the first one of its screen.
    pub fullscreen_index: usize,
}

/// Resolves selectors against the monitors a host reports.
pub struct MonitorResolver;

impl MonitorResolver {
    /// Resolve `selector` on `host`.
    ///
    /// Fails with [`DisplayError::NoMonitors`] when the host reports no
    /// monitors at all.
    pub fn resolve(
        host: &dyn DisplayHost,
        selector: MonitorSelector,
    ) -> Result<MonitorDescriptor, DisplayError> {
        let monitors = host.monitors();
        if monitors.is_empty() {
            return Err(DisplayError::NoMonitors);
        }
        debug!("{}", Self::summary(&monitors));

        let descriptor = match selector {
            MonitorSelector::Index(index) => {
                Self::by_index(&monitors, index, host.default_screen())?
            }
            MonitorSelector::Pointer => Self::by_pointer(host, &monitors),
        };

        info!(
            "Target monitor ({}): {} @{}x, fullscreen index {}",
            descriptor.selector,
            descriptor.geometry,
            descriptor.scale_factor,
            descriptor.fullscreen_index
        );
        Ok(descriptor)
    }

    fn by_index(
        monitors: &[MonitorInfo],
        index: usize,
        screen: ScreenId,
    ) -> Result<MonitorDescriptor, DisplayError> {
        let monitor = monitors.get(index).ok_or(DisplayError::MonitorOutOfRange {
            index,
            count: monitors.len(),
        })?;

        Ok(MonitorDescriptor {
            selector: MonitorSelector::Index(index),
            geometry: monitor.geometry,
            scale_factor: monitor.scale_factor,
            screen,
            fullscreen_index: index,
        })
    }

    fn by_pointer(host: &dyn DisplayHost, monitors: &[MonitorInfo]) -> MonitorDescriptor {
        let (screen, monitor) = match host.pointer_location() {
            Some(location) => (
                location.screen,
                Self::monitor_at_point(monitors, location.position),
            ),
            None => {
                debug!("Pointer location unknown, using the first monitor");
                (host.default_screen(), &monitors[0])
            }
        };

        debug!(
            "Pointer monitor '{}' uses fullscreen index 0 (true index not recoverable from a point)",
            monitor.display_name()
        );

        MonitorDescriptor {
            selector: MonitorSelector::Pointer,
            geometry: monitor.geometry,
            scale_factor: monitor.scale_factor,
            screen,
            fullscreen_index: 0,
        }
    }

    /// Monitor containing `point`, or the nearest one if the point lies in
    /// a gap between monitors. `monitors` must not be empty.
    fn monitor_at_point(monitors: &[MonitorInfo], point: Point) -> &MonitorInfo {
        monitors
            .iter()
            .find(|monitor| monitor.contains_point(point))
            .or_else(|| {
                monitors
                    .iter()
                    .min_by_key(|monitor| monitor.geometry.distance_sq_to(point))
            })
            .unwrap_or(&monitors[0])
    }

    /// Get monitor information summary for logging/debugging
    pub fn summary(monitors: &[MonitorInfo]) -> String {
        let mut summary = format!("{} monitor(s)", monitors.len());

        for (index, monitor) in monitors.iter().enumerate() {
            let primary_marker = if monitor.is_primary { " [PRIMARY]" } else { "" };
            summary.push_str(&format!(
                "\n  {}: {} {} @{}x{}",
                index,
                monitor.display_name(),
                monitor.geometry,
                monitor.scale_factor,
                primary_marker
            ));
        }

        summary
    }
}
