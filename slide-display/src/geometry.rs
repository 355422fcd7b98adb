//! Window size bookkeeping.
//!
//! The tracker computes the initial window size from the target monitor and
//! then follows whatever the window manager reports. Once the window is
//! mapped the window manager is the source of truth: reported sizes are taken
//! as-is, without clamping.

use crate::monitor::MonitorDescriptor;
use slide_common::Size;
use tracing::debug;

/// Fullscreen size for `monitor`.
///
/// With `divide_by_scale` the monitor geometry is divided (integer division)
/// by its scale factor, for backends that report physical pixels while also
/// scaling in the compositor.
pub fn fullscreen_size(monitor: &MonitorDescriptor, divide_by_scale: bool) -> Size {
    let size = monitor.geometry.size();
    if divide_by_scale {
        let scale = monitor.scale_factor.get();
        Size::new(size.width / scale, size.height / scale)
    } else {
        size
    }
}

/// Windowed size: each requested dimension if non-zero, otherwise half of the
/// uncorrected monitor dimension.
pub fn windowed_size(monitor: &MonitorDescriptor, requested: Size) -> Size {
    let size = monitor.geometry.size();
    Size::new(
        if requested.width > 0 { requested.width } else { size.width / 2 },
        if requested.height > 0 { requested.height } else { size.height / 2 },
    )
}

/// Authoritative window size and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
    pub windowed: bool,
}

impl WindowGeometry {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Debug, Clone)]
pub struct GeometryTracker {
    current: WindowGeometry,
}

impl GeometryTracker {
    /// Compute the initial geometry for `monitor` in the requested mode.
    pub fn initial(
        monitor: &MonitorDescriptor,
        windowed: bool,
        requested: Size,
        divide_by_scale: bool,
    ) -> Self {
        let size = if windowed {
            windowed_size(monitor, requested)
        } else {
            fullscreen_size(monitor, divide_by_scale)
        };

        debug!(
            "Initial window geometry {} ({})",
            size,
            if windowed { "windowed" } else { "fullscreen" }
        );

        Self {
            current: WindowGeometry {
                width: size.width,
                height: size.height,
                windowed,
            },
        }
    }

    pub fn current(&self) -> WindowGeometry {
        self.current
    }

    /// Apply a size reported by the window manager. Returns true if the
    /// tracked size changed.
    pub fn on_configure(&mut self, size: Size) -> bool {
        if size.width == self.current.width && size.height == self.current.height {
            return false;
        }

        debug!(
            "Window resized {}x{} -> {}",
            self.current.width, self.current.height, size
        );
        self.current.width = size.width;
        self.current.height = size.height;
        true
    }

    /// Record an explicit windowed-size request.
    pub fn set_size(&mut self, size: Size) {
        self.current.width = size.width;
        self.current.height = size.height;
    }

    pub fn set_windowed(&mut self, windowed: bool) {
        self.current.windowed = windowed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScreenId;
    use crate::monitor::MonitorSelector;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use slide_common::Rect;
    use std::num::NonZeroU32;

    fn descriptor(width: u32, height: u32, scale: u32) -> MonitorDescriptor {
        MonitorDescriptor {
            selector: MonitorSelector::Index(1),
            geometry: Rect::new(0, 0, width, height),
            scale_factor: NonZeroU32::new(scale).unwrap(),
            screen: ScreenId(0),
            fullscreen_index: 1,
        }
    }

    #[test]
    fn test_fullscreen_scale_correction() {
        let monitor = descriptor(1920, 1080, 2);
        assert_eq!(fullscreen_size(&monitor, true), Size::new(960, 540));
        assert_eq!(fullscreen_size(&monitor, false), Size::new(1920, 1080));
    }

    #[test]
    fn test_windowed_explicit_and_default() {
        let monitor = descriptor(1920, 1080, 2);
        assert_eq!(windowed_size(&monitor, Size::new(800, 600)), Size::new(800, 600));
        // Uses uncorrected geometry regardless of the scale factor
        assert_eq!(windowed_size(&monitor, Size::new(0, 0)), Size::new(960, 540));
        assert_eq!(windowed_size(&monitor, Size::new(800, 0)), Size::new(800, 540));
    }

    #[test]
    fn test_initial_modes() {
        let monitor = descriptor(1920, 1080, 2);

        let tracker = GeometryTracker::initial(&monitor, false, Size::new(800, 600), true);
        assert_eq!(
            tracker.current(),
            WindowGeometry {
                width: 960,
                height: 540,
                windowed: false
            }
        );

        let tracker = GeometryTracker::initial(&monitor, true, Size::new(800, 600), true);
        assert_eq!(
            tracker.current(),
            WindowGeometry {
                width: 800,
                height: 600,
                windowed: true
            }
        );
    }

    #[test]
    fn test_configure_change_detection() {
        let mut tracker = GeometryTracker::initial(&descriptor(1920, 1080, 1), false, Size::default(), false);
        assert!(!tracker.on_configure(Size::new(1920, 1080)));
        assert!(tracker.on_configure(Size::new(1920, 1050)));
        assert_eq!(tracker.current().size(), Size::new(1920, 1050));
        // No clamping, the window manager wins
        assert!(tracker.on_configure(Size::new(1, 1)));
        assert_eq!(tracker.current().size(), Size::new(1, 1));
    }

    proptest! {
        #[test]
        fn prop_fullscreen_size_divides_by_scale(
            width in 1u32..10_000,
            height in 1u32..10_000,
            scale in 1u32..=4,
        ) {
            let monitor = descriptor(width, height, scale);
            prop_assert_eq!(fullscreen_size(&monitor, true), Size::new(width / scale, height / scale));
            prop_assert_eq!(fullscreen_size(&monitor, false), Size::new(width, height));
        }

        #[test]
        fn prop_tracker_follows_last_configure(
            sizes in proptest::collection::vec((1u32..5_000, 1u32..5_000), 1..32),
        ) {
            let mut tracker = GeometryTracker::initial(&descriptor(1920, 1080, 1), false, Size::default(), false);
            for (width, height) in sizes {
                tracker.on_configure(Size::new(width, height));
                prop_assert_eq!(tracker.current().size(), Size::new(width, height));
                prop_assert!(!tracker.current().windowed);
            }
        }
    }
}
