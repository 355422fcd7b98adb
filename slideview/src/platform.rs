//! One-shot platform detection.
//!
//! The display controller never inspects the environment itself; it gets a
//! [`PlatformQuirks`] set computed here once at startup.

use crate::config::PlatformConfig;
use slide_display::PlatformQuirks;
use std::fmt;
use tracing::info;

/// Display server class the process runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    X11,
    Wayland,
    Other,
}

impl fmt::Display for DisplayServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X11 => write!(f, "X11"),
            Self::Wayland => write!(f, "Wayland"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl DisplayServer {
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok())
    }

    /// Classify from environment lookups. `WAYLAND_DISPLAY` wins over
    /// `XDG_SESSION_TYPE`, which wins over `DISPLAY`.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| lookup(key).map_or(false, |value| !value.is_empty());

        if set("WAYLAND_DISPLAY") {
            return Self::Wayland;
        }
        match lookup("XDG_SESSION_TYPE").as_deref() {
            Some("wayland") => return Self::Wayland,
            Some("x11") => return Self::X11,
            _ => {}
        }
        if set("DISPLAY") {
            Self::X11
        } else {
            Self::Other
        }
    }

    /// Workarounds for this display server under `config`.
    ///
    /// Wayland reports window geometry in physical pixels while the
    /// compositor scales on its own, and ignores positioning of unmapped
    /// windows.
    pub fn quirks(self, config: &PlatformConfig) -> PlatformQuirks {
        let wayland = self == Self::Wayland;
        let mut quirks = PlatformQuirks::empty();
        quirks.set(
            PlatformQuirks::DIVIDE_BY_SCALE,
            wayland && config.scale_workaround,
        );
        quirks.set(
            PlatformQuirks::DEFER_FULLSCREEN_UNTIL_MAPPED,
            config.defer_fullscreen.unwrap_or(wayland),
        );

        info!("Display server: {}, quirks: {:?}", self, quirks);
        quirks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_detection_order() {
        assert_eq!(
            DisplayServer::from_env(env(&[("WAYLAND_DISPLAY", "wayland-0"), ("DISPLAY", ":0")])),
            DisplayServer::Wayland
        );
        assert_eq!(
            DisplayServer::from_env(env(&[("XDG_SESSION_TYPE", "wayland")])),
            DisplayServer::Wayland
        );
        assert_eq!(
            DisplayServer::from_env(env(&[("XDG_SESSION_TYPE", "x11"), ("WAYLAND_DISPLAY", "")])),
            DisplayServer::X11
        );
        assert_eq!(DisplayServer::from_env(env(&[("DISPLAY", ":1")])), DisplayServer::X11);
        assert_eq!(DisplayServer::from_env(env(&[])), DisplayServer::Other);
    }

    #[test]
    fn test_wayland_quirks() {
        let config = PlatformConfig::default();
        assert_eq!(
            DisplayServer::Wayland.quirks(&config),
            PlatformQuirks::DIVIDE_BY_SCALE | PlatformQuirks::DEFER_FULLSCREEN_UNTIL_MAPPED
        );

        let config = PlatformConfig {
            scale_workaround: false,
            defer_fullscreen: Some(false),
        };
        assert_eq!(DisplayServer::Wayland.quirks(&config), PlatformQuirks::empty());
    }

    #[test]
    fn test_x11_quirks() {
        assert_eq!(
            DisplayServer::X11.quirks(&PlatformConfig::default()),
            PlatformQuirks::empty()
        );

        let config = PlatformConfig {
            scale_workaround: true,
            defer_fullscreen: Some(true),
        };
        assert_eq!(
            DisplayServer::X11.quirks(&config),
            PlatformQuirks::DEFER_FULLSCREEN_UNTIL_MAPPED
        );
    }
}
