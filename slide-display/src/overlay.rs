//! The layered surface stack hosted by the presentation window.
//!
//! Bottom to top: video, pen, pointer. Renderers draw into these surfaces;
//! the compositor only guarantees their order and input passthrough.

use crate::host::{DisplayHost, SurfaceId};
use std::fmt;
use tracing::{debug, trace};

/// Overlay layers. The derived ordering is the z-order, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OverlayKind {
    /// Video playback output
    Video,
    /// Freehand pen annotations
    Pen,
    /// Pointer highlight
    Pointer,
}

impl OverlayKind {
    /// All layers, bottom to top.
    pub const STACK: [OverlayKind; 3] = [OverlayKind::Video, OverlayKind::Pen, OverlayKind::Pointer];

    pub fn z_order(self) -> usize {
        match self {
            Self::Video => 0,
            Self::Pen => 1,
            Self::Pointer => 2,
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Pen => write!(f, "pen"),
            Self::Pointer => write!(f, "pointer"),
        }
    }
}

/// What a renderer gets to draw into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceHandle {
    pub kind: OverlayKind,
    pub id: SurfaceId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySurface {
    pub kind: OverlayKind,
    pub id: SurfaceId,
    /// Input falls through this surface. Set once the surface is realized
    /// and never cleared.
    pub passthrough: bool,
    pub realized: bool,
}

/// Owns the three overlay surfaces for the lifetime of the window.
#[derive(Debug, Clone)]
pub struct OverlayCompositor {
    surfaces: [OverlaySurface; 3],
}

impl OverlayCompositor {
    /// Add the video, pen and pointer overlays to `host`, in that order.
    pub fn build(host: &mut dyn DisplayHost) -> Self {
        let surfaces = OverlayKind::STACK.map(|kind| {
            let id = host.add_overlay(kind);
            debug!("Added {} overlay as {:?}", kind, id);
            OverlaySurface {
                kind,
                id,
                passthrough: false,
                realized: false,
            }
        });

        Self { surfaces }
    }

    /// Mark `kind` realized and make it transparent to input.
    pub fn on_realized(&mut self, kind: OverlayKind, host: &mut dyn DisplayHost) {
        let surface = &mut self.surfaces[kind.z_order()];
        surface.realized = true;
        if surface.passthrough {
            trace!("{} overlay realized again, already passthrough", kind);
            return;
        }

        host.set_input_passthrough(surface.id, true);
        surface.passthrough = true;
        debug!("{} overlay realized, input passthrough enabled", kind);
    }

    pub fn surface(&self, kind: OverlayKind) -> &OverlaySurface {
        &self.surfaces[kind.z_order()]
    }

    pub fn handle(&self, kind: OverlayKind) -> SurfaceHandle {
        let surface = self.surface(kind);
        SurfaceHandle {
            kind: surface.kind,
            id: surface.id,
        }
    }

    /// Surfaces in drawing order, bottom to top.
    pub fn stacking_order(&self) -> impl Iterator<Item = &OverlaySurface> {
        self.surfaces.iter()
    }

    /// Topmost surface that still captures pointer input, if any. `None`
    /// means input reaches the content beneath the overlays.
    pub fn input_target(&self) -> Option<OverlayKind> {
        self.surfaces
            .iter()
            .rev()
            .find(|surface| !surface.passthrough)
            .map(|surface| surface.kind)
    }
}
