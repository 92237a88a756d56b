//! Deferred geometric references.
//!
//! An [`Anchor`] is captured while a contributing node is evaluated and only
//! turned into concrete bounds later, by whoever observes it, in the coordinate
//! space of the observer.

use super::Rect;

/// Bounds of a node captured in root coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Anchor {
    bounds: Rect,
}

impl Anchor {
    pub fn capture(bounds: Rect) -> Self {
        Self { bounds }
    }

    /// Resolves the anchor against `space`, the absolute frame of the node
    /// that wants to use it. The returned rect is relative to `space.origin`.
    pub fn resolve(&self, space: Rect) -> Rect {
        self.bounds.translate(-space.origin)
    }

    /// Bounds in root coordinates.
    pub fn absolute(&self) -> Rect {
        self.bounds
    }
}
