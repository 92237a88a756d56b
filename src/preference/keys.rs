//! The channels every view tree understands.

use glam::Vec2;

use super::Channel;
use crate::geometry::Anchor;

/// Size reported by a node about itself. The first report in a subtree wins.
pub static SIZE: Channel<Vec2> = Channel::keep_first("view.size", zero_size);

/// Bounds of the first descendant that reports them.
pub static FIRST_BOUNDS: Channel<Option<Anchor>> = Channel::first_non_nil("view.bounds.first");

/// Bounds of the last descendant that reports them.
pub static LAST_BOUNDS: Channel<Option<Anchor>> = Channel::last_non_nil("view.bounds.last");

fn zero_size() -> Vec2 {
    Vec2::ZERO
}

/// Which bounds channel to use when several descendants report bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoundsAnchorType {
    First,
    Last,
}

impl BoundsAnchorType {
    pub fn channel(self) -> &'static Channel<Option<Anchor>> {
        match self {
            BoundsAnchorType::First => &FIRST_BOUNDS,
            BoundsAnchorType::Last => &LAST_BOUNDS,
        }
    }
}
