//! Shorthands for the common geometry preferences.
//!
//! Naming follows who reports: `report_*` when a single descendant reports
//! its bounds, `report(..)` with a [`BoundsAnchorType`] when several do and
//! the ancestor has to say whether it wants the first or the last one.

use glam::Vec2;

use super::ViewNode;
use crate::{
    geometry::{Anchor, Rect},
    preference::{BoundsAnchorType, FIRST_BOUNDS, SIZE},
};

impl ViewNode {
    /// Reports the node's own size and runs `action` whenever it changes.
    /// Sizes reported inside the subtree are not considered.
    pub fn act_on_self_size(self, action: impl FnMut(&Vec2) + 'static) -> Self {
        self.geometry_preference(&SIZE, |g| g.size)
            .on_own_change(&SIZE, action)
    }

    /// Reports this node's bounds when it is the only reporter in the subtree.
    pub fn report_bounds(self) -> Self {
        self.report(BoundsAnchorType::First)
    }

    /// Reports this node's bounds to the channel chosen by `anchor_type`.
    pub fn report(self, anchor_type: BoundsAnchorType) -> Self {
        self.anchor_preference(anchor_type.channel(), Some)
    }

    /// Renders `content` from the bounds reported by the single reporting
    /// descendant, resolved into this node's coordinate space.
    pub fn background_by_bounds(self, content: impl Fn(Rect) -> ViewNode + 'static) -> Self {
        self.render(&FIRST_BOUNDS, resolved(content))
    }

    /// Like [`background_by_bounds`](Self::background_by_bounds) when several
    /// descendants report bounds.
    pub fn background_bounds(
        self,
        anchor_type: BoundsAnchorType,
        content: impl Fn(Rect) -> ViewNode + 'static,
    ) -> Self {
        self.render(anchor_type.channel(), resolved(content))
    }

    /// Runs `action` with the reported anchor whenever it changes. Passes that
    /// lose the anchor do not call `action`.
    pub fn act_on_bounds(
        self,
        anchor_type: BoundsAnchorType,
        mut action: impl FnMut(Anchor) + 'static,
    ) -> Self {
        self.on_change(anchor_type.channel(), move |anchor: &Option<Anchor>| {
            if let Some(anchor) = *anchor {
                action(anchor);
            }
        })
    }
}

fn resolved(
    content: impl Fn(Rect) -> ViewNode + 'static,
) -> impl Fn(&Option<Anchor>, Rect) -> Option<ViewNode> + 'static {
    move |anchor: &Option<Anchor>, frame: Rect| (*anchor).map(|a| content(a.resolve(frame)))
}
