pub mod geometry;
pub mod host;
pub mod pass;
pub mod preference;
pub mod tree;

pub use geometry::{Anchor, Rect};
pub use host::{Host, HostConfig};
pub use pass::{PassReport, Traversal};
pub use preference::{
    BoundsAnchorType, Channel, ChannelId, FIRST_BOUNDS, LAST_BOUNDS, Policy, SIZE,
};
pub use tree::{Geometry, NodeId, ViewNode};

pub use glam::{Vec2, vec2};

pub type Result<T> = anyhow::Result<T>;

pub fn init_logging() {
    env_logger::init();
}
