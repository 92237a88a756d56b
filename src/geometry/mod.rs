pub mod anchor;
pub mod rect;

pub use anchor::Anchor;
pub use rect::Rect;
