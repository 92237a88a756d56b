//! The laid-out view tree that preferences travel through.

pub mod modifiers;
pub mod node;

pub use node::{Geometry, NodeId, ViewNode};
