//! One update pass over a view tree.
//!
//! A pass runs in two phases. [`collect`] walks the tree in a fixed order,
//! asks every node for its contributions and remembers which contiguous run of
//! them belongs to each subscribing node's subtree. [`run`] then folds that run
//! once per subscription, compares it with what the subscription saw last and
//! notifies it when something changed.
//!
//! Which order counts as "first" and "last" is decided here and nowhere else.

use std::{collections::HashMap, ops::Range};

use glam::Vec2;
use serde::Deserialize;

use crate::{
    geometry::Rect,
    preference::{Contributions, Reach},
    tree::{Geometry, NodeId, ViewNode},
};

/// Order in which contributions are collected.
///
/// Children are always visited in declaration order. Both orders keep every
/// subtree's contributions contiguous.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// A node's own contributions come before its children's.
    #[default]
    PreOrder,
    /// A node's own contributions come after its children's.
    PostOrder,
}

#[derive(Debug, Clone)]
struct Point {
    subtree: Range<usize>,
    own: Range<usize>,
    frame: Option<Rect>,
}

/// Output of the collection phase.
#[derive(Debug, Default)]
pub struct Collection {
    contributions: Contributions,
    points: HashMap<NodeId, Point>,
}

impl Collection {
    pub fn contributions(&self) -> &Contributions {
        &self.contributions
    }

    /// Number of nodes that carry at least one subscription.
    pub fn subscription_points(&self) -> usize {
        self.points.len()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PassReport {
    pub contributions: usize,
    pub subscription_points: usize,
    pub notifications: usize,
}

pub fn collect(root: &ViewNode, traversal: Traversal) -> Collection {
    let mut out = Collection::default();
    visit(root, Some(Vec2::ZERO), traversal, &mut out);
    out
}

fn visit(node: &ViewNode, parent_origin: Option<Vec2>, traversal: Traversal, out: &mut Collection) {
    let start = out.contributions.len();
    let absolute = match (parent_origin, node.frame()) {
        (Some(origin), Some(frame)) => Some(frame.translate(origin)),
        _ => None,
    };
    let geometry = absolute.and_then(Geometry::measure);

    let mut own = start..start;

    if traversal == Traversal::PreOrder {
        node.evaluate(geometry.as_ref(), &mut out.contributions);
        own = start..out.contributions.len();
    }
    for child in node.children() {
        visit(child, absolute.map(|r| r.origin), traversal, out);
    }
    if traversal == Traversal::PostOrder {
        let before = out.contributions.len();
        node.evaluate(geometry.as_ref(), &mut out.contributions);
        own = before..out.contributions.len();
    }

    if node.has_subscriptions() {
        out.points.insert(
            node.id(),
            Point {
                subtree: start..out.contributions.len(),
                own,
                frame: absolute,
            },
        );
    }
}

/// Runs a full pass and returns what happened.
pub fn run(root: &mut ViewNode, traversal: Traversal) -> PassReport {
    let collection = collect(root, traversal);
    let notifications = deliver(root, &collection);

    PassReport {
        contributions: collection.contributions.len(),
        subscription_points: collection.subscription_points(),
        notifications,
    }
}

fn deliver(node: &mut ViewNode, collection: &Collection) -> usize {
    let mut notified = 0;

    if let Some(point) = collection.points.get(&node.id()) {
        let id = node.id();
        for sub in node.subscriptions_mut() {
            let range = match sub.reach() {
                Reach::Subtree => point.subtree.clone(),
                Reach::Own => point.own.clone(),
            };
            let scope = collection.contributions.scope(range);
            if sub.deliver(scope, point.frame) {
                log::trace!("notified {:?} on {:?}", sub.channel(), id);
                notified += 1;
            }
        }
    }

    for child in node.children_mut() {
        notified += deliver(child, collection);
    }
    notified
}
