use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use glam::Vec2;

use crate::{
    geometry::{Anchor, Rect},
    preference::{
        Channel, Contributions, Entry, OnChange, Reach, Render, Subscription,
        subscription::SubscriptionState,
    },
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);
impl NodeId {
    pub fn new() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// What a node knows about its own rendered box during a pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    pub size: Vec2,
    pub anchor: Anchor,
}

impl Geometry {
    /// `None` when `absolute` is not a usable frame.
    pub fn measure(absolute: Rect) -> Option<Self> {
        if !absolute.is_measurable() {
            return None;
        }
        Some(Self {
            size: absolute.size,
            anchor: Anchor::capture(absolute),
        })
    }
}

type Producer = Box<dyn Fn(Option<&Geometry>) -> Option<Entry>>;

/// A node of the host tree.
///
/// `frame` is assigned by whatever performs layout and is expressed in the
/// parent's coordinate space. A node without a frame, or below one, cannot
/// measure itself and abstains from geometry-derived preferences.
pub struct ViewNode {
    id: NodeId,
    frame: Option<Rect>,
    contributions: Vec<Producer>,
    subscriptions: Vec<Box<dyn Subscription>>,
    children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame: Some(frame),
            ..Self::unmeasured()
        }
    }

    /// A node that has not been laid out yet.
    pub fn unmeasured() -> Self {
        Self {
            id: NodeId::new(),
            frame: None,
            contributions: Vec::new(),
            subscriptions: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }

    pub fn invalidate_frame(&mut self) {
        self.frame = None;
    }

    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: ViewNode) {
        self.children.push(child);
    }

    pub fn remove_child(&mut self, id: NodeId) -> Option<ViewNode> {
        let pos = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(pos))
    }

    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [ViewNode] {
        &mut self.children
    }

    /// Depth-first search for `id` in this subtree.
    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut ViewNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Contributes a fixed value to `channel` on every pass.
    pub fn preference<V: Clone + 'static>(mut self, channel: &'static Channel<V>, value: V) -> Self {
        self.contributions
            .push(Box::new(move |_: Option<&Geometry>| {
                Some(Entry::new(channel, value.clone()))
            }));
        self
    }

    /// Contributes a value derived from the node's measured geometry.
    pub fn geometry_preference<V: 'static>(
        mut self,
        channel: &'static Channel<V>,
        value: impl Fn(&Geometry) -> V + 'static,
    ) -> Self {
        self.contributions.push(Box::new(move |geometry: Option<&Geometry>| {
            geometry.map(|g| Entry::new(channel, value(g)))
        }));
        self
    }

    /// Contributes a value derived from the node's bounds anchor.
    pub fn anchor_preference<V: 'static>(
        self,
        channel: &'static Channel<V>,
        value: impl Fn(Anchor) -> V + 'static,
    ) -> Self {
        self.geometry_preference(channel, move |g| value(g.anchor))
    }

    pub fn subscribe(mut self, subscription: impl Subscription + 'static) -> Self {
        self.subscriptions.push(Box::new(subscription));
        self
    }

    /// Calls `action` whenever the merged value of `channel` over this subtree
    /// changes.
    pub fn on_change<V: Clone + PartialEq + 'static>(
        self,
        channel: &'static Channel<V>,
        action: impl FnMut(&V) + 'static,
    ) -> Self {
        self.subscribe(OnChange::new(channel, action))
    }

    /// Like [`on_change`](Self::on_change), but only this node's own
    /// contributions are merged; descendants are ignored whatever the
    /// traversal order.
    pub fn on_own_change<V: Clone + PartialEq + 'static>(
        self,
        channel: &'static Channel<V>,
        action: impl FnMut(&V) + 'static,
    ) -> Self {
        self.subscribe(OnChange::new(channel, action).with_reach(Reach::Own))
    }

    /// Derives dependent content from the merged value of `channel` and this
    /// node's absolute frame.
    pub fn render<V: Clone + PartialEq + 'static>(
        self,
        channel: &'static Channel<V>,
        builder: impl Fn(&V, Rect) -> Option<ViewNode> + 'static,
    ) -> Self {
        self.subscribe(Render::new(channel, builder))
    }

    pub fn has_subscriptions(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn subscription_states(&self) -> impl Iterator<Item = SubscriptionState> + '_ {
        self.subscriptions.iter().map(|s| s.state())
    }

    /// Content produced by this node's rendering subscriptions. It is not part
    /// of the tree's traversal.
    pub fn dependent_content(&self) -> impl Iterator<Item = &ViewNode> + '_ {
        self.subscriptions.iter().filter_map(|s| s.content())
    }

    pub(crate) fn subscriptions_mut(&mut self) -> &mut [Box<dyn Subscription>] {
        &mut self.subscriptions
    }

    pub(crate) fn evaluate(&self, geometry: Option<&Geometry>, out: &mut Contributions) {
        for produce in &self.contributions {
            if let Some(entry) = produce(geometry) {
                out.push(entry);
            }
        }
    }
}

impl fmt::Debug for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewNode")
            .field("id", &self.id)
            .field("frame", &self.frame)
            .field("contributions", &self.contributions.len())
            .field("subscriptions", &self.subscriptions.len())
            .field("children", &self.children)
            .finish()
    }
}
