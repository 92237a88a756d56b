//! Observers of merged channel values.
//!
//! A subscription sits on a node and sees the merged value of that node's
//! subtree once per pass. [`OnChange`] runs a callback when the value changes,
//! [`Render`] derives dependent content from it.

use super::{Channel, ChannelId, Scope};
use crate::{geometry::Rect, tree::ViewNode};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Every pass so far produced the channel default.
    Pending,
    /// At least one pass produced something else.
    Delivered,
}

/// Which contributions a subscription sees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Reach {
    /// The subscribing node and all of its descendants.
    #[default]
    Subtree,
    /// Only what the subscribing node contributes itself.
    Own,
}

pub trait Subscription {
    fn channel(&self) -> ChannelId;

    fn reach(&self) -> Reach {
        Reach::Subtree
    }

    /// Hands the contributions within [`reach`](Self::reach) to the subscription.
    ///
    /// `frame` is the absolute frame of the subscribing node, if it has been
    /// laid out. Returns `true` when the subscription reacted.
    fn deliver(&mut self, scope: Scope<'_>, frame: Option<Rect>) -> bool;

    fn state(&self) -> SubscriptionState;

    /// Content derived from the merged value, for subscriptions that render.
    fn content(&self) -> Option<&ViewNode> {
        None
    }
}

/// Runs `action` with the merged value whenever it differs from the last one
/// handed out. The channel default is the initial baseline.
pub struct OnChange<V: 'static> {
    channel: &'static Channel<V>,
    last: V,
    state: SubscriptionState,
    reach: Reach,
    action: Box<dyn FnMut(&V)>,
}

impl<V: Clone + PartialEq + 'static> OnChange<V> {
    pub fn new(channel: &'static Channel<V>, action: impl FnMut(&V) + 'static) -> Self {
        Self {
            channel,
            last: channel.default_value(),
            state: SubscriptionState::Pending,
            reach: Reach::Subtree,
            action: Box::new(action),
        }
    }

    pub fn with_reach(mut self, reach: Reach) -> Self {
        self.reach = reach;
        self
    }
}

impl<V: Clone + PartialEq + 'static> Subscription for OnChange<V> {
    fn channel(&self) -> ChannelId {
        self.channel.id()
    }

    fn reach(&self) -> Reach {
        self.reach
    }

    fn deliver(&mut self, scope: Scope<'_>, _frame: Option<Rect>) -> bool {
        let value = scope.fold(self.channel);
        if value == self.last {
            return false;
        }

        log::trace!("{} changed", self.channel.name());
        (self.action)(&value);
        self.last = value;
        self.state = SubscriptionState::Delivered;
        true
    }

    fn state(&self) -> SubscriptionState {
        self.state
    }
}

type Builder<V> = Box<dyn Fn(&V, Rect) -> Option<ViewNode>>;

/// Builds dependent content from the merged value and the subscribing node's
/// frame. The content is rebuilt only when either of them changes; a node
/// without a frame gets no content.
pub struct Render<V: 'static> {
    channel: &'static Channel<V>,
    last: Option<(V, Option<Rect>)>,
    state: SubscriptionState,
    builder: Builder<V>,
    content: Option<ViewNode>,
}

impl<V: Clone + PartialEq + 'static> Render<V> {
    pub fn new(
        channel: &'static Channel<V>,
        builder: impl Fn(&V, Rect) -> Option<ViewNode> + 'static,
    ) -> Self {
        Self {
            channel,
            last: None,
            state: SubscriptionState::Pending,
            builder: Box::new(builder),
            content: None,
        }
    }
}

impl<V: Clone + PartialEq + 'static> Subscription for Render<V> {
    fn channel(&self) -> ChannelId {
        self.channel.id()
    }

    fn deliver(&mut self, scope: Scope<'_>, frame: Option<Rect>) -> bool {
        let value = scope.fold(self.channel);
        let key = (value, frame);
        if self.last.as_ref() == Some(&key) {
            return false;
        }

        let (value, frame) = key;
        if value != self.channel.default_value() {
            self.state = SubscriptionState::Delivered;
        }
        self.content = frame.and_then(|frame| (self.builder)(&value, frame));
        self.last = Some((value, frame));
        true
    }

    fn state(&self) -> SubscriptionState {
        self.state
    }

    fn content(&self) -> Option<&ViewNode> {
        self.content.as_ref()
    }
}
