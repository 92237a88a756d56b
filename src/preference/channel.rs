use std::fmt;

/// How contributions to a channel are combined.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Policy {
    /// The first contribution wins, whatever it is.
    KeepFirst,
    /// The first present (`Some`) contribution wins; `None` is skipped.
    FirstNonNil,
    /// Every present contribution overwrites the previous one; `None` is skipped.
    LastNonNil,
    /// A reduce function supplied by the channel's author.
    Custom,
}

/// Stable identity of a channel definition.
///
/// Two statics are two channels even when they share a name and a value
/// type; the name is only carried for logs.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId {
    addr: usize,
    name: &'static str,
}

impl ChannelId {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChannelId({})", self.name)
    }
}

/// A named, typed aggregation slot.
///
/// Channels are meant to live in `static` items and are never mutated. The
/// value a subscriber sees for one pass is [`Channel::fold`] applied to the
/// contributions of its subtree in traversal order.
pub struct Channel<V> {
    name: &'static str,
    policy: Policy,
    default: fn() -> V,
    reduce: fn(&mut V, V),
}

impl<V> Channel<V> {
    pub const fn keep_first(name: &'static str, default: fn() -> V) -> Self {
        Self {
            name,
            policy: Policy::KeepFirst,
            default,
            reduce: keep_first::<V>,
        }
    }

    pub const fn custom(name: &'static str, default: fn() -> V, reduce: fn(&mut V, V)) -> Self {
        Self {
            name,
            policy: Policy::Custom,
            default,
            reduce,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn default_value(&self) -> V {
        (self.default)()
    }

    /// Folds an ordered sequence of contributions.
    ///
    /// With no contributions the result is the default. Otherwise the first
    /// contribution replaces the default seed and every later one is merged
    /// into the accumulator with the channel's reduce function.
    pub fn fold<I>(&self, contributions: I) -> V
    where
        I: IntoIterator<Item = V>,
    {
        let mut contributions = contributions.into_iter();
        let Some(mut acc) = contributions.next() else {
            return self.default_value();
        };
        for next in contributions {
            (self.reduce)(&mut acc, next);
        }
        acc
    }

    /// Identity derived from where the channel lives, hence `&'static`.
    pub fn id(&'static self) -> ChannelId {
        ChannelId {
            addr: self as *const Self as usize,
            name: self.name,
        }
    }
}

impl<T> Channel<Option<T>> {
    pub const fn first_non_nil(name: &'static str) -> Self {
        Self {
            name,
            policy: Policy::FirstNonNil,
            default: none::<T>,
            reduce: first_non_nil::<T>,
        }
    }

    pub const fn last_non_nil(name: &'static str) -> Self {
        Self {
            name,
            policy: Policy::LastNonNil,
            default: none::<T>,
            reduce: last_non_nil::<T>,
        }
    }
}

impl<V> fmt::Debug for Channel<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .finish()
    }
}

fn none<T>() -> Option<T> {
    None
}

fn keep_first<V>(_acc: &mut V, _next: V) {}

fn first_non_nil<T>(acc: &mut Option<T>, next: Option<T>) {
    if acc.is_none() {
        *acc = next;
    }
}

fn last_non_nil<T>(acc: &mut Option<T>, next: Option<T>) {
    if next.is_some() {
        *acc = next;
    }
}
