use std::{any::Any, fmt, ops::Range};

use super::{Channel, ChannelId};

/// One value pushed into one channel during a pass.
pub struct Entry {
    channel: ChannelId,
    value: Box<dyn Any>,
}

impl Entry {
    pub fn new<V: 'static>(channel: &'static Channel<V>, value: V) -> Self {
        Self {
            channel: channel.id(),
            value: Box::new(value),
        }
    }

    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    fn value<V: 'static>(&self, channel: ChannelId) -> Option<&V> {
        if self.channel != channel {
            return None;
        }
        self.value.downcast_ref::<V>()
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entry").field(&self.channel).finish()
    }
}

/// Every contribution of one pass, in traversal order.
#[derive(Debug, Default)]
pub struct Contributions {
    entries: Vec<Entry>,
}

impl Contributions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View over the entries in `range`, typically one subtree.
    pub fn scope(&self, range: Range<usize>) -> Scope<'_> {
        Scope {
            entries: &self.entries[range],
        }
    }

    pub fn all(&self) -> Scope<'_> {
        self.scope(0..self.entries.len())
    }
}

/// A contiguous run of entries that one subscription point can see.
#[derive(Debug, Copy, Clone)]
pub struct Scope<'a> {
    entries: &'a [Entry],
}

impl<'a> Scope<'a> {
    /// Contributions to `channel`, other channels skipped, order kept.
    pub fn values<V: 'static>(&self, channel: &'static Channel<V>) -> impl Iterator<Item = &'a V> {
        let id = channel.id();
        self.entries.iter().filter_map(move |e| e.value::<V>(id))
    }

    pub fn count<V: 'static>(&self, channel: &'static Channel<V>) -> usize {
        self.values(channel).count()
    }

    pub fn fold<V: Clone + 'static>(&self, channel: &'static Channel<V>) -> V {
        channel.fold(self.values(channel).cloned())
    }
}
