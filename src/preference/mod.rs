//! Preference channels and the machinery that folds and observes them.

pub mod channel;
pub mod contribution;
pub mod keys;
pub mod subscription;

pub use channel::{Channel, ChannelId, Policy};
pub use contribution::{Contributions, Entry, Scope};
pub use keys::{BoundsAnchorType, FIRST_BOUNDS, LAST_BOUNDS, SIZE};
pub use subscription::{OnChange, Reach, Render, Subscription, SubscriptionState};
