//! # Channel flavors.
//!
//! Both flavors share the registry and dispatch engine from [`crate::core`]
//! and differ only in lifecycle:
//!
//! | Flavor                 | Payload             | Terminal state | Key types                                        |
//! |------------------------|---------------------|----------------|--------------------------------------------------|
//! | **Plain**              | [`Event`]           | none           | [`EventChannel`], [`EventChannelCore`]           |
//! | **Breakable**          | [`Notification`]    | broken         | [`SubscriberChannel`], [`SubscriberChannelCore`] |
//!
//! A producer embeds a core and implements the trait; the core itself also
//! implements the trait for producers that need no hooks.
//!
//! [`Event`]: crate::Event
//! [`Notification`]: crate::Notification

mod event_channel;
mod subscriber_channel;

pub use event_channel::{EventChannel, EventChannelCore};
pub use subscriber_channel::{SubscriberChannel, SubscriberChannelCore};
