//! # Payloads delivered to subscribers.
//!
//! - [`Event`] a data event, the only payload of the plain channel flavor.
//! - [`Notification`] the payload of the breakable flavor: a data event
//!   **or** the single terminal failure of the channel.
//!
//! ## Example
//! ```rust
//! use fanout_channel::{Event, Notification};
//!
//! let ev = Event::new("tick");
//! assert_eq!(ev.data, "tick");
//!
//! let data: Notification<&str> = Notification::from(ev);
//! assert!(data.as_event().is_some());
//!
//! let failure: Notification<&str> = Notification::failure("link lost");
//! assert!(failure.is_failure());
//! assert_eq!(failure.as_failure().map(ToString::to_string).as_deref(), Some("link lost"));
//! ```

use crate::error::BoxError;

/// A data event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<T> {
    /// Event payload.
    pub data: T,
}

impl<T> Event<T> {
    /// Wraps a payload.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// What a breakable channel delivers: data, or its terminal failure.
///
/// Delivering [`Notification::Failure`] breaks the channel permanently.
#[derive(Debug)]
pub enum Notification<T> {
    /// Ordinary data event.
    Event(Event<T>),
    /// Terminal failure of the producer.
    Failure(BoxError),
}

impl<T> Notification<T> {
    /// Data notification.
    pub fn data(data: T) -> Self {
        Notification::Event(Event::new(data))
    }

    /// Failure notification.
    pub fn failure(error: impl Into<BoxError>) -> Self {
        Notification::Failure(error.into())
    }

    /// Returns `true` for [`Notification::Failure`].
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Notification::Failure(_))
    }

    /// The data event, if this is one.
    pub fn as_event(&self) -> Option<&Event<T>> {
        match self {
            Notification::Event(ev) => Some(ev),
            Notification::Failure(_) => None,
        }
    }

    /// The failure, if this is one.
    pub fn as_failure(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Notification::Event(_) => None,
            Notification::Failure(err) => Some(err.as_ref()),
        }
    }
}

impl<T> From<Event<T>> for Notification<T> {
    fn from(ev: Event<T>) -> Self {
        Notification::Event(ev)
    }
}
