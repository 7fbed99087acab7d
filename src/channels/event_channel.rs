//! # Plain notification channel
//!
//! [`EventChannel`] fans data events out to registered handlers. It has no
//! terminal state: handlers can be added and removed at any time.
//!
//! ## Composition
//! A producer embeds an [`EventChannelCore`] and implements [`EventChannel`]
//! by returning it; every other method is provided. Override
//! [`EventChannel::on_add_first_handler`] / [`EventChannel::on_remove_last_handler`]
//! to start producing only while somebody is listening.
//!
//! ```rust
//! use std::cell::Cell;
//! use fanout_channel::{Event, EventChannel, EventChannelCore, Handler, Outcome};
//!
//! #[derive(Default)]
//! struct Clock {
//!     channel: EventChannelCore<u64>,
//!     running: Cell<bool>,
//! }
//!
//! impl EventChannel<u64> for Clock {
//!     fn event_channel(&self) -> &EventChannelCore<u64> { &self.channel }
//!     fn on_add_first_handler(&self) { self.running.set(true); }
//!     fn on_remove_last_handler(&self) { self.running.set(false); }
//! }
//!
//! impl Clock {
//!     fn tick(&self, now: u64) -> Outcome {
//!         self.notify(Event::new(now))
//!     }
//! }
//!
//! let clock = Clock::default();
//! let h = Handler::sync(|_ev: &Event<u64>| Ok(()));
//! clock.add_handler(h.clone());
//! assert!(clock.running.get());
//! assert!(clock.tick(1).into_complete().is_some_and(|r| r.is_ok()));
//! clock.remove_handler(&h);
//! assert!(!clock.running.get());
//! ```
//!
//! ## Rules
//! - `notify` dispatches to a snapshot; handlers added or removed during a
//!   dispatch (including by the handlers themselves) take effect next time.
//! - A producer must not rely on `notify` serializing overlapping dispatches:
//!   calling it again before a previous pending outcome settled lets the two
//!   dispatches interleave.

use crate::config::ChannelConfig;
use crate::core::dispatch::dispatch;
use crate::core::registry::{Registry, Transition};
use crate::core::Outcome;
use crate::events::Event;
use crate::subscribers::Handler;

/// State of a plain channel: subscriber list and configuration.
pub struct EventChannelCore<T> {
    registry: Registry<Event<T>>,
    config: ChannelConfig,
}

impl<T> EventChannelCore<T> {
    /// Creates an empty channel with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ChannelConfig::default())
    }

    /// Creates an empty channel.
    pub fn with_config(config: ChannelConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// Channel configuration.
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Number of registrations (duplicates counted).
    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl<T> Default for EventChannelCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventChannelCore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventChannelCore")
            .field("name", &self.config.name)
            .field("subscribers", &self.registry.len())
            .finish()
    }
}

/// Data-only notification channel.
///
/// Implementors provide [`EventChannel::event_channel`]; hooks default to no-ops.
pub trait EventChannel<T> {
    /// The embedded channel state.
    fn event_channel(&self) -> &EventChannelCore<T>;

    /// Called right after the first handler was registered.
    fn on_add_first_handler(&self) {}

    /// Called right after the last handler was removed.
    fn on_remove_last_handler(&self) {}

    /// Registers `handler`; the same handler may be registered several times.
    fn add_handler(&self, handler: Handler<Event<T>>) {
        let core = self.event_channel();
        if core.registry.add(handler) == Transition::BecameActive {
            tracing::debug!(channel = %core.config.name, "first subscriber added");
            self.on_add_first_handler();
        }
    }

    /// Removes the first registration of `handler`; unknown handlers are ignored.
    fn remove_handler(&self, handler: &Handler<Event<T>>) {
        let core = self.event_channel();
        if core.registry.remove(handler) == Transition::BecameIdle {
            tracing::debug!(channel = %core.config.name, "last subscriber removed");
            self.on_remove_last_handler();
        }
    }

    /// Returns `true` if at least one handler is registered.
    ///
    /// Producers may check it before building an expensive event.
    fn has_subscribers(&self) -> bool {
        !self.event_channel().registry.is_empty()
    }

    /// Delivers `event` to every registered handler.
    ///
    /// Producer-facing. With one handler, its own outcome is returned as-is;
    /// with more, every failure is collected (see the crate-level docs).
    fn notify(&self, event: Event<T>) -> Outcome {
        let core = self.event_channel();
        dispatch(core.registry.snapshot(), &event, &core.config)
    }
}

impl<T> EventChannel<T> for EventChannelCore<T> {
    fn event_channel(&self) -> &EventChannelCore<T> {
        self
    }
}
