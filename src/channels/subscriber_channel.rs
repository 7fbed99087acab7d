//! # Breakable notification channel
//!
//! [`SubscriberChannel`] delivers data events **or** one terminal failure.
//!
//! ## Lifecycle
//! ```text
//!   Live ──notify(Failure)──► Broken   (one-way)
//!
//! notify(Failure):
//!   1. broken := true
//!   2. take every handler out of the list     (on_remove_last_handler if any)
//!   3. dispatch the failure to the taken list (each handler exactly once)
//! ```
//!
//! ## Rules
//! - `add_handler` on a broken channel fails with `InvalidOperation` and the
//!   handler is not registered.
//! - `remove_handler` is always allowed (no-op once broken).
//! - `notify` on a broken channel delivers to nobody; with
//!   [`ChannelConfig::reject_after_break`] it fails with `InvalidOperation` instead.
//! - A failure breaks the channel even if nobody is subscribed.

use std::cell::Cell;

use crate::config::ChannelConfig;
use crate::core::dispatch::dispatch;
use crate::core::registry::{Registry, Transition};
use crate::core::Outcome;
use crate::error::{BoxError, ChannelError};
use crate::events::Notification;
use crate::subscribers::Handler;

/// State of a breakable channel: subscriber list, broken flag, configuration.
pub struct SubscriberChannelCore<T> {
    registry: Registry<Notification<T>>,
    broken: Cell<bool>,
    config: ChannelConfig,
}

impl<T> SubscriberChannelCore<T> {
    /// Creates a live, empty channel with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ChannelConfig::default())
    }

    /// Creates a live, empty channel.
    pub fn with_config(config: ChannelConfig) -> Self {
        Self {
            registry: Registry::new(),
            broken: Cell::new(false),
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

impl<T> Default for SubscriberChannelCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SubscriberChannelCore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberChannelCore")
            .field("name", &self.config.name)
            .field("subscribers", &self.registry.len())
            .field("broken", &self.broken.get())
            .finish()
    }
}

/// Notification channel that can break permanently.
///
/// Implementors provide [`SubscriberChannel::subscriber_channel`]; hooks default to no-ops.
pub trait SubscriberChannel<T> {
    /// The embedded channel state.
    fn subscriber_channel(&self) -> &SubscriberChannelCore<T>;

    /// Called right after the first handler was registered.
    fn on_add_first_handler(&self) {}

    /// Called right after the last handler was removed, including when the
    /// channel breaks with handlers still registered.
    fn on_remove_last_handler(&self) {}

    /// Registers `handler`.
    ///
    /// # Errors
    /// [`ChannelError::InvalidOperation`] if the channel is broken.
    fn add_handler(&self, handler: Handler<Notification<T>>) -> Result<(), ChannelError> {
        self.verify_live()?;
        let core = self.subscriber_channel();
        if core.registry.add(handler) == Transition::BecameActive {
            tracing::debug!(channel = %core.config.name, "first subscriber added");
            self.on_add_first_handler();
        }
        Ok(())
    }

    /// Removes the first registration of `handler`; unknown handlers are ignored.
    fn remove_handler(&self, handler: &Handler<Notification<T>>) {
        let core = self.subscriber_channel();
        if core.registry.remove(handler) == Transition::BecameIdle {
            tracing::debug!(channel = %core.config.name, "last subscriber removed");
            self.on_remove_last_handler();
        }
    }

    /// Returns `true` once a failure has been delivered.
    fn is_broken(&self) -> bool {
        self.subscriber_channel().broken.get()
    }

    /// Fails if the channel is broken.
    ///
    /// # Errors
    /// [`ChannelError::InvalidOperation`] if the channel is broken.
    fn verify_live(&self) -> Result<(), ChannelError> {
        let core = self.subscriber_channel();
        if core.broken.get() {
            tracing::warn!(channel = %core.config.name, "operation on broken channel");
            return Err(ChannelError::invalid_operation("wrong operation on broken channel"));
        }
        Ok(())
    }

    /// Returns `true` if at least one handler is registered.
    fn has_subscribers(&self) -> bool {
        !self.subscriber_channel().registry.is_empty()
    }

    /// Delivers `notification` to every registered handler.
    ///
    /// A [`Notification::Failure`] breaks the channel first, then reaches every
    /// handler that was registered at that moment.
    fn notify(&self, notification: Notification<T>) -> Outcome {
        let core = self.subscriber_channel();
        if core.broken.get() && core.config.reject_after_break {
            tracing::warn!(channel = %core.config.name, "notify on broken channel rejected");
            return Outcome::failed(ChannelError::invalid_operation(
                "notify on broken channel",
            ));
        }

        let snapshot = if notification.is_failure() {
            core.broken.set(true);
            let (snapshot, transition) = core.registry.take_all();
            tracing::debug!(
                channel = %core.config.name,
                subscribers = snapshot.len(),
                "channel broken"
            );
            if transition == Transition::BecameIdle {
                self.on_remove_last_handler();
            }
            snapshot
        } else {
            core.registry.snapshot()
        };

        dispatch(snapshot, &notification, &core.config)
    }

    /// Shorthand for `notify(Notification::data(data))`.
    fn notify_data(&self, data: T) -> Outcome {
        self.notify(Notification::data(data))
    }

    /// Shorthand for `notify(Notification::failure(error))`.
    fn notify_failure(&self, error: impl Into<BoxError>) -> Outcome
    where
        Self: Sized,
    {
        self.notify(Notification::failure(error))
    }
}

impl<T> SubscriberChannel<T> for SubscriberChannelCore<T> {
    fn subscriber_channel(&self) -> &SubscriberChannelCore<T> {
        self
    }
}
