//! # Channel configuration.
//!
//! Provides [`ChannelConfig`], the settings shared by both channel flavors.
//!
//! Config is used in one way: a channel core is created with
//! `EventChannelCore::with_config(cfg)` / `SubscriberChannelCore::with_config(cfg)`;
//! `new()` on either core uses [`ChannelConfig::default`].
//!
//! ## Fields at a glance
//! - `name` → label attached to every log record of the channel
//! - `catch_panics` → subscriber panics become [`ChannelError::Panicked`](crate::ChannelError::Panicked)
//! - `reject_after_break` → breakable flavor only, see [`ChannelConfig::reject_after_break`]

use std::borrow::Cow;

/// Settings for a notification channel.
///
/// ## Notes
/// All fields are public for flexibility; [`ChannelConfig::named`] covers the
/// common case of only changing the label.
#[derive(Clone, Debug)]
pub struct ChannelConfig {
    /// Label used in log records (`channel = ...`).
    pub name: Cow<'static, str>,

    /// Isolate subscriber panics.
    ///
    /// - `true`: a panic inside a subscriber is caught and recorded as a
    ///   `Panicked` failure of that subscriber; the other subscribers still run.
    /// - `false`: the panic unwinds through `notify` into the producer.
    ///
    /// A pending completion returned unchanged by the single-subscriber fast path
    /// is never wrapped, so a panic while polling it always reaches the producer.
    pub catch_panics: bool,

    /// Reject notifications on a broken channel.
    ///
    /// - `false`: `notify` on a broken channel delivers to nobody and completes.
    /// - `true`: `notify` on a broken channel completes with `InvalidOperation`.
    ///
    /// Ignored by the plain (non-breakable) flavor.
    pub reject_after_break: bool,
}

impl ChannelConfig {
    /// Default configuration with a custom label.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for ChannelConfig {
    /// Default configuration:
    ///
    /// - `name = "channel"`
    /// - `catch_panics = true`
    /// - `reject_after_break = false` (no-op delivery after break)
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("channel"),
            catch_panics: true,
            reject_after_break: false,
        }
    }
}
