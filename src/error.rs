//! Error types used by notification channels and their subscribers.
//!
//! This module defines one error enum, [`ChannelError`], covering:
//!
//! - failures reported by subscribers (`Failed`, `Cancelled`, `Panicked`);
//! - the multi-failure outcome of a dispatch (`Aggregate`);
//! - lifecycle violations on a broken channel (`InvalidOperation`).
//!
//! Like the rest of the crate it provides helper methods (`as_label`, `as_message`)
//! for logging, plus the kind check [`ChannelError::is_cancelled`] that drives
//! the aggregation rule of a dispatch.

use std::borrow::Cow;

use thiserror::Error;

/// Boxed error accepted from subscribers and carried by failure notifications.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors produced by a dispatch or by a channel's lifecycle guard.
///
/// Subscribers report their own failures with [`ChannelError::failed`] (or
/// [`ChannelError::cancelled`] when the work was deliberately abandoned).
/// The channel never drops one of them: they reach the producer either directly
/// or wrapped in [`ChannelError::Aggregate`].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ChannelError {
    /// A subscriber failed; displays the underlying error message.
    #[error("{0}")]
    Failed(#[source] BoxError),

    /// The operation was cancelled rather than having errored.
    #[error("cancelled: {reason}")]
    Cancelled {
        /// Why the operation was cancelled.
        reason: String,
    },

    /// Two or more subscriber failures (or one that is not a cancellation)
    /// collected during one dispatch, in recording order.
    #[error("{} subscriber(s) failed", .errors.len())]
    Aggregate {
        /// Inner failures, synchronous ones first in invocation order,
        /// then asynchronous ones in the order they settled.
        errors: Vec<ChannelError>,
    },

    /// The operation is not allowed in the channel's current state.
    #[error("invalid operation: {reason}")]
    InvalidOperation {
        /// Human-readable description of the violated rule.
        reason: Cow<'static, str>,
    },

    /// A subscriber panicked while handling an event.
    #[error("subscriber '{subscriber}' panicked: {info}")]
    Panicked {
        /// Name of the subscriber that panicked.
        subscriber: Cow<'static, str>,
        /// Panic payload rendered as text.
        info: String,
    },
}

impl ChannelError {
    /// Wraps any error (or message) reported by a subscriber.
    ///
    /// # Example
    /// ```
    /// use fanout_channel::ChannelError;
    ///
    /// let err = ChannelError::failed("disk full");
    /// assert_eq!(err.to_string(), "disk full");
    /// assert_eq!(err.as_label(), "subscriber_failed");
    /// ```
    pub fn failed(error: impl Into<BoxError>) -> Self {
        ChannelError::Failed(error.into())
    }

    /// Creates a cancellation error.
    pub fn cancelled(reason: impl Into<String>) -> Self {
        ChannelError::Cancelled {
            reason: reason.into(),
        }
    }

    /// Wraps an ordered collection of failures.
    pub fn aggregate(errors: Vec<ChannelError>) -> Self {
        ChannelError::Aggregate { errors }
    }

    /// Creates a lifecycle-guard error.
    pub fn invalid_operation(reason: impl Into<Cow<'static, str>>) -> Self {
        ChannelError::InvalidOperation {
            reason: reason.into(),
        }
    }

    /// Returns `true` for the cancellation kind.
    ///
    /// An aggregate is never a cancellation, even if it only contains cancellations.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ChannelError::Cancelled { .. })
    }

    /// Inner failures of an aggregate, `None` for every other kind.
    pub fn inner_errors(&self) -> Option<&[ChannelError]> {
        match self {
            ChannelError::Aggregate { errors } => Some(errors),
            _ => None,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use fanout_channel::ChannelError;
    ///
    /// let err = ChannelError::cancelled("shutdown");
    /// assert_eq!(err.as_label(), "subscriber_cancelled");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ChannelError::Failed(_) => "subscriber_failed",
            ChannelError::Cancelled { .. } => "subscriber_cancelled",
            ChannelError::Aggregate { .. } => "dispatch_aggregate",
            ChannelError::InvalidOperation { .. } => "channel_invalid_operation",
            ChannelError::Panicked { .. } => "subscriber_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ChannelError::Failed(error) => format!("error: {error}"),
            ChannelError::Cancelled { reason } => format!("cancelled: {reason}"),
            ChannelError::Aggregate { errors } => {
                let inner: Vec<String> = errors.iter().map(ChannelError::as_message).collect();
                format!("aggregate of {}: [{}]", errors.len(), inner.join("; "))
            }
            ChannelError::InvalidOperation { reason } => format!("invalid operation: {reason}"),
            ChannelError::Panicked { subscriber, info } => {
                format!("panic in '{subscriber}': {info}")
            }
        }
    }

    /// Builds a [`ChannelError::Panicked`] from a caught panic payload.
    pub(crate) fn from_panic(
        subscriber: Cow<'static, str>,
        payload: Box<dyn std::any::Any + Send>,
    ) -> Self {
        let info = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "unknown panic".to_string()
        };
        ChannelError::Panicked { subscriber, info }
    }
}
