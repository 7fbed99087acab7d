//! # Object-style subscriber trait
//!
//! `Subscribe` is the extension point for subscribers that carry their own
//! state and name. A subscriber is turned into a [`Handler`](crate::Handler)
//! with [`Handler::from_subscriber`](crate::Handler::from_subscriber) and then
//! registered like any closure.
//!
//! ## Contract
//! - `on_event` runs on the producer's call stack, inside `notify`.
//! - Returning [`Outcome::Pending`] defers the result; the producer observes it
//!   when it awaits the dispatch outcome.
//! - Anything needed after the first `.await` must be copied out of `event`:
//!   the reference is only valid for the synchronous part of the call.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use fanout_channel::{Event, Outcome, Subscribe};
//!
//! #[derive(Default)]
//! struct Counter(Cell<usize>);
//!
//! impl Subscribe<Event<u64>> for Counter {
//!     fn on_event(&self, _event: &Event<u64>) -> Outcome {
//!         self.0.set(self.0.get() + 1);
//!         Outcome::done()
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//! ```

use crate::core::Outcome;

/// Contract for stateful subscribers of payload `A`.
pub trait Subscribe<A>: 'static {
    /// Handle a single payload.
    ///
    /// # Parameters
    /// - `event`: Reference to the payload (does not transfer ownership)
    fn on_event(&self, event: &A) -> Outcome;

    /// Human-readable name (for logs and panic reports).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
