//! # Subscribers of a notification channel.
//!
//! A subscriber is registered as a [`Handler`]: a shared, named callback
//! `Fn(&A) -> Outcome`. Handlers come from closures or from types
//! implementing [`Subscribe`].
//!
//! ## Architecture
//! ```text
//! Producer ── notify(payload) ──► Channel ──► snapshot of handlers
//!                                                │
//!                                  ┌─────────────┼─────────────┐
//!                                  ▼             ▼             ▼
//!                               Handler       Handler       Handler
//!                             (closure)   (Subscribe impl)  (LogWriter)
//!                                  │             │             │
//!                                  └──── Outcome (sync / pending) ────► aggregated
//! ```
//!
//! ## Subscriber shapes
//! - **Closures**: [`Handler::sync`] for synchronous work, [`Handler::future`]
//!   for asynchronous work, [`Handler::new`] for a raw [`Outcome`](crate::Outcome).
//! - **Stateful subscribers**: implement [`Subscribe`] and wrap with
//!   [`Handler::from_subscriber`].

mod handler;
#[cfg(feature = "logging")]
mod log;
mod subscribe;

pub use handler::Handler;
#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscribe::Subscribe;
