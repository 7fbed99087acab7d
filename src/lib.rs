//! # fanout-channel
//!
//! **fanout-channel** is a single-threaded, multi-subscriber notification
//! channel for Rust.
//!
//! A producer owns a channel, subscribers register callbacks with it, and
//! every `notify` fans one payload out to all of them. Subscribers may finish
//! synchronously or hand back a future; the producer gets one [`Outcome`]
//! that settles once every subscriber has, carrying every failure.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Handler    │   │   Handler    │   │   Handler    │
//!     │  (closure)   │   │ (Subscribe)  │   │ (LogWriter)  │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ add_handler      ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Producer (embeds a channel core, implements the channel trait)   │
//! │  - Registry (ordered handlers, duplicates allowed)                │
//! │  - on_add_first_handler / on_remove_last_handler hooks            │
//! │  - broken flag (breakable flavor only)                            │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼ notify(payload)
//!                       ┌────────────────────────┐
//!                       │  snapshot of handlers  │
//!                       └───┬────────┬───────┬───┘
//!                           ▼        ▼       ▼
//!                        call #1  call #2  call #N   (registration order)
//!                           │        │       │
//!                           ▼        ▼       ▼
//!                   Complete(..) / Pending(fut) per handler
//!                                   │
//!                                   ▼
//!                    Outcome: settled once all settled
//! ```
//!
//! ### Failure aggregation
//! ```text
//! subscribers == 0               ─► Complete(Ok)
//! subscribers == 1               ─► that subscriber's outcome, untouched
//! subscribers >= 2:
//!   no failures                  ─► Ok
//!   every failure is Cancelled   ─► the first Cancelled
//!   otherwise                    ─► Aggregate(all failures, in settlement order)
//! ```
//! Synchronous failures are recorded in invocation order, before any
//! asynchronous one; asynchronous failures are recorded as they settle.
//!
//! ### Breakable lifecycle
//! ```text
//! Live ──notify(Failure)──► Broken
//!   - every handler is taken out (on_remove_last_handler if any)
//!   - the failure reaches each of them once
//!   - add_handler / verify_live now fail with InvalidOperation
//! ```
//!
//! ## Features
//! | Area              | Description                                                    | Key types / traits                                 |
//! |-------------------|----------------------------------------------------------------|----------------------------------------------------|
//! | **Channels**      | Plain and breakable channel flavors with lifecycle hooks.      | [`EventChannel`], [`SubscriberChannel`]            |
//! | **Subscribers**   | Closure handles and object-style subscribers.                  | [`Handler`], [`Subscribe`]                         |
//! | **Outcomes**      | Sync-or-pending results, awaitable directly.                   | [`Outcome`], [`PendingOutcome`]                    |
//! | **Payloads**      | Data events and terminal failures.                             | [`Event`], [`Notification`]                        |
//! | **Errors**        | Typed failures with aggregation.                               | [`ChannelError`], [`BoxError`]                     |
//! | **Configuration** | Per-channel label, panic isolation, post-break policy.         | [`ChannelConfig`]                                  |
//!
//! ## Optional features
//! - `logging` (default): exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use fanout_channel::{
//!     ChannelError, Event, EventChannel, EventChannelCore, Handler,
//! };
//!
//! #[derive(Default)]
//! struct Sensor {
//!     channel: EventChannelCore<f64>,
//!     polling: Cell<bool>,
//! }
//!
//! impl EventChannel<f64> for Sensor {
//!     fn event_channel(&self) -> &EventChannelCore<f64> { &self.channel }
//!     fn on_add_first_handler(&self) { self.polling.set(true); }
//!     fn on_remove_last_handler(&self) { self.polling.set(false); }
//! }
//!
//! # futures::executor::block_on(async {
//! let sensor = Sensor::default();
//! let seen = Rc::new(Cell::new(0.0));
//!
//! let seen_in = Rc::clone(&seen);
//! sensor.add_handler(Handler::sync(move |ev: &Event<f64>| {
//!     if ev.data.is_nan() {
//!         return Err(ChannelError::failed("not a number"));
//!     }
//!     seen_in.set(ev.data);
//!     Ok(())
//! }));
//! sensor.add_handler(Handler::future(|ev: &Event<f64>| {
//!     let value = ev.data;
//!     async move {
//!         if !value.is_finite() {
//!             return Err(ChannelError::failed("reading out of range"));
//!         }
//!         Ok(())
//!     }
//! }));
//!
//! assert!(sensor.polling.get());
//! assert!(sensor.notify(Event::new(21.5)).await.is_ok());
//! assert_eq!(seen.get(), 21.5);
//!
//! // Both subscribers fail: the producer sees both.
//! let err = sensor.notify(Event::new(f64::NAN)).await.unwrap_err();
//! assert_eq!(err.inner_errors().map(<[_]>::len), Some(2));
//! # });
//! ```

mod channels;
mod config;
mod core;
mod error;
mod events;
mod subscribers;

// ---- Public re-exports ----

pub use crate::channels::{EventChannel, EventChannelCore, SubscriberChannel, SubscriberChannelCore};
pub use crate::config::ChannelConfig;
pub use crate::core::{Outcome, PendingOutcome};
pub use crate::error::{BoxError, ChannelError};
pub use crate::events::{Event, Notification};
pub use crate::subscribers::{Handler, Subscribe};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enabled by default; disable with `--no-default-features`.
#[cfg(feature = "logging")]
pub use crate::subscribers::LogWriter;
