//! Channel payloads.
//!
//! This module groups the **data model** handed to subscribers.
//!
//! ## Contents
//! - [`Event`] data event (`{ data }`)
//! - [`Notification`] data event or terminal failure (breakable channels)
//!
//! ## Quick reference
//! - **Plain channel** (`EventChannel`): subscribers receive `&Event<T>`.
//! - **Breakable channel** (`SubscriberChannel`): subscribers receive `&Notification<T>`.

mod event;

pub use event::{Event, Notification};
