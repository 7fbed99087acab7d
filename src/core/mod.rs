//! Channel core: subscriber bookkeeping and the dispatch engine.
//!
//! This module contains the machinery shared by both channel flavors.
//! The only public API from this module is [`Outcome`] (and its
//! [`PendingOutcome`] alias), which every subscriber returns and every
//! `notify` produces.
//!
//! Internal modules:
//! - [`registry`]: ordered subscriber list with first-added / last-removed transitions;
//! - [`dispatch`]: snapshot fan-out, failure collection and aggregation;
//! - [`outcome`]: the sync-or-pending result type.
//!
//! ```text
//! notify(event)
//!   └─► Registry::snapshot() ──► dispatch(snapshot, &event) ──► Outcome
//! ```

pub(crate) mod dispatch;
mod outcome;
pub(crate) mod registry;

pub use outcome::{Outcome, PendingOutcome};
