//! # Dispatch: fan one payload out to a snapshot of handlers.
//!
//! Shared by both channel flavors. The caller takes the snapshot (so reentrant
//! `add_handler` / `remove_handler` only affect the **next** dispatch) and hands
//! it over together with the payload.
//!
//! ## Algorithm
//! ```text
//! dispatch(snapshot, event)
//!   ├─ []          ─► Complete(Ok)
//!   ├─ [h]         ─► h(event) returned as-is (no wrapping)
//!   └─ [h1..hN]    ─► call every handler back-to-back, no await in between
//!                       ├─ Complete(Err) ─► errors.push
//!                       └─ Pending(fut)  ─► pending.push
//!                     then:
//!                       ├─ no pending              ─► Complete(settle(errors))
//!                       ├─ 1 pending, no errors    ─► that pending, as-is
//!                       └─ otherwise               ─► Pending(await ALL, append
//!                                                     rejections, settle(errors))
//! ```
//!
//! ## Aggregation (`settle`)
//! - no errors → `Ok`
//! - every error is a cancellation → the **first** cancellation
//! - otherwise → `Aggregate` of the whole collection, in recording order
//!
//! Asynchronous rejections are recorded in the order they settle, after all
//! synchronous failures. That order depends on timing.

use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};

use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;

use crate::config::ChannelConfig;
use crate::core::outcome::{Outcome, PendingOutcome};
use crate::error::ChannelError;
use crate::subscribers::Handler;

/// Runs one dispatch over `snapshot`.
pub(crate) fn dispatch<A>(snapshot: Vec<Handler<A>>, event: &A, config: &ChannelConfig) -> Outcome {
    tracing::trace!(channel = %config.name, subscribers = snapshot.len(), "dispatch");

    match snapshot.as_slice() {
        [] => Outcome::done(),
        [single] => invoke(single, event, config),
        handlers => fan_out(handlers, event, config),
    }
}

/// Folds a failure collection into the final result of a dispatch.
pub(crate) fn settle(errors: Vec<ChannelError>) -> Result<(), ChannelError> {
    if errors.is_empty() {
        return Ok(());
    }
    if errors.iter().all(ChannelError::is_cancelled) {
        return errors.into_iter().next().map_or(Ok(()), Err);
    }
    Err(ChannelError::aggregate(errors))
}

fn fan_out<A>(handlers: &[Handler<A>], event: &A, config: &ChannelConfig) -> Outcome {
    let mut errors = Vec::new();
    let mut pending = Vec::new();

    for handler in handlers {
        match invoke(handler, event, config) {
            Outcome::Complete(Ok(())) => {}
            Outcome::Complete(Err(err)) => errors.push(err),
            Outcome::Pending(fut) => pending.push((handler.name_cow(), fut)),
        }
    }

    if pending.is_empty() {
        if !errors.is_empty() {
            tracing::debug!(channel = %config.name, failures = errors.len(), "dispatch failed");
        }
        return Outcome::Complete(settle(errors));
    }
    if pending.len() == 1 && errors.is_empty() {
        if let Some((_, fut)) = pending.pop() {
            return Outcome::Pending(fut);
        }
    }

    let mut in_flight: FuturesUnordered<PendingOutcome> = pending
        .into_iter()
        .map(|(subscriber, fut)| guard(fut, subscriber, config))
        .collect();
    let channel = config.name.clone();

    Outcome::pending(async move {
        while let Some(res) = in_flight.next().await {
            if let Err(err) = res {
                errors.push(err);
            }
        }
        if !errors.is_empty() {
            tracing::debug!(channel = %channel, failures = errors.len(), "dispatch failed");
        }
        settle(errors)
    })
}

/// Calls one handler, turning a panic into a synchronous failure.
fn invoke<A>(handler: &Handler<A>, event: &A, config: &ChannelConfig) -> Outcome {
    if !config.catch_panics {
        return handler.call(event);
    }
    match panic::catch_unwind(AssertUnwindSafe(|| handler.call(event))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let err = ChannelError::from_panic(handler.name_cow(), payload);
            tracing::warn!(channel = %config.name, subscriber = handler.name(), "{err}");
            Outcome::failed(err)
        }
    }
}

/// Wraps a pending completion so a panic while polling becomes a rejection.
fn guard(fut: PendingOutcome, subscriber: Cow<'static, str>, config: &ChannelConfig) -> PendingOutcome {
    if !config.catch_panics {
        return fut;
    }
    let channel = config.name.clone();
    AssertUnwindSafe(fut)
        .catch_unwind()
        .map(move |res| {
            res.unwrap_or_else(|payload| {
                let err = ChannelError::from_panic(subscriber, payload);
                tracing::warn!(channel = %channel, "{err}");
                Err(err)
            })
        })
        .boxed_local()
}
