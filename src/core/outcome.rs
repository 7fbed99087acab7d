//! # Dispatch outcome.
//!
//! [`Outcome`] is what a subscriber returns from one invocation and what
//! `notify` returns to the producer:
//!
//! ```text
//! Outcome::Complete(Ok(()))    finished synchronously
//! Outcome::Complete(Err(e))    failed synchronously
//! Outcome::Pending(fut)        will settle later; fut resolves to Ok / Err
//! ```
//!
//! `Outcome` implements [`IntoFuture`], so both shapes can simply be awaited:
//! ```rust
//! use fanout_channel::Outcome;
//!
//! # futures::executor::block_on(async {
//! assert!(Outcome::done().await.is_ok());
//! assert!(Outcome::pending(async { Ok(()) }).await.is_ok());
//! # });
//! ```

use std::future::{Future, IntoFuture};

use futures::future::{self, Either, LocalBoxFuture, Ready};
use futures::FutureExt;

use crate::error::ChannelError;

/// A pending completion: a local (non-`Send`) boxed future.
pub type PendingOutcome = LocalBoxFuture<'static, Result<(), ChannelError>>;

/// Result of one subscriber invocation, or of one whole dispatch.
#[must_use = "an outcome may carry subscriber failures"]
pub enum Outcome {
    /// Settled synchronously.
    Complete(Result<(), ChannelError>),
    /// Settles when the future resolves.
    Pending(PendingOutcome),
}

impl Outcome {
    /// Completed without failure.
    #[inline]
    pub fn done() -> Self {
        Outcome::Complete(Ok(()))
    }

    /// Failed synchronously.
    #[inline]
    pub fn failed(error: ChannelError) -> Self {
        Outcome::Complete(Err(error))
    }

    /// Boxes a future into a pending completion.
    pub fn pending<F>(fut: F) -> Self
    where
        F: Future<Output = Result<(), ChannelError>> + 'static,
    {
        Outcome::Pending(fut.boxed_local())
    }

    /// Returns `true` if the outcome still has to be awaited.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending(_))
    }

    /// The synchronous result, or `None` if the outcome is pending.
    pub fn into_complete(self) -> Option<Result<(), ChannelError>> {
        match self {
            Outcome::Complete(res) => Some(res),
            Outcome::Pending(_) => None,
        }
    }
}

impl From<Result<(), ChannelError>> for Outcome {
    fn from(res: Result<(), ChannelError>) -> Self {
        Outcome::Complete(res)
    }
}

impl IntoFuture for Outcome {
    type Output = Result<(), ChannelError>;
    type IntoFuture = Either<Ready<Result<(), ChannelError>>, PendingOutcome>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Outcome::Complete(res) => Either::Left(future::ready(res)),
            Outcome::Pending(fut) => Either::Right(fut),
        }
    }
}

impl std::fmt::Debug for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Complete(res) => f.debug_tuple("Complete").field(res).finish(),
            Outcome::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_shapes() {
        assert!(!Outcome::done().is_pending());
        assert!(matches!(Outcome::done().into_complete(), Some(Ok(()))));
        assert!(matches!(
            Outcome::failed(ChannelError::failed("x")).into_complete(),
            Some(Err(ChannelError::Failed(_)))
        ));
        assert!(Outcome::pending(async { Ok(()) }).into_complete().is_none());
    }

    #[tokio::test]
    async fn test_awaiting_both_shapes() {
        let err = Outcome::failed(ChannelError::cancelled("stop")).await.unwrap_err();
        assert!(err.is_cancelled());

        let err = Outcome::pending(async {
            tokio::task::yield_now().await;
            Err(ChannelError::failed("late"))
        })
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "late");
    }

    #[test]
    fn test_debug_hides_future() {
        assert_eq!(format!("{:?}", Outcome::pending(async { Ok(()) })), "Pending(..)");
        assert_eq!(format!("{:?}", Outcome::done()), "Complete(Ok(()))");
    }
}
