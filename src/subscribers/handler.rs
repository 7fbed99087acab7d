//! # Callback handle (`Handler`)
//!
//! [`Handler`] wraps a closure `Fn(&A) -> Outcome` behind an `Rc`, together with
//! a display name used in logs and panic reports.
//!
//! ## Identity
//! - Cloning a handler yields the **same** subscriber: clones compare equal
//!   under [`Handler::same`] and `remove_handler` removes by that identity.
//! - Two handlers built from identical closures are **different** subscribers.
//! - The name plays no part in identity.
//!
//! ## Example
//! ```rust
//! use fanout_channel::{ChannelError, Event, Handler};
//!
//! let h: Handler<Event<String>> = Handler::sync(|ev: &Event<String>| {
//!     if ev.data.is_empty() {
//!         return Err(ChannelError::failed("empty payload"));
//!     }
//!     Ok(())
//! });
//! let same = h.clone();
//! assert!(h.same(&same));
//!
//! let delayed: Handler<Event<String>> = Handler::future(|ev: &Event<String>| {
//!     let data = ev.data.clone();
//!     async move {
//!         let _ = data;
//!         Ok(())
//!     }
//! });
//! assert!(!h.same(&delayed));
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::rc::Rc;

use crate::core::Outcome;
use crate::error::ChannelError;
use crate::subscribers::Subscribe;

type Callback<A> = dyn Fn(&A) -> Outcome;

/// Shared handle to one registered callback.
pub struct Handler<A> {
    name: Cow<'static, str>,
    f: Rc<Callback<A>>,
}

impl<A: 'static> Handler<A> {
    /// Wraps a closure returning a raw [`Outcome`].
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) -> Outcome + 'static,
    {
        Self::named("anonymous", f)
    }

    /// Like [`Handler::new`], with a name for logs.
    pub fn named<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&A) -> Outcome + 'static,
    {
        Self {
            name: name.into(),
            f: Rc::new(f),
        }
    }

    /// Wraps a synchronous closure.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&A) -> Result<(), ChannelError> + 'static,
    {
        Self::new(move |event| Outcome::Complete(f(event)))
    }

    /// Wraps a closure that *creates* a new future per invocation.
    ///
    /// The future must own what it uses; copy data out of the payload before
    /// the `async move` block.
    pub fn future<F, Fut>(f: F) -> Self
    where
        F: Fn(&A) -> Fut + 'static,
        Fut: Future<Output = Result<(), ChannelError>> + 'static,
    {
        Self::new(move |event| Outcome::pending(f(event)))
    }

    /// Wraps a [`Subscribe`] implementation, named after [`Subscribe::name`].
    pub fn from_subscriber<S>(subscriber: Rc<S>) -> Self
    where
        S: Subscribe<A>,
    {
        let name = subscriber.name();
        Self::named(name, move |event| subscriber.on_event(event))
    }
}

impl<A> Handler<A> {
    /// Invokes the callback once.
    #[inline]
    pub fn call(&self, event: &A) -> Outcome {
        (self.f)(event)
    }

    /// Name used in logs and panic reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_cow(&self) -> Cow<'static, str> {
        self.name.clone()
    }

    /// Returns `true` if both handles refer to the same registration target.
    #[inline]
    pub fn same(&self, other: &Handler<A>) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.f) as *const (),
            Rc::as_ptr(&other.f) as *const (),
        )
    }
}

impl<A> Clone for Handler<A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            f: Rc::clone(&self.f),
        }
    }
}

impl<A> std::fmt::Debug for Handler<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish()
    }
}
