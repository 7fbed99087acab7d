//! # Subscriber registry - ordered list of registered handlers.
//!
//! Registry owns the subscriber list of one channel:
//! - `add` appends, and reports whether the list just became non-empty
//! - `remove` drops the **first** handler with the same identity, and reports
//!   whether the list just became empty
//! - `snapshot` copies the list for one dispatch
//! - `take_all` empties the list in one step (breaking a channel)
//!
//! ## Rules
//! - Insertion order = registration order; duplicates are allowed and each
//!   registration is invoked once per dispatch.
//! - No borrow outlives a method call, so callbacks and hooks can always
//!   re-enter the registry. Hook invocation is the caller's job.
//! - Removing an unknown handler is a no-op.

use std::cell::RefCell;

use crate::subscribers::Handler;

/// Change in emptiness caused by one mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// List went from empty to one handler.
    BecameActive,
    /// List went from non-empty to empty.
    BecameIdle,
    /// Emptiness did not change (or nothing changed).
    Unchanged,
}

/// Ordered list of handlers with interior mutability.
pub(crate) struct Registry<A> {
    handlers: RefCell<Vec<Handler<A>>>,
}

impl<A> Registry<A> {
    /// Creates an empty registry.
    pub(crate) fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Appends a handler.
    pub(crate) fn add(&self, handler: Handler<A>) -> Transition {
        let mut handlers = self.handlers.borrow_mut();
        handlers.push(handler);
        if handlers.len() == 1 {
            Transition::BecameActive
        } else {
            Transition::Unchanged
        }
    }

    /// Removes the first occurrence of `handler` (identity match).
    pub(crate) fn remove(&self, handler: &Handler<A>) -> Transition {
        let mut handlers = self.handlers.borrow_mut();
        let Some(index) = handlers.iter().position(|h| h.same(handler)) else {
            return Transition::Unchanged;
        };
        handlers.remove(index);
        if handlers.is_empty() {
            Transition::BecameIdle
        } else {
            Transition::Unchanged
        }
    }

    /// Copies the current list, in registration order.
    pub(crate) fn snapshot(&self) -> Vec<Handler<A>> {
        self.handlers.borrow().clone()
    }

    /// Moves every handler out, leaving the registry empty.
    pub(crate) fn take_all(&self) -> (Vec<Handler<A>>, Transition) {
        let taken = std::mem::take(&mut *self.handlers.borrow_mut());
        let transition = if taken.is_empty() {
            Transition::Unchanged
        } else {
            Transition::BecameIdle
        };
        (taken, transition)
    }

    /// Returns true if registry is empty.
    pub(crate) fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    /// Number of registrations (duplicates counted).
    pub(crate) fn len(&self) -> usize {
        self.handlers.borrow().len()
    }
}
