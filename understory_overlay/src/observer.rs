// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small subscribe/notify registry.
//!
//! Rendering layers subscribe to state changes instead of polling. Callbacks
//! run synchronously, in subscription order, on every [`Observers::notify`].
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_overlay::observer::Observers;
//!
//! let seen = Rc::new(Cell::new(0));
//! let mut observers: Observers<u32> = Observers::new();
//!
//! let sink = seen.clone();
//! let id = observers.subscribe(move |v: &u32| sink.set(*v));
//! observers.notify(&3);
//! assert_eq!(seen.get(), 3);
//!
//! assert!(observers.unsubscribe(id));
//! observers.notify(&9);
//! assert_eq!(seen.get(), 3);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handle returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// Ordered list of callbacks interested in values of type `T`.
pub struct Observers<T: ?Sized> {
    next: u64,
    entries: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T: ?Sized> Observers<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: 0,
            entries: Vec::new(),
        }
    }

    /// Adds a callback and returns a handle for removing it.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Calls every callback with `value`.
    pub fn notify(&mut self, value: &T) {
        for (_, callback) in &mut self.entries {
            callback(value);
        }
    }

    /// Number of subscribed callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
