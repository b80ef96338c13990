// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level listener bookkeeping.
//!
//! An open overlay listens for pointer-down (capture phase) and keydown events
//! on the whole document. [`Document`] records those registrations so the host
//! can route document events only to overlays that currently listen, and so a
//! leaked registration is visible as a non-zero [`Document::listener_count`].
//!
//! Each overlay owns a [`ListenerRegistry`] that holds its pair of
//! registrations. The pair is attached when the overlay opens and detached
//! when it closes or unmounts; there is no shared dispatcher across overlays.
//!
//! ```
//! use understory_overlay::OverlayId;
//! use understory_overlay::document::{Document, ListenerKind, ListenerRegistry};
//!
//! let mut doc = Document::new();
//! let mut listeners = ListenerRegistry::new();
//!
//! assert!(listeners.attach(&mut doc, OverlayId::new(7)));
//! assert_eq!(doc.listener_count(), 2);
//! assert_eq!(doc.owners_of(ListenerKind::KeyDown), vec![OverlayId::new(7)]);
//!
//! assert!(listeners.detach(&mut doc));
//! assert_eq!(doc.listener_count(), 0);
//! ```

use alloc::vec::Vec;

use crate::OverlayId;

/// Which document event a listener is registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer-down, registered for the capture phase.
    PointerDownCapture,
    /// Keydown.
    KeyDown,
}

/// Handle to one registration in a [`Document`].
///
/// Handles are generational: once removed, a handle never matches a later
/// registration that reuses the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId {
    slot: usize,
    generation: u32,
}

/// One registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listener {
    /// Event the listener is registered for.
    pub kind: ListenerKind,
    /// Overlay that owns the registration.
    pub owner: OverlayId,
}

#[derive(Clone, Debug, Default)]
struct Slot {
    generation: u32,
    listener: Option<Listener>,
}

/// Registry of document-level listeners.
#[derive(Clone, Debug, Default)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
}

impl Document {
    /// Creates a document with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its handle.
    pub fn add_listener(&mut self, kind: ListenerKind, owner: OverlayId) -> ListenerId {
        let listener = Some(Listener { kind, owner });
        self.live += 1;
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot];
            entry.generation = entry.generation.wrapping_add(1);
            entry.listener = listener;
            return ListenerId {
                slot,
                generation: entry.generation,
            };
        }
        let slot = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            listener,
        });
        ListenerId {
            slot,
            generation: 0,
        }
    }

    /// Removes a registration. Returns `false` if the handle was stale.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let Some(entry) = self.slots.get_mut(id.slot) else {
            return false;
        };
        if entry.generation != id.generation || entry.listener.is_none() {
            return false;
        }
        entry.listener = None;
        self.free.push(id.slot);
        self.live -= 1;
        true
    }

    /// Returns the registration behind `id`, if it is still live.
    #[must_use]
    pub fn get(&self, id: ListenerId) -> Option<Listener> {
        self.slots
            .get(id.slot)
            .filter(|entry| entry.generation == id.generation)
            .and_then(|entry| entry.listener)
    }

    /// Number of live registrations.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.live
    }

    /// Iterates live registrations in slot order.
    pub fn listeners(&self) -> impl Iterator<Item = Listener> + '_ {
        self.slots.iter().filter_map(|entry| entry.listener)
    }

    /// Snapshot of the overlays listening for `kind`.
    ///
    /// Returned as an owned list so handlers may add or remove listeners while
    /// the event is being delivered, matching DOM dispatch semantics.
    #[must_use]
    pub fn owners_of(&self, kind: ListenerKind) -> Vec<OverlayId> {
        self.listeners()
            .filter(|listener| listener.kind == kind)
            .map(|listener| listener.owner)
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ListenerPair {
    pointer_down: ListenerId,
    key_down: ListenerId,
}

/// The listener pair held by one overlay while it is open.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    pair: Option<ListenerPair>,
}

impl ListenerRegistry {
    /// Creates a registry holding no registrations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the pair is registered.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.pair.is_some()
    }

    /// Registers the pointer-down and keydown pair for `owner`.
    ///
    /// Returns `false` (and registers nothing) if already attached.
    pub fn attach(&mut self, document: &mut Document, owner: OverlayId) -> bool {
        if self.pair.is_some() {
            return false;
        }
        let pointer_down = document.add_listener(ListenerKind::PointerDownCapture, owner);
        let key_down = document.add_listener(ListenerKind::KeyDown, owner);
        tracing::trace!(?owner, "document listeners attached");
        self.pair = Some(ListenerPair {
            pointer_down,
            key_down,
        });
        true
    }

    /// Removes both registrations. Returns `false` if nothing was attached.
    pub fn detach(&mut self, document: &mut Document) -> bool {
        let Some(pair) = self.pair.take() else {
            return false;
        };
        let pointer = document.remove_listener(pair.pointer_down);
        let key = document.remove_listener(pair.key_down);
        tracing::trace!(pointer, key, "document listeners detached");
        true
    }
}
