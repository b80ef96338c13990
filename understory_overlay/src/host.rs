// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A set of overlays sharing one [`Document`].
//!
//! [`OverlayHost`] owns the document listener registry and every mounted
//! [`OverlayController`]. Document events are routed only to overlays that
//! currently hold a registration for that event kind, so closed overlays cost
//! nothing per event and several open overlays dismiss independently.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use understory_placement::{AnchorGeometry, PanelPosition, PlacementConfig};

use crate::containment::ParentLookup;
use crate::document::{Document, ListenerKind};
use crate::observer::{Observers, SubscriptionId};
use crate::{Key, KeyResponse, OverlayController, OverlayId, OverlayState};

/// Notification sent to open-change subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenChange {
    /// Overlay whose state changed.
    pub overlay: OverlayId,
    /// New state: `true` for open.
    pub open: bool,
}

/// Owner of a document and the overlays listening on it.
#[derive(Debug)]
pub struct OverlayHost<K> {
    document: Document,
    overlays: HashMap<OverlayId, OverlayController<K>>,
    reserved: HashSet<OverlayId>,
    next_id: u32,
    open_change: Observers<OpenChange>,
}

impl<K: Copy + Eq + Hash> Default for OverlayHost<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> OverlayHost<K> {
    /// Creates a host with no overlays.
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            overlays: HashMap::new(),
            reserved: HashSet::new(),
            next_id: 0,
            open_change: Observers::new(),
        }
    }

    /// Mounts a closed overlay anchored to `trigger`.
    pub fn insert(&mut self, trigger: K, panel: K, panel_width: f64) -> OverlayId {
        self.insert_with_config(trigger, panel, panel_width, PlacementConfig::default())
    }

    /// Mounts a closed overlay with an explicit placement config.
    pub fn insert_with_config(
        &mut self,
        trigger: K,
        panel: K,
        panel_width: f64,
        config: PlacementConfig,
    ) -> OverlayId {
        let id = self.allocate_id();
        let controller = OverlayController::with_config(id, trigger, panel, panel_width, config);
        self.overlays.insert(id, controller);
        id
    }

    /// Hands out an id for an overlay owned outside the host.
    ///
    /// Use this for controllers embedded in other components (a search
    /// surface, say) that share [`document_mut`](Self::document_mut). The id
    /// is never given to an overlay mounted through [`insert`](Self::insert).
    pub fn reserve_id(&mut self) -> OverlayId {
        let id = self.allocate_id();
        self.reserved.insert(id);
        id
    }

    /// Returns a reserved id to the pool.
    pub fn release_id(&mut self, id: OverlayId) -> bool {
        self.reserved.remove(&id)
    }

    /// Unmounts an overlay, removing any listeners it still holds.
    pub fn remove(&mut self, id: OverlayId) -> Option<OverlayController<K>> {
        let mut controller = self.overlays.remove(&id)?;
        let was_open = controller.is_open();
        controller.unmount(&mut self.document);
        if was_open {
            self.notify(id, false);
        }
        Some(controller)
    }

    /// The controller for `id`.
    #[must_use]
    pub fn controller(&self, id: OverlayId) -> Option<&OverlayController<K>> {
        self.overlays.get(&id)
    }

    /// Number of mounted overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// Returns `true` if nothing is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// The shared listener registry.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The shared listener registry, for overlays living outside the host.
    ///
    /// Those overlays must use ids from [`reserve_id`](Self::reserve_id).
    /// Events for them are routed by their owner; the host's `dispatch_*`
    /// methods skip listeners whose owner it does not mount.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Returns `true` if `id` is mounted and open.
    #[must_use]
    pub fn is_open(&self, id: OverlayId) -> bool {
        self.overlays.get(&id).is_some_and(OverlayController::is_open)
    }

    /// Ids of the open overlays, in ascending order.
    #[must_use]
    pub fn open_overlays(&self) -> Vec<OverlayId> {
        let mut open: Vec<_> = self
            .overlays
            .values()
            .filter(|c| c.is_open())
            .map(OverlayController::id)
            .collect();
        open.sort_unstable();
        open
    }

    /// Changes the width used to place an overlay's panel.
    pub fn set_panel_width(&mut self, id: OverlayId, panel_width: f64) {
        if let Some(controller) = self.overlays.get_mut(&id) {
            controller.positioner_mut().set_panel_width(panel_width);
        }
    }

    /// Opens `id`. Returns `false` if unknown or already open.
    pub fn open<G>(&mut self, id: OverlayId, geometry: &G) -> bool
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        let Some(controller) = self.overlays.get_mut(&id) else {
            return false;
        };
        let opened = controller.open(&mut self.document, geometry);
        if opened {
            self.notify(id, true);
        }
        opened
    }

    /// Closes `id`. Returns `false` if unknown or already closed.
    pub fn close(&mut self, id: OverlayId) -> bool {
        let Some(controller) = self.overlays.get_mut(&id) else {
            return false;
        };
        let closed = controller.close(&mut self.document);
        if closed {
            self.notify(id, false);
        }
        closed
    }

    /// Toggles `id` (the trigger's click handler). Returns the new state.
    pub fn toggle<G>(&mut self, id: OverlayId, geometry: &G) -> Option<OverlayState>
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        let controller = self.overlays.get_mut(&id)?;
        let before = controller.state();
        let after = controller.toggle(&mut self.document, geometry);
        if before != after {
            self.notify(id, after == OverlayState::Open);
        }
        Some(after)
    }

    /// Closes `id` because an item inside its panel was activated.
    pub fn item_activated(&mut self, id: OverlayId) -> bool {
        let Some(controller) = self.overlays.get_mut(&id) else {
            return false;
        };
        let closed = controller.item_activated(&mut self.document);
        if closed {
            self.notify(id, false);
        }
        closed
    }

    /// Delivers a document pointer-down to every overlay listening for it.
    ///
    /// Returns the overlays that closed as a result.
    pub fn dispatch_pointer_down<T>(&mut self, target: K, tree: &T) -> Vec<OverlayId>
    where
        T: ParentLookup<K> + ?Sized,
    {
        let mut closed = Vec::new();
        for id in self.document.owners_of(ListenerKind::PointerDownCapture) {
            let Some(controller) = self.overlays.get_mut(&id) else {
                continue;
            };
            if controller
                .handle_pointer_down(&mut self.document, target, tree)
                .closed
            {
                closed.push(id);
            }
        }
        for &id in &closed {
            self.notify(id, false);
        }
        closed
    }

    /// Delivers a document keydown to every overlay listening for it.
    pub fn dispatch_key(&mut self, key: Key) -> KeyResponse {
        let mut response = KeyResponse::IGNORED;
        let mut closed = Vec::new();
        for id in self.document.owners_of(ListenerKind::KeyDown) {
            let Some(controller) = self.overlays.get_mut(&id) else {
                continue;
            };
            let r = controller.handle_key(&mut self.document, key);
            if r.closed {
                closed.push(id);
            }
            response = response.merge(r);
        }
        for id in closed {
            self.notify(id, false);
        }
        response
    }

    /// Re-measures every open overlay's trigger.
    pub fn reposition_open<G>(&mut self, geometry: &G) -> Vec<(OverlayId, PanelPosition)>
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        let mut out: Vec<_> = self
            .overlays
            .values_mut()
            .filter_map(|c| c.reposition(geometry).map(|p| (c.id(), p)))
            .collect();
        out.sort_unstable_by_key(|(id, _)| *id);
        out
    }

    /// Subscribes to open/close transitions of any overlay.
    pub fn on_open_change(
        &mut self,
        callback: impl FnMut(&OpenChange) + 'static,
    ) -> SubscriptionId {
        self.open_change.subscribe(callback)
    }

    /// Removes an open-change subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.open_change.unsubscribe(id)
    }

    /// Next id not held by a mounted or reserved overlay.
    fn allocate_id(&mut self) -> OverlayId {
        loop {
            let id = OverlayId::new(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            if !self.overlays.contains_key(&id) && !self.reserved.contains(&id) {
                return id;
            }
        }
    }

    fn notify(&mut self, overlay: OverlayId, open: bool) {
        self.open_change.notify(&OpenChange { overlay, open });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containment::ParentMap;
    use alloc::rc::Rc;
    use core::cell::RefCell;
    use kurbo::{Rect, Size};

    struct Grid;

    impl AnchorGeometry<u32> for Grid {
        fn anchor_rect(&self, node: u32) -> Option<Rect> {
            let x = f64::from(node) * 100.0;
            Some(Rect::new(x, 0.0, x + 80.0, 30.0))
        }

        fn viewport(&self) -> Size {
            Size::new(1000.0, 700.0)
        }
    }

    #[test]
    fn open_change_is_reported_once_per_transition() {
        let mut host = OverlayHost::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        host.on_open_change(move |c| sink.borrow_mut().push(*c));

        let id = host.insert(1_u32, 2, 150.0);
        host.toggle(id, &Grid);
        host.open(id, &Grid);
        host.dispatch_key(Key::Escape);
        host.close(id);

        assert_eq!(
            *log.borrow(),
            [
                OpenChange { overlay: id, open: true },
                OpenChange { overlay: id, open: false },
            ]
        );
    }

    #[test]
    fn remove_open_overlay_frees_listeners() {
        let mut host = OverlayHost::new();
        let id = host.insert(1_u32, 2, 150.0);
        host.open(id, &Grid);
        assert_eq!(host.document().listener_count(), 2);
        assert!(host.remove(id).is_some());
        assert_eq!(host.document().listener_count(), 0);
        assert!(host.is_empty());
        assert!(!host.close(id));
    }

    #[test]
    fn escape_closes_every_open_overlay() {
        let mut host = OverlayHost::new();
        let a = host.insert(1_u32, 10, 150.0);
        let b = host.insert(2, 20, 150.0);
        host.open(a, &Grid);
        host.open(b, &Grid);
        let r = host.dispatch_key(Key::Escape);
        assert!(r.closed && r.default_prevented);
        assert!(host.open_overlays().is_empty());
    }

    #[test]
    fn pointer_down_only_reaches_open_overlays() {
        let mut host = OverlayHost::new();
        let a = host.insert(1_u32, 10, 150.0);
        let _b = host.insert(2, 20, 150.0);
        host.open(a, &Grid);
        let closed = host.dispatch_pointer_down(99, &ParentMap::<u32>::new());
        assert_eq!(closed, [a]);
    }

    #[test]
    fn wrapped_ids_skip_live_overlays() {
        let mut host = OverlayHost::new();
        host.next_id = u32::MAX;
        let last = host.insert(1_u32, 10, 150.0);
        let first = host.insert(2, 20, 150.0);
        assert_eq!((last.get(), first.get()), (u32::MAX, 0));
        host.open(last, &Grid);

        host.next_id = u32::MAX;
        let fresh = host.insert(3, 30, 150.0);
        assert_eq!(fresh.get(), 1);
        assert_eq!(host.len(), 3);
        assert!(host.is_open(last));
        assert_eq!(host.controller(last).map(OverlayController::trigger), Some(1));
        assert_eq!(host.document().listener_count(), 2);
    }

    #[test]
    fn reserved_ids_are_not_reused() {
        let mut host = OverlayHost::<u32>::new();
        let reserved = host.reserve_id();
        let menu = host.insert(1, 10, 150.0);
        assert_ne!(reserved, menu);

        host.next_id = reserved.get();
        let next = host.insert(2, 20, 150.0);
        assert_ne!(next, reserved);
        assert_ne!(next, menu);

        assert!(host.release_id(reserved));
        assert!(!host.release_id(reserved));
    }

    #[test]
    fn external_overlay_shares_document_without_dispatch() {
        let mut host = OverlayHost::new();
        let menu = host.insert(1_u32, 10, 150.0);
        let mut search = OverlayController::new(host.reserve_id(), 7, 70, 300.0);
        host.open(menu, &Grid);
        search.open(host.document_mut(), &Grid);
        assert_eq!(host.document().listener_count(), 4);

        // The host only closes what it mounts.
        assert_eq!(host.dispatch_pointer_down(99, &ParentMap::<u32>::new()), [menu]);
        assert!(search.is_open());
        search.close(host.document_mut());
        assert_eq!(host.document().listener_count(), 0);
    }

    #[test]
    fn reposition_reports_open_overlays_in_id_order() {
        let mut host = OverlayHost::new();
        let a = host.insert(1_u32, 10, 150.0);
        let b = host.insert(3, 30, 150.0);
        let c = host.insert(5, 50, 150.0);
        host.open(c, &Grid);
        host.open(a, &Grid);
        let moved = host.reposition_open(&Grid);
        assert_eq!(
            moved.iter().map(|(id, p)| (*id, p.x())).collect::<Vec<_>>(),
            [(a, 100.0), (c, 500.0)]
        );
        assert!(!host.is_open(b));
    }
}
