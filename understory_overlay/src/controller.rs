// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/close state machine for a single anchored overlay.
//!
//! ## States
//!
//! - `Closed`: no document listeners are registered.
//! - `Open`: the overlay holds one pointer-down (capture) and one keydown
//!   registration in the [`Document`].
//!
//! ## Dismissal
//!
//! - Pointer-down outside **both** the trigger subtree and the panel subtree
//!   closes the overlay. Pointer-down on the trigger is left alone, so the
//!   trigger's own click can toggle the overlay without a close/re-open race.
//! - Escape closes unconditionally and asks the host to prevent the key's
//!   default action.
//! - Activating an item inside the panel closes the overlay through
//!   [`OverlayController::item_activated`], even though the click was inside.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_overlay::containment::ParentMap;
//! use understory_overlay::document::Document;
//! use understory_overlay::{Key, OverlayController, OverlayId};
//! use understory_placement::AnchorGeometry;
//!
//! struct Layout;
//! impl AnchorGeometry<u32> for Layout {
//!     fn anchor_rect(&self, _node: u32) -> Option<Rect> {
//!         Some(Rect::new(10.0, 10.0, 90.0, 40.0))
//!     }
//!     fn viewport(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//! }
//!
//! // 1 = trigger button, 2 = icon inside it, 3 = panel, 9 = unrelated page node.
//! let mut tree = ParentMap::new();
//! tree.insert(2, 1);
//!
//! let mut doc = Document::new();
//! let mut menu = OverlayController::new(OverlayId::new(0), 1_u32, 3, 200.0);
//!
//! menu.toggle(&mut doc, &Layout);
//! assert!(menu.is_open());
//! assert_eq!(doc.listener_count(), 2);
//!
//! // Clicking the icon inside the trigger is not an outside click.
//! assert!(!menu.handle_pointer_down(&mut doc, 2, &tree).closed);
//!
//! // Escape closes and removes the listeners.
//! let key = menu.handle_key(&mut doc, Key::Escape);
//! assert!(key.closed && key.default_prevented);
//! assert_eq!(doc.listener_count(), 0);
//! ```

use understory_placement::{AnchorGeometry, PanelPosition, PlacementConfig, Positioner};

use crate::containment::{ParentLookup, is_within};
use crate::document::{Document, ListenerRegistry};
use crate::{Key, KeyResponse};

/// Identifier of an overlay instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(u32);

impl OverlayId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Open/closed state of an overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayState {
    /// Panel hidden, no listeners registered.
    #[default]
    Closed,
    /// Panel shown, dismissal listeners registered.
    Open,
}

/// What a document pointer-down did to an overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerResponse {
    /// The overlay transitioned to closed.
    pub closed: bool,
}

/// One dropdown/popover instance.
///
/// `K` is the host's node handle. The controller remembers the trigger node
/// (also the positioning anchor) and the panel node for containment checks.
#[derive(Clone, Debug)]
pub struct OverlayController<K> {
    id: OverlayId,
    trigger: K,
    panel: K,
    state: OverlayState,
    listeners: ListenerRegistry,
    positioner: Positioner,
}

impl<K: Copy + Eq> OverlayController<K> {
    /// Creates a closed overlay.
    #[must_use]
    pub fn new(id: OverlayId, trigger: K, panel: K, panel_width: f64) -> Self {
        Self::with_placement(id, trigger, panel, Positioner::new(panel_width))
    }

    /// Creates a closed overlay with an explicit placement config.
    #[must_use]
    pub fn with_config(
        id: OverlayId,
        trigger: K,
        panel: K,
        panel_width: f64,
        config: PlacementConfig,
    ) -> Self {
        Self::with_placement(id, trigger, panel, Positioner::with_config(panel_width, config))
    }

    fn with_placement(id: OverlayId, trigger: K, panel: K, positioner: Positioner) -> Self {
        Self {
            id,
            trigger,
            panel,
            state: OverlayState::Closed,
            listeners: ListenerRegistry::new(),
            positioner,
        }
    }

    /// This overlay's id.
    #[must_use]
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// The trigger (anchor) node.
    #[must_use]
    pub fn trigger(&self) -> K {
        self.trigger
    }

    /// The panel node.
    #[must_use]
    pub fn panel(&self) -> K {
        self.panel
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Returns `true` while open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Returns `true` while document listeners are registered.
    #[must_use]
    pub fn has_listeners(&self) -> bool {
        self.listeners.is_attached()
    }

    /// Last computed panel position.
    #[must_use]
    pub fn position(&self) -> Option<PanelPosition> {
        self.positioner.current()
    }

    /// The positioner, for width or config changes.
    pub fn positioner_mut(&mut self) -> &mut Positioner {
        &mut self.positioner
    }

    /// Opens the overlay, registers listeners and positions the panel.
    ///
    /// Returns `false` if it was already open.
    pub fn open<G>(&mut self, document: &mut Document, geometry: &G) -> bool
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        if self.is_open() {
            return false;
        }
        self.state = OverlayState::Open;
        self.listeners.attach(document, self.id);
        // An unmeasurable trigger leaves the last known position in place.
        let _ = self.positioner.update_from(geometry, self.trigger);
        tracing::debug!(overlay = self.id.0, "overlay opened");
        true
    }

    /// Closes the overlay and removes its listeners.
    ///
    /// Returns `false` if it was already closed.
    pub fn close(&mut self, document: &mut Document) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = OverlayState::Closed;
        self.listeners.detach(document);
        tracing::debug!(overlay = self.id.0, "overlay closed");
        true
    }

    /// Flips between open and closed and returns the new state.
    pub fn toggle<G>(&mut self, document: &mut Document, geometry: &G) -> OverlayState
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        if self.is_open() {
            self.close(document);
        } else {
            self.open(document, geometry);
        }
        self.state
    }

    /// Re-measures the trigger while open.
    ///
    /// Call this when something outside the overlay changed the trigger's
    /// layout (a sidebar collapsed, a toolbar wrapped). Closed overlays are
    /// not touched. Returns the position the panel should render at.
    pub fn reposition<G>(&mut self, geometry: &G) -> Option<PanelPosition>
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        if !self.is_open() {
            return None;
        }
        self.positioner
            .update_from(geometry, self.trigger)
            .ok()
            .or_else(|| self.positioner.current())
    }

    /// Returns `true` if `target` lies in the trigger or panel subtree.
    pub fn contains<T>(&self, target: K, tree: &T) -> bool
    where
        T: ParentLookup<K> + ?Sized,
    {
        is_within(tree, target, self.panel) || is_within(tree, target, self.trigger)
    }

    /// Handles a document pointer-down (capture phase).
    pub fn handle_pointer_down<T>(
        &mut self,
        document: &mut Document,
        target: K,
        tree: &T,
    ) -> PointerResponse
    where
        T: ParentLookup<K> + ?Sized,
    {
        if !self.is_open() || self.contains(target, tree) {
            return PointerResponse::default();
        }
        tracing::trace!(overlay = self.id.0, "outside pointer-down");
        PointerResponse {
            closed: self.close(document),
        }
    }

    /// Handles a document keydown.
    pub fn handle_key(&mut self, document: &mut Document, key: Key) -> KeyResponse {
        if !self.is_open() || key != Key::Escape {
            return KeyResponse::IGNORED;
        }
        KeyResponse {
            closed: self.close(document),
            default_prevented: true,
        }
    }

    /// Closes the overlay after an item inside its panel was activated.
    pub fn item_activated(&mut self, document: &mut Document) -> bool {
        self.close(document)
    }

    /// Tears the overlay down: listeners are removed and state resets to closed.
    pub fn unmount(&mut self, document: &mut Document) {
        self.close(document);
        self.listeners.detach(document);
        self.positioner.reset();
    }
}
