// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use understory_overlay::containment::ParentLookup;
use understory_overlay::document::Document;
use understory_overlay::observer::{Observers, SubscriptionId};
use understory_overlay::{Key, KeyResponse, OverlayController, OverlayId, PointerResponse};
use understory_placement::{AnchorGeometry, PanelPosition};
use understory_typeahead::{
    RequestId, ResultItem, ResultSource, SourceResult, TypeaheadEngine, TypeaheadEvent,
};

use crate::render::{ResultRenderer, render_rows};

/// How the result panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Presentation {
    /// Inline panel anchored under the input.
    #[default]
    Dropdown,
    /// Full-screen shell opened by a button or keyboard shortcut.
    Modal,
}

/// What the rendering layer needs to mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    /// The modal shell is shown. Always `false` for dropdowns.
    pub modal: bool,
    /// The result panel is shown.
    pub panel: bool,
}

/// A search box: typeahead engine plus dismissal and rendering glue.
///
/// The typeahead engine behaves identically in both [`Presentation`]s; only
/// what the overlay wraps differs. For a dropdown the overlay is the result
/// panel anchored to the input and is open exactly while the query is. For a
/// modal the overlay is the shell, opened from a button or shortcut, and the
/// result panel inside it follows the query.
pub struct SearchSurface<K, P, S> {
    presentation: Presentation,
    engine: TypeaheadEngine<P, S>,
    overlay: OverlayController<K>,
    grouped: bool,
    visible: Visibility,
    on_select: Observers<ResultItem<P>>,
    on_commit: Observers<str>,
    on_open_change: Observers<Visibility>,
}

impl<K, P, S> core::fmt::Debug for SearchSurface<K, P, S>
where
    K: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SearchSurface")
            .field("presentation", &self.presentation)
            .field("overlay", &self.overlay)
            .field("grouped", &self.grouped)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

impl<K, P, S> SearchSurface<K, P, S>
where
    K: Copy + Eq,
    P: Clone,
    S: ResultSource<P>,
{
    /// A dropdown under `input`, showing results in `panel`.
    pub fn dropdown(
        id: OverlayId,
        input: K,
        panel: K,
        panel_width: f64,
        engine: TypeaheadEngine<P, S>,
    ) -> Self {
        let overlay = OverlayController::new(id, input, panel, panel_width);
        Self::with_overlay(Presentation::Dropdown, overlay, engine)
    }

    /// A modal opened from `button`, rendered in `shell`.
    pub fn modal(id: OverlayId, button: K, shell: K, engine: TypeaheadEngine<P, S>) -> Self {
        let overlay = OverlayController::new(id, button, shell, 0.0);
        Self::with_overlay(Presentation::Modal, overlay, engine)
    }

    fn with_overlay(
        presentation: Presentation,
        overlay: OverlayController<K>,
        engine: TypeaheadEngine<P, S>,
    ) -> Self {
        Self {
            presentation,
            engine,
            overlay,
            grouped: false,
            visible: Visibility::default(),
            on_select: Observers::new(),
            on_commit: Observers::new(),
            on_open_change: Observers::new(),
        }
    }

    /// Renders results under category headers.
    #[must_use]
    pub fn with_grouping(mut self, grouped: bool) -> Self {
        self.grouped = grouped;
        self
    }

    /// The presentation chosen at construction.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// The typeahead engine.
    #[must_use]
    pub fn engine(&self) -> &TypeaheadEngine<P, S> {
        &self.engine
    }

    /// The overlay wrapping the panel (dropdown) or shell (modal).
    #[must_use]
    pub fn overlay(&self) -> &OverlayController<K> {
        &self.overlay
    }

    /// What should currently be mounted.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visible
    }

    /// Returns `true` while the result panel is shown.
    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.visible.panel
    }

    /// Returns `true` while the modal shell is shown.
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.visible.modal
    }

    /// When the host should next call [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.engine.next_deadline()
    }

    /// Calls `callback` once per selected result.
    pub fn on_select(
        &mut self,
        callback: impl FnMut(&ResultItem<P>) + 'static,
    ) -> SubscriptionId {
        self.on_select.subscribe(callback)
    }

    /// Calls `callback` once per Enter or search-button press with text.
    pub fn on_commit(&mut self, callback: impl FnMut(&str) + 'static) -> SubscriptionId {
        self.on_commit.subscribe(callback)
    }

    /// Calls `callback` whenever [`visibility`](Self::visibility) changes.
    pub fn on_open_change(
        &mut self,
        callback: impl FnMut(&Visibility) + 'static,
    ) -> SubscriptionId {
        self.on_open_change.subscribe(callback)
    }

    /// Opens the modal shell. Does nothing for dropdowns.
    pub fn open_modal<G>(&mut self, document: &mut Document, geometry: &G) -> bool
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        if self.presentation != Presentation::Modal {
            return false;
        }
        let opened = self.overlay.open(document, geometry);
        self.refresh();
        opened
    }

    /// Keyboard-shortcut entry point; opens the modal shell.
    pub fn shortcut<G>(&mut self, document: &mut Document, geometry: &G) -> bool
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        self.open_modal(document, geometry)
    }

    /// Closes the modal shell and dismisses the panel, keeping the text.
    pub fn close_modal(&mut self, document: &mut Document) -> bool {
        if self.presentation != Presentation::Modal {
            return false;
        }
        let closed = self.overlay.close(document);
        self.engine.dismiss();
        self.refresh();
        closed
    }

    /// The input's text changed.
    pub fn input<G>(
        &mut self,
        document: &mut Document,
        geometry: &G,
        text: &str,
        now: u64,
    ) -> Vec<TypeaheadEvent<P>>
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        let events = self.engine.set_query(text, now);
        if self.presentation == Presentation::Dropdown {
            if self.engine.state().is_open() {
                self.overlay.open(document, geometry);
            } else {
                self.overlay.close(document);
            }
        }
        self.refresh();
        events
    }

    /// Advances the debounce timer.
    pub fn poll(&mut self, now: u64) -> Vec<TypeaheadEvent<P>> {
        let events = self.engine.poll(now);
        self.refresh();
        events
    }

    /// Hands an asynchronous source response to the engine.
    pub fn deliver(
        &mut self,
        request: RequestId,
        result: SourceResult<P>,
    ) -> Vec<TypeaheadEvent<P>> {
        let events = self.engine.deliver(request, result);
        self.refresh();
        events
    }

    /// A keydown on the search input.
    ///
    /// Enter commits the typed text. Escape closes whatever is open and
    /// prevents the key's default action.
    pub fn input_key(&mut self, document: &mut Document, key: Key) -> KeyResponse {
        match key {
            Key::Enter => KeyResponse {
                closed: false,
                default_prevented: self.commit(),
            },
            Key::Escape => {
                let was_open = self.visible.panel || self.visible.modal;
                self.engine.dismiss();
                let closed = self.overlay.handle_key(document, Key::Escape).closed;
                self.refresh();
                KeyResponse {
                    closed,
                    default_prevented: was_open,
                }
            }
            _ => KeyResponse::IGNORED,
        }
    }

    /// A keydown delivered through the overlay's document listener.
    ///
    /// Only Escape is handled here. Enter pressed elsewhere on the page
    /// belongs to whatever has focus and never commits the search.
    pub fn document_key(&mut self, document: &mut Document, key: Key) -> KeyResponse {
        let response = self.overlay.handle_key(document, key);
        if response.closed {
            self.engine.dismiss();
            self.refresh();
        }
        response
    }

    /// The search button was activated. Same as Enter.
    pub fn search_button(&mut self) -> bool {
        self.commit()
    }

    /// A pointer-down anywhere in the document.
    ///
    /// Outside both the input/button and the panel/shell, this dismisses.
    pub fn pointer_down<T>(
        &mut self,
        document: &mut Document,
        target: K,
        tree: &T,
    ) -> PointerResponse
    where
        T: ParentLookup<K> + ?Sized,
    {
        let response = self.overlay.handle_pointer_down(document, target, tree);
        if response.closed {
            self.engine.dismiss();
            self.refresh();
        }
        response
    }

    /// The user activated the result with `id`.
    ///
    /// Copies its title into the input and closes the panel (and the modal).
    pub fn select(&mut self, document: &mut Document, id: &str) -> Option<ResultItem<P>> {
        let events = self.engine.select(id);
        self.finish_selection(document, events)
    }

    /// The user activated the result at `index`.
    pub fn select_index(
        &mut self,
        document: &mut Document,
        index: usize,
    ) -> Option<ResultItem<P>> {
        let events = self.engine.select_index(index);
        self.finish_selection(document, events)
    }

    /// Re-measures the input (or modal button) after a layout change.
    ///
    /// Call this when something moved the anchor while the surface is open,
    /// such as a sidebar collapsing. Returns `None` while closed.
    pub fn reposition<G>(&mut self, geometry: &G) -> Option<PanelPosition>
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        self.overlay.reposition(geometry)
    }

    /// The clear button was pressed. The modal, if any, stays open.
    pub fn clear(&mut self, document: &mut Document) {
        self.engine.clear();
        if self.presentation == Presentation::Dropdown {
            self.overlay.close(document);
        }
        self.refresh();
    }

    /// Tears the surface down: timer cancelled, in-flight request
    /// disregarded, listeners removed.
    pub fn unmount(&mut self, document: &mut Document) {
        self.engine.cancel();
        self.overlay.unmount(document);
        self.refresh();
    }

    /// Rows for the result panel, or `None` when it is hidden.
    pub fn render<R>(&self, renderer: &mut R) -> Option<Vec<R::Row>>
    where
        R: ResultRenderer<P> + ?Sized,
    {
        if !self.visible.panel {
            return None;
        }
        render_rows(self.engine.state(), renderer, self.grouped)
    }

    fn commit(&mut self) -> bool {
        let mut committed = false;
        for event in self.engine.commit() {
            if let TypeaheadEvent::Committed(query) = event {
                self.on_commit.notify(query.as_str());
                committed = true;
            }
        }
        committed
    }

    fn finish_selection(
        &mut self,
        document: &mut Document,
        events: Vec<TypeaheadEvent<P>>,
    ) -> Option<ResultItem<P>> {
        let item = events.into_iter().find_map(|event| match event {
            TypeaheadEvent::Selected(item) => Some(item),
            _ => None,
        })?;
        self.overlay.item_activated(document);
        self.refresh();
        self.on_select.notify(&item);
        Some(item)
    }

    fn refresh(&mut self) {
        let query_open = self.engine.state().is_open();
        let next = match self.presentation {
            Presentation::Dropdown => Visibility {
                modal: false,
                panel: self.overlay.is_open() && query_open,
            },
            Presentation::Modal => Visibility {
                modal: self.overlay.is_open(),
                panel: self.overlay.is_open() && query_open,
            },
        };
        if next != self.visible {
            tracing::debug!(modal = next.modal, panel = next.panel, "search surface visibility");
            self.visible = next;
            self.on_open_change.notify(&next);
        }
    }
}
