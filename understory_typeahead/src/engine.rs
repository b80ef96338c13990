// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    Debouncer, Fetch, Lifecycle, QueryState, Request, RequestId, ResultItem, ResultSource,
    SourceError, SourceResult, TypeaheadConfig,
};

/// Something a host or renderer may want to react to.
///
/// Every mutating engine call returns the events it produced, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeaheadEvent<P> {
    /// The lifecycle moved to a new state.
    LifecycleChanged(Lifecycle),
    /// A request was sent to the source.
    Dispatched(Request),
    /// The current request finished and its results are visible.
    ResultsReady {
        /// Request that produced the results.
        request: RequestId,
        /// Number of visible results after truncation.
        count: usize,
    },
    /// The source failed; the ready state is empty.
    SourceFailed(SourceError),
    /// A response arrived for a superseded request and was dropped.
    StaleDiscarded(RequestId),
    /// The user picked a result.
    Selected(ResultItem<P>),
    /// The user asked to search for the typed text verbatim.
    Committed(String),
}

/// Debounced search-as-you-type state machine.
///
/// The engine owns no clock. Hosts pass a monotonic millisecond `now` to
/// [`set_query`](Self::set_query) and call [`poll`](Self::poll) once
/// [`next_deadline`](Self::next_deadline) has passed.
#[derive(Debug)]
pub struct TypeaheadEngine<P, S> {
    config: TypeaheadConfig,
    source: S,
    state: QueryState<P>,
    debouncer: Debouncer,
    next_request: u64,
    in_flight: Option<Request>,
}

impl<P: Clone, S: ResultSource<P>> TypeaheadEngine<P, S> {
    /// Creates an engine with the default config.
    pub fn new(source: S) -> Self {
        Self::with_config(TypeaheadConfig::default(), source)
    }

    /// Creates an engine with an explicit config.
    pub fn with_config(config: TypeaheadConfig, source: S) -> Self {
        Self {
            config,
            source,
            state: QueryState::default(),
            debouncer: Debouncer::new(config.debounce_ms),
            next_request: 0,
            in_flight: None,
        }
    }

    /// Current query state.
    #[must_use]
    pub fn state(&self) -> &QueryState<P> {
        &self.state
    }

    /// Current config.
    #[must_use]
    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    /// Replaces the config. Applies from the next keystroke.
    pub fn set_config(&mut self, config: TypeaheadConfig) {
        self.config = config;
        self.debouncer.set_window(config.debounce_ms);
    }

    /// The result source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The result source, mutably.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The request whose response would currently be accepted.
    #[must_use]
    pub fn in_flight(&self) -> Option<&Request> {
        self.in_flight.as_ref()
    }

    /// When the host should next call [`poll`](Self::poll).
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.debouncer.deadline()
    }

    /// Records a keystroke.
    ///
    /// Restarts the debounce window; any in-flight request is superseded.
    pub fn set_query(&mut self, text: &str, now: u64) -> Vec<TypeaheadEvent<P>> {
        let mut events = Vec::new();
        if text == self.state.raw {
            return events;
        }
        self.state.raw.clear();
        self.state.raw.push_str(text);
        self.state.bump();
        self.disregard_in_flight();

        if !self.config.accepts(text) {
            self.close_panel(&mut events);
            return events;
        }
        self.state.results.clear();
        self.state.failure = None;
        self.debouncer.schedule(now);
        self.set_lifecycle(Lifecycle::Pending, &mut events);
        events
    }

    /// Evaluates the query if the debounce window has passed.
    pub fn poll(&mut self, now: u64) -> Vec<TypeaheadEvent<P>> {
        let mut events = Vec::new();
        if self.debouncer.fire_if_due(now) {
            self.dispatch(&mut events);
        }
        events
    }

    /// Delivers the result of a request that returned [`Fetch::Pending`].
    ///
    /// Responses for anything but the current in-flight request are dropped.
    pub fn deliver(
        &mut self,
        request: RequestId,
        result: SourceResult<P>,
    ) -> Vec<TypeaheadEvent<P>> {
        let mut events = Vec::new();
        self.complete(request, result, &mut events);
        events
    }

    /// Resets to empty: no text, no timer, no results. Idempotent.
    pub fn clear(&mut self) -> Vec<TypeaheadEvent<P>> {
        let mut events = Vec::new();
        if self.state.raw.is_empty() && self.state.debounced.is_empty() && self.is_quiescent() {
            return events;
        }
        self.state.raw.clear();
        self.state.debounced.clear();
        self.state.bump();
        self.close_panel(&mut events);
        events
    }

    /// Closes the panel and keeps the typed text.
    pub fn dismiss(&mut self) -> Vec<TypeaheadEvent<P>> {
        let mut events = Vec::new();
        self.close_panel(&mut events);
        events
    }

    /// Cancels the timer and disregards the in-flight request.
    ///
    /// Call when the owning component goes away.
    pub fn cancel(&mut self) {
        let mut events = Vec::new();
        self.close_panel(&mut events);
    }

    /// Signals that the user wants to search for the typed text as is.
    ///
    /// Does not select a result and does not change state. Emits nothing
    /// for an empty query.
    pub fn commit(&self) -> Vec<TypeaheadEvent<P>> {
        if self.state.raw.trim().is_empty() {
            return Vec::new();
        }
        tracing::debug!(query = %self.state.raw, "query committed");
        alloc::vec![TypeaheadEvent::Committed(self.state.raw.clone())]
    }

    /// Selects the visible result with `id`.
    ///
    /// Copies its title into the query and closes the panel. Unknown ids
    /// and calls outside [`Lifecycle::Ready`] do nothing.
    pub fn select(&mut self, id: &str) -> Vec<TypeaheadEvent<P>> {
        let index = self.state.results().iter().position(|item| item.id == id);
        match index {
            Some(index) => self.select_index(index),
            None => Vec::new(),
        }
    }

    /// Selects the visible result at `index`.
    pub fn select_index(&mut self, index: usize) -> Vec<TypeaheadEvent<P>> {
        let mut events = Vec::new();
        let Some(item) = self.state.results().get(index).cloned() else {
            return events;
        };
        self.state.raw.clone_from(&item.title);
        self.state.bump();
        self.close_panel(&mut events);
        tracing::debug!(id = %item.id, "result selected");
        events.push(TypeaheadEvent::Selected(item));
        events
    }

    fn is_quiescent(&self) -> bool {
        self.state.lifecycle == Lifecycle::Closed
            && !self.debouncer.is_pending()
            && self.in_flight.is_none()
    }

    fn disregard_in_flight(&mut self) {
        if let Some(request) = self.in_flight.take() {
            tracing::trace!(request = request.id.get(), "in-flight request superseded");
        }
    }

    fn close_panel(&mut self, events: &mut Vec<TypeaheadEvent<P>>) {
        if self.is_quiescent() && self.state.results.is_empty() {
            return;
        }
        self.debouncer.cancel();
        self.disregard_in_flight();
        self.state.results.clear();
        self.state.failure = None;
        self.set_lifecycle(Lifecycle::Closed, events);
    }

    fn set_lifecycle(&mut self, next: Lifecycle, events: &mut Vec<TypeaheadEvent<P>>) {
        if self.state.lifecycle == next {
            return;
        }
        tracing::debug!(from = ?self.state.lifecycle, to = ?next, "typeahead lifecycle");
        self.state.lifecycle = next;
        self.state.bump();
        events.push(TypeaheadEvent::LifecycleChanged(next));
    }

    fn dispatch(&mut self, events: &mut Vec<TypeaheadEvent<P>>) {
        let id = RequestId::new(self.next_request);
        self.next_request += 1;
        self.state.debounced.clone_from(&self.state.raw);
        let request = Request {
            id,
            query: self.state.debounced.clone(),
        };
        self.in_flight = Some(request.clone());
        self.set_lifecycle(Lifecycle::Loading, events);
        events.push(TypeaheadEvent::Dispatched(request.clone()));

        match self.source.fetch(&request) {
            Fetch::Ready(result) => self.complete(id, result, events),
            Fetch::Pending => {
                tracing::trace!(request = id.get(), "request pending");
            }
        }
    }

    fn complete(
        &mut self,
        request: RequestId,
        result: SourceResult<P>,
        events: &mut Vec<TypeaheadEvent<P>>,
    ) {
        let current = self
            .in_flight
            .as_ref()
            .is_some_and(|r| r.id == request && r.query == self.state.debounced);
        if !current {
            tracing::trace!(request = request.get(), "stale response discarded");
            events.push(TypeaheadEvent::StaleDiscarded(request));
            return;
        }
        self.in_flight = None;

        match result {
            Ok(mut items) => {
                items.truncate(self.config.max_results);
                self.state.results = items;
                self.state.failure = None;
            }
            Err(error) => {
                tracing::warn!(%error, request = request.get(), "result source failed");
                self.state.results.clear();
                self.state.failure = Some(error.clone());
                events.push(TypeaheadEvent::SourceFailed(error));
            }
        }
        self.state.bump();
        events.push(TypeaheadEvent::ResultsReady {
            request,
            count: self.state.results.len(),
        });
        self.set_lifecycle(Lifecycle::Ready, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ResultKind, StaticSource};
    use alloc::vec;

    fn mock() -> StaticSource {
        StaticSource::new(vec![
            ResultItem::plain("1", "black", ResultKind::Suggestion),
            ResultItem::plain("2", "blender", ResultKind::Result),
            ResultItem::plain("8", "blue", ResultKind::Trending),
        ])
    }

    fn engine() -> TypeaheadEngine<(), StaticSource> {
        TypeaheadEngine::new(mock())
    }

    fn dispatched<P>(events: &[TypeaheadEvent<P>]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|e| match e {
                TypeaheadEvent::Dispatched(r) => Some(r.query.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn keystroke_enters_pending_with_deadline() {
        let mut e = engine();
        let ev = e.set_query("b", 1000);
        assert_eq!(ev, [TypeaheadEvent::LifecycleChanged(Lifecycle::Pending)]);
        assert_eq!(e.next_deadline(), Some(1300));
        assert!(e.state().results().is_empty());
    }

    #[test]
    fn poll_before_deadline_does_nothing() {
        let mut e = engine();
        e.set_query("b", 0);
        assert!(e.poll(299).is_empty());
        assert_eq!(e.state().lifecycle(), Lifecycle::Pending);
    }

    #[test]
    fn synchronous_source_still_passes_through_loading() {
        let mut e = engine();
        e.set_query("bl", 0);
        let ev = e.poll(300);
        assert_eq!(ev[0], TypeaheadEvent::LifecycleChanged(Lifecycle::Loading));
        assert_eq!(dispatched(&ev), ["bl"]);
        assert_eq!(
            ev.last(),
            Some(&TypeaheadEvent::LifecycleChanged(Lifecycle::Ready))
        );
        assert_eq!(e.state().results().len(), 3);
        assert_eq!(e.state().debounced(), "bl");
    }

    #[test]
    fn same_text_is_not_a_keystroke() {
        let mut e = engine();
        e.set_query("b", 0);
        assert!(e.set_query("b", 200).is_empty());
        assert_eq!(e.next_deadline(), Some(300));
    }

    #[test]
    fn backspace_to_empty_closes() {
        let mut e = engine();
        e.set_query("b", 0);
        let ev = e.set_query("", 100);
        assert_eq!(ev, [TypeaheadEvent::LifecycleChanged(Lifecycle::Closed)]);
        assert_eq!(e.next_deadline(), None);
        assert!(e.poll(1000).is_empty());
    }

    #[test]
    fn max_results_truncates_in_source_order() {
        let mut e = TypeaheadEngine::with_config(
            TypeaheadConfig::default().with_max_results(2),
            mock(),
        );
        e.set_query("b", 0);
        e.poll(300);
        let ids: Vec<_> = e.state().results().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn min_chars_keeps_short_queries_closed() {
        let mut e =
            TypeaheadEngine::with_config(TypeaheadConfig::default().with_min_chars(3), mock());
        assert!(e.set_query("bl", 0).is_empty());
        assert_eq!(e.state().lifecycle(), Lifecycle::Closed);
        assert_eq!(e.next_deadline(), None);
        assert_eq!(e.state().raw(), "bl");
        e.set_query("blu", 10);
        assert_eq!(e.state().lifecycle(), Lifecycle::Pending);
    }

    #[test]
    fn failure_becomes_empty_ready() {
        let mut e: TypeaheadEngine<(), _> = TypeaheadEngine::new(|_: &Request| {
            Fetch::Ready(Err(SourceError::Failed("offline".into())))
        });
        e.set_query("x", 0);
        let ev = e.poll(300);
        assert!(ev.contains(&TypeaheadEvent::SourceFailed(SourceError::Failed(
            "offline".into()
        ))));
        assert_eq!(e.state().lifecycle(), Lifecycle::Ready);
        assert!(e.state().results().is_empty());
        assert!(e.state().failure().is_some());

        // A fresh keystroke retries and forgets the failure.
        e.set_query("xy", 400);
        assert_eq!(e.state().failure(), None);
    }

    #[test]
    fn commit_emits_raw_without_mutating() {
        let mut e = engine();
        e.set_query("blu", 0);
        e.poll(300);
        let rev = e.state().revision();
        assert_eq!(
            e.commit(),
            [TypeaheadEvent::Committed(String::from("blu"))]
        );
        assert_eq!(e.state().revision(), rev);
        assert_eq!(e.state().lifecycle(), Lifecycle::Ready);
    }

    #[test]
    fn commit_on_blank_is_silent() {
        let mut e = engine();
        assert!(e.commit().is_empty());
        e.set_query("   ", 0);
        assert!(e.commit().is_empty());
    }

    #[test]
    fn select_copies_title_and_closes() {
        let mut e = engine();
        e.set_query("bl", 0);
        e.poll(300);
        let ev = e.select("8");
        assert_eq!(
            ev,
            [
                TypeaheadEvent::LifecycleChanged(Lifecycle::Closed),
                TypeaheadEvent::Selected(ResultItem::plain("8", "blue", ResultKind::Trending)),
            ]
        );
        assert_eq!(e.state().raw(), "blue");
        assert!(!e.state().is_open());
    }

    #[test]
    fn select_outside_ready_is_ignored() {
        let mut e = engine();
        e.set_query("bl", 0);
        assert!(e.select("8").is_empty());
        assert!(e.select_index(0).is_empty());
    }

    #[test]
    fn dismiss_keeps_text_and_cancels_timer() {
        let mut e = engine();
        e.set_query("bl", 0);
        e.dismiss();
        assert_eq!(e.state().raw(), "bl");
        assert!(!e.state().is_open());
        assert!(e.poll(1000).is_empty());
        assert!(e.dismiss().is_empty());
    }

    #[test]
    fn cancel_disregards_in_flight() {
        let mut e: TypeaheadEngine<(), _> = TypeaheadEngine::new(|_: &Request| Fetch::Pending);
        e.set_query("a", 0);
        let req = match &e.poll(300)[1] {
            TypeaheadEvent::Dispatched(r) => r.id,
            other => panic!("unexpected {other:?}"),
        };
        e.cancel();
        assert_eq!(e.in_flight(), None);
        assert_eq!(
            e.deliver(req, Ok(Vec::new())),
            [TypeaheadEvent::StaleDiscarded(req)]
        );
        assert_eq!(e.state().lifecycle(), Lifecycle::Closed);
    }

    #[test]
    fn clear_twice_equals_clear_once() {
        let mut e = engine();
        e.set_query("blue", 0);
        e.poll(300);
        e.clear();
        let once = e.state().clone();
        assert!(e.clear().is_empty());
        assert_eq!(*e.state(), once);
        assert_eq!(e.state().raw(), "");
        assert_eq!(e.next_deadline(), None);
    }
}
