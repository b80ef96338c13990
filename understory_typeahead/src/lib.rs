// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_typeahead --heading-base-level=0

//! Understory Typeahead: a debounced search-as-you-type state machine.
//!
//! [`TypeaheadEngine`] owns a query, a debounce timer and a result list, and
//! moves through four states:
//!
//! - [`Lifecycle::Closed`]: the query is empty (or shorter than
//!   [`TypeaheadConfig::min_chars`]) or the panel was dismissed.
//! - [`Lifecycle::Pending`]: text changed and the debounce window has not
//!   passed. Every keystroke restarts the window, so a fast typist never
//!   triggers an evaluation mid-word.
//! - [`Lifecycle::Loading`]: a [`Request`] is out to the [`ResultSource`].
//!   Synchronous sources pass through this state too.
//! - [`Lifecycle::Ready`]: results are final for the current query, truncated
//!   to [`TypeaheadConfig::max_results`] in source order. A failing source
//!   yields an empty ready state, never a stuck load.
//!
//! The engine is sans-io. It reads no clock and spawns nothing: the host
//! passes monotonic milliseconds into [`TypeaheadEngine::set_query`] and calls
//! [`TypeaheadEngine::poll`] when [`TypeaheadEngine::next_deadline`] is due.
//! Asynchronous sources answer [`Fetch::Pending`] and the host later hands
//! the response to [`TypeaheadEngine::deliver`].
//!
//! ## Ordering
//!
//! Each request carries a monotonic [`RequestId`]. A response is applied only
//! if it belongs to the one request the engine is still waiting for; anything
//! else is reported as [`TypeaheadEvent::StaleDiscarded`] and dropped, so a
//! slow answer to an old keystroke can never overwrite a newer one.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_typeahead::{
//!     Lifecycle, ResultItem, ResultKind, StaticSource, TypeaheadEngine, TypeaheadEvent,
//! };
//!
//! let source = StaticSource::new(vec![
//!     ResultItem::plain("7", "black", ResultKind::Suggestion),
//!     ResultItem::plain("8", "blue", ResultKind::Trending),
//! ]);
//! let mut engine = TypeaheadEngine::new(source);
//!
//! engine.set_query("b", 0);
//! engine.set_query("bl", 120);
//! engine.set_query("blu", 250);
//! assert_eq!(engine.state().lifecycle(), Lifecycle::Pending);
//! assert_eq!(engine.next_deadline(), Some(550));
//!
//! let events = engine.poll(550);
//! assert!(events.iter().any(|e| matches!(e, TypeaheadEvent::Dispatched(r) if r.query == "blu")));
//! assert_eq!(engine.state().lifecycle(), Lifecycle::Ready);
//! assert_eq!(engine.state().results()[0].title, "blue");
//!
//! engine.select("8");
//! assert_eq!(engine.state().raw(), "blue");
//! assert_eq!(engine.state().lifecycle(), Lifecycle::Closed);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod debounce;
mod engine;
mod group;
mod item;
mod source;
mod state;

pub use config::TypeaheadConfig;
pub use debounce::Debouncer;
pub use engine::{TypeaheadEngine, TypeaheadEvent};
pub use group::{ResultGroup, group_by_category};
pub use item::{ResultItem, ResultKind};
pub use source::{
    Fetch, Request, RequestId, ResultSource, SourceError, SourceResult, StaticSource,
};
pub use state::{Lifecycle, Phase, QueryState};
