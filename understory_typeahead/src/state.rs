// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::{ResultItem, SourceError};

/// Where the engine is between a keystroke and a rendered result list.
///
/// ```text
///            input           deadline          result
/// Closed ───────────► Pending ───────► Loading ───────► Ready
///   ▲                  │  ▲ input         │                │
///   └── clear/dismiss/select/too short ◄──┴────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// No panel: the query is empty or too short, or it was dismissed.
    #[default]
    Closed,
    /// Waiting for the debounce window to pass.
    Pending,
    /// A request is out and has not returned.
    Loading,
    /// Results (possibly none) are available.
    Ready,
}

/// Coarse phase shown to renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing to show.
    #[default]
    Idle,
    /// Results are on the way; show a loading row, never old results.
    Loading,
    /// Results are final for the current query.
    Ready,
}

impl Lifecycle {
    /// The renderer-facing phase. `Pending` already reads as loading.
    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            Self::Closed => Phase::Idle,
            Self::Pending | Self::Loading => Phase::Loading,
            Self::Ready => Phase::Ready,
        }
    }

    /// Returns `true` if a result panel should be shown.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Snapshot of a typeahead query.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<P> {
    pub(crate) raw: String,
    pub(crate) debounced: String,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) results: Vec<ResultItem<P>>,
    pub(crate) failure: Option<SourceError>,
    pub(crate) revision: u64,
}

impl<P> Default for QueryState<P> {
    fn default() -> Self {
        Self {
            raw: String::new(),
            debounced: String::new(),
            lifecycle: Lifecycle::Closed,
            results: Vec::new(),
            failure: None,
            revision: 0,
        }
    }
}

impl<P> QueryState<P> {
    /// Text as typed, updated on every keystroke.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The query most recently sent for evaluation.
    #[must_use]
    pub fn debounced(&self) -> &str {
        &self.debounced
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Current renderer phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Returns `true` if a result panel should be shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lifecycle.is_open()
    }

    /// Results for [`debounced`](Self::debounced).
    ///
    /// Always empty unless the phase is [`Phase::Ready`].
    #[must_use]
    pub fn results(&self) -> &[ResultItem<P>] {
        if self.lifecycle == Lifecycle::Ready {
            &self.results
        } else {
            &[]
        }
    }

    /// The error behind an empty ready state, if the source failed.
    #[must_use]
    pub fn failure(&self) -> Option<&SourceError> {
        self.failure.as_ref()
    }

    /// Bumps on every observable change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
