// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The result-source seam.
//!
//! A source answers a [`Request`] either immediately ([`Fetch::Ready`]) or
//! later ([`Fetch::Pending`], followed by the host calling
//! [`TypeaheadEngine::deliver`](crate::TypeaheadEngine::deliver) with the
//! request's id). The engine treats both paths identically.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ResultItem;

/// Monotonic identifier of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// An evaluation dispatched to a [`ResultSource`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// Sequence number; later requests have larger ids.
    pub id: RequestId,
    /// The debounced query being evaluated.
    pub query: String,
}

/// Why a source could not produce results.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source ran and failed.
    #[error("result source failed: {0}")]
    Failed(String),
    /// The source could not be reached.
    #[error("result source unavailable")]
    Unavailable,
}

/// What a source produced for one request.
pub type SourceResult<P> = Result<Vec<ResultItem<P>>, SourceError>;

/// Outcome of [`ResultSource::fetch`].
#[derive(Clone, Debug, PartialEq)]
pub enum Fetch<P> {
    /// The evaluation finished synchronously.
    Ready(SourceResult<P>),
    /// The evaluation continues elsewhere; deliver its result later.
    Pending,
}

/// Produces results for a query.
///
/// Closures of the form `FnMut(&Request) -> Fetch<P>` implement this trait.
pub trait ResultSource<P> {
    /// Starts evaluating `request`.
    fn fetch(&mut self, request: &Request) -> Fetch<P>;
}

impl<P, F> ResultSource<P> for F
where
    F: FnMut(&Request) -> Fetch<P>,
{
    fn fetch(&mut self, request: &Request) -> Fetch<P> {
        self(request)
    }
}

/// A fixed list filtered in memory.
///
/// An item matches when its title or subtitle contains the query,
/// ignoring case. Matches keep the list's order.
#[derive(Clone, Debug, Default)]
pub struct StaticSource<P = ()> {
    items: Vec<ResultItem<P>>,
}

impl<P> StaticSource<P> {
    /// Wraps a list of items.
    #[must_use]
    pub fn new(items: Vec<ResultItem<P>>) -> Self {
        Self { items }
    }

    /// The full, unfiltered list.
    #[must_use]
    pub fn items(&self) -> &[ResultItem<P>] {
        &self.items
    }
}

impl<P: Clone> StaticSource<P> {
    /// Items matching `query`, in list order.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<ResultItem<P>> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item
                        .subtitle
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

impl<P: Clone> ResultSource<P> for StaticSource<P> {
    fn fetch(&mut self, request: &Request) -> Fetch<P> {
        Fetch::Ready(Ok(self.filter(&request.query)))
    }
}
