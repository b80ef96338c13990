// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluggable result rendering.
//!
//! A [`ResultRenderer`] turns the visible part of a [`QueryState`] into rows
//! of whatever type the host draws: DOM nodes, widget descriptions, terminal
//! lines. The surface decides *which* rows exist; the renderer decides what
//! each looks like.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use understory_typeahead::{
    Phase, QueryState, ResultItem, ResultKind, SourceError, group_by_category,
};

/// Builds rows for a result panel.
pub trait ResultRenderer<P> {
    /// The host's row type.
    type Row;

    /// The single row shown while results are on the way.
    fn loading(&mut self, query: &str) -> Self::Row;

    /// The single row shown for a ready query with no results.
    ///
    /// `failure` is set when the source failed rather than matched nothing.
    fn empty(&mut self, query: &str, failure: Option<&SourceError>) -> Self::Row;

    /// A category header, emitted before the first item of each category.
    fn header(&mut self, category: &str) -> Self::Row;

    /// One result. `index` addresses the item for selection by position.
    fn item(&mut self, item: &ResultItem<P>, index: usize) -> Self::Row;
}

/// Rows for `state`, or `None` when no panel should be shown.
///
/// While loading only the loading row is produced; results from an earlier
/// query are never rendered.
pub fn render_rows<P, R>(
    state: &QueryState<P>,
    renderer: &mut R,
    grouped: bool,
) -> Option<Vec<R::Row>>
where
    R: ResultRenderer<P> + ?Sized,
{
    match state.phase() {
        Phase::Idle => None,
        Phase::Loading => Some(alloc::vec![renderer.loading(state.raw())]),
        Phase::Ready => {
            let results = state.results();
            if results.is_empty() {
                return Some(alloc::vec![renderer.empty(state.debounced(), state.failure())]);
            }
            let mut rows = Vec::with_capacity(results.len());
            if !grouped {
                for (index, item) in results.iter().enumerate() {
                    rows.push(renderer.item(item, index));
                }
                return Some(rows);
            }
            for group in group_by_category(results) {
                if let Some(category) = group.category {
                    rows.push(renderer.header(category));
                }
                for item in group.items {
                    let index = results
                        .iter()
                        .position(|r| core::ptr::eq(r, item))
                        .unwrap_or_default();
                    rows.push(renderer.item(item, index));
                }
            }
            Some(rows)
        }
    }
}

/// Renders rows as single lines of text.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTextRenderer;

fn kind_tag(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Suggestion => "suggestion",
        ResultKind::Trending => "trending",
        ResultKind::Recent => "recent",
        ResultKind::Result => "result",
    }
}

impl<P> ResultRenderer<P> for PlainTextRenderer {
    type Row = String;

    fn loading(&mut self, query: &str) -> String {
        format!("Searching for \"{query}\"...")
    }

    fn empty(&mut self, query: &str, failure: Option<&SourceError>) -> String {
        match failure {
            Some(_) => String::from("Search is unavailable right now"),
            None => format!("No results for \"{query}\""),
        }
    }

    fn header(&mut self, category: &str) -> String {
        format!("# {category}")
    }

    fn item(&mut self, item: &ResultItem<P>, index: usize) -> String {
        let tag = kind_tag(item.kind);
        match &item.subtitle {
            Some(subtitle) => format!("{index}. {} ({subtitle}) [{tag}]", item.title),
            None => format!("{index}. {} [{tag}]", item.title),
        }
    }
}
