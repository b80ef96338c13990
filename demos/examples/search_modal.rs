// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global search in a modal, opened from a keyboard shortcut.
//!
//! Results are grouped by category. Enter commits the typed text; Escape
//! closes the modal.
//!
//! Run:
//! - `cargo run -p understory_demos --example search_modal [config.json]`

use understory_demos::{Clock, DashboardPage, DemoConfig, catalog, init_tracing};
use understory_overlay::document::Document;
use understory_overlay::{Key, OverlayId};
use understory_search::{PlainTextRenderer, SearchSurface};
use understory_typeahead::TypeaheadEngine;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = DemoConfig::from_args()?;
    let page = DashboardPage::default();
    let mut clock = Clock::default();
    let mut document = Document::new();

    let engine = TypeaheadEngine::with_config(config.typeahead, catalog());
    let mut search =
        SearchSurface::modal(OverlayId::new(7), "search-shortcut", "search-modal", engine)
            .with_grouping(true);
    search.on_open_change(|v| println!("modal={} panel={}", v.modal, v.panel));
    search.on_commit(|query| println!("commit {query:?}"));

    search.shortcut(&mut document, &page);
    for (text, gap) in [("b", 0), ("bl", 90), ("blu", 80)] {
        search.input(&mut document, &page, text, clock.advance(gap));
    }
    search.poll(clock.advance(config.typeahead.debounce_ms));

    for row in search.render(&mut PlainTextRenderer).unwrap_or_default() {
        println!("  | {row}");
    }

    search.input_key(&mut document, Key::Enter);
    // Enter aimed at another field on the page reaches the document listener only.
    search.document_key(&mut document, Key::Enter);
    let response = search.document_key(&mut document, Key::Escape);
    println!(
        "escape closed={} default_prevented={}",
        response.closed, response.default_prevented
    );
    anyhow::ensure!(document.listener_count() == 0, "modal left listeners behind");
    Ok(())
}
