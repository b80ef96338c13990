// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header search box with a slow backend.
//!
//! Types "bl", pauses long enough for a request to go out, then types
//! "blue". The backend answers the two requests out of order; the late
//! answer for "bl" is discarded and the panel shows the "blue" results.
//! Collapsing the sidebar afterwards moves the open panel with the input.
//!
//! Run:
//! - `cargo run -p understory_demos --example search_dropdown [config.json]`

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use understory_demos::{Clock, DashboardPage, DemoConfig, Destination, catalog, init_tracing};
use understory_overlay::OverlayId;
use understory_overlay::document::Document;
use understory_search::{PlainTextRenderer, SearchSurface};
use understory_typeahead::{Fetch, Request, TypeaheadEngine, TypeaheadEvent};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = DemoConfig::from_args()?;
    let mut page = DashboardPage::default();
    let mut clock = Clock::default();
    let mut document = Document::new();

    // Requests queue up here until the "network" answers them.
    let outbox: Rc<RefCell<VecDeque<Request>>> = Rc::default();
    let sent = outbox.clone();
    let backend = move |request: &Request| {
        sent.borrow_mut().push_back(request.clone());
        Fetch::Pending
    };
    let mock = catalog();

    let engine: TypeaheadEngine<Destination, _> =
        TypeaheadEngine::with_config(config.typeahead, backend);
    let mut search = SearchSurface::dropdown(
        OverlayId::new(0),
        "search-input",
        "search-panel",
        480.0,
        engine,
    );
    search.on_select(|item| match &item.payload {
        Destination::Keyword(k) => println!("navigate: keyword research for {k:?}"),
        Destination::Channel(c) => println!("navigate: channel {c}"),
        Destination::Video(v) => println!("navigate: video {v}"),
    });
    search.on_commit(|query| println!("navigate: full-text search for {query:?}"));

    let window = config.typeahead.debounce_ms;
    search.input(&mut document, &page, "bl", clock.now());
    search.poll(clock.advance(window));
    search.input(&mut document, &page, "blue", clock.advance(50));
    search.poll(clock.advance(window));
    print_rows(&search);

    // Answer newest first, then the stale one.
    let requests: Vec<Request> = outbox.borrow_mut().drain(..).collect();
    for request in requests.iter().rev() {
        let events = search.deliver(request.id, Ok(mock.filter(&request.query)));
        for event in events {
            if let TypeaheadEvent::StaleDiscarded(id) = event {
                println!("discarded late answer for request {}", id.get());
            }
        }
    }
    print_rows(&search);

    page.sidebar_collapsed = true;
    if let Some(pos) = search.reposition(&page) {
        println!("sidebar collapsed: panel moved to x={}", pos.x());
    }

    search.select_index(&mut document, 0);
    println!("input now reads {:?}", search.engine().state().raw());
    search.unmount(&mut document);
    Ok(())
}

fn print_rows<S>(search: &SearchSurface<&'static str, Destination, S>)
where
    S: understory_typeahead::ResultSource<Destination>,
{
    match search.render(&mut PlainTextRenderer) {
        Some(rows) => {
            for row in rows {
                println!("  | {row}");
            }
        }
        None => println!("  (panel closed)"),
    }
}
