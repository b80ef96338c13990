// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_search --heading-base-level=0

//! Understory Search: search boxes built from a typeahead engine and an overlay.
//!
//! [`SearchSurface`] wires an [`understory_typeahead::TypeaheadEngine`] to an
//! input's change and keydown events and to an
//! [`understory_overlay::OverlayController`] for dismissal:
//!
//! - Typing feeds the engine. In the [`Presentation::Dropdown`] variant the
//!   result panel opens exactly while the query is non-empty.
//! - Enter (or the search button) commits the typed text through
//!   [`SearchSurface::on_commit`]. It never picks a result on its own.
//! - Activating a result copies its title into the input, closes the panel
//!   and reports the item through [`SearchSurface::on_select`].
//! - Escape, or a pointer-down outside the input and panel, dismisses.
//!
//! [`Presentation::Modal`] wraps the same behavior in a shell opened from a
//! button or keyboard shortcut. Debounce timing, selection and dismissal are
//! identical in both variants; only what gets mounted differs, as reported by
//! [`SearchSurface::visibility`].
//!
//! Rows are produced by a [`ResultRenderer`] chosen by the consumer;
//! [`PlainTextRenderer`] is a ready-made one for logs and terminals.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_overlay::OverlayId;
//! use understory_overlay::document::Document;
//! use understory_placement::AnchorGeometry;
//! use understory_search::{PlainTextRenderer, SearchSurface};
//! use understory_typeahead::{ResultItem, ResultKind, StaticSource, TypeaheadEngine};
//!
//! struct Layout;
//! impl AnchorGeometry<u32> for Layout {
//!     fn anchor_rect(&self, _node: u32) -> Option<Rect> {
//!         Some(Rect::new(16.0, 16.0, 416.0, 48.0))
//!     }
//!     fn viewport(&self) -> Size {
//!         Size::new(1280.0, 800.0)
//!     }
//! }
//!
//! let engine = TypeaheadEngine::new(StaticSource::new(vec![
//!     ResultItem::plain("8", "blue", ResultKind::Trending),
//! ]));
//! let mut doc = Document::new();
//! let mut search = SearchSurface::dropdown(OverlayId::new(0), 1_u32, 2, 400.0, engine);
//!
//! search.input(&mut doc, &Layout, "blu", 0);
//! assert!(search.is_panel_open());
//! assert_eq!(
//!     search.render(&mut PlainTextRenderer),
//!     Some(vec![String::from("Searching for \"blu\"...")])
//! );
//!
//! search.poll(300);
//! assert_eq!(
//!     search.render(&mut PlainTextRenderer),
//!     Some(vec![String::from("0. blue [trending]")])
//! );
//!
//! let picked = search.select(&mut doc, "8");
//! assert_eq!(picked.map(|item| item.title), Some(String::from("blue")));
//! assert!(!search.is_panel_open());
//! assert_eq!(doc.listener_count(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod render;
mod surface;

pub use render::{PlainTextRenderer, ResultRenderer, render_rows};
pub use surface::{Presentation, SearchSurface, Visibility};
