// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_overlay --heading-base-level=0

//! Understory Overlay: open/close state and dismissal for anchored overlays.
//!
//! An overlay is a floating panel attached to a trigger: a dropdown menu, a
//! popover, a suggestion list. This crate owns the parts every such panel
//! repeats and gets subtly wrong:
//!
//! - [`OverlayController`]: the `Closed`/`Open` state machine for one overlay,
//!   with toggle-on-trigger, outside pointer-down dismissal, Escape dismissal
//!   and close-on-item-activation.
//! - [`document::Document`] and [`document::ListenerRegistry`]: bookkeeping for
//!   document-level listeners. An overlay holds listeners only while open, so
//!   every open/close cycle leaves the document as it found it.
//! - [`containment`]: "is this event target inside that subtree?" over a
//!   host-provided parent relation.
//! - [`OverlayHost`]: many overlays sharing one document, with events routed
//!   only to overlays that currently listen, and open-change notifications
//!   through [`observer::Observers`].
//!
//! Placement is delegated to [`understory_placement`]: opening an overlay
//! measures its trigger and stores a [`PanelPosition`] for the renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_overlay::containment::ParentMap;
//! use understory_overlay::{Key, OverlayHost};
//! use understory_placement::AnchorGeometry;
//!
//! struct Layout;
//! impl AnchorGeometry<&'static str> for Layout {
//!     fn anchor_rect(&self, _node: &'static str) -> Option<Rect> {
//!         Some(Rect::new(0.0, 0.0, 120.0, 32.0))
//!     }
//!     fn viewport(&self) -> Size {
//!         Size::new(1024.0, 768.0)
//!     }
//! }
//!
//! let mut tree = ParentMap::new();
//! tree.insert("file-item-open", "file-panel");
//!
//! let mut host = OverlayHost::new();
//! let file = host.insert("file-button", "file-panel", 200.0);
//!
//! host.toggle(file, &Layout);
//! assert!(host.is_open(file));
//!
//! // A click inside the panel does not dismiss.
//! assert!(host.dispatch_pointer_down("file-item-open", &tree).is_empty());
//! // A click anywhere else does.
//! assert_eq!(host.dispatch_pointer_down("page", &tree), [file]);
//! assert_eq!(host.document().listener_count(), 0);
//!
//! // Escape while closed is left to the page.
//! assert!(!host.dispatch_key(Key::Escape).default_prevented);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod containment;
pub mod document;
pub mod observer;

mod controller;
mod host;
mod key;

pub use controller::{OverlayController, OverlayId, OverlayState, PointerResponse};
pub use host::{OpenChange, OverlayHost};
pub use key::{Key, KeyResponse};
pub use understory_placement::{PanelPosition, PlacementConfig};
