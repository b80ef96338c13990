// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: anchored placement for floating panels.
//!
//! This crate computes where a floating panel (dropdown, popover, suggestion
//! list) should appear on screen, given the bounding box of the element that
//! triggered it. It is deliberately small and headless:
//!
//! - [`compute_position`] is a pure function from an anchor rectangle, a panel
//!   width and the viewport size to a [`PanelPosition`].
//! - [`Positioner`] wraps that function with the bits of state a live panel
//!   needs: its width, its [`PlacementConfig`] and the last position it was
//!   given, so a failed measurement leaves the panel where it was.
//! - [`AnchorGeometry`] is the seam to the host: anything that can measure a
//!   node in viewport coordinates (a DOM `getBoundingClientRect`, a box tree,
//!   a terminal layout) can drive a [`Positioner`].
//!
//! ## Placement rules
//!
//! - The panel always opens **below** the anchor, separated by
//!   [`PlacementConfig::gap`]. It never flips above; when there is little room
//!   below, [`PanelPosition::max_height`] shrinks and
//!   [`PanelPosition::cramped`] is set so the renderer can make the panel
//!   scroll internally.
//! - The panel's left edge follows the anchor's left edge, shifted left just
//!   enough to keep its right edge inside `viewport.width - margin`.
//! - `x` and `y` never go below [`PlacementConfig::margin`].
//!
//! Positions are recomputed only on request. Call
//! [`Positioner::update_position`] when the panel opens and whenever the
//! layout around the anchor changes (for example a sidebar collapses); nothing
//! here observes layout on its own.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_placement::{PlacementConfig, compute_position};
//!
//! let viewport = Size::new(800.0, 600.0);
//! // A button hugging the right edge of the window.
//! let anchor = Rect::new(760.0, 10.0, 790.0, 40.0);
//!
//! let pos = compute_position(anchor, 240.0, viewport, &PlacementConfig::default());
//! // Shifted left so the 240px panel stays inside the right margin.
//! assert_eq!(pos.x(), 800.0 - 8.0 - 240.0);
//! // Opened below the anchor with the default 4px gap.
//! assert_eq!(pos.y(), 44.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod geometry;
mod position;
mod positioner;

pub use config::PlacementConfig;
pub use geometry::{AnchorGeometry, PositionError};
pub use position::{PanelPosition, compute_position};
pub use positioner::Positioner;
