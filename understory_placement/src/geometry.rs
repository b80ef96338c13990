// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host geometry seam and the placement error type.

use kurbo::{Rect, Size};

/// Measures anchors in viewport coordinates.
///
/// Implement this for whatever owns layout in your host: a DOM bridge calling
/// `getBoundingClientRect`, a box tree, or a terminal layout pass.
///
/// Returning `None` from [`anchor_rect`](Self::anchor_rect) means the node is
/// not currently measurable (for example it was unmounted between a toggle and
/// the position update). Callers treat that as a skipped update, not a fault.
pub trait AnchorGeometry<K> {
    /// Bounding box of `node` in viewport coordinates, if it is mounted.
    fn anchor_rect(&self, node: K) -> Option<Rect>;

    /// Current viewport size.
    fn viewport(&self) -> Size;
}

/// Errors reported by [`Positioner`](crate::Positioner).
///
/// None of these are fatal; they explain why a position update was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The anchor could not be measured for this update.
    #[error("anchor geometry unavailable")]
    GeometryUnavailable,
}
