// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::PlacementConfig;

/// Resolved on-screen placement for a floating panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelPosition {
    /// Top-left corner of the panel in viewport coordinates.
    pub origin: Point,
    /// Tallest the panel may grow before it must scroll internally.
    ///
    /// Never negative.
    pub max_height: f64,
    /// `true` when [`max_height`](Self::max_height) is below
    /// [`PlacementConfig::min_height`].
    pub cramped: bool,
}

impl PanelPosition {
    /// Left edge of the panel.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.origin.x
    }

    /// Top edge of the panel.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.origin.y
    }

    /// Panel rectangle for a given width and natural content height.
    ///
    /// The height is limited to [`max_height`](Self::max_height).
    #[must_use]
    pub fn panel_rect(&self, width: f64, content_height: f64) -> Rect {
        let height = content_height.max(0.0).min(self.max_height);
        Rect::from_origin_size(self.origin, Size::new(width.max(0.0), height))
    }
}

/// Place a panel of `panel_width` below `anchor`, clamped to `viewport`.
///
/// - Vertically the panel starts `gap` below the anchor's bottom edge and is
///   never moved above it.
/// - Horizontally the panel's left edge follows the anchor's left edge. If the
///   right edge would pass `viewport.width - margin`, the panel shifts left just
///   enough to touch it.
/// - Neither coordinate is allowed below `margin`; when the panel is wider than
///   the usable width, the left margin wins.
///
/// Anchors outside the viewport are not an error; they clamp to the margin.
#[must_use]
pub fn compute_position(
    anchor: Rect,
    panel_width: f64,
    viewport: Size,
    config: &PlacementConfig,
) -> PanelPosition {
    let anchor = anchor.abs();
    let margin = config.margin.max(0.0);
    let panel_width = panel_width.max(0.0);

    let right_limit = viewport.width - margin;
    let mut x = anchor.x0;
    if x + panel_width > right_limit {
        x = right_limit - panel_width;
    }
    let x = x.max(margin);

    let y = (anchor.y1 + config.gap).max(margin);

    let max_height = (viewport.height - anchor.y1 - 2.0 * margin).max(0.0);

    PanelPosition {
        origin: Point::new(x, y),
        max_height,
        cramped: max_height < config.min_height,
    }
}
