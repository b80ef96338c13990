// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Spacing constants used by [`compute_position`](crate::compute_position).
///
/// All values are in the same units as the anchor rectangle (typically
/// logical pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementConfig {
    /// Vertical distance between the anchor's bottom edge and the panel's top edge.
    pub gap: f64,
    /// Minimum distance kept between the panel and every viewport edge.
    pub margin: f64,
    /// Below this available height the panel is reported as cramped.
    pub min_height: f64,
}

impl PlacementConfig {
    /// Default gap below the anchor.
    pub const DEFAULT_GAP: f64 = 4.0;
    /// Default viewport margin.
    pub const DEFAULT_MARGIN: f64 = 8.0;
    /// Default minimum usable panel height.
    pub const DEFAULT_MIN_HEIGHT: f64 = 120.0;

    /// Returns a copy with the given gap.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Returns a copy with the given viewport margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Returns a copy with the given minimum usable height.
    #[must_use]
    pub fn with_min_height(mut self, min_height: f64) -> Self {
        self.min_height = min_height;
        self
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            gap: Self::DEFAULT_GAP,
            margin: Self::DEFAULT_MARGIN,
            min_height: Self::DEFAULT_MIN_HEIGHT,
        }
    }
}
