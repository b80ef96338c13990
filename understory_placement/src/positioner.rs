// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful positioning for one live panel.
//!
//! ## Usage
//!
//! 1) Create a [`Positioner`] with the panel's width when the owning component mounts.
//! 2) Call [`Positioner::update_position`] (or [`Positioner::update_from`]) when the
//!    panel opens and whenever the anchor's layout context changes while open.
//! 3) Render from [`Positioner::current`].
//!
//! A failed measurement keeps the previous position instead of jumping to the origin.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::{PositionError, Positioner};
//!
//! let viewport = Size::new(800.0, 600.0);
//! let mut positioner = Positioner::new(200.0);
//!
//! let first = positioner
//!     .update_position(Some(Rect::new(40.0, 10.0, 80.0, 40.0)), viewport)
//!     .unwrap();
//!
//! // Anchor unmounted: the update is skipped and the old position stays.
//! assert_eq!(
//!     positioner.update_position(None, viewport),
//!     Err(PositionError::GeometryUnavailable)
//! );
//! assert_eq!(positioner.current(), Some(first));
//! ```

use kurbo::{Rect, Size};

use crate::{AnchorGeometry, PanelPosition, PlacementConfig, PositionError, compute_position};

/// Positions a single panel and remembers where it was last placed.
#[derive(Clone, Debug)]
pub struct Positioner {
    panel_width: f64,
    config: PlacementConfig,
    last: Option<PanelPosition>,
}

impl Positioner {
    /// Creates a positioner for a panel of the given width with the default config.
    #[must_use]
    pub fn new(panel_width: f64) -> Self {
        Self::with_config(panel_width, PlacementConfig::default())
    }

    /// Creates a positioner with an explicit config.
    #[must_use]
    pub fn with_config(panel_width: f64, config: PlacementConfig) -> Self {
        Self {
            panel_width,
            config,
            last: None,
        }
    }

    /// Width the panel is placed with.
    #[must_use]
    pub fn panel_width(&self) -> f64 {
        self.panel_width
    }

    /// Changes the panel width. Takes effect on the next update.
    pub fn set_panel_width(&mut self, panel_width: f64) {
        self.panel_width = panel_width;
    }

    /// Placement config in use.
    #[must_use]
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Last successfully computed position, if any.
    #[must_use]
    pub fn current(&self) -> Option<PanelPosition> {
        self.last
    }

    /// Forgets the last position.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Recomputes the position from a freshly sampled anchor rectangle.
    ///
    /// `None` means the anchor could not be measured; the last position is
    /// kept and [`PositionError::GeometryUnavailable`] is returned.
    pub fn update_position(
        &mut self,
        anchor: Option<Rect>,
        viewport: Size,
    ) -> Result<PanelPosition, PositionError> {
        let Some(anchor) = anchor else {
            tracing::warn!("anchor not measurable, keeping last panel position");
            return Err(PositionError::GeometryUnavailable);
        };
        let position = compute_position(anchor, self.panel_width, viewport, &self.config);
        tracing::trace!(
            x = position.x(),
            y = position.y(),
            max_height = position.max_height,
            "panel positioned"
        );
        self.last = Some(position);
        Ok(position)
    }

    /// Measures `anchor` through `geometry` and recomputes the position.
    pub fn update_from<K, G>(
        &mut self,
        geometry: &G,
        anchor: K,
    ) -> Result<PanelPosition, PositionError>
    where
        G: AnchorGeometry<K> + ?Sized,
    {
        let rect = geometry.anchor_rect(anchor);
        self.update_position(rect, geometry.viewport())
    }
}
