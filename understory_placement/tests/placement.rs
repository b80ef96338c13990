// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `understory_placement`.
//!
//! These check the viewport clamp invariant over arbitrary anchors that lie
//! inside the viewport.

use kurbo::{Rect, Size};
use proptest::prelude::*;
use understory_placement::{PlacementConfig, Positioner, compute_position};

const VW: f64 = 1280.0;
const VH: f64 = 720.0;

prop_compose! {
    fn anchor_inside()(x0 in 0.0..VW, y0 in 0.0..VH)(
        x1 in x0..=VW,
        y1 in y0..=VH,
        x0 in Just(x0),
        y0 in Just(y0),
    ) -> Rect {
        Rect::new(x0, y0, x1, y1)
    }
}

proptest! {
    #[test]
    fn clamp_invariant_holds(
        anchor in anchor_inside(),
        width in 0.0..=(VW - 2.0 * PlacementConfig::DEFAULT_MARGIN),
    ) {
        let config = PlacementConfig::default();
        let pos = compute_position(anchor, width, Size::new(VW, VH), &config);
        let m = config.margin;

        prop_assert!(pos.x() >= m, "x {} is left of the margin", pos.x());
        prop_assert!(
            pos.x() <= VW - width - m + 1e-9,
            "x {} lets a {} wide panel overflow", pos.x(), width
        );
        prop_assert!(pos.y() >= m, "y {} is above the margin", pos.y());
        prop_assert!(pos.y() >= anchor.y1, "panel must open below the anchor");
        prop_assert!(pos.max_height >= 0.0, "max height must not be negative");
    }

    #[test]
    fn wide_panels_pin_to_left_margin(
        anchor in anchor_inside(),
        extra in 0.0..500.0_f64,
    ) {
        let config = PlacementConfig::default();
        let width = VW - 2.0 * config.margin + extra + 1.0;
        let pos = compute_position(anchor, width, Size::new(VW, VH), &config);
        prop_assert_eq!(pos.x(), config.margin);
    }

    #[test]
    fn failed_measurement_never_moves_panel(anchor in anchor_inside()) {
        let viewport = Size::new(VW, VH);
        let mut positioner = Positioner::new(240.0);
        let placed = positioner.update_position(Some(anchor), viewport).unwrap();
        prop_assert!(positioner.update_position(None, viewport).is_err());
        prop_assert_eq!(positioner.current(), Some(placed));
    }
}
