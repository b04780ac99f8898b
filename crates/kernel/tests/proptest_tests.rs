//! Property-based tests for Möbius strip model invariants using the
//! `proptest` crate.

use proptest::prelude::*;

use mobius_kernel::strip::{MobiusStrip, StripParams};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary centerline radius, away from the self-intersecting regime.
fn arb_radius() -> impl Strategy<Value = f64> {
    0.5f64..4.0
}

/// Arbitrary strip width, positive and narrower than the smallest radius.
fn arb_width() -> impl Strategy<Value = f64> {
    0.05f64..0.8
}

/// Arbitrary grid resolution, small enough to keep the suite fast.
fn arb_resolution() -> impl Strategy<Value = usize> {
    8usize..48
}

fn build(radius: f64, width: f64, resolution: usize) -> MobiusStrip {
    MobiusStrip::new(StripParams {
        radius,
        width,
        resolution,
    })
    .expect("valid resolution")
}

// ---------------------------------------------------------------------------
// 1. Both measures are strictly positive and finite
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn measures_are_positive_and_finite(
        radius in arb_radius(),
        width in arb_width(),
        resolution in arb_resolution(),
    ) {
        let strip = build(radius, width, resolution);
        let area = strip.surface_area().unwrap();
        let edge = strip.edge_length();
        prop_assert!(area.is_finite() && area > 0.0, "area={}", area);
        prop_assert!(edge.is_finite() && edge > 0.0, "edge={}", edge);
    }
}

// ---------------------------------------------------------------------------
// 2. The boundary polyline at least bridges the open seam
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn edge_length_covers_the_seam_gap(
        radius in arb_radius(),
        width in arb_width(),
        resolution in arb_resolution(),
    ) {
        // The polyline runs from (R + w/2, 0, 0) to (R - w/2, ~0, ~0), so by
        // the triangle inequality each edge is at least w long.
        let strip = build(radius, width, resolution);
        prop_assert!(strip.edge_length() >= 2.0 * width - 1e-9);
    }
}

// ---------------------------------------------------------------------------
// 3. Both measures grow with the centerline radius
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn measures_grow_with_radius(
        radius in arb_radius(),
        width in arb_width(),
        resolution in arb_resolution(),
    ) {
        let small = build(radius, width, resolution);
        let large = build(radius + 0.5, width, resolution);
        prop_assert!(
            large.surface_area().unwrap() > small.surface_area().unwrap(),
            "area did not grow with radius"
        );
        prop_assert!(
            large.edge_length() > small.edge_length(),
            "edge length did not grow with radius"
        );
    }
}

// ---------------------------------------------------------------------------
// 4. Identical parameters reproduce bit-identical grids and measures
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn construction_is_deterministic(
        radius in arb_radius(),
        width in arb_width(),
        resolution in arb_resolution(),
    ) {
        let a = build(radius, width, resolution);
        let b = build(radius, width, resolution);
        prop_assert_eq!(a.x(), b.x());
        prop_assert_eq!(a.y(), b.y());
        prop_assert_eq!(a.z(), b.z());
        prop_assert_eq!(
            a.surface_area().unwrap().to_bits(),
            b.surface_area().unwrap().to_bits()
        );
        prop_assert_eq!(a.edge_length().to_bits(), b.edge_length().to_bits());
    }
}

// ---------------------------------------------------------------------------
// 5. The stored point grid agrees with pointwise evaluation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn point_grid_matches_evaluate(
        radius in arb_radius(),
        width in arb_width(),
        resolution in 4usize..16,
    ) {
        let strip = build(radius, width, resolution);
        for i in 0..resolution {
            for j in 0..resolution {
                let p = strip.evaluate(strip.u().at(i, j), strip.v().at(i, j));
                prop_assert_eq!(strip.x().at(i, j), p.x);
                prop_assert_eq!(strip.y().at(i, j), p.y);
                prop_assert_eq!(strip.z().at(i, j), p.z);
            }
        }
    }
}
