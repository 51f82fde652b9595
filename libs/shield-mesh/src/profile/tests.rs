//! # Profile Tests
//!
//! Cross-section cardinality and point placement for every profile kind.

use super::*;
use approx::assert_abs_diff_eq;
use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn test_cross_section_accessors() {
    let two = CrossSection::Two(1, 2);
    assert_eq!(two.count(), 2);
    assert_eq!(two.lower(), Some(1));
    assert_eq!(two.upper(), Some(2));
    assert_eq!(two.top(), Some(2));

    let one = CrossSection::One(7);
    assert_eq!(one.count(), 1);
    assert_eq!(one.upper(), None);
    assert_eq!(one.top(), Some(7));

    let empty: CrossSection<i32> = CrossSection::Empty;
    assert!(empty.is_empty());
    assert_eq!(empty.lower(), None);
    assert_eq!(empty.top(), None);
}

#[test]
fn test_cross_section_map_keeps_order() {
    let mut next = 10;
    let mapped = CrossSection::Two('a', 'b').map(|_| {
        next += 1;
        next
    });
    assert_eq!(mapped, CrossSection::Two(11, 12));
}

#[test]
fn test_span_collapses_when_coincident() {
    assert_eq!(CrossSection::span(1, 2, true), CrossSection::One(1));
    assert_eq!(CrossSection::span(1, 2, false), CrossSection::Two(1, 2));
}

#[test]
fn test_full_band_profile() {
    let band = FullBandProfile::new(4);
    assert_eq!(band.resolution(), 4);
    assert_eq!(
        band.evaluate(0.25),
        CrossSection::Two(DVec2::new(0.25, 0.0), DVec2::new(0.25, 1.0))
    );
    assert_eq!(band.edge_point(0.5), DVec2::new(0.5, 1.0));
    assert!(band.zero_origin() && band.zero_target());
    assert!(!band.is_closed());
}

#[test]
fn test_function_profile_pinches_where_curve_meets_baseline() {
    let profile = FunctionProfile::new(|t| t - 0.5, 2, false);
    let sections = sample(&profile);

    let sections: Vec<_> = sections.into_iter().map(|s| s.section).collect();
    assert_eq!(sections.len(), 3);
    assert_eq!(
        sections[0],
        CrossSection::Two(DVec2::new(0.0, -0.5), DVec2::new(0.0, 0.0))
    );
    assert_eq!(sections[1], CrossSection::One(DVec2::new(0.5, 0.0)));
    assert_eq!(
        sections[2],
        CrossSection::Two(DVec2::new(1.0, 0.0), DVec2::new(1.0, 0.5))
    );
}

#[test]
fn test_function_profile_inverted_fills_to_top() {
    let profile = FunctionProfile::new(|_| 0.25, 4, true);
    assert_eq!(profile.baseline(), 1.0);
    assert!(!profile.zero_origin());
    assert!(!profile.zero_target());
    assert_eq!(
        profile.evaluate(0.5),
        CrossSection::Two(DVec2::new(0.5, 0.25), DVec2::new(0.5, 1.0))
    );

    let touching = FunctionProfile::new(|_| 1.0, 4, true);
    assert_eq!(touching.evaluate(0.0).count(), 1);
}

#[test]
fn test_function_profile_tolerance() {
    let profile = FunctionProfile::new(|_| 4e-6, 1, false);
    assert_eq!(profile.evaluate(0.0).count(), 1);

    let strict = FunctionProfile::new(|_| 4e-6, 1, false).with_tolerance(1e-9);
    assert_eq!(strict.evaluate(0.0).count(), 2);
}

#[test]
fn test_function_profile_edge_point_follows_curve() {
    let profile = FunctionProfile::new(|t| t * t, 4, false);
    assert_eq!(profile.edge_point(0.5), DVec2::new(0.5, 0.25));
}

#[test]
fn test_bounds_profile_maps_domain_and_swaps() {
    let profile = BoundsProfile::new(|x| x, |x| -x, 2);
    assert_abs_diff_eq!(profile.domain_x(0.0), -0.5);
    assert_abs_diff_eq!(profile.domain_x(1.0), 0.5);

    // Crossing bounds are reordered so lower.y <= upper.y
    assert_eq!(
        profile.evaluate(1.0),
        CrossSection::Two(DVec2::new(0.5, -0.5), DVec2::new(0.5, 0.5))
    );
    // They meet at x = 0
    assert_eq!(profile.evaluate(0.5), CrossSection::One(DVec2::new(0.0, 0.0)));
}

#[test]
fn test_bounds_profile_custom_domain() {
    let profile = BoundsProfile::new(|_| 0.0, |_| 1.0, 4).with_domain(0.0, 2.0);
    let sections = sample(&profile);
    assert_eq!(sections.len(), 5);
    assert_abs_diff_eq!(sections[4].section.lower().unwrap().x, 2.0);
}

#[test]
fn test_polar_profile_ring() {
    let ring = PolarProfile::new(|_| 0.5, |_| 1.0, 4);
    assert!(ring.is_closed());

    let sections = sample(&ring);
    assert_eq!(sections.len(), 4, "closed rings do not repeat t = 1");

    let quarter = sections[1].section;
    let inner = quarter.lower().unwrap();
    let outer = quarter.upper().unwrap();
    assert_abs_diff_eq!(inner.x, (FRAC_PI_2).cos() * 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(inner.y, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(outer.y, 1.0, epsilon = 1e-12);
}

#[test]
fn test_polar_profile_pinch_and_swap() {
    let ring = PolarProfile::new(|a: f64| if a < PI { 2.0 } else { 1.0 }, |_| 1.0, 4);
    let sections = sample(&ring);
    // Inner > outer is swapped
    assert_abs_diff_eq!(sections[0].section.lower().unwrap().length(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(sections[0].section.upper().unwrap().length(), 2.0, epsilon = 1e-12);
    // Equal radii pinch
    assert_eq!(sections[2].section.count(), 1);
}

#[test]
fn test_check_resolution() {
    assert!(check_resolution(1, false).is_ok());
    assert!(check_resolution(0, false).is_err());
    assert!(check_resolution(2, true).is_err());
    assert!(check_resolution(3, true).is_ok());
}

#[test]
fn test_profile_through_reference() {
    let band = FullBandProfile::new(3);
    let by_ref: &dyn Profile = &band;
    assert_eq!(sample(by_ref).len(), 4);
}

#[test]
fn test_flat_profiles_have_no_depth() {
    for sample in sample(&FullBandProfile::new(4)) {
        assert_eq!(sample.depth, 0.0);
    }
    assert_eq!(FullBandProfile::new(4).subdivisions(), 1);
    assert_eq!(FullBandProfile::new(4).pole(), None);
}

#[test]
fn test_polar_profile_subdivisions_and_pole() {
    let disc = PolarProfile::new(|_| 0.0, |_| 1.0, 6).with_subdivisions(3);
    assert_eq!(disc.subdivisions(), 3);
    assert_eq!(disc.pole(), Some(DVec2::ZERO));

    let flat = PolarProfile::new(|_| 0.0, |_| 1.0, 6).with_subdivisions(0);
    assert!(check_profile(&flat).is_err());
    assert!(check_profile(&disc).is_ok());
}

#[test]
fn test_curve_profile_bands_and_depth() {
    let profile = CurveProfile::new(|t| DVec3::new(t, 0.5 + t, 1.0 - t), 2, false);

    // Lowest y is the baseline, so the curve pinches at t = 0
    assert_eq!(profile.evaluate(0.0), CrossSection::One(DVec2::new(0.0, 0.5)));
    assert_eq!(
        profile.evaluate(1.0),
        CrossSection::Two(DVec2::new(1.0, 0.5), DVec2::new(1.0, 1.5))
    );
    assert_eq!(Outline::baseline(&profile), 0.5);

    // Depth is measured from the closest point of the curve
    let depths: Vec<f64> = sample(&profile).iter().map(|s| s.depth).collect();
    assert_eq!(depths, vec![1.0, 0.5, 0.0]);
}

#[test]
fn test_curve_profile_inverted_hangs_from_top() {
    let profile = CurveProfile::new(|t| DVec3::new(t, t, 0.0), 2, true);

    assert_eq!(Outline::baseline(&profile), 1.0);
    assert_eq!(
        profile.evaluate(0.0),
        CrossSection::Two(DVec2::new(0.0, 0.0), DVec2::new(0.0, 1.0))
    );
    assert_eq!(profile.evaluate(1.0).count(), 1);
    assert!(!profile.zero_origin());
}

#[test]
fn test_outline_baseline_follows_origin() {
    assert_eq!(Outline::baseline(&FullBandProfile::new(2)), 0.0);
    assert_eq!(Outline::baseline(&FunctionProfile::new(|_| 0.5, 2, false)), 0.0);
    assert_eq!(Outline::baseline(&FunctionProfile::new(|_| 0.5, 2, true)), 1.0);
}
