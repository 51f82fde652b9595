//! # Primitive Tests

use super::*;
use crate::test_utils::{centroid, edges_balanced, normal};
use glam::DVec3;

fn params(segments: u32) -> RoundShieldParams {
    RoundShieldParams {
        center: DVec3::new(1.0, 2.0, 0.5),
        radius: 0.75,
        thickness: 0.1,
        segments,
        ..Default::default()
    }
}

#[test]
fn test_round_part_layout() {
    let part = round_shield_part(params(6)).unwrap();

    assert_eq!(part.vertex_count(), 14);
    assert_eq!(part.group_count(), 3);
    assert_eq!(part.group(0).len(), 6);
    assert_eq!(part.group(1).len(), 6);
    assert_eq!(part.group(2).len(), 12);
    assert!(part.validate().is_ok());

    let v = part.vertices();
    assert_eq!(v[0], DVec3::new(1.0, 2.0, 0.4));
    assert_eq!(v[7], DVec3::new(1.0, 2.0, 0.6));
    for rim in v[1..7].iter().chain(&v[8..]) {
        let distance = (rim.truncate() - DVec3::new(1.0, 2.0, 0.0).truncate()).length();
        assert!((distance - 0.75).abs() < 1e-12);
    }
}

#[test]
fn test_round_part_is_closed_and_outward() {
    let part = round_shield_part(params(12)).unwrap();
    assert!(edges_balanced(part.triangles()));

    let center = DVec3::new(1.0, 2.0, 0.5);
    for tri in part.triangles() {
        let outward = centroid(part.vertices(), tri) - center;
        assert!(normal(part.vertices(), tri).dot(outward) > 0.0);
    }
    for tri in part.group(0) {
        assert!(normal(part.vertices(), tri).z < 0.0);
    }
}

#[test]
fn test_round_part_prism() {
    let part = round_shield_part(RoundShieldParams {
        prism: true,
        ..params(8)
    })
    .unwrap();

    // Cone and back, no outside band
    assert_eq!(part.group_count(), 2);
    assert!(edges_balanced(part.triangles()));
    for tri in part.group(0) {
        assert_eq!(tri[0], 0);
        assert!(tri[1] > 9 && tri[2] > 9);
    }
}

#[test]
fn test_round_part_without_back() {
    let part = round_shield_part(RoundShieldParams {
        back: false,
        ..params(5)
    })
    .unwrap();
    assert_eq!(part.group_count(), 2);
    assert_eq!(part.group(1).len(), 10);
}

#[test]
fn test_round_part_rejects_bad_parameters() {
    assert!(round_shield_part(params(2)).is_err());
    assert!(round_shield_part(RoundShieldParams {
        radius: 0.0,
        ..params(8)
    })
    .is_err());
    assert!(round_shield_part(RoundShieldParams {
        thickness: -0.1,
        ..params(8)
    })
    .is_err());
}
