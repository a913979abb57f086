//! Tests for geometry helpers and configuration defaults.

use crate::geo::{
    distance, heading_between, meter_to_feet, nm_to_meter, point_from_heading, reciprocal, MapPoint,
};
use crate::settings::PlannerConfig;

#[test]
fn heading_north_is_zero() {
    let a = MapPoint::new(0.0, 0.0);
    let b = MapPoint::new(0.0, 1000.0);
    assert!(heading_between(a, b).abs() < 1e-9);
}

#[test]
fn heading_east_is_ninety() {
    let a = MapPoint::new(0.0, 0.0);
    let b = MapPoint::new(1000.0, 0.0);
    assert!((heading_between(a, b) - 90.0).abs() < 1e-9);
}

#[test]
fn point_from_heading_round_trips_bearing() {
    let origin = MapPoint::new(5_000.0, -2_000.0);
    for heading in [0.0, 37.5, 90.0, 180.0, 271.0] {
        let p = point_from_heading(origin, heading, 12_345.0);
        assert!((heading_between(origin, p) - heading).abs() < 1e-6);
        assert!((distance(origin, p) - 12_345.0).abs() < 1e-6);
    }
}

#[test]
fn negative_headings_wrap() {
    let origin = MapPoint::new(0.0, 0.0);
    let a = point_from_heading(origin, -90.0, 1000.0);
    let b = point_from_heading(origin, 270.0, 1000.0);
    assert!(distance(a, b) < 1e-6);
}

#[test]
fn reciprocal_wraps() {
    assert!((reciprocal(350.0) - 170.0).abs() < 1e-9);
    assert!((reciprocal(90.0) - 270.0).abs() < 1e-9);
}

#[test]
fn unit_conversions() {
    assert_eq!(nm_to_meter(1.0), 1852.0);
    assert_eq!(meter_to_feet(1000.0), 3280);
}

#[test]
fn planner_defaults_match_doctrine() {
    let config = PlannerConfig::default();
    assert_eq!(config.mission_duration / config.cas_interval, 4);
    assert_eq!(config.group_size, 2);
    assert!((config.ingress_egress_distance - nm_to_meter(45.0)).abs() < 1e-9);
}
