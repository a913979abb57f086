//! Planar map geometry helpers.
//!
//! Positions are `glam::DVec2` in meters, x = East, y = North. Headings
//! are degrees, 0 = North, clockwise — the convention of the campaign
//! map and every route-synthesis routine.

pub use glam::DVec2 as MapPoint;

/// Heading from `from` to `to` in degrees [0, 360).
pub fn heading_between(from: MapPoint, to: MapPoint) -> f64 {
    let d = to - from;
    d.x.atan2(d.y).to_degrees().rem_euclid(360.0)
}

/// Point at `distance` meters from `origin` along `heading` degrees.
/// Headings outside [0, 360) are accepted and wrapped.
pub fn point_from_heading(origin: MapPoint, heading_deg: f64, distance: f64) -> MapPoint {
    let rad = heading_deg.to_radians();
    origin + MapPoint::new(rad.sin() * distance, rad.cos() * distance)
}

/// Straight-line distance in meters.
pub fn distance(a: MapPoint, b: MapPoint) -> f64 {
    a.distance(b)
}

/// Reciprocal of a heading, wrapped to [0, 360).
pub fn reciprocal(heading_deg: f64) -> f64 {
    (heading_deg + 180.0).rem_euclid(360.0)
}

pub fn nm_to_meter(value_in_nm: f64) -> f64 {
    value_in_nm * 1852.0
}

pub fn meter_to_nm(value_in_meter: f64) -> f64 {
    value_in_meter * 0.000_539_957
}

pub fn feet_to_meter(value_in_feet: f64) -> f64 {
    value_in_feet / 3.281
}

pub fn meter_to_feet(value_in_meter: f64) -> i64 {
    (3.28084 * value_in_meter) as i64
}
