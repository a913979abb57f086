//! Terrain geometry collaborator.
//!
//! The real frontline service (coastline-aware, road-network-aware) lives
//! outside this core. The campaign and planner only need two queries,
//! expressed as a trait, plus a straight-line default good enough for
//! headless runs and deterministic tests.

use serde::{Deserialize, Serialize};

use stormfront_core::geo::{self, MapPoint};

use crate::controlpoint::ControlPoint;

/// A resolved frontline segment between two control points: its west-end
/// origin, the heading along the line, and its length in meters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrontlineVector {
    pub origin: MapPoint,
    pub heading: f64,
    pub distance: f64,
}

/// Queries answered by the external terrain service.
pub trait TheaterGeometry {
    /// Whether a contested land frontline exists between the two points.
    fn has_frontline_between(&self, a: &ControlPoint, b: &ControlPoint) -> bool;

    /// The frontline segment between the two points, if one exists.
    fn frontline_vector(&self, a: &ControlPoint, b: &ControlPoint) -> Option<FrontlineVector>;
}

/// Straight-line frontline model: a segment through the midpoint of the
/// two control points, perpendicular to the bearing between them, capped
/// at a configured length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StraightFrontline {
    /// Maximum frontline segment length in meters.
    pub segment_length: f64,
}

impl Default for StraightFrontline {
    fn default() -> Self {
        Self {
            segment_length: 80_000.0,
        }
    }
}

impl TheaterGeometry for StraightFrontline {
    fn has_frontline_between(&self, a: &ControlPoint, b: &ControlPoint) -> bool {
        // Global (rear/carrier) points have no land frontline.
        !a.is_global && !b.is_global
    }

    fn frontline_vector(&self, a: &ControlPoint, b: &ControlPoint) -> Option<FrontlineVector> {
        if !self.has_frontline_between(a, b) {
            return None;
        }
        let approach = geo::heading_between(a.position, b.position);
        let center = (a.position + b.position) * 0.5;
        let length = self
            .segment_length
            .min(geo::distance(a.position, b.position));
        let heading = (approach + 90.0).rem_euclid(360.0);
        let origin = geo::point_from_heading(center, geo::reciprocal(heading), length / 2.0);
        Some(FrontlineVector {
            origin,
            heading,
            distance: length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controlpoint::CpId;

    #[test]
    fn frontline_runs_perpendicular_to_approach() {
        let a = ControlPoint::new(CpId(0), "home", MapPoint::new(0.0, 0.0), true);
        let b = ControlPoint::new(CpId(1), "front", MapPoint::new(0.0, 50_000.0), false);
        let geometry = StraightFrontline::default();

        let fv = geometry.frontline_vector(&a, &b).unwrap();
        // Approach is due north, so the frontline runs east-west.
        assert!((fv.heading - 90.0).abs() < 1e-9);
        assert!((fv.distance - 50_000.0).abs() < 1e-6);

        // Walking the full segment from the origin crosses the midpoint.
        let end = geo::point_from_heading(fv.origin, fv.heading, fv.distance);
        let mid = (fv.origin + end) * 0.5;
        assert!(geo::distance(mid, MapPoint::new(0.0, 25_000.0)) < 1e-6);
    }

    #[test]
    fn no_frontline_touching_global_points() {
        let mut a = ControlPoint::new(CpId(0), "carrier", MapPoint::new(0.0, 0.0), true);
        a.is_global = true;
        let b = ControlPoint::new(CpId(1), "shore", MapPoint::new(10_000.0, 0.0), false);
        let geometry = StraightFrontline::default();
        assert!(!geometry.has_frontline_between(&a, &b));
        assert!(geometry.frontline_vector(&a, &b).is_none());
    }
}
