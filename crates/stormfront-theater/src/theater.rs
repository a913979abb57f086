//! The theater graph and its conflict queries.

use serde::{Deserialize, Serialize};

use crate::controlpoint::{ControlPoint, CpId};

/// Owns every control point for the campaign's lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictTheater {
    control_points: Vec<ControlPoint>,
}

impl ConflictTheater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control point and connect it (symmetrically) to the given
    /// already-present neighbors.
    pub fn add_control_point(&mut self, mut cp: ControlPoint, connected_to: &[CpId]) {
        for &neighbor in connected_to {
            if !cp.connected.contains(&neighbor) {
                cp.connected.push(neighbor);
            }
            if let Some(other) = self.get_mut(neighbor) {
                if !other.connected.contains(&cp.id) {
                    other.connected.push(cp.id);
                }
            }
        }
        self.control_points.push(cp);
    }

    pub fn get(&self, id: CpId) -> Option<&ControlPoint> {
        self.control_points.iter().find(|cp| cp.id == id)
    }

    pub fn get_mut(&mut self, id: CpId) -> Option<&mut ControlPoint> {
        self.control_points.iter_mut().find(|cp| cp.id == id)
    }

    pub fn control_points(&self) -> impl Iterator<Item = &ControlPoint> {
        self.control_points.iter()
    }

    pub fn control_points_mut(&mut self) -> impl Iterator<Item = &mut ControlPoint> {
        self.control_points.iter_mut()
    }

    pub fn player_points(&self) -> impl Iterator<Item = &ControlPoint> {
        self.control_points.iter().filter(|cp| cp.captured)
    }

    pub fn enemy_points(&self) -> impl Iterator<Item = &ControlPoint> {
        self.control_points.iter().filter(|cp| !cp.captured)
    }

    /// Every (own node, adjacent opposite-owned node) pair from the queried
    /// side's perspective. Recomputed from the current ownership snapshot on
    /// every call — capture can change ownership mid-resolution, so this is
    /// never cached across a turn boundary.
    pub fn conflicts(&self, from_player: bool) -> Vec<(CpId, CpId)> {
        let mut pairs = Vec::new();
        for cp in self.control_points.iter().filter(|cp| cp.captured == from_player) {
            for &other_id in &cp.connected {
                if let Some(other) = self.get(other_id) {
                    if other.captured != from_player {
                        pairs.push((cp.id, other.id));
                    }
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stormfront_core::geo::MapPoint;

    fn cp(id: u32, captured: bool) -> ControlPoint {
        ControlPoint::new(
            CpId(id),
            format!("CP {id}"),
            MapPoint::new(id as f64 * 10_000.0, 0.0),
            captured,
        )
    }

    fn two_front_theater() -> ConflictTheater {
        let mut theater = ConflictTheater::new();
        theater.add_control_point(cp(0, true), &[]);
        theater.add_control_point(cp(1, false), &[CpId(0)]);
        theater.add_control_point(cp(2, false), &[CpId(1)]);
        theater.add_control_point(cp(3, true), &[CpId(2)]);
        theater
    }

    #[test]
    fn adjacency_is_symmetric() {
        let theater = two_front_theater();
        for cp in theater.control_points() {
            for &other in &cp.connected {
                assert!(
                    theater.get(other).unwrap().connected.contains(&cp.id),
                    "CP {} lists {} as adjacent, but not vice versa",
                    cp.id.0,
                    other.0
                );
            }
        }
    }

    #[test]
    fn conflicts_yields_only_cross_faction_edges() {
        let theater = two_front_theater();
        let pairs = theater.conflicts(true);
        assert_eq!(pairs, vec![(CpId(0), CpId(1)), (CpId(3), CpId(2))]);

        let enemy_pairs = theater.conflicts(false);
        assert_eq!(enemy_pairs, vec![(CpId(1), CpId(0)), (CpId(2), CpId(3))]);
    }

    #[test]
    fn conflicts_is_idempotent_without_ownership_changes() {
        let theater = two_front_theater();
        assert_eq!(theater.conflicts(true), theater.conflicts(true));
    }

    #[test]
    fn conflicts_reflects_capture_immediately() {
        let mut theater = two_front_theater();
        theater.get_mut(CpId(1)).unwrap().captured = true;
        let pairs = theater.conflicts(true);
        assert_eq!(pairs, vec![(CpId(1), CpId(2)), (CpId(3), CpId(2))]);
    }
}
