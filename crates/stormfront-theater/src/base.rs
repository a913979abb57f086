//! Per-faction unit inventory at a control point.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stormfront_core::enums::Task;

use crate::db::{UnitDatabase, UnitTypeId};

/// The authoritative inventory of one control point: aircraft, armor, and
/// air-defence counts by unit type, the base's readiness strength, and the
/// per-role commission-point balances the procurement engine accrues into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Base {
    pub aircraft: HashMap<UnitTypeId, u32>,
    pub armor: HashMap<UnitTypeId, u32>,
    pub aa: HashMap<UnitTypeId, u32>,
    strength: f64,
    commission_points: HashMap<Task, f64>,
}

impl Default for Base {
    fn default() -> Self {
        Self {
            aircraft: HashMap::new(),
            armor: HashMap::new(),
            aa: HashMap::new(),
            strength: 1.0,
            commission_points: HashMap::new(),
        }
    }
}

impl Base {
    /// Readiness/defense scalar, always within [0, 1].
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Apply a strength delta, clamped to [0, 1].
    pub fn affect_strength(&mut self, delta: f64) {
        self.strength = (self.strength + delta).clamp(0.0, 1.0);
    }

    pub fn total_planes(&self) -> u32 {
        self.aircraft.values().sum()
    }

    pub fn total_armor(&self) -> u32 {
        self.armor.values().sum()
    }

    /// Units across every bucket that can fill `task`.
    pub fn total_units(&self, task: Task, db: &UnitDatabase) -> u32 {
        self.aircraft
            .iter()
            .chain(self.armor.iter())
            .chain(self.aa.iter())
            .filter(|(id, _)| db.supports(**id, task))
            .map(|(_, count)| count)
            .sum()
    }

    /// Accrue commission points for `task` and return the whole-point
    /// balance to spend now (deducted from the running balance). Zero
    /// until the balance crosses one full point.
    pub fn append_commission_points(&mut self, task: Task, points: f64) -> u32 {
        let balance = self.commission_points.entry(task).or_insert(0.0);
        *balance += points;
        let spend = balance.floor();
        if spend >= 1.0 {
            *balance -= spend;
            spend as u32
        } else {
            0
        }
    }

    /// Add freshly commissioned units, routed to the bucket of the type's
    /// primary role.
    pub fn commission_units(&mut self, db: &UnitDatabase, unit_type: UnitTypeId, count: u32) {
        let bucket = match db.primary_task(unit_type) {
            Some(Task::PinpointStrike) => &mut self.armor,
            Some(Task::AirDefence) => &mut self.aa,
            _ => &mut self.aircraft,
        };
        *bucket.entry(unit_type).or_insert(0) += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_is_clamped_on_every_mutation() {
        let mut base = Base::default();
        base.affect_strength(0.5);
        assert_eq!(base.strength(), 1.0);
        base.affect_strength(-2.0);
        assert_eq!(base.strength(), 0.0);
        base.affect_strength(0.3);
        assert!((base.strength() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn commission_points_accrue_fractionally() {
        let mut base = Base::default();
        // 0.3/turn: three turns stay below one point, the fourth spends 1.
        assert_eq!(base.append_commission_points(Task::AirDefence, 0.3), 0);
        assert_eq!(base.append_commission_points(Task::AirDefence, 0.3), 0);
        assert_eq!(base.append_commission_points(Task::AirDefence, 0.3), 0);
        assert_eq!(base.append_commission_points(Task::AirDefence, 0.3), 1);
        // Remainder carries over.
        assert_eq!(base.append_commission_points(Task::AirDefence, 0.9), 1);
    }

    #[test]
    fn commissioned_units_route_by_primary_role() {
        let db = UnitDatabase::reference();
        let mut base = Base::default();
        base.commission_units(&db, UnitTypeId(5), 3); // MBT -> armor
        base.commission_units(&db, UnitTypeId(7), 2); // SAM -> aa
        base.commission_units(&db, UnitTypeId(2), 4); // fighter -> aircraft
        assert_eq!(base.total_armor(), 3);
        assert_eq!(base.aa.values().sum::<u32>(), 2);
        assert_eq!(base.total_planes(), 4);
    }

    #[test]
    fn total_units_counts_across_buckets() {
        let db = UnitDatabase::reference();
        let mut base = Base::default();
        base.commission_units(&db, UnitTypeId(3), 2); // Cas + PinpointStrike, aircraft bucket
        base.commission_units(&db, UnitTypeId(5), 1); // PinpointStrike, armor bucket
        assert_eq!(base.total_units(Task::PinpointStrike, &db), 3);
        assert_eq!(base.total_units(Task::Cas, &db), 2);
    }
}
