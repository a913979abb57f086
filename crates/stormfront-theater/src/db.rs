//! Unit capability database.
//!
//! Read-only lookup service consolidating which unit types exist, which
//! roles they can fill, and their sensor footprints. The campaign core
//! never hardcodes a type; everything goes through this registry.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use stormfront_core::enums::Task;

/// Identity of a unit type in the capability database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UnitTypeId(pub u32);

/// Static capabilities of one unit type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub id: UnitTypeId,
    pub name: String,
    /// Roles this type can fill. The first entry is the primary role and
    /// decides which inventory bucket commissioned units land in.
    pub tasks: Vec<Task>,
    /// Sensor detection range in meters, for emitters.
    pub detection_range: Option<f64>,
    /// Heavy long-range SAM, banned when the restricted-SAM setting is on.
    pub heavy_sam: bool,
}

/// The capability registry. Specs are kept sorted by id so every query
/// iterates in a deterministic order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDatabase {
    specs: Vec<UnitSpec>,
}

impl UnitDatabase {
    pub fn new(mut specs: Vec<UnitSpec>) -> Self {
        specs.sort_by_key(|s| s.id);
        Self { specs }
    }

    pub fn spec(&self, id: UnitTypeId) -> Option<&UnitSpec> {
        self.specs
            .binary_search_by_key(&id, |s| s.id)
            .ok()
            .map(|i| &self.specs[i])
    }

    pub fn name(&self, id: UnitTypeId) -> &str {
        self.spec(id).map(|s| s.name.as_str()).unwrap_or("unknown")
    }

    pub fn supports(&self, id: UnitTypeId, task: Task) -> bool {
        self.spec(id).is_some_and(|s| s.tasks.contains(&task))
    }

    pub fn primary_task(&self, id: UnitTypeId) -> Option<Task> {
        self.spec(id).and_then(|s| s.tasks.first().copied())
    }

    pub fn detection_range(&self, id: UnitTypeId) -> Option<f64> {
        self.spec(id).and_then(|s| s.detection_range)
    }

    /// All unit types that can fill `task`, ascending by id.
    pub fn find_for_task(&self, task: Task) -> Vec<UnitTypeId> {
        self.specs
            .iter()
            .filter(|s| s.tasks.contains(&task))
            .map(|s| s.id)
            .collect()
    }

    /// Types eligible for commissioning in `task`. Heavy SAMs are removed
    /// when the restricted-SAM setting disallows them.
    pub fn eligible_for_commission(&self, task: Task, heavy_sams_allowed: bool) -> Vec<UnitTypeId> {
        self.specs
            .iter()
            .filter(|s| s.tasks.contains(&task))
            .filter(|s| heavy_sams_allowed || !s.heavy_sam)
            .map(|s| s.id)
            .collect()
    }

    /// A bounded-variety random subset of eligible types for one
    /// commissioning spend.
    pub fn choose_for_commission(
        &self,
        task: Task,
        variety: usize,
        heavy_sams_allowed: bool,
        rng: &mut impl Rng,
    ) -> Vec<UnitTypeId> {
        let eligible = self.eligible_for_commission(task, heavy_sams_allowed);
        eligible
            .choose_multiple(rng, variety.min(eligible.len()))
            .copied()
            .collect()
    }

    /// A small built-in registry of generic unit types, used by tests and
    /// headless campaigns without an external capability table.
    pub fn reference() -> Self {
        let spec = |id, name: &str, tasks: Vec<Task>, detection_range, heavy_sam| UnitSpec {
            id: UnitTypeId(id),
            name: name.to_owned(),
            tasks,
            detection_range,
            heavy_sam,
        };
        Self::new(vec![
            spec(1, "Saber interceptor", vec![Task::Cap], None, false),
            spec(
                2,
                "Vanguard multirole",
                vec![Task::Cap, Task::Cas, Task::Sead],
                None,
                false,
            ),
            spec(
                3,
                "Mudmover attack jet",
                vec![Task::Cas, Task::PinpointStrike, Task::Sead],
                None,
                false,
            ),
            spec(4, "Kodiak gunship", vec![Task::Cas], None, false),
            spec(5, "Charger MBT", vec![Task::PinpointStrike], None, false),
            spec(
                6,
                "Longbow SAM battery",
                vec![Task::AirDefence],
                Some(120_000.0),
                true,
            ),
            spec(
                7,
                "Piton mobile SAM",
                vec![Task::AirDefence],
                Some(30_000.0),
                false,
            ),
            spec(8, "Gopher AAA", vec![Task::AirDefence], Some(500.0), false),
            spec(9, "Pelican lift helo", vec![Task::Embarking], None, false),
        ])
    }
}
