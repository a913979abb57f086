//! Ground installations sited at control points.

use serde::{Deserialize, Serialize};

use stormfront_core::geo::MapPoint;

use crate::db::{UnitDatabase, UnitTypeId};

/// Broad category of an installation, used when filtering target lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallationCategory {
    /// SAM/AAA site — a suppression candidate when it emits.
    AirDefence,
    /// Anything else (depots, comms, factories, ...).
    Generic,
}

/// One deployed unit within an installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstalledUnit {
    pub unit_type: UnitTypeId,
    pub position: MapPoint,
}

/// A named group of units inside an installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitGroup {
    pub name: String,
    pub units: Vec<InstalledUnit>,
}

/// A fixed ground objective. Read-only to the campaign core except for
/// the liveness flag, which combat resolution flips externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundInstallation {
    /// Stable identity used to deduplicate target lists.
    pub group_id: u32,
    pub name: String,
    pub category: InstallationCategory,
    pub position: MapPoint,
    pub is_dead: bool,
    /// Part of the airbase itself; patrol flights do not guard these.
    pub airbase_group: bool,
    pub groups: Vec<UnitGroup>,
}

impl GroundInstallation {
    pub fn new(group_id: u32, name: impl Into<String>, position: MapPoint) -> Self {
        Self {
            group_id,
            name: name.into(),
            category: InstallationCategory::Generic,
            position,
            is_dead: false,
            airbase_group: false,
            groups: Vec::new(),
        }
    }

    /// Whether any constituent unit emits beyond `threshold` meters.
    /// SEAD candidacy requires at least one such emitter.
    pub fn has_radar_emitter(&self, db: &UnitDatabase, threshold: f64) -> bool {
        self.groups
            .iter()
            .flat_map(|g| g.units.iter())
            .any(|u| db.detection_range(u.unit_type).is_some_and(|r| r > threshold))
    }
}
