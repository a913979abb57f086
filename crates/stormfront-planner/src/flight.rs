//! Planned flights and their routes.

use serde::{Deserialize, Serialize};

use stormfront_core::enums::{FlightRole, WaypointKind};
use stormfront_core::geo::MapPoint;
use stormfront_theater::{CpId, UnitTypeId};

/// What a waypoint is pointed at. Resolved against the theater by the
/// mission materialization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointTarget {
    ControlPoint(CpId),
    Installation { cp: CpId, group_id: u32 },
}

/// One point of a flight route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightWaypoint {
    pub position: MapPoint,
    /// Altitude in meters.
    pub altitude: f64,
    pub kind: WaypointKind,
    pub name: String,
    pub description: String,
    pub targets: Vec<WaypointTarget>,
    /// Shown to the player only; AI routing ignores it.
    pub only_for_player: bool,
}

impl FlightWaypoint {
    pub fn new(position: MapPoint, altitude: f64, kind: WaypointKind) -> Self {
        Self {
            position,
            altitude,
            kind,
            name: String::new(),
            description: String::new(),
            targets: Vec::new(),
            only_for_player: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.name = name.into();
        self.description = description.into();
        self
    }
}

/// A scheduled flight of one unit type from one airbase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub unit_type: UnitTypeId,
    pub count: u32,
    pub from_cp: CpId,
    pub role: FlightRole,
    /// Minutes after mission start this flight launches.
    pub scheduled_in: u32,
    pub waypoints: Vec<FlightWaypoint>,
}
