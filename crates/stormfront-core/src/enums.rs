//! Enumeration types used throughout the campaign simulation.

use serde::{Deserialize, Serialize};

/// Which faction initiated or owns something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Unit capability role. Drives commissioning caps and which airframes a
/// planner stage may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Task {
    /// Precision ground attack (armor and strike platforms).
    PinpointStrike,
    /// Close air support.
    Cas,
    /// Air superiority / combat air patrol.
    Cap,
    /// Ground-based air defence.
    AirDefence,
    /// Suppression of enemy air defences. Capability tag only; never
    /// commissioned directly.
    Sead,
    /// Infantry transport (helicopters).
    Embarking,
}

/// The four roles the commissioning engine procures for, in pass order.
pub const COMMISSION_TASKS: [Task; 4] =
    [Task::PinpointStrike, Task::Cas, Task::Cap, Task::AirDefence];

/// Encounter kind for a generated turn event. A closed set: adding a kind
/// means adding a row to the campaign's weight table, not a new type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Ground assault across a frontline.
    FrontlineAttack,
    /// Defensive patrol over a frontline.
    FrontlinePatrol,
    /// Air strike on ground installations.
    Strike,
    /// Assault on the base itself (capture attempt).
    BaseAttack,
    /// Air intercept.
    Intercept,
    /// Intercept of naval traffic.
    NavalIntercept,
    /// Insurgent ground attack.
    InsurgentAttack,
    /// Helicopter infantry lift.
    InfantryTransport,
    /// Logistics delivery to a friendly point (origin == destination).
    UnitsDelivery,
}

/// Mission role assigned to a planned flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightRole {
    /// Defensive combat air patrol from a land base.
    Cap,
    /// Barrier CAP flown from a carrier / global point.
    Barcap,
    /// Scramble interception.
    Intercept,
    /// Close air support over a frontline.
    Cas,
    /// Suppression of enemy air defences.
    Sead,
    /// Destruction of enemy air defences.
    Dead,
    /// Strike on a ground installation.
    Strike,
    /// Infantry transport.
    Transport,
}

/// What a waypoint is for. The materialization layer keys triggers and
/// AI tasking off this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaypointKind {
    /// Climb-out from the home base.
    Ascend,
    /// Start of a patrol racetrack.
    PatrolTrack,
    /// End of a patrol racetrack.
    Patrol,
    /// Ingress toward a CAS area.
    IngressCas,
    /// CAS station over the frontline center.
    Cas,
    /// Ingress toward a SEAD/DEAD target.
    IngressSead,
    /// Ingress toward a strike target.
    IngressStrike,
    /// Action point over a target.
    Action,
    /// Withdrawal leg.
    Egress,
    /// Descent to pattern altitude.
    Descend,
    /// Final landing point.
    Landing,
}
