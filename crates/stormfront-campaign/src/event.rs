//! Turn events and the kind-indexed generation table.

use serde::{Deserialize, Serialize};

use stormfront_core::enums::{EventKind, Side};
use stormfront_theater::CpId;

/// A generated, resolvable encounter for one turn. The list is rebuilt
/// every turn; events never carry forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    /// Which faction initiated the encounter.
    pub attacker: Side,
    /// Origin control point (the attacker's side of the edge).
    pub from_cp: CpId,
    /// Destination control point. Equals `from_cp` for logistics.
    pub to_cp: CpId,
    /// Turn this event was generated for.
    pub turn: u32,
}

impl Event {
    pub fn defender(&self) -> Side {
        self.attacker.opponent()
    }
}

/// Generation weights and gates for one event kind. Adding an encounter
/// kind to the campaign is a new row here, not a new type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EventWeight {
    pub kind: EventKind,
    /// Player-side generation probability (percent; 100 = certain).
    pub player_probability: u32,
    /// Enemy-side generation probability (percent).
    pub enemy_probability: u32,
    /// Requires contested land frontline geometry between the pair.
    pub requires_frontline: bool,
    /// Budget bonus awarded when the player resolves this successfully.
    pub bonus: i32,
}

/// Candidate event kinds rolled for every conflict pair, in a fixed order.
pub const EVENT_WEIGHTS: &[EventWeight] = &[
    EventWeight {
        kind: EventKind::FrontlineAttack,
        player_probability: 100,
        enemy_probability: 0,
        requires_frontline: true,
        bonus: 10,
    },
    EventWeight {
        kind: EventKind::FrontlinePatrol,
        player_probability: 100,
        enemy_probability: 0,
        requires_frontline: true,
        bonus: 5,
    },
    EventWeight {
        kind: EventKind::Strike,
        player_probability: 100,
        enemy_probability: 0,
        requires_frontline: false,
        bonus: 15,
    },
    EventWeight {
        kind: EventKind::InfantryTransport,
        player_probability: 25,
        enemy_probability: 0,
        requires_frontline: true,
        bonus: 5,
    },
    EventWeight {
        kind: EventKind::BaseAttack,
        player_probability: 100,
        enemy_probability: 5,
        requires_frontline: false,
        bonus: 25,
    },
    EventWeight {
        kind: EventKind::Intercept,
        player_probability: 25,
        enemy_probability: 5,
        requires_frontline: false,
        bonus: 10,
    },
    EventWeight {
        kind: EventKind::NavalIntercept,
        player_probability: 25,
        enemy_probability: 5,
        requires_frontline: false,
        bonus: 10,
    },
    EventWeight {
        kind: EventKind::InsurgentAttack,
        player_probability: 0,
        enemy_probability: 4,
        requires_frontline: false,
        bonus: 5,
    },
];

/// Table row for a kind, if it is a rolled kind (logistics deliveries are
/// created on demand and have no row).
pub fn weight_for(kind: EventKind) -> Option<&'static EventWeight> {
    EVENT_WEIGHTS.iter().find(|w| w.kind == kind)
}

/// Kinds that may originate from a global (rear-area/carrier) point.
pub fn air_event_from_global(kind: EventKind) -> bool {
    matches!(
        kind,
        EventKind::Intercept | EventKind::Strike | EventKind::NavalIntercept
    )
}

/// Outcome of an externally resolved event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debriefing {
    pub success: bool,
}
