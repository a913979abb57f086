//! Control points — the capturable territories of the campaign map.

use serde::{Deserialize, Serialize};

use stormfront_core::constants::IMPORTANCE_MEDIUM;
use stormfront_core::geo::MapPoint;

use crate::base::Base;
use crate::installation::GroundInstallation;

/// Identity of a control point within the theater.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CpId(pub u32);

/// A capturable territory: graph node, inventory, installations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlPoint {
    pub id: CpId,
    pub name: String,
    pub position: MapPoint,
    /// True while the player faction holds this point.
    pub captured: bool,
    /// Strategic weight in the [IMPORTANCE_LOW, IMPORTANCE_HIGH] band.
    pub importance: f64,
    /// Rear-area or carrier node: only air events originate here, and the
    /// enemy never assaults it directly.
    pub is_global: bool,
    /// Has coastal bearings; landlocked points never see naval intercepts.
    pub coastal: bool,
    /// Undirected adjacency. Kept symmetric by `ConflictTheater`.
    pub connected: Vec<CpId>,
    pub ground_objects: Vec<GroundInstallation>,
    pub base: Base,
}

impl ControlPoint {
    pub fn new(id: CpId, name: impl Into<String>, position: MapPoint, captured: bool) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            captured,
            importance: IMPORTANCE_MEDIUM,
            is_global: false,
            coastal: false,
            connected: Vec::new(),
            ground_objects: Vec::new(),
            base: Base::default(),
        }
    }
}
