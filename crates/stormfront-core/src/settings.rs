//! Campaign settings and planner configuration.

use serde::{Deserialize, Serialize};

use crate::geo::{feet_to_meter, nm_to_meter};

/// Persisted campaign settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Difficulty multiplier applied to budget accrual and enemy
    /// commissioning.
    pub multiplier: f64,
    /// Whether the enemy may field heavy (long-range) SAM systems.
    pub heavy_sams: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            heavy_sams: true,
        }
    }
}

/// Tuning knobs for the flight planner. All the route-synthesis and
/// scheduling constants live here so doctrine tuning never touches
/// allocation logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Mission window length in minutes.
    pub mission_duration: u32,
    /// Nominal minutes between CAP launches.
    pub cap_interval: u32,
    /// Nominal minutes between CAS launches.
    pub cas_interval: u32,
    /// Nominal minutes between SEAD launches.
    pub sead_interval: u32,
    /// Nominal minutes between strike launches.
    pub strike_interval: u32,
    /// Per-slot launch jitter, minutes around the nominal interval.
    pub schedule_jitter: u32,
    /// Aircraft per flight.
    pub group_size: u32,
    /// Ingress/egress standoff from a SEAD or strike target (meters).
    pub ingress_egress_distance: f64,
    /// Ingress altitude for SEAD/strike routes (meters).
    pub ingress_alt: f64,
    /// Egress altitude for SEAD/strike routes (meters).
    pub egress_alt: f64,
    /// Patrol altitude band (meters).
    pub patrol_alt_range: (f64, f64),
    /// Pattern altitude for descent and landing (meters).
    pub pattern_alt: f64,
    /// CAS route altitude (meters).
    pub cas_alt: f64,
    /// Climb-out distance from the home base (meters).
    pub climb_distance: f64,
    /// Ingress/egress heading offset from the reciprocal bearing (degrees).
    pub ingress_offset_deg: f64,
    /// Maximum strike engagement range (meters).
    pub strike_max_range: f64,
    /// Maximum SEAD engagement range (meters).
    pub sead_max_range: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            mission_duration: 120,
            cap_interval: 20,
            cas_interval: 30,
            sead_interval: 40,
            strike_interval: 40,
            schedule_jitter: 5,
            group_size: 2,
            ingress_egress_distance: nm_to_meter(45.0),
            ingress_alt: feet_to_meter(20_000.0),
            egress_alt: feet_to_meter(20_000.0),
            patrol_alt_range: (feet_to_meter(15_000.0), feet_to_meter(33_000.0)),
            pattern_alt: feet_to_meter(5_000.0),
            cas_alt: 1_000.0,
            climb_distance: 30_000.0,
            ingress_offset_deg: 25.0,
            strike_max_range: crate::constants::STRIKE_MAX_RANGE,
            sead_max_range: crate::constants::SEAD_MAX_RANGE,
        }
    }
}
