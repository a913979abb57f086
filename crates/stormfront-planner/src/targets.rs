//! Target prioritization for suppression and strike tasking.

use stormfront_core::constants::SEAD_DETECTION_RANGE_THRESHOLD;
use stormfront_core::geo;
use stormfront_core::settings::PlannerConfig;
use stormfront_theater::{
    ConflictTheater, ControlPoint, CpId, GroundInstallation, InstallationCategory, UnitDatabase,
};

/// A prioritized installation target, carrying a value copy of the
/// installation so planning never aliases theater state.
#[derive(Debug, Clone)]
pub struct TargetCandidate {
    pub cp: CpId,
    pub installation: GroundInstallation,
    /// Distance from the planning airbase to the owning control point,
    /// meters.
    pub distance: f64,
}

/// Emitting air-defence sites on hostile points, nearest first.
///
/// The scan aborts outright at the first control point beyond twice the
/// engagement range, even though points are visited in theater order
/// rather than by distance. Kept as-is; theaters are laid out roughly
/// near-to-far and the planner tolerates a short list.
pub fn sead_candidates(
    theater: &ConflictTheater,
    db: &UnitDatabase,
    home: &ControlPoint,
    config: &PlannerConfig,
) -> Vec<TargetCandidate> {
    let mut candidates = Vec::new();
    for cp in theater
        .control_points()
        .filter(|cp| cp.captured != home.captured)
    {
        let cp_distance = geo::distance(home.position, cp.position);
        if cp_distance > 2.0 * config.sead_max_range {
            break;
        }
        if cp_distance >= config.sead_max_range {
            continue;
        }
        for installation in &cp.ground_objects {
            if installation.category != InstallationCategory::AirDefence {
                continue;
            }
            if !installation.has_radar_emitter(db, SEAD_DETECTION_RANGE_THRESHOLD) {
                continue;
            }
            candidates.push(TargetCandidate {
                cp: cp.id,
                installation: installation.clone(),
                distance: cp_distance,
            });
        }
    }
    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    candidates
}

/// Live hostile installations of any category within strike range,
/// nearest first, one entry per installation.
pub fn strike_candidates(
    theater: &ConflictTheater,
    home: &ControlPoint,
    config: &PlannerConfig,
) -> Vec<TargetCandidate> {
    let mut candidates = Vec::new();
    for cp in theater
        .control_points()
        .filter(|cp| cp.captured != home.captured)
    {
        let cp_distance = geo::distance(home.position, cp.position);
        if cp_distance > 2.0 * config.strike_max_range {
            break;
        }
        if cp_distance >= config.strike_max_range {
            continue;
        }
        let mut seen = Vec::new();
        for installation in &cp.ground_objects {
            if installation.is_dead || seen.contains(&installation.group_id) {
                continue;
            }
            seen.push(installation.group_id);
            candidates.push(TargetCandidate {
                cp: cp.id,
                installation: installation.clone(),
                distance: cp_distance,
            });
        }
    }
    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    candidates
}
