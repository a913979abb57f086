//! Budget accrual and enemy unit commissioning.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use stormfront_core::constants::{
    commission_amount_factor, commission_limit_factor, COMMISSION_AMOUNTS_SCALE,
    COMMISSION_LIMITS_SCALE, COMMISSION_UNIT_VARIETY, PLAYER_BUDGET_BASE,
    PLAYER_BUDGET_IMPORTANCE_LOG,
};
use stormfront_core::enums::COMMISSION_TASKS;
use stormfront_core::settings::Settings;
use stormfront_theater::{ConflictTheater, ControlPoint, UnitDatabase};

/// Player budget earned at turn end: the log of the importance-weighted
/// readiness of everything the player holds, times the base bonus and the
/// difficulty multiplier. Zero when the player holds nothing.
pub fn budget_reward_amount(theater: &ConflictTheater, settings: &Settings) -> i32 {
    let total_importance: f64 = theater
        .player_points()
        .map(|cp| cp.importance * cp.base.strength())
        .sum();
    if theater.player_points().next().is_none() {
        return 0;
    }
    ((total_importance + 1.0).log(PLAYER_BUDGET_IMPORTANCE_LOG)
        * PLAYER_BUDGET_BASE
        * settings.multiplier)
        .ceil() as i32
}

/// Run one commissioning pass for an enemy-held control point: for each
/// role, accrue commission points while below the role's unit cap, and
/// spend any whole-point balance on one randomly chosen eligible type.
pub fn commission_units(
    cp: &mut ControlPoint,
    db: &UnitDatabase,
    settings: &Settings,
    rng: &mut impl Rng,
) {
    for task in COMMISSION_TASKS {
        let limit = commission_limit_factor(task)
            * cp.importance.powf(COMMISSION_LIMITS_SCALE)
            * settings.multiplier;
        if f64::from(cp.base.total_units(task, db)) >= limit {
            continue;
        }

        let awarded = commission_amount_factor(task)
            * cp.importance.powf(COMMISSION_AMOUNTS_SCALE)
            * settings.multiplier;
        let to_spend = cp.base.append_commission_points(task, awarded);
        if to_spend == 0 {
            continue;
        }

        let candidates =
            db.choose_for_commission(task, COMMISSION_UNIT_VARIETY, settings.heavy_sams, rng);
        let Some(&unit_type) = candidates.choose(rng) else {
            continue;
        };
        info!(
            cp = %cp.name,
            task = ?task,
            unit = db.name(unit_type),
            count = to_spend,
            "commissioning units"
        );
        cp.base.commission_units(db, unit_type, to_spend);
    }
}
