//! Campaign tuning constants.

use crate::enums::Task;

// --- Commissioning ---

/// How many eligible unit types the commissioning roll samples from.
pub const COMMISSION_UNIT_VARIETY: usize = 4;

/// Exponent applied to control-point importance for commissioning caps.
pub const COMMISSION_LIMITS_SCALE: f64 = 1.5;

/// Exponent applied to control-point importance for per-turn point accrual.
pub const COMMISSION_AMOUNTS_SCALE: f64 = 1.5;

/// Per-role unit cap factor.
pub fn commission_limit_factor(task: Task) -> f64 {
    match task {
        Task::PinpointStrike => 10.0,
        Task::Cas => 5.0,
        Task::Cap => 8.0,
        Task::AirDefence => 1.0,
        Task::Sead | Task::Embarking => 0.0,
    }
}

/// Per-role commission-point accrual factor.
pub fn commission_amount_factor(task: Task) -> f64 {
    match task {
        Task::PinpointStrike => 3.0,
        Task::Cas => 1.0,
        Task::Cap => 2.0,
        Task::AirDefence => 0.3,
        Task::Sead | Task::Embarking => 0.0,
    }
}

// --- Event generation ---

/// Base probability share for global-point interceptions, divided by the
/// number of global player points.
pub const INTERCEPT_GLOBAL_PROBABILITY_BASE: f64 = 30.0;

/// Logarithm base for scaling interception probability with theater size.
pub const INTERCEPT_GLOBAL_PROBABILITY_LOG: f64 = 2.0;

/// Base-assault events are skipped while the target's strength exceeds this.
pub const BASEATTACK_STRENGTH_THRESHOLD: f64 = 0.4;

// --- Strength recovery ---

/// Strength player bases recover per turn.
pub const PLAYER_BASE_STRENGTH_RECOVERY: f64 = 0.2;

/// Strength enemy bases recover per turn.
pub const ENEMY_BASE_STRENGTH_RECOVERY: f64 = 0.05;

// --- Budget ---

/// Initial player budget.
pub const PLAYER_BUDGET_INITIAL: i32 = 170;

/// Base post-turn budget bonus.
pub const PLAYER_BUDGET_BASE: f64 = 17.0;

/// Logarithm base for the importance-weighted budget multiplier.
pub const PLAYER_BUDGET_IMPORTANCE_LOG: f64 = 2.0;

/// Budget cost of AWACS support for a single operation.
pub const AWACS_BUDGET_COST: i32 = 4;

// --- Targeting ---

/// Maximum engagement range for strike tasking (meters).
pub const STRIKE_MAX_RANGE: f64 = 1_500_000.0;

/// Maximum engagement range for SEAD tasking (meters).
pub const SEAD_MAX_RANGE: f64 = 1_500_000.0;

/// An air-defence installation is a SEAD candidate only if one of its
/// units has a detection range above this (meters).
pub const SEAD_DETECTION_RANGE_THRESHOLD: f64 = 1_000.0;

// --- Importance band ---

/// Lowest control-point importance weight.
pub const IMPORTANCE_LOW: f64 = 1.0;

/// Typical control-point importance weight.
pub const IMPORTANCE_MEDIUM: f64 = 1.2;

/// Highest control-point importance weight.
pub const IMPORTANCE_HIGH: f64 = 1.4;
