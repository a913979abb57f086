//! Flight planning for the STORMFRONT campaign.
//!
//! Turns an airbase's inventory and the current theater picture into a
//! scheduled set of flights with full routes: patrols over the closest
//! frontline, close air support runs, suppression strikes on emitting
//! air defences, and precision strikes on everything else. Planning is
//! a pure function of theater state and the seeded campaign RNG; the
//! base inventory is only touched on commit.

pub mod flight;
pub mod planner;
pub mod targets;

pub use flight::{Flight, FlightWaypoint, WaypointTarget};
pub use planner::FlightPlanner;
pub use targets::{sead_candidates, strike_candidates, TargetCandidate};

#[cfg(test)]
mod tests;
