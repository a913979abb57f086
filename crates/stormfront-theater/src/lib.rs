//! Territory graph for the STORMFRONT campaign.
//!
//! Owns the control points (capturable territories), their per-faction
//! unit inventories, and the ground installations sited on them, and
//! answers the conflict queries the turn engine and flight planner run
//! against the current ownership snapshot. Terrain geometry and the
//! static unit capability tables are collaborators behind traits here.

pub mod base;
pub mod controlpoint;
pub mod db;
pub mod geometry;
pub mod installation;
pub mod theater;

pub use base::Base;
pub use controlpoint::{ControlPoint, CpId};
pub use db::{UnitDatabase, UnitSpec, UnitTypeId};
pub use geometry::{FrontlineVector, StraightFrontline, TheaterGeometry};
pub use installation::{GroundInstallation, InstallationCategory, InstalledUnit, UnitGroup};
pub use theater::ConflictTheater;
