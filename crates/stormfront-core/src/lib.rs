//! Core types and definitions for the STORMFRONT campaign simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! map geometry, roles and event kinds, tuning constants, settings, and
//! errors. It has no dependency on any runtime framework.

pub mod constants;
pub mod enums;
pub mod error;
pub mod geo;
pub mod settings;

#[cfg(test)]
mod tests;
