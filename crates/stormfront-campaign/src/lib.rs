//! Turn engine for the STORMFRONT campaign.
//!
//! `Game` owns the theater, the player budget, and the per-turn event
//! list. Each `pass_turn` skips whatever the player left unresolved,
//! runs the economy (budget accrual, enemy commissioning, strength
//! recovery), and rebuilds the event list from weighted rolls over the
//! current conflict pairs. Completely headless; all randomness comes
//! from a seeded RNG owned by the game.

pub mod economy;
pub mod event;
pub mod game;

pub use event::{Debriefing, Event, EventWeight, EVENT_WEIGHTS};
pub use game::{CampaignConfig, Game};
