//! The campaign game state and turn pass.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use stormfront_core::constants::{
    AWACS_BUDGET_COST, BASEATTACK_STRENGTH_THRESHOLD, ENEMY_BASE_STRENGTH_RECOVERY,
    INTERCEPT_GLOBAL_PROBABILITY_BASE, INTERCEPT_GLOBAL_PROBABILITY_LOG, PLAYER_BASE_STRENGTH_RECOVERY,
    PLAYER_BUDGET_INITIAL,
};
use stormfront_core::enums::{EventKind, Side};
use stormfront_core::error::CampaignError;
use stormfront_core::settings::Settings;
use stormfront_theater::{ConflictTheater, CpId, TheaterGeometry, UnitDatabase};

use crate::economy;
use crate::event::{air_event_from_global, weight_for, Debriefing, Event, EVENT_WEIGHTS};

/// Configuration for starting a new campaign.
#[derive(Debug, Clone)]
pub struct CampaignConfig {
    /// RNG seed for determinism. Same seed = same campaign.
    pub seed: u64,
    pub settings: Settings,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            settings: Settings::default(),
        }
    }
}

/// Everything a conflict pair contributes to event rolls, captured before
/// rolling so gates never hold borrows into the theater.
#[derive(Debug, Clone, Copy)]
struct PairSnapshot {
    player_cp: CpId,
    enemy_cp: CpId,
    player_strength: f64,
    enemy_strength: f64,
    player_is_global: bool,
    player_coastal: bool,
    enemy_coastal: bool,
    player_has_installations: bool,
    enemy_has_installations: bool,
    enemy_planes: u32,
    enemy_armor: u32,
    has_frontline: bool,
}

/// The campaign: theater, budget, and the per-turn event list.
pub struct Game {
    theater: ConflictTheater,
    db: UnitDatabase,
    settings: Settings,
    budget: i32,
    events: Vec<Event>,
    ignored_cps: Vec<CpId>,
    rng: ChaCha8Rng,
    turn: u32,
}

impl Game {
    pub fn new(theater: ConflictTheater, db: UnitDatabase, config: CampaignConfig) -> Self {
        Self {
            theater,
            db,
            settings: config.settings,
            budget: PLAYER_BUDGET_INITIAL,
            events: Vec::new(),
            ignored_cps: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            turn: 0,
        }
    }

    pub fn theater(&self) -> &ConflictTheater {
        &self.theater
    }

    pub fn theater_mut(&mut self) -> &mut ConflictTheater {
        &mut self.theater
    }

    pub fn db(&self) -> &UnitDatabase {
        &self.db
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn budget(&self) -> i32 {
        self.budget
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The events generated for the current turn.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_player_attack(&self, event: &Event) -> bool {
        event.attacker == Side::Player
    }

    /// The budget delta the player would earn at the next turn end.
    pub fn budget_reward_amount(&self) -> i32 {
        economy::budget_reward_amount(&self.theater, &self.settings)
    }

    /// Deduct the fixed cost of committing AWACS support to an operation.
    pub fn awacs_expense_commit(&mut self) {
        self.budget -= AWACS_BUDGET_COST;
    }

    /// Queue a logistics delivery to a friendly point. Origin equals
    /// destination by construction.
    pub fn units_delivery_event(&mut self, to_cp: CpId) -> Event {
        let event = Event {
            kind: EventKind::UnitsDelivery,
            attacker: Side::Player,
            from_cp: to_cp,
            to_cp,
            turn: self.turn,
        };
        self.events.push(event.clone());
        event
    }

    /// Cancel a pending logistics delivery.
    pub fn units_delivery_remove(&mut self, event: &Event) {
        self.events.retain(|e| e != event);
    }

    /// Validate an event before the external layer materializes it.
    /// Offering an event that is not queued is a programmer error in the
    /// resolution layer, reported as such.
    pub fn initiate_event(&self, event: &Event) -> Result<(), CampaignError> {
        if !self.events.contains(event) {
            return Err(CampaignError::EventNotQueued);
        }
        info!(kind = ?event.kind, from = event.from_cp.0, to = event.to_cp.0, "initiating event");
        Ok(())
    }

    /// Commit an externally resolved event: award the success bonus and
    /// drop it from the turn's list.
    pub fn finish_event(
        &mut self,
        event: &Event,
        debriefing: &Debriefing,
    ) -> Result<(), CampaignError> {
        let Some(index) = self.events.iter().position(|e| e == event) else {
            return Err(CampaignError::EventNotQueued);
        };
        if debriefing.success {
            if let Some(weight) = weight_for(event.kind) {
                self.budget += weight.bonus;
            }
        }
        self.events.remove(index);
        Ok(())
    }

    /// Advance the campaign one turn: skip unresolved events, run the
    /// economy (unless this is a no-op pass), then rebuild the event list
    /// for the new turn.
    pub fn pass_turn(
        &mut self,
        geometry: &dyn TheaterGeometry,
        no_action: bool,
        ignored_cps: &[CpId],
    ) {
        info!(turn = self.turn, "pass turn");
        for event in std::mem::take(&mut self.events) {
            debug!(kind = ?event.kind, "skipping unresolved event");
        }

        if !no_action {
            self.budget += economy::budget_reward_amount(&self.theater, &self.settings);

            let enemy_ids: Vec<CpId> = self.theater.enemy_points().map(|cp| cp.id).collect();
            for id in enemy_ids {
                if let Some(cp) = self.theater.get_mut(id) {
                    economy::commission_units(cp, &self.db, &self.settings, &mut self.rng);
                }
            }

            for cp in self.theater.control_points_mut() {
                let recovery = if cp.captured {
                    PLAYER_BASE_STRENGTH_RECOVERY
                } else {
                    ENEMY_BASE_STRENGTH_RECOVERY
                };
                cp.base.affect_strength(recovery);
            }
        }

        self.ignored_cps = ignored_cps.to_vec();
        self.turn += 1;
        self.generate_events(geometry);
        self.generate_global_interceptions();
    }

    /// Uniform roll in [1, 100] against `probability × mult`.
    fn roll(&mut self, probability: f64, mult: f64) -> bool {
        f64::from(self.rng.gen_range(1..=100u32)) <= probability * mult
    }

    fn snapshot_pair(
        &self,
        geometry: &dyn TheaterGeometry,
        player_id: CpId,
        enemy_id: CpId,
    ) -> Option<PairSnapshot> {
        let player_cp = self.theater.get(player_id)?;
        let enemy_cp = self.theater.get(enemy_id)?;
        Some(PairSnapshot {
            player_cp: player_id,
            enemy_cp: enemy_id,
            player_strength: player_cp.base.strength(),
            enemy_strength: enemy_cp.base.strength(),
            player_is_global: player_cp.is_global,
            player_coastal: player_cp.coastal,
            enemy_coastal: enemy_cp.coastal,
            player_has_installations: !player_cp.ground_objects.is_empty(),
            enemy_has_installations: !enemy_cp.ground_objects.is_empty(),
            enemy_planes: enemy_cp.base.total_planes(),
            enemy_armor: enemy_cp.base.total_armor(),
            has_frontline: geometry.has_frontline_between(player_cp, enemy_cp),
        })
    }

    /// Roll the weight table over every conflict pair. Every gate is a
    /// silent skip; the pass is total and may produce an empty list.
    fn generate_events(&mut self, geometry: &dyn TheaterGeometry) {
        for (player_id, enemy_id) in self.theater.conflicts(true) {
            let Some(enemy_cp) = self.theater.get(enemy_id) else {
                continue;
            };
            if enemy_cp.is_global {
                continue;
            }
            let Some(pair) = self.snapshot_pair(geometry, player_id, enemy_id) else {
                continue;
            };

            for weight in EVENT_WEIGHTS {
                if weight.requires_frontline && !pair.has_frontline {
                    continue;
                }
                if pair.player_is_global && !air_event_from_global(weight.kind) {
                    continue;
                }

                if weight.player_probability == 100
                    || self.roll(f64::from(weight.player_probability), pair.player_strength)
                {
                    self.generate_player_event(weight.kind, &pair);
                }

                if weight.enemy_probability > 0
                    && (weight.enemy_probability == 100
                        || self.roll(f64::from(weight.enemy_probability), pair.enemy_strength))
                {
                    self.generate_enemy_event(weight.kind, &pair);
                }
            }
        }
    }

    fn generate_player_event(&mut self, kind: EventKind, pair: &PairSnapshot) {
        if kind == EventKind::NavalIntercept && !pair.enemy_coastal {
            // No naval traffic to intercept around a landlocked point.
            return;
        }
        if kind == EventKind::BaseAttack && pair.enemy_strength > BASEATTACK_STRENGTH_THRESHOLD {
            // Target still too strong to assault.
            return;
        }
        if kind == EventKind::Strike && !pair.enemy_has_installations {
            return;
        }

        debug!(?kind, from = pair.player_cp.0, to = pair.enemy_cp.0, "player event");
        self.events.push(Event {
            kind,
            attacker: Side::Player,
            from_cp: pair.player_cp,
            to_cp: pair.enemy_cp,
            turn: self.turn,
        });
    }

    fn generate_enemy_event(&mut self, kind: EventKind, pair: &PairSnapshot) {
        // One enemy-initiated instance of each kind per turn.
        if self
            .events
            .iter()
            .any(|e| e.attacker == Side::Enemy && e.kind == kind)
        {
            return;
        }
        if self.ignored_cps.contains(&pair.player_cp) {
            // Just-captured points get a grace turn.
            return;
        }
        if pair.enemy_planes == 0 {
            return;
        }
        if pair.player_is_global {
            return;
        }

        match kind {
            EventKind::NavalIntercept if !pair.player_coastal => return,
            EventKind::Strike if !pair.player_has_installations => return,
            EventKind::BaseAttack => {
                // Base assaults are a theater-wide singleton, need armor to
                // press, and only go against weakened targets.
                if self.events.iter().any(|e| e.kind == EventKind::BaseAttack) {
                    return;
                }
                if pair.enemy_armor == 0 {
                    return;
                }
                if pair.player_strength > BASEATTACK_STRENGTH_THRESHOLD {
                    return;
                }
            }
            _ => {}
        }

        debug!(?kind, from = pair.enemy_cp.0, to = pair.player_cp.0, "enemy event");
        self.events.push(Event {
            kind,
            attacker: Side::Enemy,
            from_cp: pair.enemy_cp,
            to_cp: pair.player_cp,
            turn: self.turn,
        });
    }

    /// Independent pass over global (rear/carrier) player points: each may
    /// scramble one interception against an enemy point that is not already
    /// in conflict. At most one interception per turn, theater-wide.
    fn generate_global_interceptions(&mut self) {
        let globals: Vec<(CpId, f64)> = self
            .theater
            .player_points()
            .filter(|cp| cp.is_global)
            .map(|cp| (cp.id, cp.base.strength()))
            .collect();
        if globals.is_empty() {
            return;
        }

        let player_count = self.theater.player_points().count();
        let contested: HashSet<CpId> = self
            .theater
            .conflicts(true)
            .into_iter()
            .map(|(_, enemy)| enemy)
            .collect();
        let targets: Vec<CpId> = self
            .theater
            .enemy_points()
            .filter(|cp| !contested.contains(&cp.id))
            .map(|cp| cp.id)
            .collect();
        if targets.is_empty() {
            return;
        }

        // Per-node share shrinks as more global points exist; the whole
        // term grows logarithmically with theater size.
        let probability_base = (INTERCEPT_GLOBAL_PROBABILITY_BASE / globals.len() as f64).max(1.0);
        let probability =
            probability_base * (player_count as f64 + 1.0).log(INTERCEPT_GLOBAL_PROBABILITY_LOG);

        for (from_cp, strength) in globals {
            if self.roll(probability, strength) {
                let Some(&to_cp) = targets.choose(&mut self.rng) else {
                    return;
                };
                debug!(from = from_cp.0, to = to_cp.0, "global interception");
                self.events.push(Event {
                    kind: EventKind::Intercept,
                    attacker: Side::Player,
                    from_cp,
                    to_cp,
                    turn: self.turn,
                });
                break;
            }
        }
    }
}
