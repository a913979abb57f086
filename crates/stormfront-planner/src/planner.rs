//! Per-airbase flight planner.
//!
//! Runs once per airbase per turn over a working copy of the base
//! inventory. The pipeline is fixed: refresh targets, then commission
//! patrols, close air support, suppression, and strikes in that order,
//! each stage drawing from whatever the earlier stages left. Nothing is
//! deducted from the real base until `commit_to`.

use std::collections::{HashMap, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use stormfront_core::enums::{FlightRole, Task, WaypointKind};
use stormfront_core::error::CampaignError;
use stormfront_core::geo::{self, meter_to_feet, nm_to_meter, MapPoint};
use stormfront_core::settings::PlannerConfig;
use stormfront_theater::{
    Base, ConflictTheater, ControlPoint, CpId, TheaterGeometry, UnitDatabase, UnitTypeId,
};

use crate::flight::{Flight, FlightWaypoint, WaypointTarget};
use crate::targets::{self, TargetCandidate};

/// Plans one airbase's flights for the coming mission window.
pub struct FlightPlanner {
    from_cp: CpId,
    config: PlannerConfig,
    /// Airframes still unassigned this planning pass.
    working_inventory: HashMap<UnitTypeId, u32>,
    flights: Vec<Flight>,
    sead_targets: VecDeque<TargetCandidate>,
    strike_targets: VecDeque<TargetCandidate>,
}

impl FlightPlanner {
    pub fn new(from_cp: CpId, config: PlannerConfig) -> Self {
        Self {
            from_cp,
            config,
            working_inventory: HashMap::new(),
            flights: Vec::new(),
            sead_targets: VecDeque::new(),
            strike_targets: VecDeque::new(),
        }
    }

    pub fn from_cp(&self) -> CpId {
        self.from_cp
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn flights_with_role(&self, role: FlightRole) -> impl Iterator<Item = &Flight> {
        self.flights.iter().filter(move |f| f.role == role)
    }

    pub fn working_inventory(&self) -> &HashMap<UnitTypeId, u32> {
        &self.working_inventory
    }

    /// Discard previous planning state and reload the working inventory
    /// from the base.
    pub fn reset(&mut self, base: &Base) {
        self.working_inventory = base.aircraft.clone();
        self.flights.clear();
        self.sead_targets.clear();
        self.strike_targets.clear();
    }

    /// The full planning pass for this airbase.
    pub fn plan_flights(
        &mut self,
        theater: &ConflictTheater,
        db: &UnitDatabase,
        geometry: &dyn TheaterGeometry,
        rng: &mut impl Rng,
    ) -> Result<(), CampaignError> {
        let home = theater
            .get(self.from_cp)
            .ok_or(CampaignError::UnknownControlPoint(self.from_cp.0))?
            .clone();
        self.reset(&home.base);
        self.sead_targets = targets::sead_candidates(theater, db, &home, &self.config).into();
        self.strike_targets = targets::strike_candidates(theater, &home, &self.config).into();

        self.commission_cap(theater, db, &home, geometry, rng);
        self.commission_cas(theater, db, &home, geometry, rng);
        self.commission_sead(db, &home, rng);
        self.commission_strike(db, &home, rng);

        debug!(
            cp = home.id.0,
            flights = self.flights.len(),
            "airbase planning pass complete"
        );
        Ok(())
    }

    /// Deduct every planned flight from the base inventory. Emptied
    /// entries are dropped so future planning never iterates dead types.
    pub fn commit_to(&self, base: &mut Base) {
        for flight in &self.flights {
            if let Some(count) = base.aircraft.get_mut(&flight.unit_type) {
                *count = count.saturating_sub(flight.count);
            }
        }
        base.aircraft.retain(|_, count| *count > 0);
    }

    /// The base inventory as it would look after committing this plan.
    pub fn available_aircraft(&self, base: &Base) -> HashMap<UnitTypeId, u32> {
        let mut available = base.aircraft.clone();
        for flight in &self.flights {
            if let Some(count) = available.get_mut(&flight.unit_type) {
                *count = count.saturating_sub(flight.count);
            }
        }
        available.retain(|_, count| *count > 0);
        available
    }

    /// Drop one planned flight, e.g. when the player overrides a slot.
    pub fn remove_flight(&mut self, index: usize) -> Option<Flight> {
        if index < self.flights.len() {
            Some(self.flights.remove(index))
        } else {
            None
        }
    }

    /// Scramble one interceptor group. Not part of the default pass; the
    /// campaign invokes it when an interception event needs defenders on
    /// short notice, so the route is just a climb-out and the launch is
    /// immediate.
    pub fn commission_interceptors(
        &mut self,
        db: &UnitDatabase,
        home: &ControlPoint,
        rng: &mut impl Rng,
    ) {
        let Some(unit_type) = self.pick_unit(db, Task::Cap, rng) else {
            return;
        };
        let altitude =
            rng.gen_range(self.config.patrol_alt_range.0..self.config.patrol_alt_range.1);
        let climb_out = FlightWaypoint::new(
            geo::point_from_heading(
                home.position,
                rng.gen_range(0.0..360.0),
                self.config.climb_distance,
            ),
            altitude,
            WaypointKind::Ascend,
        )
        .named("ASCEND", "Scramble climb-out");
        self.flights.push(Flight {
            unit_type,
            count: self.config.group_size,
            from_cp: home.id,
            role: FlightRole::Intercept,
            scheduled_in: 0,
            waypoints: vec![climb_out],
        });
    }

    // --- Allocation ---

    /// Pick one unit type for `task` and deduct a group from the working
    /// inventory. Keys are sorted before the draw; map order must never
    /// leak into the roll.
    fn pick_unit(
        &mut self,
        db: &UnitDatabase,
        task: Task,
        rng: &mut impl Rng,
    ) -> Option<UnitTypeId> {
        let mut eligible: Vec<UnitTypeId> = self
            .working_inventory
            .iter()
            .filter(|(id, count)| **count >= self.config.group_size && db.supports(**id, task))
            .map(|(id, _)| *id)
            .collect();
        eligible.sort();
        let unit_type = *eligible.choose(rng)?;
        if let Some(count) = self.working_inventory.get_mut(&unit_type) {
            *count -= self.config.group_size;
        }
        Some(unit_type)
    }

    /// Hostile points adjacent to home, the frontlines this base covers.
    fn cas_locations(theater: &ConflictTheater, home: &ControlPoint) -> Vec<CpId> {
        home.connected
            .iter()
            .copied()
            .filter(|&id| {
                theater
                    .get(id)
                    .is_some_and(|cp| cp.captured != home.captured)
            })
            .collect()
    }

    fn schedule_offset(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(0..=self.config.schedule_jitter)
    }

    fn schedule_step(&self, interval: u32, rng: &mut impl Rng) -> u32 {
        let jitter = self.config.schedule_jitter;
        rng.gen_range(interval - jitter..=interval + jitter)
    }

    // --- Route synthesis ---

    fn commission_cap(
        &mut self,
        theater: &ConflictTheater,
        db: &UnitDatabase,
        home: &ControlPoint,
        geometry: &dyn TheaterGeometry,
        rng: &mut impl Rng,
    ) {
        let cas_locations = Self::cas_locations(theater, home);
        let slots = self.config.mission_duration / self.config.cap_interval;
        let offset = self.schedule_offset(rng);
        let mut elapsed = 0;
        for _ in 0..slots {
            let Some(unit_type) = self.pick_unit(db, Task::Cap, rng) else {
                break;
            };
            let scheduled_in = offset + elapsed;
            elapsed += self.schedule_step(self.config.cap_interval, rng);

            let patrol_alt =
                rng.gen_range(self.config.patrol_alt_range.0..self.config.patrol_alt_range.1);
            let (track_start, track_end) =
                Self::patrol_track(theater, home, geometry, &cas_locations, rng);

            let ascend_heading = rng.gen_range(0.0..360.0);
            let mut waypoints = Vec::with_capacity(5);
            waypoints.push(
                FlightWaypoint::new(
                    geo::point_from_heading(home.position, ascend_heading, self.config.climb_distance),
                    patrol_alt,
                    WaypointKind::Ascend,
                )
                .named(
                    "ASCEND",
                    format!("Climb to {} ft", meter_to_feet(patrol_alt)),
                ),
            );

            // The patrol station guards the base and every live installation
            // that is not part of the airbase itself.
            let mut station =
                FlightWaypoint::new(track_start, patrol_alt, WaypointKind::PatrolTrack)
                    .named("PATROL", "Race-track start");
            station.targets.push(WaypointTarget::ControlPoint(home.id));
            let mut guarded = Vec::new();
            for installation in &home.ground_objects {
                if installation.is_dead
                    || installation.airbase_group
                    || guarded.contains(&installation.group_id)
                {
                    continue;
                }
                guarded.push(installation.group_id);
                station.targets.push(WaypointTarget::Installation {
                    cp: home.id,
                    group_id: installation.group_id,
                });
            }
            waypoints.push(station);
            waypoints.push(
                FlightWaypoint::new(track_end, patrol_alt, WaypointKind::Patrol)
                    .named("PATROL END", "Turn back along the track"),
            );
            waypoints.push(
                FlightWaypoint::new(
                    geo::point_from_heading(
                        home.position,
                        geo::reciprocal(ascend_heading),
                        self.config.climb_distance,
                    ),
                    self.config.pattern_alt,
                    WaypointKind::Descend,
                )
                .named("DESCEND", "Descend to pattern altitude"),
            );
            waypoints.push(
                FlightWaypoint::new(home.position, self.config.pattern_alt, WaypointKind::Landing)
                    .named("LANDING", "RTB"),
            );

            let role = if home.is_global {
                FlightRole::Barcap
            } else {
                FlightRole::Cap
            };
            self.flights.push(Flight {
                unit_type,
                count: self.config.group_size,
                from_cp: home.id,
                role,
                scheduled_in,
                waypoints,
            });
        }
    }

    /// Pick the two ends of a patrol race-track. Frontline coverage is
    /// preferred; failing that, orbit a guarded installation; failing
    /// that, a random bearing off the base.
    fn patrol_track(
        theater: &ConflictTheater,
        home: &ControlPoint,
        geometry: &dyn TheaterGeometry,
        cas_locations: &[CpId],
        rng: &mut impl Rng,
    ) -> (MapPoint, MapPoint) {
        if !cas_locations.is_empty() && rng.gen_bool(0.8) {
            if let Some(track) = cas_locations
                .choose(rng)
                .and_then(|&id| theater.get(id))
                .and_then(|loc| geometry.frontline_vector(home, loc))
            {
                let center =
                    geo::point_from_heading(track.origin, track.heading, track.distance / 2.0);
                let standoff = rng.gen_range(nm_to_meter(6.0)..nm_to_meter(15.0));
                let orbit_center = geo::point_from_heading(
                    center,
                    (track.heading - 90.0).rem_euclid(360.0),
                    standoff,
                );
                let radius = track.distance * 2.0;
                return (
                    geo::point_from_heading(orbit_center, track.heading, radius),
                    geo::point_from_heading(orbit_center, geo::reciprocal(track.heading), radius),
                );
            }
        }

        if let Some(installation) = home.ground_objects.choose(rng) {
            let heading = geo::heading_between(home.position, installation.position);
            let radius = rng.gen_range(nm_to_meter(5.0)..nm_to_meter(10.0));
            return (
                geo::point_from_heading(
                    installation.position,
                    (heading - 90.0).rem_euclid(360.0),
                    radius,
                ),
                geo::point_from_heading(
                    installation.position,
                    (heading + 90.0).rem_euclid(360.0),
                    radius,
                ),
            );
        }

        let anchor = geo::point_from_heading(
            home.position,
            rng.gen_range(0.0..360.0),
            rng.gen_range(nm_to_meter(5.0)..nm_to_meter(40.0)),
        );
        let heading = geo::heading_between(home.position, anchor);
        let radius = rng.gen_range(nm_to_meter(40.0)..nm_to_meter(120.0));
        (
            geo::point_from_heading(anchor, (heading - 90.0).rem_euclid(360.0), radius),
            geo::point_from_heading(anchor, (heading + 90.0).rem_euclid(360.0), radius),
        )
    }

    fn commission_cas(
        &mut self,
        theater: &ConflictTheater,
        db: &UnitDatabase,
        home: &ControlPoint,
        geometry: &dyn TheaterGeometry,
        rng: &mut impl Rng,
    ) {
        let cas_locations = Self::cas_locations(theater, home);
        if cas_locations.is_empty() {
            return;
        }
        let slots = self.config.mission_duration / self.config.cas_interval;
        let offset = self.schedule_offset(rng);
        let mut elapsed = 0;
        for _ in 0..slots {
            let Some(unit_type) = self.pick_unit(db, Task::Cas, rng) else {
                break;
            };
            let scheduled_in = offset + elapsed;
            elapsed += self.schedule_step(self.config.cas_interval, rng);

            let Some(&loc_id) = cas_locations.choose(rng) else {
                break;
            };
            let Some(track) = theater
                .get(loc_id)
                .and_then(|loc| geometry.frontline_vector(home, loc))
            else {
                continue;
            };
            let center = geo::point_from_heading(track.origin, track.heading, track.distance / 2.0);
            let far_end = geo::point_from_heading(track.origin, track.heading, track.distance);

            let mut station = FlightWaypoint::new(center, self.config.cas_alt, WaypointKind::Cas)
                .named("CAS", "Engage ground targets along the frontline");
            station.targets.push(WaypointTarget::ControlPoint(loc_id));

            self.flights.push(Flight {
                unit_type,
                count: self.config.group_size,
                from_cp: home.id,
                role: FlightRole::Cas,
                scheduled_in,
                waypoints: vec![
                    FlightWaypoint::new(track.origin, self.config.cas_alt, WaypointKind::IngressCas)
                        .named("INGRESS", "Ingress at the frontline's near end"),
                    station,
                    FlightWaypoint::new(far_end, self.config.cas_alt, WaypointKind::Egress)
                        .named("EGRESS", "Egress past the frontline's far end"),
                ],
            });
        }
    }

    fn commission_sead(&mut self, db: &UnitDatabase, home: &ControlPoint, rng: &mut impl Rng) {
        if self.sead_targets.is_empty() {
            return;
        }
        let slots = self.config.mission_duration / self.config.sead_interval;
        let offset = self.schedule_offset(rng);
        let mut elapsed = 0;
        for _ in 0..slots {
            if self.sead_targets.is_empty() {
                break;
            }
            let Some(unit_type) = self.pick_unit(db, Task::Sead, rng) else {
                break;
            };
            let Some(target) = self.sead_targets.pop_front() else {
                break;
            };
            let scheduled_in = offset + elapsed;
            elapsed += self.schedule_step(self.config.sead_interval, rng);

            let role = if rng.gen_bool(0.5) {
                FlightRole::Sead
            } else {
                FlightRole::Dead
            };
            let label = if role == FlightRole::Dead { "DEAD" } else { "SEAD" };
            let (ingress, egress) = self.attack_run(home, &target, WaypointKind::IngressSead);

            let mut action =
                FlightWaypoint::new(target.installation.position, 0.0, WaypointKind::Action)
                    .named(label, format!("{label} on {}", target.installation.name));
            action.only_for_player = true;

            self.flights.push(Flight {
                unit_type,
                count: self.config.group_size,
                from_cp: home.id,
                role,
                scheduled_in,
                waypoints: vec![ingress, action, egress],
            });
        }
    }

    fn commission_strike(&mut self, db: &UnitDatabase, home: &ControlPoint, rng: &mut impl Rng) {
        if self.strike_targets.is_empty() {
            return;
        }
        let slots = self.config.mission_duration / self.config.strike_interval;
        let offset = self.schedule_offset(rng);
        let mut elapsed = 0;
        for _ in 0..slots {
            if self.strike_targets.is_empty() {
                break;
            }
            let Some(unit_type) = self.pick_unit(db, Task::Cas, rng) else {
                break;
            };
            let Some(target) = self.strike_targets.pop_front() else {
                break;
            };
            let scheduled_in = offset + elapsed;
            elapsed += self.schedule_step(self.config.strike_interval, rng);

            let (ingress, egress) = self.attack_run(home, &target, WaypointKind::IngressStrike);
            let target_ref = WaypointTarget::Installation {
                cp: target.cp,
                group_id: target.installation.group_id,
            };

            let mut waypoints = vec![ingress];
            // One action point per deployed unit so the player can walk the
            // whole objective; an empty installation gets a single point at
            // its centroid.
            for group in &target.installation.groups {
                for (index, unit) in group.units.iter().enumerate() {
                    let mut action =
                        FlightWaypoint::new(unit.position, 0.0, WaypointKind::Action).named(
                            "STRIKE",
                            format!(
                                "STRIKE [{}]: {} #{index}",
                                target.installation.name,
                                db.name(unit.unit_type)
                            ),
                        );
                    action.only_for_player = true;
                    action.targets.push(target_ref);
                    waypoints.push(action);
                }
            }
            if waypoints.len() == 1 {
                let mut action =
                    FlightWaypoint::new(target.installation.position, 0.0, WaypointKind::Action)
                        .named("STRIKE", format!("STRIKE on {}", target.installation.name));
                action.only_for_player = true;
                action.targets.push(target_ref);
                waypoints.push(action);
            }
            waypoints.push(egress);

            self.flights.push(Flight {
                unit_type,
                count: self.config.group_size,
                from_cp: home.id,
                role: FlightRole::Strike,
                scheduled_in,
                waypoints,
            });
        }
    }

    /// Ingress and egress legs for an attack on a fixed target: standoff
    /// points off the reciprocal of the attack bearing, split either side
    /// by the configured offset so the egress never retraces the ingress.
    fn attack_run(
        &self,
        home: &ControlPoint,
        target: &TargetCandidate,
        ingress_kind: WaypointKind,
    ) -> (FlightWaypoint, FlightWaypoint) {
        let attack_heading = geo::heading_between(home.position, target.installation.position);
        let back = geo::reciprocal(attack_heading);
        let ingress_pos = geo::point_from_heading(
            target.installation.position,
            back + self.config.ingress_offset_deg,
            self.config.ingress_egress_distance,
        );
        let egress_pos = geo::point_from_heading(
            target.installation.position,
            back - self.config.ingress_offset_deg,
            self.config.ingress_egress_distance,
        );
        let mut ingress = FlightWaypoint::new(ingress_pos, self.config.ingress_alt, ingress_kind)
            .named("INGRESS", format!("Ingress on {}", target.installation.name));
        ingress.targets.push(WaypointTarget::Installation {
            cp: target.cp,
            group_id: target.installation.group_id,
        });
        let egress = FlightWaypoint::new(egress_pos, self.config.egress_alt, WaypointKind::Egress)
            .named("EGRESS", "Egress away from the target");
        (ingress, egress)
    }
}
