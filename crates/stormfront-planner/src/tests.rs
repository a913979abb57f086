use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stormfront_core::enums::{FlightRole, WaypointKind};
use stormfront_core::geo::MapPoint;
use stormfront_core::settings::PlannerConfig;
use stormfront_theater::{
    ConflictTheater, ControlPoint, CpId, GroundInstallation, InstallationCategory, InstalledUnit,
    StraightFrontline, UnitDatabase, UnitGroup, UnitTypeId,
};

use crate::flight::WaypointTarget;
use crate::planner::FlightPlanner;

const KODIAK: UnitTypeId = UnitTypeId(4); // CAS only
const SABER: UnitTypeId = UnitTypeId(1); // CAP only
const MUDMOVER: UnitTypeId = UnitTypeId(3); // CAS, strike, SEAD
const PITON: UnitTypeId = UnitTypeId(7); // mobile SAM, emits

fn home_with(aircraft: &[(UnitTypeId, u32)]) -> ControlPoint {
    let mut home = ControlPoint::new(CpId(0), "Homeplate", MapPoint::new(0.0, 0.0), true);
    for &(unit_type, count) in aircraft {
        home.base.aircraft.insert(unit_type, count);
    }
    home
}

fn sam_site(group_id: u32, position: MapPoint) -> GroundInstallation {
    let mut site = GroundInstallation::new(group_id, format!("SAM site {group_id}"), position);
    site.category = InstallationCategory::AirDefence;
    site.groups.push(UnitGroup {
        name: "battery".into(),
        units: vec![InstalledUnit {
            unit_type: PITON,
            position,
        }],
    });
    site
}

fn plan(
    theater: &ConflictTheater,
    seed: u64,
) -> FlightPlanner {
    let db = UnitDatabase::reference();
    let geometry = StraightFrontline::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut planner = FlightPlanner::new(CpId(0), PlannerConfig::default());
    planner
        .plan_flights(theater, &db, &geometry, &mut rng)
        .unwrap();
    planner
}

#[test]
fn cas_stops_exactly_at_inventory_exhaustion() {
    let mut theater = ConflictTheater::new();
    theater.add_control_point(home_with(&[(KODIAK, 8)]), &[]);
    theater.add_control_point(
        ControlPoint::new(CpId(1), "Front", MapPoint::new(60_000.0, 0.0), false),
        &[CpId(0)],
    );

    let planner = plan(&theater, 3);

    // Eight CAS-only airframes fill four of the window's four CAS slots
    // and nothing else.
    assert_eq!(planner.flights().len(), 4);
    for flight in planner.flights() {
        assert_eq!(flight.role, FlightRole::Cas);
        assert_eq!(flight.unit_type, KODIAK);
        assert_eq!(flight.count, 2);
        let kinds: Vec<WaypointKind> = flight.waypoints.iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![WaypointKind::IngressCas, WaypointKind::Cas, WaypointKind::Egress]
        );
        assert!(flight.waypoints[1]
            .targets
            .contains(&WaypointTarget::ControlPoint(CpId(1))));
    }
    assert_eq!(planner.working_inventory().get(&KODIAK), Some(&0));
}

#[test]
fn committing_a_plan_deducts_and_prunes_the_base() {
    let mut theater = ConflictTheater::new();
    theater.add_control_point(home_with(&[(KODIAK, 8)]), &[]);
    theater.add_control_point(
        ControlPoint::new(CpId(1), "Front", MapPoint::new(60_000.0, 0.0), false),
        &[CpId(0)],
    );

    let planner = plan(&theater, 3);
    let mut base = theater.get(CpId(0)).unwrap().base.clone();

    assert!(planner.available_aircraft(&base).is_empty());
    planner.commit_to(&mut base);
    assert!(base.aircraft.is_empty());
}

#[test]
fn patrol_routes_have_the_full_five_point_shape() {
    let config = PlannerConfig::default();
    let mut theater = ConflictTheater::new();
    theater.add_control_point(home_with(&[(SABER, 8)]), &[]);
    // A hostile point that is not adjacent: no frontline to cover, so the
    // planner falls back to a random-bearing track.
    theater.add_control_point(
        ControlPoint::new(CpId(1), "Rear depot", MapPoint::new(400_000.0, 0.0), false),
        &[],
    );

    let planner = plan(&theater, 11);

    assert_eq!(planner.flights().len(), 4);
    for flight in planner.flights() {
        assert_eq!(flight.role, FlightRole::Cap);
        let kinds: Vec<WaypointKind> = flight.waypoints.iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![
                WaypointKind::Ascend,
                WaypointKind::PatrolTrack,
                WaypointKind::Patrol,
                WaypointKind::Descend,
                WaypointKind::Landing,
            ]
        );
        // The station guards the home point at a patrol-band altitude.
        let station = &flight.waypoints[1];
        assert!(station
            .targets
            .contains(&WaypointTarget::ControlPoint(CpId(0))));
        assert!(station.altitude >= config.patrol_alt_range.0);
        assert!(station.altitude < config.patrol_alt_range.1);
        assert_eq!(flight.waypoints[4].altitude, config.pattern_alt);
    }
}

#[test]
fn launch_times_accumulate_with_a_bounded_start_offset() {
    let config = PlannerConfig::default();
    let mut theater = ConflictTheater::new();
    theater.add_control_point(home_with(&[(KODIAK, 8)]), &[]);
    theater.add_control_point(
        ControlPoint::new(CpId(1), "Front", MapPoint::new(60_000.0, 0.0), false),
        &[CpId(0)],
    );

    let planner = plan(&theater, 17);
    let times: Vec<u32> = planner.flights().iter().map(|f| f.scheduled_in).collect();

    assert!(times[0] <= config.schedule_jitter);
    for pair in times.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap >= config.cas_interval - config.schedule_jitter);
        assert!(gap <= config.cas_interval + config.schedule_jitter);
    }
}

#[test]
fn suppression_flights_target_the_emitting_site() {
    let mut theater = ConflictTheater::new();
    theater.add_control_point(home_with(&[(MUDMOVER, 12)]), &[]);
    let mut front = ControlPoint::new(CpId(1), "Front", MapPoint::new(60_000.0, 0.0), false);
    front.ground_objects.push(sam_site(40, front.position));
    theater.add_control_point(front, &[CpId(0)]);

    let planner = plan(&theater, 5);

    let suppression: Vec<_> = planner
        .flights()
        .iter()
        .filter(|f| f.role == FlightRole::Sead || f.role == FlightRole::Dead)
        .collect();
    assert_eq!(suppression.len(), 1);

    let flight = suppression[0];
    let kinds: Vec<WaypointKind> = flight.waypoints.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![WaypointKind::IngressSead, WaypointKind::Action, WaypointKind::Egress]
    );
    assert!(flight.waypoints[0].targets.contains(&WaypointTarget::Installation {
        cp: CpId(1),
        group_id: 40,
    }));
    let action = &flight.waypoints[1];
    assert!(action.only_for_player);
    assert_eq!(action.altitude, 0.0);

    // Four CAS slots, one suppression target, one strike target: twelve
    // airframes exactly cover the pipeline.
    let allocated: u32 = planner.flights().iter().map(|f| f.count).sum();
    assert_eq!(allocated, 12);
    assert_eq!(planner.working_inventory().get(&MUDMOVER), Some(&0));
    assert_eq!(
        planner.flights_with_role(FlightRole::Strike).count(),
        1
    );
}

#[test]
fn strike_routes_walk_every_deployed_unit() {
    let mut theater = ConflictTheater::new();
    theater.add_control_point(home_with(&[(MUDMOVER, 2)]), &[]);
    // Not adjacent, so no CAS stage competes for the airframes.
    let mut depot = ControlPoint::new(CpId(1), "Depot", MapPoint::new(100_000.0, 0.0), false);
    let mut factory = GroundInstallation::new(50, "Factory", depot.position);
    factory.groups.push(UnitGroup {
        name: "machinery".into(),
        units: (0..3)
            .map(|i| InstalledUnit {
                unit_type: UnitTypeId(5),
                position: MapPoint::new(100_000.0 + i as f64 * 100.0, 0.0),
            })
            .collect(),
    });
    depot.ground_objects.push(factory);
    theater.add_control_point(depot, &[]);

    let planner = plan(&theater, 9);

    assert_eq!(planner.flights().len(), 1);
    let flight = &planner.flights()[0];
    assert_eq!(flight.role, FlightRole::Strike);
    let kinds: Vec<WaypointKind> = flight.waypoints.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            WaypointKind::IngressStrike,
            WaypointKind::Action,
            WaypointKind::Action,
            WaypointKind::Action,
            WaypointKind::Egress,
        ]
    );
    for action in &flight.waypoints[1..4] {
        assert!(action.targets.contains(&WaypointTarget::Installation {
            cp: CpId(1),
            group_id: 50,
        }));
    }
}

#[test]
fn removing_a_flight_returns_it_and_frees_the_slot() {
    let mut theater = ConflictTheater::new();
    theater.add_control_point(home_with(&[(KODIAK, 8)]), &[]);
    theater.add_control_point(
        ControlPoint::new(CpId(1), "Front", MapPoint::new(60_000.0, 0.0), false),
        &[CpId(0)],
    );

    let mut planner = plan(&theater, 3);
    let before = planner.flights().len();
    let removed = planner.remove_flight(0).unwrap();
    assert_eq!(removed.role, FlightRole::Cas);
    assert_eq!(planner.flights().len(), before - 1);
    assert!(planner.remove_flight(99).is_none());
}

#[test]
fn interceptors_scramble_immediately() {
    let home = home_with(&[(SABER, 2)]);
    let db = UnitDatabase::reference();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut planner = FlightPlanner::new(CpId(0), PlannerConfig::default());
    planner.reset(&home.base);
    planner.commission_interceptors(&db, &home, &mut rng);

    assert_eq!(planner.flights().len(), 1);
    let flight = &planner.flights()[0];
    assert_eq!(flight.role, FlightRole::Intercept);
    assert_eq!(flight.scheduled_in, 0);
    assert_eq!(flight.waypoints.len(), 1);
    assert_eq!(flight.waypoints[0].kind, WaypointKind::Ascend);
    assert_eq!(planner.working_inventory().get(&SABER), Some(&0));
}

#[test]
fn planning_is_deterministic_for_a_seed() {
    let mut theater = ConflictTheater::new();
    theater.add_control_point(home_with(&[(SABER, 4), (MUDMOVER, 10)]), &[]);
    let mut front = ControlPoint::new(CpId(1), "Front", MapPoint::new(60_000.0, 0.0), false);
    front.ground_objects.push(sam_site(60, front.position));
    front
        .ground_objects
        .push(GroundInstallation::new(61, "Fuel farm", front.position));
    theater.add_control_point(front, &[CpId(0)]);

    let a = plan(&theater, 42);
    let b = plan(&theater, 42);
    assert_eq!(
        serde_json::to_string(a.flights()).unwrap(),
        serde_json::to_string(b.flights()).unwrap()
    );

    let c = plan(&theater, 43);
    assert_ne!(
        serde_json::to_string(a.flights()).unwrap(),
        serde_json::to_string(c.flights()).unwrap()
    );
}

#[test]
fn unknown_home_point_is_an_error() {
    let theater = ConflictTheater::new();
    let db = UnitDatabase::reference();
    let geometry = StraightFrontline::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut planner = FlightPlanner::new(CpId(7), PlannerConfig::default());
    assert!(planner
        .plan_flights(&theater, &db, &geometry, &mut rng)
        .is_err());
}
