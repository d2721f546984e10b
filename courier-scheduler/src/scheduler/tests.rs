//! Tests for the `TripScheduler`.

use super::*;
use courier_core::test_support::{fleet, request, sample_requests, vehicle};
use rstest::{fixture, rstest};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn truncated_delivery_times(requests: &[ShipmentRequest]) -> Vec<f64> {
    requests
        .iter()
        .map(|r| truncate_to_hundredths(r.delivery_time.expect("request scheduled")))
        .collect()
}

#[fixture]
fn scheduler() -> TripScheduler {
    TripScheduler::new()
}

#[rstest]
fn sample_fleet_delivers_every_package(scheduler: TripScheduler) {
    let mut requests = sample_requests();
    let mut vehicles = fleet(2, 200.0, 70.0);

    let trips = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect("sample schedules");

    assert_eq!(
        truncated_delivery_times(&requests),
        vec![3.98, 1.78, 1.42, 0.85, 4.19]
    );
    let shape: Vec<(u32, Vec<usize>)> = trips
        .iter()
        .map(|trip| (trip.vehicle_id, trip.requests.clone()))
        .collect();
    assert_eq!(
        shape,
        vec![(1, vec![1, 3]), (2, vec![2]), (2, vec![4]), (1, vec![0])]
    );
}

#[rstest]
fn return_time_doubles_truncated_one_way_time(scheduler: TripScheduler) {
    let mut requests = sample_requests();
    let mut vehicles = fleet(2, 200.0, 70.0);

    let trips = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect("sample schedules");

    let first = trips.first().expect("at least one trip");
    // 125 km at 70 km/h is 1.7857 h one way, truncated to 1.78.
    assert_close(first.departure_time, 0.0);
    assert_close(first.return_time, 3.56);
    let last = trips.last().expect("at least one trip");
    assert_close(last.departure_time, 3.56);
    let availability: Vec<f64> = vehicles.iter().map(|v| v.available_time).collect();
    assert_close(availability[0], 3.56 + 2.0 * 0.42);
    assert_close(availability[1], 5.54);
}

#[rstest]
fn empty_fleet_leaves_requests_untouched(scheduler: TripScheduler) {
    let mut requests = sample_requests();
    let err = scheduler
        .schedule(&mut requests, &mut [])
        .expect_err("no vehicles");
    assert_eq!(err, ScheduleError::NoVehicles);
    assert_eq!(requests, sample_requests());
}

#[rstest]
fn stationary_vehicle_is_rejected(scheduler: TripScheduler) {
    let mut requests = sample_requests();
    let mut vehicles = vec![vehicle(1, 200.0, 70.0), vehicle(2, 200.0, 0.0)];
    let err = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect_err("invalid vehicle");
    assert_eq!(err, ScheduleError::InvalidVehicle { vehicle_id: 2 });
    assert!(requests.iter().all(|r| r.delivery_time.is_none()));
}

#[rstest]
fn package_heavier_than_every_vehicle_fails(scheduler: TripScheduler) {
    let mut requests = vec![request("PKG1", 999.0, 10.0)];
    let mut vehicles = fleet(1, 70.0, 70.0);
    let err = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect_err("too heavy");
    assert_eq!(
        err,
        ScheduleError::CapacityExceeded {
            request_id: "PKG1".into(),
            weight: 999.0,
            max_capacity: 70.0,
        }
    );
}

#[rstest]
fn capacity_error_names_heaviest_remaining_package(scheduler: TripScheduler) {
    let mut requests = vec![
        request("PKG1", 50.0, 10.0),
        request("PKG2", 300.0, 10.0),
        request("PKG3", 450.0, 10.0),
    ];
    let mut vehicles = fleet(1, 200.0, 70.0);
    let err = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect_err("too heavy");
    assert!(matches!(
        err,
        ScheduleError::CapacityExceeded { ref request_id, .. } if request_id == "PKG3"
    ));
}

#[rstest]
fn capacity_error_reports_the_largest_vehicle_in_a_mixed_fleet(scheduler: TripScheduler) {
    let mut requests = vec![request("PKG1", 250.0, 10.0)];
    let mut vehicles = vec![vehicle(1, 70.0, 70.0), vehicle(2, 200.0, 70.0)];
    let err = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect_err("too heavy");
    assert!(matches!(
        err,
        ScheduleError::CapacityExceeded { max_capacity, .. } if max_capacity == 200.0
    ));
}

#[rstest]
fn package_at_the_largest_capacity_is_carriable() {
    let requests = vec![request("PKG1", 200.0, 10.0)];
    let largest = vehicle(2, 200.0, 70.0);
    assert!(ensure_carriable(&requests, &[0], &largest).is_ok());
}

#[rstest]
fn no_requests_produce_no_trips(scheduler: TripScheduler) {
    let mut vehicles = fleet(2, 200.0, 70.0);
    let trips = scheduler
        .schedule(&mut [], &mut vehicles)
        .expect("empty schedule");
    assert!(trips.is_empty());
    assert!(vehicles.iter().all(|v| v.available_time == 0.0));
}

#[rstest]
fn small_vehicle_yields_to_one_that_can_carry(scheduler: TripScheduler) {
    let mut requests = vec![request("PKG1", 150.0, 70.0)];
    let mut vehicles = vec![vehicle(1, 50.0, 70.0), vehicle(2, 200.0, 70.0)];

    let trips = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect("big vehicle carries");

    assert_eq!(trips.len(), 1);
    let trip = trips.first().expect("one trip");
    assert_eq!(trip.vehicle_id, 2);
    assert_close(trip.departure_time, 0.0);
    assert_close(requests[0].delivery_time.expect("scheduled"), 1.0);
    assert_close(vehicles[0].available_time, 0.0);
}

#[rstest]
fn idle_vehicle_waits_for_the_fleet_to_return() {
    let scheduler = TripScheduler::with_config(TripSchedulerConfig {
        idle_step: 0.5,
        ..TripSchedulerConfig::default()
    });
    let mut requests = vec![request("PKG1", 150.0, 70.0), request("PKG2", 150.0, 70.0)];
    let mut vehicles = vec![vehicle(1, 50.0, 70.0), vehicle(2, 200.0, 70.0)];

    let trips = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect("big vehicle carries both in turn");

    let departures: Vec<(u32, f64)> = trips
        .iter()
        .map(|trip| (trip.vehicle_id, trip.departure_time))
        .collect();
    assert_eq!(departures, vec![(2, 0.0), (2, 2.0)]);
    assert_close(requests[1].delivery_time.expect("scheduled"), 3.0);
}

#[rstest]
fn vehicles_depart_from_their_initial_availability(scheduler: TripScheduler) {
    let mut requests = vec![request("PKG1", 10.0, 35.0)];
    let mut vehicles = vec![Vehicle {
        available_time: 1.5,
        ..vehicle(1, 100.0, 70.0)
    }];

    let trips = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect("schedules");

    assert_close(trips[0].departure_time, 1.5);
    assert_close(requests[0].delivery_time.expect("scheduled"), 2.0);
    assert_close(vehicles[0].available_time, 2.5);
}

#[rstest]
fn tiny_combination_limit_uses_greedy_shipments() {
    let scheduler = TripScheduler::with_config(TripSchedulerConfig {
        combination_limit: CombinationLimit::new(0),
        ..TripSchedulerConfig::default()
    });
    let mut requests = sample_requests();
    let mut vehicles = fleet(2, 200.0, 70.0);

    let trips = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect("schedules");

    // Lightest first: 50 then 75 fit, 110 would overflow.
    assert_eq!(trips[0].requests, vec![0, 1]);
    assert!(requests.iter().all(ShipmentRequest::is_scheduled));
}

#[rstest]
fn availability_never_moves_backwards(scheduler: TripScheduler) {
    let mut requests: Vec<ShipmentRequest> = (1..=12)
        .map(|n| request(&format!("PKG{n}"), f64::from(n) * 9.0, f64::from(n) * 7.0))
        .collect();
    let mut vehicles = fleet(3, 120.0, 60.0);

    let trips = scheduler
        .schedule(&mut requests, &mut vehicles)
        .expect("schedules");

    for id in 1..=3 {
        let mut previous_return = 0.0;
        for trip in trips.iter().filter(|trip| trip.vehicle_id == id) {
            assert!(trip.departure_time >= previous_return);
            assert!(trip.return_time >= trip.departure_time);
            previous_return = trip.return_time;
        }
    }
    let delivered: usize = trips.iter().map(|trip| trip.requests.len()).sum();
    assert_eq!(delivered, requests.len());
}

#[rstest]
fn idle_delay_always_advances_the_queue(scheduler: TripScheduler) {
    assert_close(scheduler.idle_until(1.0), 1.0 + DEFAULT_IDLE_STEP);
    assert!(scheduler.idle_until(1e12) > 1e12);
}

#[rstest]
fn removing_positions_keeps_remaining_order() {
    let mut pending = vec![4, 7, 9, 12, 15];
    remove_positions(&mut pending, &[3, 1]);
    assert_eq!(pending, vec![4, 9, 15]);
}
