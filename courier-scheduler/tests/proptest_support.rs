//! Proptest strategies and reference selectors for scheduler property tests.
//!
//! Weights are whole kilograms so that sums compare exactly regardless of
//! summation order.

#![expect(
    clippy::float_arithmetic,
    clippy::indexing_slicing,
    reason = "reference selectors sum and index generated weights"
)]

use courier_core::test_support::request;
use courier_core::{ShipmentRequest, Vehicle};
use proptest::prelude::*;

/// Strategy for `count` package weights between 1 and `max_weight` kilograms.
pub fn weights_strategy(
    min_count: usize,
    max_count: usize,
    max_weight: u32,
) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec((1_u32..=max_weight).prop_map(f64::from), min_count..=max_count)
}

/// Strategy for requests light enough for every vehicle from [`fleet_strategy`].
pub fn requests_strategy(max_count: usize) -> impl Strategy<Value = Vec<ShipmentRequest>> {
    proptest::collection::vec((1_u32..=50, 1_u32..=300), 0..=max_count).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(idx, (weight, distance))| {
                request(
                    &format!("PKG{}", idx + 1),
                    f64::from(weight),
                    f64::from(distance),
                )
            })
            .collect()
    })
}

/// Strategy for a fleet of one to four vehicles with mixed capacities.
pub fn fleet_strategy() -> impl Strategy<Value = Vec<Vehicle>> {
    proptest::collection::vec((50_u32..=200, 20_u32..=90), 1..=4).prop_map(|specs| {
        specs
            .into_iter()
            .zip(1_u32..)
            .map(|((max_load, speed), id)| Vehicle {
                id,
                max_load: f64::from(max_load),
                speed: f64::from(speed),
                available_time: 0.0,
            })
            .collect()
    })
}

/// Best package count and load within `capacity`, found by trying every
/// subset of `weights`.
pub fn exhaustive_best(weights: &[f64], capacity: f64) -> (usize, f64) {
    fn search(remaining: &[f64], capacity: f64, count: usize, load: f64, best: &mut (usize, f64)) {
        let Some((first, rest)) = remaining.split_first() else {
            if count > best.0 || (count == best.0 && load > best.1) {
                *best = (count, load);
            }
            return;
        };
        search(rest, capacity, count, load, best);
        let with_first = load + first;
        if with_first <= capacity {
            search(rest, capacity, count + 1, with_first, best);
        }
    }

    let mut best = (0, 0.0);
    search(weights, capacity, 0, 0.0, &mut best);
    best
}

/// Lightest-first accumulation in the order the packages were added.
pub fn greedy_accumulation(weights: &[f64], capacity: f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&lhs, &rhs| weights[lhs].total_cmp(&weights[rhs]));
    let mut load = 0.0;
    order
        .into_iter()
        .take_while(|&index| {
            load += weights[index];
            load <= capacity
        })
        .collect()
}

/// Total weight of the packages at `indices`.
pub fn load_of(weights: &[f64], indices: &[usize]) -> f64 {
    indices.iter().map(|&index| weights[index]).sum()
}
