//! Choosing which pending packages a departing vehicle carries.

/// Default bound on the number of combinations examined per shipment.
pub const DEFAULT_COMBINATION_LIMIT: u64 = 2_000_000;

/// Upper bound on the size-`k` combinations the exact search may enumerate.
///
/// When `C(n, k)` exceeds the limit, [`select_best_subset`] returns the greedy
/// lightest-first selection instead of the heaviest combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombinationLimit(u64);

impl CombinationLimit {
    /// Allow at most `max_combinations` combinations per search.
    #[must_use]
    pub const fn new(max_combinations: u64) -> Self {
        Self(max_combinations)
    }

    /// The configured bound.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Default for CombinationLimit {
    fn default() -> Self {
        Self(DEFAULT_COMBINATION_LIMIT)
    }
}

/// Binomial coefficient `C(n, k)`, or `None` once it exceeds `limit`.
///
/// The multiplicative formula keeps every partial product exact, and the
/// search stops as soon as the running value passes `limit`, so large `n`
/// never overflows.
///
/// # Examples
/// ```
/// use courier_scheduler::combination_count;
///
/// assert_eq!(combination_count(5, 2, 100), Some(10));
/// assert_eq!(combination_count(40, 20, 2_000_000), None);
/// assert_eq!(combination_count(3, 4, 100), Some(0));
/// ```
#[must_use]
#[expect(
    clippy::integer_division,
    reason = "each step of the multiplicative binomial divides exactly"
)]
pub fn combination_count(n: usize, k: usize, limit: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let smaller = k.min(n - k);
    let mut count: u128 = 1;
    for step in 0..smaller {
        count = count * (n - step) as u128 / (step + 1) as u128;
        if count > u128::from(limit) {
            return None;
        }
    }
    u64::try_from(count).ok()
}

/// Pick the packages a vehicle of `capacity` should carry.
///
/// Returns indices into `weights`. The selection carries the largest possible
/// number of packages; among selections of that size it carries the most
/// weight, preferring the first in lexicographic index order on ties. The
/// exact search is skipped when it would exceed `limit`, in which case the
/// lightest-first greedy selection is returned in the order it was built.
///
/// An empty input, a negative or NaN capacity, or a capacity below every
/// weight yields an empty selection.
///
/// # Examples
/// ```
/// use courier_scheduler::{CombinationLimit, select_best_subset};
///
/// let weights = [50.0, 75.0, 175.0, 110.0, 155.0];
/// // Two packages beat the lone 175 kg package; 75 + 110 is the heaviest pair.
/// let chosen = select_best_subset(&weights, 200.0, CombinationLimit::default());
/// assert_eq!(chosen, vec![1, 3]);
/// ```
#[must_use]
pub fn select_best_subset(weights: &[f64], capacity: f64, limit: CombinationLimit) -> Vec<usize> {
    if weights.is_empty() || capacity.is_nan() || capacity < 0.0 {
        return Vec::new();
    }

    let greedy = lightest_first(weights, capacity);
    let count = greedy.len();
    if count == 0 {
        return Vec::new();
    }
    if count == weights.len() {
        return (0..count).collect();
    }

    if combination_count(weights.len(), count, limit.get()).is_none() {
        log::debug!(
            "C({}, {count}) exceeds the combination limit of {}; using the greedy selection",
            weights.len(),
            limit.get()
        );
        return greedy;
    }

    heaviest_combination(weights, count, capacity).unwrap_or(greedy)
}

/// Accumulate packages from lightest to heaviest while they fit.
///
/// Carrying the lightest packages first never prevents reaching a larger
/// count, so the result size is the maximum number of packages that fit.
#[expect(
    clippy::float_arithmetic,
    reason = "running load totals are floating-point sums"
)]
fn lightest_first(weights: &[f64], capacity: f64) -> Vec<usize> {
    let mut order: Vec<(usize, f64)> = weights.iter().copied().enumerate().collect();
    order.sort_by(|(_, lhs), (_, rhs)| lhs.total_cmp(rhs));

    let mut chosen = Vec::new();
    let mut load = 0.0;
    for (index, weight) in order {
        let next = load + weight;
        if next <= capacity {
            chosen.push(index);
            load = next;
        } else {
            break;
        }
    }
    chosen
}

/// Heaviest size-`count` combination within `capacity`, first found on ties.
#[expect(
    clippy::indexing_slicing,
    reason = "cursor positions stay below `count` and cursor values below `weights.len()`"
)]
fn heaviest_combination(weights: &[f64], count: usize, capacity: f64) -> Option<Vec<usize>> {
    let total = weights.len();
    let mut cursor: Vec<usize> = (0..count).collect();
    let mut best: Option<(Vec<usize>, f64)> = None;

    loop {
        let load: f64 = cursor.iter().map(|&index| weights[index]).sum();
        let improves = best.as_ref().is_none_or(|(_, heaviest)| load > *heaviest);
        if load <= capacity && improves {
            best = Some((cursor.clone(), load));
        }

        // Advance to the next combination in lexicographic order.
        let Some(pivot) = (0..count).rev().find(|&slot| cursor[slot] < total - count + slot)
        else {
            break;
        };
        cursor[pivot] += 1;
        for slot in pivot + 1..count {
            cursor[slot] = cursor[slot - 1] + 1;
        }
    }

    best.map(|(combination, _)| combination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE: [f64; 5] = [50.0, 75.0, 175.0, 110.0, 155.0];

    #[rstest]
    fn empty_input_selects_nothing() {
        assert!(select_best_subset(&[], 100.0, CombinationLimit::default()).is_empty());
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn invalid_capacity_selects_nothing(#[case] capacity: f64) {
        assert!(select_best_subset(&SAMPLE, capacity, CombinationLimit::default()).is_empty());
    }

    #[rstest]
    fn everything_fits_selects_all_in_order() {
        let chosen = select_best_subset(&[10.0, 15.0], 1000.0, CombinationLimit::default());
        assert_eq!(chosen, vec![0, 1]);
    }

    #[rstest]
    fn nothing_fits_selects_nothing() {
        let chosen = select_best_subset(&[300.0, 400.0], 100.0, CombinationLimit::default());
        assert!(chosen.is_empty());
    }

    #[rstest]
    fn prefers_more_packages_over_heavier_single() {
        let chosen = select_best_subset(&SAMPLE, 200.0, CombinationLimit::default());
        assert_eq!(chosen.len(), 2);
        assert_eq!(chosen, vec![1, 3]);
    }

    #[rstest]
    fn single_slot_takes_heaviest_that_fits() {
        // 50 + 155 overflows, so only one package fits per trip.
        let chosen = select_best_subset(&[50.0, 175.0, 155.0], 200.0, CombinationLimit::default());
        assert_eq!(chosen, vec![1]);
    }

    #[rstest]
    fn ties_keep_first_combination_in_lexicographic_order() {
        // {0, 3} and {1, 2} both weigh 100; {0, 3} is enumerated first.
        let weights = [40.0, 45.0, 55.0, 60.0];
        let chosen = select_best_subset(&weights, 100.0, CombinationLimit::default());
        assert_eq!(chosen, vec![0, 3]);
    }

    #[rstest]
    fn fallback_returns_greedy_accumulation() {
        let chosen = select_best_subset(&SAMPLE, 200.0, CombinationLimit::new(1));
        // Lightest first: 50 then 75; 110 would exceed the capacity.
        assert_eq!(chosen, vec![0, 1]);
    }

    #[rstest]
    fn limit_equal_to_count_still_searches() {
        // C(5, 2) == 10 is within a limit of 10.
        let chosen = select_best_subset(&SAMPLE, 200.0, CombinationLimit::new(10));
        assert_eq!(chosen, vec![1, 3]);
    }

    #[rstest]
    fn equal_weights_greedy_is_stable() {
        let chosen = select_best_subset(&[5.0, 5.0, 5.0], 10.0, CombinationLimit::new(0));
        assert_eq!(chosen, vec![0, 1]);
    }

    #[rstest]
    #[case(0, 0, Some(1))]
    #[case(5, 0, Some(1))]
    #[case(5, 5, Some(1))]
    #[case(5, 2, Some(10))]
    #[case(5, 3, Some(10))]
    #[case(30, 15, Some(155_117_520))]
    fn binomial_coefficients_are_exact(
        #[case] n: usize,
        #[case] k: usize,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(combination_count(n, k, u64::MAX), expected);
    }

    #[rstest]
    fn binomial_stops_at_limit_without_overflow() {
        assert_eq!(combination_count(10_000, 5_000, DEFAULT_COMBINATION_LIMIT), None);
        assert_eq!(combination_count(200, 100, u64::MAX), None);
    }
}
