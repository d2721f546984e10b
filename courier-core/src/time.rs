//! Fixed-point helpers for travel times.

/// Truncate toward zero to two decimal places without rounding.
///
/// The result is the truncation of the shortest decimal that reads back as
/// `value`. Scaling alone is not enough: `0.29 * 100.0` is
/// `28.999999999999996`. A neighbouring hundredth is taken only when its own
/// nearest `f64` decides it, so `0.29` stays `0.29` while `1.99999999999`
/// still truncates to `1.99`.
///
/// # Examples
/// ```
/// use courier_core::truncate_to_hundredths;
///
/// assert_eq!(truncate_to_hundredths(1.455), 1.45);
/// assert_eq!(truncate_to_hundredths(1.789), 1.78);
/// assert_eq!(truncate_to_hundredths(0.29), 0.29);
/// assert_eq!(truncate_to_hundredths(-1.459), -1.45);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fixed-point truncation scales by one hundred"
)]
pub fn truncate_to_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();
    let scaled = (magnitude * 100.0).trunc();
    let next = scaled + 1.0;
    let hundredths = if (next / 100.0).total_cmp(&magnitude).is_eq() {
        // The scaling fell just short of a hundredth that `value` spells.
        next
    } else if (scaled / 100.0).total_cmp(&magnitude).is_gt() {
        // The scaling rounded up onto a hundredth that `value` sits below.
        scaled - 1.0
    } else {
        scaled
    };
    (hundredths / 100.0).copysign(value)
}
