/// Whether a computed value hits the target.
///
/// Exact equality always matches; otherwise the difference must be within
/// `epsilon` relative to the larger magnitude, so a target of zero is only
/// ever hit exactly.
#[inline]
pub fn matches_target(value: f64, target: f64, epsilon: f64) -> bool {
    value == target || (value - target).abs() <= epsilon * value.abs().max(target.abs())
}
