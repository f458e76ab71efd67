/// Absolute per-value comparison. The bound is inclusive, and `NaN` is never close to anything.
#[must_use]
pub fn is_close(a: f64, b: f64, tolerance: f64) -> bool {
	(a - b).abs() <= tolerance
}
