//! Operations over any number of vectors.

use crate::Vector2;

/// Componentwise sum, the zero vector for an empty slice.
#[must_use]
pub fn sum(vectors: &[Vector2]) -> Vector2 {
	vectors.iter().sum()
}

/// Componentwise minimum, `None` for an empty slice.
///
/// Each axis is reduced on its own, so the result isn't necessarily one of the inputs.
#[must_use]
pub fn min(vectors: &[Vector2]) -> Option<Vector2> {
	fold_axes(vectors, f64::INFINITY, f64::min)
}

/// Componentwise maximum, `None` for an empty slice.
#[must_use]
pub fn max(vectors: &[Vector2]) -> Option<Vector2> {
	fold_axes(vectors, f64::NEG_INFINITY, f64::max)
}

/// Span covered on each axis, `max - min`. `None` for an empty slice.
#[must_use]
pub fn range_dimensionally(vectors: &[Vector2]) -> Option<Vector2> {
	Some(max(vectors)?.sub(min(vectors)?))
}

/// Whether every vector is parallel to the next one.
///
/// Only consecutive pairs are checked. Fewer than 2 vectors are trivially parallel.
#[must_use]
pub fn are_parallel(vectors: &[Vector2], tolerance: f64) -> bool {
	vectors
		.windows(2)
		.all(|pair| pair[0].is_parallel(pair[1], tolerance))
}

fn fold_axes(vectors: &[Vector2], seed: f64, pick: fn(f64, f64) -> f64) -> Option<Vector2> {
	if vectors.is_empty() {
		return None;
	}

	let (x, y) = vectors
		.iter()
		.fold((seed, seed), |(x, y), v| (pick(x, v.x()), pick(y, v.y())));

	Some(Vector2::new(x, y))
}

#[cfg(test)]
mod tests {
	use super::{are_parallel, max, min, range_dimensionally, sum};
	use crate::{Vector2, DEFAULT_TOLERANCE};

	fn scattered() -> [Vector2; 3] {
		[Vector2::new(1.0, 5.0), Vector2::new(-2.0, 3.0), Vector2::new(4.0, 0.0)]
	}

	#[test]
	fn sum_carries_every_partial_sum() {
		assert_eq!(sum(&scattered()), Vector2::new(3.0, 8.0));
		assert_eq!(sum(&[Vector2::new(7.0, -1.0)]), Vector2::new(7.0, -1.0));
		assert_eq!(sum(&[]), Vector2::zero());
	}

	#[test]
	fn extremes_are_taken_per_axis() {
		assert_eq!(min(&scattered()), Some(Vector2::new(-2.0, 0.0)));
		assert_eq!(max(&scattered()), Some(Vector2::new(4.0, 5.0)));
		assert_eq!(range_dimensionally(&scattered()), Some(Vector2::new(6.0, 5.0)));
	}

	#[test]
	fn extremes_with_only_negative_or_positive_values() {
		let negative = [Vector2::new(-3.0, -7.0), Vector2::new(-5.0, -1.0)];
		assert_eq!(max(&negative), Some(Vector2::new(-3.0, -1.0)));

		let positive = [Vector2::new(3.0, 7.0), Vector2::new(5.0, 1.0)];
		assert_eq!(min(&positive), Some(Vector2::new(3.0, 1.0)));
	}

	#[test]
	fn single_vector_has_no_range() {
		let only = [Vector2::new(2.0, -9.0)];
		assert_eq!(min(&only), Some(only[0]));
		assert_eq!(max(&only), Some(only[0]));
		assert_eq!(range_dimensionally(&only), Some(Vector2::zero()));
	}

	#[test]
	fn no_vectors_no_extremes() {
		assert_eq!(min(&[]), None);
		assert_eq!(max(&[]), None);
		assert_eq!(range_dimensionally(&[]), None);
	}

	#[test]
	fn parallel_chains_check_consecutive_pairs() {
		let right = Vector2::right();
		let left = Vector2::left();
		let up = Vector2::up();

		assert!(are_parallel(&[right, right, left], DEFAULT_TOLERANCE));
		assert!(!are_parallel(&[right, up, right], DEFAULT_TOLERANCE));
		assert!(are_parallel(&[right, Vector2::new(-5.0, 0.0), Vector2::new(0.5, 0.0)], DEFAULT_TOLERANCE));
	}

	#[test]
	fn fewer_than_two_vectors_are_parallel() {
		assert!(are_parallel(&[], DEFAULT_TOLERANCE));
		assert!(are_parallel(&[Vector2::up()], DEFAULT_TOLERANCE));
	}
}
