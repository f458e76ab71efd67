use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::utils::is_close;

/// Immutable 2D vector.
///
/// Used both for continuous coordinates and for integer lattice points, the type doesn't
/// distinguish the two. Every operation returns a new vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
	x: f64,
	y: f64,
}

impl Vector2 {
	/// Components are stored as given, `NaN` and infinities included.
	#[must_use]
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	#[must_use]
	pub const fn x(self) -> f64 {
		self.x
	}

	#[must_use]
	pub const fn y(self) -> f64 {
		self.y
	}

	#[must_use]
	pub const fn zero() -> Self {
		Self::new(0.0, 0.0)
	}

	#[must_use]
	pub const fn one() -> Self {
		Self::new(1.0, 1.0)
	}

	#[must_use]
	pub const fn up() -> Self {
		Self::new(0.0, 1.0)
	}

	#[must_use]
	pub const fn down() -> Self {
		Self::new(0.0, -1.0)
	}

	#[must_use]
	pub const fn left() -> Self {
		Self::new(-1.0, 0.0)
	}

	#[must_use]
	pub const fn right() -> Self {
		Self::new(1.0, 0.0)
	}

	#[must_use]
	#[allow(clippy::should_implement_trait)]
	pub fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}

	#[must_use]
	#[allow(clippy::should_implement_trait)]
	pub fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}

	/// Same as [`Vector2::sub`].
	#[must_use]
	pub fn diff(self, rhs: Self) -> Self {
		self.sub(rhs)
	}

	#[must_use]
	pub fn mult(self, k: f64) -> Self {
		Self::new(self.x * k, self.y * k)
	}

	/// Divides both components by `k`.
	///
	/// Dividing by zero doesn't fail, it gives a vector whose components are both `NaN`.
	#[must_use]
	pub fn divide(self, k: f64) -> Self {
		if k == 0.0 {
			return Self::new(f64::NAN, f64::NAN);
		}

		Self::new(self.x / k, self.y / k)
	}

	/// Componentwise product.
	#[must_use]
	pub fn scale(self, rhs: Self) -> Self {
		Self::new(self.x * rhs.x, self.y * rhs.y)
	}

	#[must_use]
	pub fn abs(self) -> Self {
		Self::new(self.x.abs(), self.y.abs())
	}

	/// Whether both components are within `tolerance` of each other.
	///
	/// The tolerance applies to each axis separately and is inclusive.
	#[must_use]
	pub fn equal(self, rhs: Self, tolerance: f64) -> bool {
		is_close(self.x, rhs.x, tolerance) && is_close(self.y, rhs.y, tolerance)
	}

	#[must_use]
	pub fn sq_magnitude(self) -> f64 {
		self.dot(self)
	}

	/// Length of the vector. Doesn't overflow where `sq_magnitude` would.
	#[must_use]
	pub fn magnitude(self) -> f64 {
		self.x.hypot(self.y)
	}

	/// Vector of length 1 pointing the same way.
	///
	/// A zero-length vector has no direction: a warning is logged and the zero vector is returned.
	#[must_use]
	pub fn normalize(self) -> Self {
		let magnitude = self.magnitude();
		if magnitude == 0.0 {
			log::warn!("Tried to normalize a zero-length vector {self}, using the zero vector instead");
			return Self::zero();
		}

		self.divide(magnitude)
	}

	/// Same direction, scaled to length `target`.
	///
	/// A negative `target` is logged as an error and gives the zero vector.
	#[must_use]
	pub fn set_magnitude(self, target: f64) -> Self {
		if target < 0.0 {
			log::error!("Cannot set the magnitude of {self} to a negative value ({target})");
			return Self::zero();
		}

		self.normalize().mult(target)
	}

	/// Keeps the magnitude within `min..=max`, leaving the direction alone.
	///
	/// A negative `min` counts as 0.
	#[must_use]
	pub fn clamp_magnitude(self, min: f64, max: f64) -> Self {
		let min = min.max(0.0);
		let magnitude = self.magnitude();

		if magnitude < min {
			self.set_magnitude(min)
		} else if magnitude > max {
			self.set_magnitude(max)
		} else {
			self
		}
	}

	#[must_use]
	pub fn dot(self, rhs: Self) -> f64 {
		self.x.mul_add(rhs.x, self.y * rhs.y)
	}

	/// Cosine of the angle between both directions, or 0 if either vector has zero length.
	#[must_use]
	pub fn normalized_dot(self, rhs: Self) -> f64 {
		self.normalize().dot(rhs.normalize())
	}

	/// Angle from the `+x` axis in degrees, counter-clockwise, within `(-180, 180]`.
	#[must_use]
	pub fn signed_angle_degrees(self) -> f64 {
		self.angle_radians().to_degrees()
	}

	// `-0.0` components are folded into `+0.0`, otherwise atan2 gives -π instead of π
	fn angle_radians(self) -> f64 {
		(self.y + 0.0).atan2(self.x + 0.0)
	}

	/// Angle from the `+y` axis in degrees, clockwise, within `[0, 360)`.
	///
	/// Up is 0, right is 90, down is 180 and left is 270.
	#[must_use]
	pub fn clockwise_angle_from_up(self) -> f64 {
		// atan2 with swapped arguments measures from +y towards +x
		let angle = (self.x + 0.0).atan2(self.y + 0.0).to_degrees();
		if angle < 0.0 {
			(angle + 360.0) % 360.0
		} else {
			angle
		}
	}

	/// Absolute difference between the angles of both vectors, in degrees.
	#[must_use]
	pub fn angle_between(self, rhs: Self) -> f64 {
		(self.angle_radians() - rhs.angle_radians()).to_degrees().abs()
	}

	#[must_use]
	pub fn sq_distance(self, rhs: Self) -> f64 {
		self.sub(rhs).sq_magnitude()
	}

	#[must_use]
	pub fn distance(self, rhs: Self) -> f64 {
		self.sub(rhs).magnitude()
	}

	#[must_use]
	pub fn manhattan_distance(self, rhs: Self) -> f64 {
		(rhs.x - self.x).abs() + (rhs.y - self.y).abs()
	}

	#[must_use]
	pub fn round(self) -> Self {
		Self::new(self.x.round(), self.y.round())
	}

	#[must_use]
	pub fn ceil(self) -> Self {
		Self::new(self.x.ceil(), self.y.ceil())
	}

	#[must_use]
	pub fn floor(self) -> Self {
		Self::new(self.x.floor(), self.y.floor())
	}

	#[must_use]
	pub fn swap_dimensions(self) -> Self {
		Self::new(self.y, self.x)
	}

	/// Quarter turn of this vector.
	///
	/// Turns counter-clockwise when `x >= 0` and clockwise otherwise, so the result's `y` is
	/// always `|x|`.
	#[must_use]
	pub fn perpendicular(self) -> Self {
		if self.x >= 0.0 {
			Self::new(-self.y, self.x)
		} else {
			Self::new(self.y, -self.x)
		}
	}

	#[must_use]
	pub fn is_perpendicular(self, rhs: Self, tolerance: f64) -> bool {
		self.normalized_dot(rhs).abs() <= tolerance
	}

	/// Whether both vectors lie on the same line. Opposite directions count as parallel.
	#[must_use]
	pub fn is_parallel(self, rhs: Self, tolerance: f64) -> bool {
		let cos = self.normalized_dot(rhs);
		is_close(cos, 1.0, tolerance) || is_close(cos, -1.0, tolerance)
	}

	/// Linear interpolation towards `rhs`.
	///
	/// `frac` outside of `[0, 1]` extrapolates along the same line.
	#[must_use]
	pub fn point_between(self, rhs: Self, frac: f64) -> Self {
		self.add(rhs.sub(self).mult(frac))
	}

	#[must_use]
	pub fn midpoint(self, rhs: Self) -> Self {
		self.point_between(rhs, 0.5)
	}

	/// `n` evenly spaced points strictly between `self` and `rhs`.
	///
	/// With `include_ends`, `self` and `rhs` are added at both ends, giving `n + 2` points.
	#[must_use]
	pub fn points_between(self, rhs: Self, n: usize, include_ends: bool) -> Vec<Self> {
		let step = 1.0 / (1 + n) as f64;

		let mut points = Vec::with_capacity(if include_ends { n + 2 } else { n });
		if include_ends {
			points.push(self);
		}

		points.extend((1..=n).map(|k| self.point_between(rhs, step * k as f64)));

		if include_ends {
			points.push(rhs);
		}

		points
	}
}

impl fmt::Display for Vector2 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}; {}]", self.x, self.y)
	}
}

impl Neg for Vector2 {
	type Output = Self;

	fn neg(self) -> Self::Output {
		Self::new(-self.x, -self.y)
	}
}

impl Add for Vector2 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		Vector2::add(self, rhs)
	}
}

impl Sub for Vector2 {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		Vector2::sub(self, rhs)
	}
}

impl Mul<f64> for Vector2 {
	type Output = Self;

	fn mul(self, rhs: f64) -> Self::Output {
		self.mult(rhs)
	}
}

impl Div<f64> for Vector2 {
	type Output = Self;

	fn div(self, rhs: f64) -> Self::Output {
		self.divide(rhs)
	}
}

impl Sum for Vector2 {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::zero(), Vector2::add)
	}
}

impl<'a> Sum<&'a Vector2> for Vector2 {
	fn sum<I: Iterator<Item = &'a Vector2>>(iter: I) -> Self {
		iter.copied().sum()
	}
}

impl From<(f64, f64)> for Vector2 {
	fn from((x, y): (f64, f64)) -> Self {
		Self::new(x, y)
	}
}

impl From<[f64; 2]> for Vector2 {
	fn from([x, y]: [f64; 2]) -> Self {
		Self::new(x, y)
	}
}

impl From<Vector2> for (f64, f64) {
	fn from(v: Vector2) -> Self {
		(v.x, v.y)
	}
}

impl From<Vector2> for [f64; 2] {
	fn from(v: Vector2) -> Self {
		[v.x, v.y]
	}
}
