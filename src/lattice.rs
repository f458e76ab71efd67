//! Direction tables and neighbor lookups for integer lattice points.
//!
//! Every table is ordered clockwise starting from up, and the neighbor lookups keep that order.

use crate::Vector2;

/// Up, right, down, left.
#[must_use]
pub const fn adjacent_dirs() -> [Vector2; 4] {
	[Vector2::up(), Vector2::right(), Vector2::down(), Vector2::left()]
}

/// Up-right, down-right, down-left, up-left.
#[must_use]
pub const fn diagonal_dirs() -> [Vector2; 4] {
	[
		Vector2::new(1.0, 1.0),
		Vector2::new(1.0, -1.0),
		Vector2::new(-1.0, -1.0),
		Vector2::new(-1.0, 1.0),
	]
}

/// Cardinal and diagonal directions interleaved, starting with up.
#[must_use]
pub const fn all_eight_dirs() -> [Vector2; 8] {
	let [up, right, down, left] = adjacent_dirs();
	let [up_right, down_right, down_left, up_left] = diagonal_dirs();

	[up, up_right, right, down_right, down, down_left, left, up_left]
}

fn offset_all<const N: usize>(origin: Vector2, dirs: [Vector2; N]) -> [Vector2; N] {
	let origin = origin.round();
	dirs.map(|dir| origin.add(dir))
}

impl Vector2 {
	/// The 4 cardinal neighbors of this point once rounded to the lattice.
	#[must_use]
	pub fn adjacent(self) -> [Vector2; 4] {
		offset_all(self, adjacent_dirs())
	}

	/// The 4 diagonal neighbors of this point once rounded to the lattice.
	#[must_use]
	pub fn diagonal(self) -> [Vector2; 4] {
		offset_all(self, diagonal_dirs())
	}

	/// All 8 neighbors of this point once rounded to the lattice.
	#[must_use]
	pub fn surrounding(self) -> [Vector2; 8] {
		offset_all(self, all_eight_dirs())
	}

	#[must_use]
	pub fn is_adjacent_to(self, target: Vector2) -> bool {
		self.adjacent().contains(&target)
	}

	#[must_use]
	pub fn is_diagonal_to(self, target: Vector2) -> bool {
		self.diagonal().contains(&target)
	}

	#[must_use]
	pub fn is_surrounding_of(self, target: Vector2) -> bool {
		self.surrounding().contains(&target)
	}
}
