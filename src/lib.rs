pub mod aggregate;
pub mod error;
pub mod lattice;
pub mod parsing;
pub mod utils;
mod vector2;

pub use error::{Vector2Error, Vector2ErrorKind};
pub use parsing::parse_vector2;
pub use vector2::Vector2;

/// Tolerance on the cosine used for parallel and perpendicular checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
