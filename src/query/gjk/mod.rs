//! The Gilbert-Johnson-Keerthi origin search.
//!
//! GJK iteratively refines a simplex of up to four points of the Minkowski
//! difference of two shapes until it either encloses the origin (the shapes
//! overlap) or proves that no support point can pass the origin (the shapes
//! are separated).

pub use self::direction_table::{DirectionEntry, DIRECTION_TABLE_SIZE};
pub use self::gjk::Gjk;
pub use self::simplex::{Simplex, MAX_SIMPLEX_POINTS};
pub use self::support_point::SupportPoint;

mod direction_table;
mod gjk;
mod simplex;
mod support_point;
