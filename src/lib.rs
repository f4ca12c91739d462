/*!
gjkepa3d
========

**gjkepa3d** is a 3-dimensional narrow-phase collision detection library
written with the rust programming language.

Given two convex shapes exposing a support mapping and their positions, it
decides whether they overlap using the Gilbert-Johnson-Keerthi algorithm and,
if they do, computes the penetration depth, contact normal and one witness
point on each shape using the Expanding Polytope Algorithm.

```
use gjkepa3d::na::Isometry3;
use gjkepa3d::query::{self, Arena, Status};
use gjkepa3d::shape::Ball;

let mut arena = Arena::new();
let ball = Ball::new(1.0);
let pos1 = Isometry3::identity();
let pos2 = Isometry3::translation(1.5, 0.0, 0.0);

let res = query::collide(&mut arena, &pos1, &ball, &pos2, &ball, 0.0).unwrap();
assert_eq!(res.status, Status::Penetrating);
assert!((res.depth - 0.5).abs() < 2.0e-3);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![doc(html_root_url = "http://docs.rs/gjkepa3d/0.1.0")]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
