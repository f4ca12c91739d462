//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;

/// A flat triangle shape.
///
/// Its Minkowski difference with another shape is frequently degenerate, which makes it a good
/// stress case for the GJK and EPA solvers.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The area of this triangle.
    pub fn area(&self) -> Real {
        (self.b - self.a).cross(&(self.c - self.a)).norm() * 0.5
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &[self.a, self.b, self.c])
    }
}
