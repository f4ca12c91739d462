use crate::math::{Point, Real, Vector};
use core::ops::Sub;

/// A point of the Minkowski difference of two shapes.
///
/// Each point is equal to `support1(r) - support2(-r) + r * margin`, where `r`
/// is the direction that produced it. The direction is kept so that the support
/// points of each individual shape can be recovered once EPA has converged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SupportPoint {
    /// The point on the Minkowski difference.
    pub w: Point<Real>,
    /// The query direction that produced `w`.
    pub r: Vector<Real>,
}

impl SupportPoint {
    /// Initializes a support point from its position and the direction that produced it.
    #[inline]
    pub fn new(w: Point<Real>, r: Vector<Real>) -> Self {
        SupportPoint { w, r }
    }

    /// Support point located at the origin with a zero direction.
    #[inline]
    pub fn origin() -> Self {
        SupportPoint::new(Point::origin(), Vector::zeros())
    }
}

impl Sub<SupportPoint> for SupportPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: SupportPoint) -> Vector<Real> {
        self.w - rhs.w
    }
}
