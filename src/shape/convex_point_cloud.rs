use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;

/// The convex hull of a set of points, represented implicitly by the points themselves.
///
/// The hull is never computed: the support mapping simply scans every point. This is
/// well suited to small vertex sets such as convex mesh hulls with a few dozen vertices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexPointCloud {
    points: Vec<Point<Real>>,
}

impl ConvexPointCloud {
    /// Creates the implicit convex hull of the given points.
    ///
    /// Returns `None` if `points` is empty.
    pub fn new(points: Vec<Point<Real>>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    /// The points whose convex hull is this shape.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }
}

impl SupportMap for ConvexPointCloud {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points)
    }
}
