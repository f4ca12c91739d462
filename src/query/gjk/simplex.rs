use arrayvec::ArrayVec;

use crate::math::{Point, Real};
use crate::query::gjk::SupportPoint;

/// The maximum number of points of a GJK simplex.
///
/// GJK itself never needs more than four points. The fifth slot holds the
/// second apex of the triangular bipyramid built by `Gjk::enclose_origin`.
pub const MAX_SIMPLEX_POINTS: usize = 5;

/// An ordered set of up to five support points.
///
/// While GJK is searching, the most recently added point is always the last one.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    points: ArrayVec<SupportPoint, MAX_SIMPLEX_POINTS>,
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every point from this simplex.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear()
    }

    /// The number of points of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this simplex contain no point at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The order of this simplex: 0 for a point, 1 for a segment, 2 for a triangle,
    /// 3 for a tetrahedron and 4 for the bipyramid built when enclosing the origin.
    ///
    /// An empty simplex has order 0.
    #[inline]
    pub fn order(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// The points of this simplex.
    #[inline]
    pub fn points(&self) -> &[SupportPoint] {
        &self.points
    }

    /// The `i`-th point of this simplex.
    #[inline]
    pub fn point(&self, i: usize) -> &SupportPoint {
        &self.points[i]
    }

    /// The position of the `i`-th point of this simplex on the Minkowski difference.
    #[inline]
    pub fn w(&self, i: usize) -> &Point<Real> {
        &self.points[i].w
    }

    /// Appends a point to this simplex.
    ///
    /// # Panics
    ///
    /// Panics if the simplex already contains [`MAX_SIMPLEX_POINTS`] points.
    #[inline]
    pub fn push(&mut self, pt: SupportPoint) {
        self.points.push(pt)
    }

    /// Replaces this simplex by the points at the given indices, in the given order.
    pub fn select(&mut self, ids: &[usize]) {
        let old = self.points.clone();
        self.points.clear();

        for i in ids {
            self.points.push(old[*i]);
        }
    }
}
