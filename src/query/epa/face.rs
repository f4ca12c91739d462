use crate::math::{Point, Real, Vector};
use crate::query::gjk::SupportPoint;
use crate::query::ArenaId;

/// Handle of a support point allocated in the query arena.
pub type VertexId = ArenaId<SupportPoint>;
/// Handle of an EPA face allocated in the query arena.
pub type FaceId = ArenaId<Face>;

/// A triangular face of the EPA polytope.
///
/// The edge `i` goes from `vertices[i]` to `vertices[(i + 1) % 3]`. The face across
/// this edge is `adj[i]`, which sees the same edge under the index `adj_edges[i]`.
///
/// The normal points toward the inside of the polytope, so that `dist`, the distance
/// from the origin to the plane of the face, is positive when the origin is enclosed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Face {
    pub(crate) vertices: [VertexId; 3],
    pub(crate) adj: [Option<FaceId>; 3],
    pub(crate) adj_edges: [u8; 3],
    pub(crate) normal: Vector<Real>,
    pub(crate) dist: Real,
    pub(crate) mark: u32,
    pub(crate) prev: Option<FaceId>,
    pub(crate) next: Option<FaceId>,
    pub(crate) active: bool,
}

impl Face {
    /// Builds an unlinked face with the given vertices.
    ///
    /// The returned flag is `false` if the origin does not project inside of the
    /// triangle (up to `eps`), in which case the face must not be part of the polytope.
    pub fn new(vertices: [VertexId; 3], pts: &[Point<Real>; 3], eps: Real) -> (Self, bool) {
        let [a, b, c] = pts;
        let nrm = (b - a).cross(&(c - a));
        let len = nrm.norm();

        let valid = a.coords.cross(&b.coords).dot(&nrm) >= -eps
            && b.coords.cross(&c.coords).dot(&nrm) >= -eps
            && c.coords.cross(&a.coords).dot(&nrm) >= -eps;

        let normal = if len > 0.0 { nrm / len } else { Vector::zeros() };
        let dist = (-normal.dot(&a.coords)).max(0.0);

        let face = Face {
            vertices,
            adj: [None; 3],
            adj_edges: [0; 3],
            normal,
            dist,
            mark: 0,
            prev: None,
            next: None,
            active: false,
        };

        (face, valid)
    }

    /// The vertices of this face.
    #[inline]
    pub fn vertices(&self) -> &[VertexId; 3] {
        &self.vertices
    }

    /// The unit normal of this face, pointing toward the inside of the polytope.
    #[inline]
    pub fn normal(&self) -> &Vector<Real> {
        &self.normal
    }

    /// The distance between the origin and the plane of this face.
    #[inline]
    pub fn dist(&self) -> Real {
        self.dist
    }

    /// The face across the `i`-th edge, together with the index of that edge on the neighbor.
    #[inline]
    pub fn neighbor(&self, i: usize) -> Option<(FaceId, usize)> {
        self.adj[i].map(|f| (f, self.adj_edges[i] as usize))
    }

    /// Is this face part of the active list of the polytope?
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Barycentric coordinates of the projection of the origin on this face.
    ///
    /// Each coordinate is the area of the sub-triangle opposite to the matching vertex,
    /// normalized so that the coordinates sum to 1. A degenerate face gets equal weights.
    pub fn barycentric_coordinates(&self, pts: &[Point<Real>; 3]) -> [Real; 3] {
        let o = Point::from(self.normal * -self.dist);
        let a0 = (pts[0] - o).cross(&(pts[1] - o)).norm();
        let a1 = (pts[1] - o).cross(&(pts[2] - o)).norm();
        let a2 = (pts[2] - o).cross(&(pts[0] - o)).norm();
        let sum = a0 + a1 + a2;

        if sum > 0.0 {
            [a1 / sum, a2 / sum, a0 / sum]
        } else {
            [1.0 / 3.0; 3]
        }
    }
}
