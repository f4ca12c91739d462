use crate::query::gjk::SupportPoint;

/// A shared edge between two faces of a base polytope.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceLink {
    /// Index of the first face.
    pub face_a: usize,
    /// Index of the shared edge on the first face.
    pub edge_a: usize,
    /// Index of the second face.
    pub face_b: usize,
    /// Index of the shared edge on the second face.
    pub edge_b: usize,
}

const fn link(face_a: usize, edge_a: usize, face_b: usize, edge_b: usize) -> FaceLink {
    FaceLink {
        face_a,
        edge_a,
        face_b,
        edge_b,
    }
}

/// The connectivity of the initial EPA polytope built from a GJK simplex.
///
/// Faces are given as indices into the simplex, wound so that their normals point
/// toward the inside of the polytope, provided the simplex has the expected
/// orientation. [`BaseTopology::orient`] fixes the orientation of a simplex by
/// swapping the two vertices of the `flip` pair when the vertex `probe.0` does not
/// lie on the inner side of the plane of the first three vertices relative to
/// `probe.1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BaseTopology {
    /// Number of simplex points used by this topology.
    pub vertex_count: usize,
    /// The faces, as triples of simplex indices.
    pub faces: &'static [[usize; 3]],
    /// The edges shared by the faces.
    pub links: &'static [FaceLink],
    /// The vertices used to test the orientation of the simplex.
    pub probe: (usize, usize),
    /// The vertices swapped to fix the orientation of the simplex.
    pub flip: (usize, usize),
}

const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 1, 2], [1, 0, 3], [2, 1, 3], [0, 2, 3]];
const TETRAHEDRON_LINKS: [FaceLink; 6] = [
    link(0, 0, 1, 0),
    link(0, 1, 2, 0),
    link(0, 2, 3, 0),
    link(1, 1, 3, 2),
    link(1, 2, 2, 1),
    link(2, 2, 3, 1),
];

// Vertices 0, 1, 2 form the equator, 3 and 4 are the apexes.
const HEXAHEDRON_FACES: [[usize; 3]; 6] = [
    [1, 0, 3],
    [2, 1, 3],
    [0, 2, 3],
    [0, 1, 4],
    [1, 2, 4],
    [2, 0, 4],
];
const HEXAHEDRON_LINKS: [FaceLink; 9] = [
    link(0, 0, 3, 0),
    link(1, 0, 4, 0),
    link(2, 0, 5, 0),
    link(0, 1, 2, 2),
    link(0, 2, 1, 1),
    link(1, 2, 2, 1),
    link(3, 1, 4, 2),
    link(3, 2, 5, 1),
    link(4, 1, 5, 2),
];

// Every face has three edges, each shared by exactly two faces.
static_assertions::const_assert_eq!(3 * TETRAHEDRON_FACES.len(), 2 * TETRAHEDRON_LINKS.len());
static_assertions::const_assert_eq!(3 * HEXAHEDRON_FACES.len(), 2 * HEXAHEDRON_LINKS.len());

static TETRAHEDRON: BaseTopology = BaseTopology {
    vertex_count: 4,
    faces: &TETRAHEDRON_FACES,
    links: &TETRAHEDRON_LINKS,
    probe: (3, 0),
    flip: (0, 1),
};

static HEXAHEDRON: BaseTopology = BaseTopology {
    vertex_count: 5,
    faces: &HEXAHEDRON_FACES,
    links: &HEXAHEDRON_LINKS,
    probe: (3, 4),
    flip: (3, 4),
};

/// The shape of the initial EPA polytope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BaseShape {
    /// A tetrahedron, built from a GJK simplex of order 3.
    Tetrahedron,
    /// A triangular bipyramid, built from a simplex of order 4.
    Hexahedron,
}

impl BaseShape {
    /// The base shape matching a simplex of the given order, if any.
    pub fn from_order(order: usize) -> Option<Self> {
        match order {
            3 => Some(BaseShape::Tetrahedron),
            4 => Some(BaseShape::Hexahedron),
            _ => None,
        }
    }

    /// The connectivity of this base shape.
    pub fn topology(self) -> &'static BaseTopology {
        match self {
            BaseShape::Tetrahedron => &TETRAHEDRON,
            BaseShape::Hexahedron => &HEXAHEDRON,
        }
    }
}

impl BaseTopology {
    /// Reorders `pts` so that every face of this topology has an inward normal.
    pub fn orient(&self, pts: &mut [SupportPoint]) {
        let n = (pts[1].w - pts[0].w).cross(&(pts[2].w - pts[0].w));
        let (p, q) = self.probe;

        if n.dot(&(pts[p].w - pts[q].w)) < 0.0 {
            pts.swap(self.flip.0, self.flip.1);
        }
    }
}
