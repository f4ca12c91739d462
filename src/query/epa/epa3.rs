//! Three-dimensional penetration depth queries using the Expanding Polytope Algorithm.

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::math::{Point, Real, Vector};
use crate::query::epa::{BaseShape, Face, FaceId, VertexId};
use crate::query::gjk::{Gjk, SupportPoint, MAX_SIMPLEX_POINTS};
use crate::query::ArenaError;
use crate::shape::SupportMap;

/// The faces created while walking the horizon seen from a new support point.
struct Horizon {
    edges: usize,
    first: Option<FaceId>,
    last: Option<FaceId>,
}

/// The Expanding Polytope Algorithm in 3D.
///
/// Starting from the terminal simplex of a [`Gjk`] search that enclosed the origin,
/// EPA grows a polytope inscribed in the Minkowski difference, always refining the
/// face closest to the origin, until that face lies on the boundary of the Minkowski
/// difference.
pub struct Epa<'g, 'a, G1: ?Sized, G2: ?Sized> {
    gjk: &'g mut Gjk<'a, G1, G2>,
    root: Option<FaceId>,
    face_count: usize,
    iterations: u32,
    normal: Vector<Real>,
    depth: Real,
    witnesses: [Point<Real>; 2],
    bcoords: [Real; 3],
    failed: bool,
    converged: bool,
}

impl<'g, 'a, G1, G2> Epa<'g, 'a, G1, G2>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    /// Creates a new EPA solver reading the simplex of `gjk`.
    pub fn new(gjk: &'g mut Gjk<'a, G1, G2>) -> Self {
        Epa {
            gjk,
            root: None,
            face_count: 0,
            iterations: 0,
            normal: Vector::zeros(),
            depth: Real::NEG_INFINITY,
            witnesses: [Point::origin(); 2],
            bcoords: [0.0; 3],
            failed: false,
            converged: false,
        }
    }

    /// The normal of the nearest face, pointing from the first shape toward the second one.
    pub fn normal(&self) -> &Vector<Real> {
        &self.normal
    }

    /// The penetration depth computed by the last call to `evaluate_pd`.
    pub fn depth(&self) -> Real {
        self.depth
    }

    /// The witness points on the first and second shape.
    pub fn witnesses(&self) -> &[Point<Real>; 2] {
        &self.witnesses
    }

    /// Barycentric coordinates of the projection of the origin on the nearest face.
    pub fn barycentric_coordinates(&self) -> &[Real; 3] {
        &self.bcoords
    }

    /// The number of polytope expansions performed.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// The number of faces of the polytope when the expansion stopped.
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Did EPA fail to find any face enclosing the origin?
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Did the nearest face reach the requested accuracy?
    ///
    /// This is `false` if the expansion stopped because of its iteration budget or
    /// because the polytope became degenerate. The depth is then a best-effort estimate.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Computes the penetration depth of the two shapes of the GJK context.
    ///
    /// The GJK simplex is first completed into a full-dimensional polytope. Every face
    /// and support point created by the expansion lives in an arena block nested inside
    /// of the GJK block, and is released before this returns. A depth of negative
    /// infinity is returned if no initial polytope enclosing the origin could be built.
    pub fn evaluate_pd(&mut self, accuracy: Real) -> Result<Real, ArenaError> {
        let block = self.gjk.arena_mut().begin_block();
        let result = self.expand(accuracy);
        let closed = self.gjk.arena_mut().end_block(block);
        let depth = result?;
        closed?;
        Ok(depth)
    }

    fn expand(&mut self, accuracy: Real) -> Result<Real, ArenaError> {
        self.root = None;
        self.face_count = 0;
        self.iterations = 0;
        self.normal = Vector::zeros();
        self.depth = Real::NEG_INFINITY;
        self.witnesses = [Point::origin(); 2];
        self.bcoords = [0.0; 3];
        self.failed = false;
        self.converged = false;

        if self.gjk.enclose_origin() {
            self.build_base()?;
        }

        if self.face_count == 0 {
            log::debug!("EPA: no base face encloses the origin.");
            self.failed = true;
            return Ok(self.depth);
        }

        let max_iterations = self.gjk.settings().epa_max_iterations;
        let mut mark = 1;
        let mut best = None;

        while self.iterations < max_iterations {
            let bf = match self.find_best() {
                Some(bf) => bf,
                None => break,
            };
            best = Some(bf);

            let face = *self.face(bf);
            let w = self.gjk.support(&-face.normal);
            let d = face.normal.dot(&w.w.coords) + face.dist;

            if d >= -accuracy {
                self.converged = true;
                break;
            }

            let wid = self.gjk.arena_mut().alloc(w)?;
            mark += 1;
            self.detach(bf);
            self.gjk.arena_mut()[bf].mark = mark;

            let horizon = self.build_horizon(mark, wid, &w.w, bf)?;

            match (horizon.first, horizon.last) {
                (Some(first), Some(last)) if horizon.edges > 2 => self.link(last, 1, first, 2),
                _ => {
                    log::debug!(
                        "EPA: the horizon only has {} edges, stopping the expansion.",
                        horizon.edges
                    );
                    break;
                }
            }

            self.iterations += 1;
        }

        if self.iterations == max_iterations {
            log::debug!(
                "EPA did not converge after {} iterations.",
                max_iterations
            );
        }

        match best {
            Some(bf) => self.extract(bf),
            None => self.failed = true,
        }

        Ok(self.depth)
    }

    fn build_base(&mut self) -> Result<(), ArenaError> {
        let shape = match BaseShape::from_order(self.gjk.simplex().order()) {
            Some(shape) => shape,
            None => return Ok(()),
        };
        let topology = shape.topology();

        let mut pts: ArrayVec<SupportPoint, MAX_SIMPLEX_POINTS> =
            self.gjk.simplex().points().iter().copied().collect();
        topology.orient(&mut pts);

        let base = self.gjk.arena_mut().alloc_slice(&pts)?;
        let mut faces = ArrayVec::<FaceId, 6>::new();

        for f in topology.faces {
            let face = self.new_face([base.id(f[0]), base.id(f[1]), base.id(f[2])])?;
            faces.push(face);
        }

        for l in topology.links {
            self.link(faces[l.face_a], l.edge_a, faces[l.face_b], l.edge_b);
        }

        Ok(())
    }

    fn extract(&mut self, bf: FaceId) {
        let face = *self.face(bf);
        let verts = face.vertices.map(|v| self.gjk.arena()[v]);
        let pts = verts.map(|v| v.w);

        self.bcoords = face.barycentric_coordinates(&pts);
        self.normal = -face.normal;
        self.depth = face.dist.max(0.0);

        for i in 0..2 {
            let s = if i == 0 { 1.0 } else { -1.0 };
            let mut witness = Vector::zeros();

            for (v, b) in verts.iter().zip(self.bcoords.iter()) {
                witness += self.gjk.local_support(&(v.r * s), i).coords * *b;
            }

            self.witnesses[i] = Point::from(witness);
        }
    }

    /// Walks the faces visible from `w`, starting from the neighbors of the detached
    /// face `bf`, and fans new faces around the horizon.
    ///
    /// Faces are visited in the order of a depth-first traversal through the first
    /// then the second remaining edge of each visible face.
    fn build_horizon(
        &mut self,
        mark: u32,
        wid: VertexId,
        w: &Point<Real>,
        bf: FaceId,
    ) -> Result<Horizon, ArenaError> {
        let mut horizon = Horizon {
            edges: 0,
            first: None,
            last: None,
        };
        let mut stack: SmallVec<[(FaceId, usize); 32]> = SmallVec::new();
        self.push_neighbors(&mut stack, bf, &[2, 1, 0]);

        while let Some((fid, e)) = stack.pop() {
            let f = *self.face(fid);

            if f.mark == mark {
                continue;
            }

            let e1 = (e + 1) % 3;

            if f.normal.dot(&w.coords) + f.dist > 0.0 {
                // `w` is behind this face: its edge `e` belongs to the horizon.
                let nf = self.new_face([f.vertices[e1], f.vertices[e], wid])?;
                self.link(nf, 0, fid, e);

                match horizon.last {
                    Some(cf) => self.link(cf, 1, nf, 2),
                    None => horizon.first = Some(nf),
                }

                horizon.last = Some(nf);
                horizon.edges += 1;
            } else {
                let e2 = (e + 2) % 3;
                self.detach(fid);
                self.gjk.arena_mut()[fid].mark = mark;
                self.push_neighbors(&mut stack, fid, &[e2, e1]);
            }
        }

        Ok(horizon)
    }

    fn push_neighbors(
        &self,
        stack: &mut SmallVec<[(FaceId, usize); 32]>,
        fid: FaceId,
        edges: &[usize],
    ) {
        let face = self.face(fid);

        for e in edges {
            match face.neighbor(*e) {
                Some(adj) => stack.push(adj),
                None => log::debug!("EPA: found a face with a missing neighbor."),
            }
        }
    }

    fn new_face(&mut self, vertices: [VertexId; 3]) -> Result<FaceId, ArenaError> {
        let eps = self.gjk.settings().epa_face_visibility_eps;
        let arena = self.gjk.arena_mut();
        let pts = vertices.map(|v| arena[v].w);
        let (face, valid) = Face::new(vertices, &pts, eps);
        let id = arena.alloc(face)?;

        if valid {
            self.push_front(id);
        }

        Ok(id)
    }

    fn push_front(&mut self, id: FaceId) {
        let root = self.root;
        let arena = self.gjk.arena_mut();

        let face = &mut arena[id];
        face.prev = None;
        face.next = root;
        face.active = true;

        if let Some(root) = root {
            arena[root].prev = Some(id);
        }

        self.root = Some(id);
        self.face_count += 1;
    }

    fn detach(&mut self, id: FaceId) {
        let arena = self.gjk.arena_mut();
        let face = arena[id];

        if !face.active {
            return;
        }

        match face.prev {
            Some(prev) => arena[prev].next = face.next,
            None => self.root = face.next,
        }

        if let Some(next) = face.next {
            arena[next].prev = face.prev;
        }

        let face = &mut arena[id];
        face.prev = None;
        face.next = None;
        face.active = false;
        self.face_count -= 1;
    }

    fn link(&mut self, fa: FaceId, ea: usize, fb: FaceId, eb: usize) {
        let arena = self.gjk.arena_mut();
        arena[fa].adj[ea] = Some(fb);
        arena[fa].adj_edges[ea] = eb as u8;
        arena[fb].adj[eb] = Some(fa);
        arena[fb].adj_edges[eb] = ea as u8;
    }

    fn find_best(&self) -> Option<FaceId> {
        let mut best = None;
        let mut best_dist = Real::INFINITY;
        let mut curr = self.root;

        while let Some(id) = curr {
            let face = self.face(id);

            if face.dist < best_dist {
                best_dist = face.dist;
                best = Some(id);
            }

            curr = face.next;
        }

        best
    }

    #[inline]
    fn face(&self, id: FaceId) -> &Face {
        &self.gjk.arena()[id]
    }

    #[cfg(test)]
    fn check_topology(&self) {
        let mut count = 0;
        let mut curr = self.root;

        while let Some(id) = curr {
            let face = self.face(id);
            assert!(face.is_active());

            for e in 0..3 {
                let (adj_id, adj_e) = face.neighbor(e).unwrap();
                // Rejected faces from `new_face` stay linked but inactive.
                let adj = self.face(adj_id);

                assert_eq!(adj.neighbor(adj_e), Some((id, e)));
                assert_eq!(face.vertices[e], adj.vertices[(adj_e + 1) % 3]);
                assert_eq!(face.vertices[(e + 1) % 3], adj.vertices[adj_e]);
            }

            count += 1;
            curr = face.next;
        }

        assert_eq!(count, self.face_count);
    }
}
