use na::{Unit, UnitQuaternion};

use crate::math::{Isometry, Matrix, Point, Real, Vector};
use crate::query::gjk::direction_table::DirectionTable;
use crate::query::gjk::{Simplex, SupportPoint};
use crate::query::{Arena, ArenaError, BlockMark, GjkEpaSettings};
use crate::shape::SupportMap;
use crate::utils;

/// The state of a GJK origin search between two support-mapped shapes.
///
/// Creating a `Gjk` opens a block in the given arena. Every direction recorded
/// by the search is allocated inside of this block, which is closed when the
/// context is dropped. An [`Epa`](crate::query::epa::Epa) built on top of this
/// context reads its terminal simplex and nests its own block inside of it.
pub struct Gjk<'a, G1: ?Sized, G2: ?Sized> {
    arena: &'a mut Arena,
    block: Option<BlockMark>,
    rotations: [Matrix<Real>; 2],
    positions: [Point<Real>; 2],
    g1: &'a G1,
    g2: &'a G2,
    margin: Real,
    settings: GjkEpaSettings,
    simplex: Simplex,
    ray: Vector<Real>,
    table: DirectionTable,
    iterations: u32,
    failed: bool,
}

impl<'a, G1: ?Sized, G2: ?Sized> Drop for Gjk<'a, G1, G2> {
    fn drop(&mut self) {
        if let Some(block) = self.block.take() {
            if let Err(err) = self.arena.end_block(block) {
                log::debug!("Failed to release the GJK arena block: {}", err);
            }
        }
    }
}

impl<'a, G1: ?Sized, G2: ?Sized> Gjk<'a, G1, G2> {
    /// The current simplex.
    #[inline]
    pub fn simplex(&self) -> &Simplex {
        &self.simplex
    }

    /// The current, normalized, search direction.
    #[inline]
    pub fn ray(&self) -> &Vector<Real> {
        &self.ray
    }

    /// The number of iterations performed by the last call to `search_origin`.
    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Did the last call to `search_origin` run out of iterations?
    #[inline]
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// The margin added to the Minkowski difference.
    #[inline]
    pub fn margin(&self) -> Real {
        self.margin
    }

    #[inline]
    pub(crate) fn settings(&self) -> &GjkEpaSettings {
        &self.settings
    }

    #[inline]
    pub(crate) fn arena(&self) -> &Arena {
        &*self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut Arena {
        &mut *self.arena
    }
}

impl<'a, G1, G2> Gjk<'a, G1, G2>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    /// Initializes a GJK search between `g1` placed at `pos1` and `g2` placed at `pos2`.
    ///
    /// Both shapes are inflated by `margin` in total.
    pub fn new(
        arena: &'a mut Arena,
        pos1: &Isometry<Real>,
        g1: &'a G1,
        pos2: &Isometry<Real>,
        g2: &'a G2,
        margin: Real,
        settings: &GjkEpaSettings,
    ) -> Self {
        let block = arena.begin_block();

        Gjk {
            arena,
            block: Some(block),
            rotations: [
                pos1.rotation.to_rotation_matrix().into_inner(),
                pos2.rotation.to_rotation_matrix().into_inner(),
            ],
            positions: [
                Point::from(pos1.translation.vector),
                Point::from(pos2.translation.vector),
            ],
            g1,
            g2,
            margin,
            settings: *settings,
            simplex: Simplex::new(),
            ray: Vector::x(),
            table: DirectionTable::new(),
            iterations: 0,
            failed: false,
        }
    }

    /// The world-space support point of the `i`-th shape (without margin) along `dir`.
    pub fn local_support(&self, dir: &Vector<Real>, i: usize) -> Point<Real> {
        let local_dir = self.rotations[i].tr_mul(dir);
        let local_pt = if i == 0 {
            self.g1.local_support_point(&local_dir)
        } else {
            self.g2.local_support_point(&local_dir)
        };

        self.positions[i] + self.rotations[i] * local_pt.coords
    }

    /// The support point of the inflated Minkowski difference along `dir`.
    pub fn support(&self, dir: &Vector<Real>) -> SupportPoint {
        let a = self.local_support(dir, 0);
        let b = self.local_support(&-dir, 1);
        SupportPoint::new(Point::from(a - b + dir * self.margin), *dir)
    }

    /// Searches for a simplex of the Minkowski difference enclosing the origin.
    ///
    /// Returns `Ok(true)` if the shapes overlap. `Ok(false)` means they are separated,
    /// unless [`Self::failed`] is set, in which case the iteration budget was exhausted
    /// before the search could be resolved.
    pub fn search_origin(&mut self, init_dir: &Vector<Real>) -> Result<bool, ArenaError> {
        // Release the directions of any previous search.
        if let Some(block) = self.block.take() {
            self.arena.end_block(block)?;
        }
        self.block = Some(self.arena.begin_block());

        self.simplex.clear();
        self.table.clear();
        self.iterations = 0;
        self.failed = false;
        self.ray = init_dir.try_normalize(0.0).unwrap_or_else(Vector::x);

        let _ = self.fetch_support()?;
        self.ray = -self.simplex.w(0).coords;

        while self.iterations < self.settings.gjk_max_iterations {
            self.iterations += 1;

            let len = self.ray.norm();
            self.ray /= if len > 0.0 { len } else { 1.0 };

            if !self.fetch_support()? {
                return Ok(false);
            }

            let found = match self.simplex.order() {
                1 => {
                    let a = *self.simplex.w(1);
                    let b = *self.simplex.w(0);
                    self.solve_simplex2(&-a.coords, &(b - a))
                }
                2 => {
                    let a = *self.simplex.w(2);
                    let b = *self.simplex.w(1);
                    let c = *self.simplex.w(0);
                    self.solve_simplex3(&-a.coords, &(b - a), &(c - a))
                }
                3 => {
                    let a = *self.simplex.w(3);
                    let b = *self.simplex.w(2);
                    let c = *self.simplex.w(1);
                    let d = *self.simplex.w(0);
                    self.solve_simplex4(&-a.coords, &(b - a), &(c - a), &(d - a))
                }
                _ => false,
            };

            if found {
                return Ok(true);
            }
        }

        log::debug!(
            "GJK did not converge after {} iterations.",
            self.settings.gjk_max_iterations
        );
        self.failed = true;
        Ok(false)
    }

    /// Completes the terminal simplex into a full-dimensional polytope suitable as the
    /// seed of EPA.
    ///
    /// A segment is completed into a triangular bipyramid whose equator is made of three
    /// support points taken 120 degrees apart around the segment. A triangle is completed
    /// into a bipyramid with the support points along both sides of its normal.
    /// Returns `false` if no polytope with a non-zero volume could be built.
    pub fn enclose_origin(&mut self) -> bool {
        match self.simplex.order() {
            1 => {
                let a = *self.simplex.point(0);
                let b = *self.simplex.point(1);
                let ab = b - a;

                let axis = match Unit::try_new(ab, 0.0) {
                    Some(axis) => axis,
                    None => return false,
                };
                let rot =
                    UnitQuaternion::from_axis_angle(&axis, core::f32::consts::TAU / 3.0);
                let mut dir = utils::orthogonal_vector(&ab);

                self.simplex.clear();
                for _ in 0..3 {
                    let pt = self.support(&dir.normalize());
                    self.simplex.push(pt);
                    dir = rot * dir;
                }
                self.simplex.push(b);
                self.simplex.push(a);
                true
            }
            2 => {
                let a = *self.simplex.w(0);
                let n = (self.simplex.w(1) - a).cross(&(self.simplex.w(2) - a));
                let n = match n.try_normalize(0.0) {
                    Some(n) => n,
                    None => return false,
                };

                let up = self.support(&n);
                let down = self.support(&-n);

                if (up - down).dot(&n) <= self.settings.gjk_in_simplex_eps {
                    return false;
                }

                self.simplex.push(up);
                self.simplex.push(down);
                true
            }
            3 | 4 => true,
            _ => false,
        }
    }

    fn fetch_support(&mut self) -> Result<bool, ArenaError> {
        if !self.table.insert(&mut *self.arena, &self.ray)? {
            return Ok(false);
        }

        let pt = self.support(&self.ray);
        self.simplex.push(pt);
        Ok(self.ray.dot(&pt.w.coords) > 0.0)
    }

    fn solve_simplex2(&mut self, ao: &Vector<Real>, ab: &Vector<Real>) -> bool {
        if ab.dot(ao) >= 0.0 {
            let cabo = ab.cross(ao);
            let eps = self.settings.gjk_in_simplex_eps;

            if cabo.norm_squared() > eps * eps {
                self.ray = cabo.cross(ab);
                false
            } else {
                true
            }
        } else {
            self.simplex.select(&[1]);
            self.ray = *ao;
            false
        }
    }

    fn solve_simplex3(&mut self, ao: &Vector<Real>, ab: &Vector<Real>, ac: &Vector<Real>) -> bool {
        self.solve_simplex3a(ao, ab, ac, &ab.cross(ac))
    }

    fn solve_simplex3a(
        &mut self,
        ao: &Vector<Real>,
        ab: &Vector<Real>,
        ac: &Vector<Real>,
        cabc: &Vector<Real>,
    ) -> bool {
        let eps = self.settings.gjk_in_simplex_eps;

        if cabc.cross(ab).dot(ao) < -eps {
            self.simplex.select(&[1, 2]);
            self.solve_simplex2(ao, ab)
        } else if cabc.cross(ac).dot(ao) > eps {
            self.simplex.select(&[0, 2]);
            self.solve_simplex2(ao, ac)
        } else {
            let d = cabc.dot(ao);

            if d > eps {
                self.ray = *cabc;
                false
            } else if d < -eps {
                self.ray = -*cabc;
                self.simplex.select(&[1, 0, 2]);
                false
            } else {
                true
            }
        }
    }

    fn solve_simplex4(
        &mut self,
        ao: &Vector<Real>,
        ab: &Vector<Real>,
        ac: &Vector<Real>,
        ad: &Vector<Real>,
    ) -> bool {
        let eps = self.settings.gjk_in_simplex_eps;

        let crs = ab.cross(ac);
        if crs.dot(ao) > eps {
            self.simplex.select(&[1, 2, 3]);
            return self.solve_simplex3a(ao, ab, ac, &crs);
        }

        let crs = ac.cross(ad);
        if crs.dot(ao) > eps {
            self.simplex.select(&[0, 1, 3]);
            return self.solve_simplex3a(ao, ac, ad, &crs);
        }

        let crs = ad.cross(ab);
        if crs.dot(ao) > eps {
            self.simplex.select(&[2, 0, 3]);
            return self.solve_simplex3a(ao, ad, ab, &crs);
        }

        true
    }
}
