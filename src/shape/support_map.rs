//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};

/// Traits of convex shapes representable by a support mapping function.
///
/// This is the only capability the GJK and EPA solvers need from a shape. The
/// support point is computed *without margin*: any radial inflation is applied
/// symmetrically by the collision query itself.
pub trait SupportMap {
    /// Evaluates the support function of this shape in its local-space.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product. `dir` is not necessarily normalized and may be zero, in which case
    /// any point of the shape is a valid answer.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }
}

impl<S: SupportMap + ?Sized> SupportMap for &S {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        (**self).local_support_point(dir)
    }
}
