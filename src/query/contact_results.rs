use crate::math::{Point, Real, Vector};

/// Outcome of a [`collide`](crate::query::collide) query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Status {
    /// The shapes do not overlap.
    #[default]
    Separated,
    /// The shapes overlap and the penetration data are valid.
    Penetrating,
    /// GJK did not resolve the query within its iteration budget.
    GjkFailed,
    /// EPA could not build or refine a polytope enclosing the origin.
    EpaFailed,
}

/// Results of a narrow-phase collision query between two convex shapes.
///
/// All points and vectors are expressed in world-space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactResults {
    /// The outcome of the query.
    pub status: Status,
    /// The contact normal, pointing from the first shape toward the second one.
    ///
    /// Only meaningful if `status` is [`Status::Penetrating`].
    pub normal: Vector<Real>,
    /// The penetration depth, including the margin passed to the query.
    ///
    /// Only meaningful if `status` is [`Status::Penetrating`].
    pub depth: Real,
    /// The witness points on the first and second shape respectively.
    pub witnesses: [Point<Real>; 2],
    /// The number of GJK iterations performed.
    pub gjk_iterations: u32,
    /// The number of EPA iterations performed.
    pub epa_iterations: u32,
    /// Whether EPA converged to the requested accuracy.
    ///
    /// A penetrating result with `converged == false` is the best face EPA could
    /// find before running out of iterations or hitting a degenerate polytope.
    pub converged: bool,
}

impl Default for ContactResults {
    fn default() -> Self {
        Self {
            status: Status::Separated,
            normal: Vector::zeros(),
            depth: 0.0,
            witnesses: [Point::origin(); 2],
            gjk_iterations: 0,
            epa_iterations: 0,
            converged: false,
        }
    }
}

impl ContactResults {
    /// Is the status of this result [`Status::Penetrating`]?
    #[inline]
    pub fn is_penetrating(&self) -> bool {
        self.status == Status::Penetrating
    }

    /// Did one of the solvers fail?
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self.status, Status::GjkFailed | Status::EpaFailed)
    }
}
