use crate::math::Real;

/// Maximum number of iterations of the GJK origin search.
pub const GJK_MAX_ITERATIONS: u32 = 128;
/// Tolerance of the GJK simplex containment tests.
///
/// Its square is used as the threshold below which a segment is considered to
/// contain the origin.
pub const GJK_IN_SIMPLEX_EPS: Real = 1.0e-4;
/// Maximum number of polytope expansions performed by EPA.
pub const EPA_MAX_ITERATIONS: u32 = 256;
/// Tolerance of the EPA test deciding whether the origin projects inside a face.
pub const EPA_FACE_VISIBILITY_EPS: Real = 0.01;
/// Distance under which EPA considers its nearest face converged.
///
/// This is also the skin added to the margin of both shapes by [`collide`](crate::query::collide).
pub const EPA_ACCURACY: Real = 0.001;

/// Tolerances and iteration caps of the GJK and EPA solvers.
///
/// The default values are the named constants of this module. They are
/// deliberate numerical tolerances and should only be changed with care.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkEpaSettings {
    /// Maximum number of iterations of the GJK origin search.
    pub gjk_max_iterations: u32,
    /// Tolerance of the GJK simplex containment tests.
    pub gjk_in_simplex_eps: Real,
    /// Maximum number of polytope expansions performed by EPA.
    pub epa_max_iterations: u32,
    /// Tolerance of the EPA test deciding whether the origin projects inside a face.
    pub epa_face_visibility_eps: Real,
    /// Distance under which EPA considers its nearest face converged.
    pub epa_accuracy: Real,
}

impl Default for GjkEpaSettings {
    fn default() -> Self {
        Self {
            gjk_max_iterations: GJK_MAX_ITERATIONS,
            gjk_in_simplex_eps: GJK_IN_SIMPLEX_EPS,
            epa_max_iterations: EPA_MAX_ITERATIONS,
            epa_face_visibility_eps: EPA_FACE_VISIBILITY_EPS,
            epa_accuracy: EPA_ACCURACY,
        }
    }
}
