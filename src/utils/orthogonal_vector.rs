use crate::math::{Real, Vector};

/// Computes a vector orthogonal to `v` by crossing it with the canonical
/// axis yielding the longest result.
///
/// The result is not normalized. It is zero only if `v` is zero.
pub fn orthogonal_vector(v: &Vector<Real>) -> Vector<Real> {
    let candidates = [
        v.cross(&Vector::x()),
        v.cross(&Vector::y()),
        v.cross(&Vector::z()),
    ];
    let sq = [
        candidates[0].norm_squared(),
        candidates[1].norm_squared(),
        candidates[2].norm_squared(),
    ];

    let best = if sq[0] > sq[1] {
        if sq[0] > sq[2] {
            0
        } else {
            2
        }
    } else if sq[1] > sq[2] {
        1
    } else {
        2
    };

    candidates[best]
}
