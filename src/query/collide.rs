use crate::math::{Isometry, Real, Vector};
use crate::query::epa::Epa;
use crate::query::gjk::Gjk;
use crate::query::{Arena, ArenaError, ContactResults, GjkEpaSettings, Status};
use crate::shape::SupportMap;

/// Computes the penetration between two support-mapped shapes (`Ball`, `Cuboid`, etc.)
///
/// Both shapes are inflated by `margin` in total. GJK runs first. If it finds that the
/// shapes overlap, EPA computes the penetration depth, the contact normal and one
/// witness point on each shape. The default [`GjkEpaSettings`] are used.
///
/// Every temporary allocation is made inside of a block of `arena` that is released
/// before this returns. An error is only returned if the arena is too small or one of
/// its blocks is still open, algorithmic failures are reported through
/// [`ContactResults::status`].
pub fn collide<G1: ?Sized, G2: ?Sized>(
    arena: &mut Arena,
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    margin: Real,
) -> Result<ContactResults, ArenaError>
where
    G1: SupportMap,
    G2: SupportMap,
{
    collide_with_settings(arena, pos1, g1, pos2, g2, margin, &GjkEpaSettings::default())
}

/// Computes the penetration between two support-mapped shapes with custom solver settings.
///
/// See [`collide`] for details.
pub fn collide_with_settings<G1: ?Sized, G2: ?Sized>(
    arena: &mut Arena,
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    margin: Real,
    settings: &GjkEpaSettings,
) -> Result<ContactResults, ArenaError>
where
    G1: SupportMap,
    G2: SupportMap,
{
    let mut result = ContactResults::default();
    let mut gjk = Gjk::new(
        arena,
        pos1,
        g1,
        pos2,
        g2,
        margin + settings.epa_accuracy,
        settings,
    );

    let overlap = gjk.search_origin(&Vector::x())?;
    result.gjk_iterations = gjk.iterations();

    if !overlap {
        result.status = if gjk.failed() {
            Status::GjkFailed
        } else {
            Status::Separated
        };
        return Ok(result);
    }

    let mut epa = Epa::new(&mut gjk);
    let depth = epa.evaluate_pd(settings.epa_accuracy)?;
    result.epa_iterations = epa.iterations();

    if epa.failed() {
        result.status = Status::EpaFailed;
    } else if depth > 0.0 {
        result.status = Status::Penetrating;
        result.normal = *epa.normal();
        result.depth = depth;
        result.witnesses = *epa.witnesses();
        result.converged = epa.converged();
    } else if epa.converged() {
        // The contact is shallower than the EPA accuracy.
        result.status = Status::Separated;
    } else {
        result.status = Status::EpaFailed;
    }

    Ok(result)
}

/// Tests whether two support-mapped shapes, inflated by `margin`, overlap.
///
/// Only GJK is run. A search that exhausts its iteration budget is reported as no
/// intersection.
pub fn intersection_test<G1: ?Sized, G2: ?Sized>(
    arena: &mut Arena,
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    margin: Real,
) -> Result<bool, ArenaError>
where
    G1: SupportMap,
    G2: SupportMap,
{
    let settings = GjkEpaSettings::default();
    let mut gjk = Gjk::new(
        arena,
        pos1,
        g1,
        pos2,
        g2,
        margin + settings.epa_accuracy,
        &settings,
    );

    let overlap = gjk.search_origin(&Vector::x())?;
    Ok(overlap)
}
