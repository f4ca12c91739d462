use core::cell::RefCell;

use gjkepa3d::math::{Isometry, Point, Real, Vector};
use gjkepa3d::query::{self, Arena, GjkEpaSettings, Status, EPA_MAX_ITERATIONS, GJK_MAX_ITERATIONS};
use gjkepa3d::shape::{Ball, SupportMap};

/// A support map returning random points, which no convex shape would.
struct RandomSupport {
    rng: RefCell<oorandom::Rand32>,
}

impl SupportMap for RandomSupport {
    fn local_support_point(&self, _: &Vector<Real>) -> Point<Real> {
        let mut rng = self.rng.borrow_mut();
        Point::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        )
    }
}

/// A support map ignoring its direction.
struct ConstantSupport(Point<Real>);

impl SupportMap for ConstantSupport {
    fn local_support_point(&self, _: &Vector<Real>) -> Point<Real> {
        self.0
    }
}

#[test]
fn random_support_terminates() {
    let mut arena = Arena::new();
    let ball = Ball::new(0.5);
    let pos = Isometry::identity();

    for seed in 0..20 {
        let shape = RandomSupport {
            rng: RefCell::new(oorandom::Rand32::new(seed)),
        };

        let res = query::collide(&mut arena, &pos, &shape, &pos, &ball, 0.0).unwrap();
        assert!(res.gjk_iterations <= GJK_MAX_ITERATIONS);
        assert!(res.epa_iterations <= EPA_MAX_ITERATIONS);
        assert_eq!(arena.open_blocks(), 0);
    }
}

#[test]
fn constant_support_terminates() {
    let mut arena = Arena::new();
    let ball = Ball::new(1.0);
    let pos = Isometry::identity();

    let far = ConstantSupport(Point::new(5.0, 5.0, 5.0));
    let res = query::collide(&mut arena, &pos, &far, &pos, &ball, 0.0).unwrap();
    assert_eq!(res.status, Status::Separated);
    assert!(res.gjk_iterations <= GJK_MAX_ITERATIONS);

    // Both shapes always return the same point: every direction yields the same
    // support point, and the search must still stop.
    let a = ConstantSupport(Point::new(0.0, 0.0, 0.0));
    let res = query::collide(&mut arena, &pos, &a, &pos, &a, 0.0).unwrap();
    // The Minkowski difference is then a ball with the radius of the contact skin.
    assert!(res.gjk_iterations <= GJK_MAX_ITERATIONS);
    assert!(res.depth <= 2.0e-3);
}

#[test]
fn iteration_budget_exhaustion_is_a_gjk_failure() {
    let mut arena = Arena::new();
    let ball = Ball::new(1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.5, 0.7, 0.3);
    let settings = GjkEpaSettings {
        gjk_max_iterations: 1,
        ..GjkEpaSettings::default()
    };

    let res =
        query::collide_with_settings(&mut arena, &pos1, &ball, &pos2, &ball, 0.0, &settings)
            .unwrap();
    assert_eq!(res.status, Status::GjkFailed);
    assert!(res.is_failure());
    assert_eq!(res.gjk_iterations, 1);
}

#[test]
fn epa_iteration_budget_degrades_gracefully() {
    let mut arena = Arena::new();
    let ball = Ball::new(1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.5, 0.7, 0.3);
    let settings = GjkEpaSettings {
        epa_max_iterations: 1,
        ..GjkEpaSettings::default()
    };

    let res =
        query::collide_with_settings(&mut arena, &pos1, &ball, &pos2, &ball, 0.0, &settings)
            .unwrap();
    assert_eq!(res.status, Status::Penetrating);
    assert!(!res.converged);
    assert_eq!(res.epa_iterations, 1);
    // The polytope is inscribed in the Minkowski difference, so its nearest face
    // underestimates the depth.
    assert!(res.depth <= 2.0 - pos2.translation.vector.norm() + 2.0e-3);
}
