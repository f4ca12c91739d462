use gjkepa3d::math::{Isometry, Real, Vector};
use gjkepa3d::query::{self, Arena, Status};
use gjkepa3d::shape::Ball;
use na::Point3;

fn random_dir(rng: &mut oorandom::Rand32) -> Vector<Real> {
    loop {
        let v = Vector::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );

        if let Some(v) = v.try_normalize(1.0e-3) {
            return v;
        }
    }
}

#[test]
fn ball_ball_separated() {
    let mut arena = Arena::new();
    let mut rng = oorandom::Rand32::new(0);
    let b1 = Ball::new(1.0);
    let b2 = Ball::new(0.75);

    for _ in 0..50 {
        let dir = random_dir(&mut rng);
        let dist = 1.8 + rng.rand_float() * 3.0;
        let center = Vector::new(0.5, -1.0, 2.0);
        let pos1 = Isometry::new(center, Vector::zeros());
        let pos2 = Isometry::new(center + dir * dist, Vector::zeros());

        let res = query::collide(&mut arena, &pos1, &b1, &pos2, &b2, 0.0).unwrap();
        assert_eq!(res.status, Status::Separated);
        assert!(!res.is_failure());
    }

    assert_eq!(arena.used_bytes(), 0);
}

#[test]
fn ball_ball_penetration() {
    let mut arena = Arena::new();
    let mut rng = oorandom::Rand32::new(42);
    let b1 = Ball::new(1.0);
    let b2 = Ball::new(0.75);

    for _ in 0..50 {
        let dir = random_dir(&mut rng);
        let dist = 0.1 + rng.rand_float() * 1.6;
        let center1 = Point3::new(-0.3, 0.2, 1.0);
        let center2 = center1 + dir * dist;
        let pos1 = Isometry::translation(center1.x, center1.y, center1.z);
        let pos2 = Isometry::translation(center2.x, center2.y, center2.z);

        let res = query::collide(&mut arena, &pos1, &b1, &pos2, &b2, 0.0).unwrap();
        assert!(res.is_penetrating(), "status: {:?}", res.status);
        assert_relative_eq!(res.depth, 1.75 - dist, epsilon = 2.0e-3);
        assert!(res.normal.dot(&dir) > 0.99);
        assert!(res.gjk_iterations <= query::GJK_MAX_ITERATIONS);
        assert!(res.epa_iterations <= query::EPA_MAX_ITERATIONS);

        assert_relative_eq!(res.witnesses[0], center1 + dir * 1.0, epsilon = 0.1);
        assert_relative_eq!(res.witnesses[1], center2 - dir * 0.75, epsilon = 0.1);
    }
}

#[test]
fn touching_boundary_sweep_settles_once() {
    let mut arena = Arena::new();
    let b1 = Ball::new(1.0);
    let b2 = Ball::new(0.75);
    let dir = Vector::new(0.3, -0.8, 0.5).normalize();
    let pos1 = Isometry::identity();
    // Both balls are inflated by the EPA accuracy.
    let boundary = 1.75 + query::EPA_ACCURACY;
    let band = 2.0 * query::EPA_ACCURACY;

    let mut prev = None;
    let mut changes_outside_band = 0;

    for i in 0..400 {
        let dist = 1.754 - i as Real * 2.0e-5;
        let pos2 = Isometry::new(dir * dist, Vector::zeros());
        let res = query::collide(&mut arena, &pos1, &b1, &pos2, &b2, 0.0).unwrap();

        assert!(!res.is_failure(), "dist {}: {:?}", dist, res.status);

        if dist > boundary + band {
            assert_eq!(res.status, Status::Separated, "dist {}", dist);
        } else if dist < boundary - band {
            assert!(res.is_penetrating(), "dist {}: {:?}", dist, res.status);
        }

        if res.is_penetrating() {
            assert!(res.depth > 0.0);
            assert_relative_eq!(res.depth, boundary - dist, epsilon = 2.0e-3);
            assert!(res.normal.dot(&dir) > 0.9);
            assert!(res.witnesses.iter().all(|w| w.coords.iter().all(|x| x.is_finite())));
        }

        if (dist - boundary).abs() > band && prev.is_some_and(|p| p != res.status) {
            changes_outside_band += 1;
        }
        prev = Some(res.status);
    }

    // The only change away from the boundary band is entering the deep side.
    assert!(changes_outside_band <= 1);
    assert_eq!(arena.used_bytes(), 0);
}

#[test]
fn converged_results_are_flagged() {
    let mut arena = Arena::new();
    let ball = Ball::new(1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.0, 0.0, 1.5);

    let res = query::collide(&mut arena, &pos1, &ball, &pos2, &ball, 0.0).unwrap();
    assert!(res.is_penetrating());
    assert!(res.converged);
    assert_relative_eq!(res.normal, Vector::z(), epsilon = 5.0e-2);
}
