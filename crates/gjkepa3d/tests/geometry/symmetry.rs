use gjkepa3d::math::{Isometry, Vector};
use gjkepa3d::query::{self, Arena};
use gjkepa3d::shape::{Ball, Capsule};

#[test]
fn swapping_shapes_mirrors_the_contact() {
    let mut arena = Arena::new();
    let b1 = Ball::new(1.0);
    let b2 = Ball::new(0.75);
    let pos1 = Isometry::translation(0.1, 0.0, -0.4);
    let pos2 = Isometry::translation(0.7, 0.8, 0.1);

    let ab = query::collide(&mut arena, &pos1, &b1, &pos2, &b2, 0.0).unwrap();
    let ba = query::collide(&mut arena, &pos2, &b2, &pos1, &b1, 0.0).unwrap();

    assert!(ab.is_penetrating());
    assert!(ba.is_penetrating());
    assert!((ab.normal + ba.normal).norm() < 0.1);
    assert_relative_eq!(ab.depth, ba.depth, epsilon = 2.0e-3);
    assert_relative_eq!(ab.witnesses[0], ba.witnesses[1], epsilon = 0.1);
    assert_relative_eq!(ab.witnesses[1], ba.witnesses[0], epsilon = 0.1);
}

#[test]
fn swapping_capsule_and_ball() {
    let mut arena = Arena::new();
    let capsule = Capsule::new_z(2.0, 0.5);
    let ball = Ball::new(0.5);
    let pos1 = Isometry::new(Vector::zeros(), Vector::new(0.2, 0.0, 0.1));
    let pos2 = Isometry::translation(0.8, 0.0, 0.5);

    let ab = query::collide(&mut arena, &pos1, &capsule, &pos2, &ball, 0.0).unwrap();
    let ba = query::collide(&mut arena, &pos2, &ball, &pos1, &capsule, 0.0).unwrap();

    assert!(ab.is_penetrating());
    assert!(ba.is_penetrating());
    assert!((ab.normal + ba.normal).norm() < 0.1);
    assert_relative_eq!(ab.depth, ba.depth, epsilon = 2.0e-3);
}
