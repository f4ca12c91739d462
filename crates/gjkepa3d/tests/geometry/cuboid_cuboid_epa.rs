use gjkepa3d::math::{Isometry, Vector};
use gjkepa3d::query::{self, Arena, Status};
use gjkepa3d::shape::Cuboid;

#[test]
#[allow(non_snake_case)]
fn cuboid_cuboid_EPA() {
    let mut arena = Arena::new();
    let c = Cuboid::new(Vector::new(2.0, 1.0, 1.0));
    let m1 = Isometry::translation(3.5, 0.0, 0.0);
    let m2 = Isometry::identity();

    let res = query::collide(&mut arena, &m1, &c, &m2, &c, 0.0).unwrap();
    assert_eq!(res.status, Status::Penetrating);
    assert_relative_eq!(res.depth, 0.5, epsilon = 2.0e-3);
    assert_relative_eq!(res.normal, -Vector::x(), epsilon = 1.0e-2);

    let m1 = Isometry::translation(0.0, 0.2, 0.0);
    let res = query::collide(&mut arena, &m1, &c, &m2, &c, 0.0).unwrap();
    assert_eq!(res.status, Status::Penetrating);
    assert_relative_eq!(res.depth, 1.8, epsilon = 2.0e-3);
    assert_relative_eq!(res.normal, -Vector::y(), epsilon = 1.0e-2);
}

#[test]
fn rotated_cuboids() {
    let mut arena = Arena::new();
    let c = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
    let m1 = Isometry::identity();
    // Rotated by 45 degrees around `z`: its corner points toward `-x`.
    let m2 = Isometry::new(
        Vector::new(2.2, 0.0, 0.0),
        Vector::z() * core::f32::consts::FRAC_PI_4,
    );

    let res = query::collide(&mut arena, &m1, &c, &m2, &c, 0.0).unwrap();
    assert_eq!(res.status, Status::Penetrating);
    assert_relative_eq!(res.depth, 1.0 + 2.0f32.sqrt() - 2.2, epsilon = 2.0e-3);
    assert!(res.normal.dot(&Vector::x()) > 0.99);
}
