extern crate nalgebra as na;

use gjkepa3d::query::{self, Arena, Status};
use gjkepa3d::shape::{Ball, Cuboid};
use na::{Isometry3, Vector3};

fn main() {
    let mut arena = Arena::new();
    let cuboid = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
    let ball = Ball::new(1.0);
    let margin = 1.0;

    let cuboid_pos = Isometry3::identity();
    let ball_pos_penetrating = Isometry3::translation(1.0, 1.0, 1.0);
    let ball_pos_in_margin = Isometry3::translation(2.0, 2.0, 2.0);
    let ball_pos_too_far = Isometry3::translation(3.0, 3.0, 3.0);

    let ctct_penetrating = query::collide(
        &mut arena,
        &ball_pos_penetrating,
        &ball,
        &cuboid_pos,
        &cuboid,
        0.0,
    )
    .unwrap();
    let ctct_in_margin = query::collide(
        &mut arena,
        &ball_pos_in_margin,
        &ball,
        &cuboid_pos,
        &cuboid,
        margin,
    )
    .unwrap();
    let ctct_too_far = query::collide(
        &mut arena,
        &ball_pos_too_far,
        &ball,
        &cuboid_pos,
        &cuboid,
        margin,
    )
    .unwrap();

    assert_eq!(ctct_penetrating.status, Status::Penetrating);
    assert!(ctct_penetrating.depth > 0.0);
    assert_eq!(ctct_in_margin.status, Status::Penetrating);
    assert!(ctct_in_margin.depth < margin);
    assert_eq!(ctct_too_far.status, Status::Separated);

    println!(
        "depth: {}, normal: {:?}, witnesses: {:?}",
        ctct_penetrating.depth, ctct_penetrating.normal, ctct_penetrating.witnesses
    );
}
