use gjkepa3d::math::{Isometry, Real};
use gjkepa3d::query::{self, Status};
use gjkepa3d::shape::Cuboid;
use na::Vector3;

#[test]
fn concurrent_queries_with_thread_arenas() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let cuboid = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
                let pos1 = Isometry::identity();
                let pos2 = Isometry::translation(0.0, 1.5 + i as Real * 0.1, 0.0);

                query::with_thread_arena(|arena| {
                    query::collide(arena, &pos1, &cuboid, &pos2, &cuboid, 0.0)
                })
                .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let res = handle.join().unwrap();
        assert_eq!(res.status, Status::Penetrating);
        assert_relative_eq!(res.depth, 0.5 - i as Real * 0.1, epsilon = 2.0e-3);
    }
}

#[test]
fn reentrant_thread_arena() {
    let ball = gjkepa3d::shape::Ball::new(1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(1.0, 1.0, 0.0);

    let (outer, inner) = query::with_thread_arena(|arena| {
        let inner = query::with_thread_arena(|arena| {
            query::collide(arena, &pos1, &ball, &pos2, &ball, 0.0).unwrap()
        });
        let outer = query::collide(arena, &pos1, &ball, &pos2, &ball, 0.0).unwrap();
        (outer, inner)
    });

    assert_eq!(outer.status, Status::Penetrating);
    assert_eq!(outer.status, inner.status);
    assert_relative_eq!(outer.depth, inner.depth);
}
