use gjkepa3d::math::{Isometry, Point};
use gjkepa3d::query::{self, Arena, GJK_MAX_ITERATIONS};
use gjkepa3d::shape::Triangle;

#[test]
fn triangle_vertex_touches_triangle_edge() {
    // Flat triangles make both the GJK simplex and the EPA polytope degenerate.
    let mut arena = Arena::new();
    let tri1 = Triangle::new(
        Point::new(-13.174434, 1.0, 8.736801),
        Point::new(3.5251038, 1.0, 12.1),
        Point::new(3.2048466, 1.0, 12.218325),
    );
    let tri2 = Triangle::new(
        Point::new(-1.63, 0.0, 11.19),
        Point::new(-2.349647, 0.0, 11.037681),
        Point::new(-2.349647, 1.0, 11.037681),
    );
    let pos = Isometry::identity();

    let res = query::collide(&mut arena, &pos, &tri1, &pos, &tri2, 0.00999999977).unwrap();

    assert!(res.gjk_iterations <= GJK_MAX_ITERATIONS);
    assert!(res.depth.is_finite());
    assert!(res.normal.iter().all(|x| x.is_finite()));
    assert_eq!(arena.open_blocks(), 0);
    assert_eq!(arena.used_bytes(), 0);
}

#[test]
fn coplanar_triangles() {
    let mut arena = Arena::new();
    let tri = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    );
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.25, 0.25, 0.0);

    let res = query::collide(&mut arena, &pos1, &tri, &pos2, &tri, 0.0).unwrap();

    // The shapes overlap but have no volume: the only requirement is a sane answer.
    assert!(res.gjk_iterations <= GJK_MAX_ITERATIONS);
    assert_eq!(arena.open_blocks(), 0);
    if res.is_penetrating() {
        assert!(res.depth >= 0.0 && res.depth < 0.1);
    }
}
