use gjkepa3d::math::Isometry;
use gjkepa3d::query::{self, Arena, ArenaError, Status};
use gjkepa3d::shape::Ball;

#[test]
fn out_of_order_end_block_is_rejected() {
    let mut arena = Arena::new();
    let outer = arena.begin_block();
    let inner = arena.begin_block();

    assert!(matches!(
        arena.end_block(outer),
        Err(ArenaError::Misuse { .. })
    ));
    assert_eq!(arena.open_blocks(), 2);

    arena.end_block(inner).unwrap();
    arena.end_block(outer).unwrap();
    assert_eq!(arena.open_blocks(), 0);
}

#[test]
fn queries_nest_inside_caller_blocks() {
    let mut arena = Arena::new();
    let ball = Ball::new(1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(1.0, 0.0, 0.0);

    let block = arena.begin_block();
    let res = query::collide(&mut arena, &pos1, &ball, &pos2, &ball, 0.0).unwrap();
    assert_eq!(res.status, Status::Penetrating);
    assert_eq!(arena.open_blocks(), 1);
    arena.end_block(block).unwrap();
}

#[test]
fn undersized_arena_is_reported() {
    let ball = Ball::new(1.0);
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.3, 0.4, 0.5);

    for capacity in [16, 1024] {
        let mut arena = Arena::with_capacity(capacity);
        let res = query::collide(&mut arena, &pos1, &ball, &pos2, &ball, 0.0);

        assert!(matches!(res, Err(ArenaError::Exhausted { .. })));
        assert_eq!(arena.open_blocks(), 0);
        assert_eq!(arena.used_bytes(), 0);
    }

    let mut arena = Arena::new();
    let res = query::collide(&mut arena, &pos1, &ball, &pos2, &ball, 0.0).unwrap();
    assert_eq!(res.status, Status::Penetrating);
}
