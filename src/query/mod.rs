//! Non-persistent narrow-phase collision queries between convex shapes.
//!
//! The main entry point is [`collide()`]: it runs GJK to decide whether the
//! Minkowski difference of two support-mapped shapes contains the origin and,
//! if it does, EPA to extract the penetration depth, normal and witness points.
//!
//! Both solvers allocate their short-lived data (support points, polytope faces,
//! visited search directions) from an explicit [`Arena`] owned by the caller, so
//! that concurrent queries on different threads never share state. Use
//! [`with_thread_arena`] to get a per-thread arena without managing one yourself.
//!
//! The lower-level solvers are also exposed through the [`gjk`] and [`epa`]
//! modules for callers needing finer control.

pub use self::arena::{
    with_thread_arena, Arena, ArenaError, ArenaId, ArenaItem, ArenaSlice, BlockMark,
    DEFAULT_ARENA_CAPACITY,
};
pub use self::collide::{collide, collide_with_settings, intersection_test};
pub use self::contact_results::{ContactResults, Status};
pub use self::settings::{
    GjkEpaSettings, EPA_ACCURACY, EPA_FACE_VISIBILITY_EPS, EPA_MAX_ITERATIONS,
    GJK_IN_SIMPLEX_EPS, GJK_MAX_ITERATIONS,
};

mod arena;
mod collide;
mod contact_results;
pub mod epa;
pub mod gjk;
mod settings;
