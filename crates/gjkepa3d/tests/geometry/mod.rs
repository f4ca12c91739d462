mod adversarial_support;
mod arena_discipline;
mod ball_ball_contact;
mod cuboid_cuboid_epa;
mod symmetry;
mod thread_arena;
mod triangle_triangle_contact;
