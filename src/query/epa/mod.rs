//! The Expanding Polytope Algorithm for penetration depth computation.
//!
pub use self::epa3::Epa;
pub use self::face::{Face, FaceId, VertexId};
pub use self::topology::{BaseShape, BaseTopology, FaceLink};

mod epa3;
mod face;
mod topology;
