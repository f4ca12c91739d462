//! Shapes supported by gjkepa3d.
//!
//! The collision queries only ever talk to shapes through the [`SupportMap`]
//! trait. The concrete shapes below are provided for convenience; any user
//! type implementing [`SupportMap`] can be used instead.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::convex_point_cloud::ConvexPointCloud;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;

mod ball;
mod capsule;
mod convex_point_cloud;
mod cuboid;
mod cylinder;
mod support_map;
mod triangle;
