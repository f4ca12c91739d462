//! Various unsorted geometrical and logical operators.

pub use self::orthogonal_vector::orthogonal_vector;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod orthogonal_vector;
mod point_cloud_support_point;
