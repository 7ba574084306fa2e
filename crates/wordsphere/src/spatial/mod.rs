//! Spatial primitives for positioning labels on a sphere
//!
//! Uses a right-handed coordinate system centred on the sphere:
//! - X: Right (+) / Left (-)
//! - Y: Polar axis, top pole (+)
//! - Z: Away from the viewer (+)

mod point3d;
pub mod spherical;

pub use point3d::Point3D;
pub use spherical::{depth_factor, normalize_degrees, project, Projection};
