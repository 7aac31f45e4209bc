//! # polyzone_math - Trigger Geometry Primitives
//!
//! Double-precision vectors, explicit local/world frames and actor hitboxes
//! shared by the hull builder and the trigger runtime.

pub mod frame;
pub mod hitbox;
pub mod vector;

pub use frame::{LocalPoint, WorldPoint};
pub use hitbox::HitboxSize;
pub use vector::Vec3d;

/// Common math constants
pub mod consts {
    /// Tolerance for treating a direction as zero-length
    pub const EPSILON: f64 = 1e-12;
}

pub mod prelude {
    pub use crate::frame::{LocalPoint, WorldPoint};
    pub use crate::hitbox::HitboxSize;
    pub use crate::vector::Vec3d;
}
