//! Local and world coordinate frames
//!
//! Trigger shapes are stored relative to the trigger's origin so that moving
//! a trigger never requires rebuilding its hull. Queries happen in world
//! space. Keeping the two frames as separate types means every translation
//! between them is spelled out at the call site.
//!
//! # Example
//!
//! ```
//! use polyzone_math::{LocalPoint, WorldPoint};
//!
//! let origin = WorldPoint::new(100.0, 64.0, -20.0);
//! let corner = LocalPoint::new(1.0, 0.0, 1.0);
//!
//! let world = corner.to_world(origin);
//! assert_eq!(world, WorldPoint::new(101.0, 64.0, -19.0));
//! assert_eq!(world.to_local(origin), corner);
//! ```

use crate::vector::Vec3d;
use core::ops::Sub;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point expressed relative to a trigger's origin
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct LocalPoint(pub Vec3d);

/// An absolute point in the world
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct WorldPoint(pub Vec3d);

impl LocalPoint {
    /// The trigger origin itself
    pub const ORIGIN: Self = Self(Vec3d::ZERO);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3d::new(x, y, z))
    }

    /// Underlying offset from the origin
    #[inline]
    pub fn vec(self) -> Vec3d {
        self.0
    }

    /// Translate into world space using the owning trigger's position
    #[inline]
    pub fn to_world(self, origin: WorldPoint) -> WorldPoint {
        WorldPoint(origin.0 + self.0)
    }

    /// Offset this point along a direction, staying in the local frame
    #[inline]
    pub fn offset(self, delta: Vec3d) -> Self {
        Self(self.0 + delta)
    }

    /// Distance from the trigger origin
    #[inline]
    pub fn distance_from_origin(self) -> f64 {
        self.0.length()
    }
}

impl WorldPoint {
    /// The world origin
    pub const ORIGIN: Self = Self(Vec3d::ZERO);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3d::new(x, y, z))
    }

    /// Underlying absolute coordinates
    #[inline]
    pub fn vec(self) -> Vec3d {
        self.0
    }

    /// Express this point relative to an origin
    #[inline]
    pub fn to_local(self, origin: WorldPoint) -> LocalPoint {
        LocalPoint(self.0 - origin.0)
    }

    /// Offset this point along a direction, staying in the world frame
    #[inline]
    pub fn offset(self, delta: Vec3d) -> Self {
        Self(self.0 + delta)
    }

    /// Squared distance to another world point
    #[inline]
    pub fn distance_squared(self, other: WorldPoint) -> f64 {
        self.0.distance_squared(other.0)
    }
}

/// Difference of two local points is a plain displacement
impl Sub for LocalPoint {
    type Output = Vec3d;
    #[inline]
    fn sub(self, rhs: Self) -> Vec3d {
        self.0 - rhs.0
    }
}

/// Difference of two world points is a plain displacement
impl Sub for WorldPoint {
    type Output = Vec3d;
    #[inline]
    fn sub(self, rhs: Self) -> Vec3d {
        self.0 - rhs.0
    }
}
