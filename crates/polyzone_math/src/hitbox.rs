//! Actor hitboxes
//!
//! Actors are anchored at their feet: the box extends `height` upwards from
//! the anchor and half of `width`/`depth` to either side horizontally.

use crate::frame::WorldPoint;
use crate::vector::Vec3d;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of an actor's axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HitboxSize {
    /// Extent along X
    pub width: f64,
    /// Extent along Y, measured up from the feet
    pub height: f64,
    /// Extent along Z
    pub depth: f64,
}

impl HitboxSize {
    /// Player-sized default box
    pub const PLAYER: Self = Self::new(0.6, 1.8, 0.6);

    #[inline]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// The eight corners of the box with its feet at `feet`.
    ///
    /// Ordered with x outermost, then y (bottom before top), then z.
    pub fn corners(&self, feet: WorldPoint) -> [WorldPoint; 8] {
        let half_width = self.width / 2.0;
        let half_depth = self.depth / 2.0;

        let mut corners = [WorldPoint::ORIGIN; 8];
        let mut i = 0;
        for x_sign in [-1.0, 1.0] {
            for y_sign in [0.0, 1.0] {
                for z_sign in [-1.0, 1.0] {
                    corners[i] = feet.offset(Vec3d::new(
                        x_sign * half_width,
                        y_sign * self.height,
                        z_sign * half_depth,
                    ));
                    i += 1;
                }
            }
        }
        corners
    }

    /// Feet position that centers the box on `center`
    #[inline]
    pub fn feet_for_center(&self, center: WorldPoint) -> WorldPoint {
        center.offset(Vec3d::new(0.0, -self.height / 2.0, 0.0))
    }
}

impl Default for HitboxSize {
    fn default() -> Self {
        Self::PLAYER
    }
}
