//! Trigger configuration

use polyzone_hull::{EXTRUSION_THICKNESS, MIN_SEPARATION};
use serde::{Deserialize, Serialize};

/// Settings shared by every trigger a registry builds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Anchors closer than this trigger a numerical-instability warning
    pub min_separation: f64,

    /// Total thickness given to flat (coplanar) anchor sets
    pub extrusion_thickness: f64,

    /// Check radius as a multiple of the farthest anchor distance
    pub check_radius_scale: f64,

    /// Log hull computation times at info level
    pub debug: bool,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            min_separation: MIN_SEPARATION,
            extrusion_thickness: EXTRUSION_THICKNESS,
            check_radius_scale: 1.5,
            debug: false,
        }
    }
}

impl TriggerConfig {
    /// Default settings with debug timing enabled
    pub fn debug() -> Self {
        Self {
            debug: true,
            ..Default::default()
        }
    }

    /// Set the near-duplicate anchor threshold
    pub fn with_min_separation(mut self, min_separation: f64) -> Self {
        self.min_separation = min_separation;
        self
    }

    /// Set the slab thickness for flat shapes
    pub fn with_extrusion_thickness(mut self, thickness: f64) -> Self {
        self.extrusion_thickness = thickness;
        self
    }

    /// Set the check radius multiplier
    pub fn with_check_radius_scale(mut self, scale: f64) -> Self {
        self.check_radius_scale = scale;
        self
    }

    /// Toggle debug timing logs
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
