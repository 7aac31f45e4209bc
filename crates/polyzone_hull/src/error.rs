//! Error types for hull construction

use thiserror::Error;

/// Hull construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// Fewer than four anchors were supplied
    #[error("Insufficient anchors to compute a hull: need at least 4, got {found}")]
    InsufficientPoints { found: usize },

    /// An anchor contains NaN or infinity
    #[error("Anchor {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// The points are flat or collinear within the builder's tolerance
    #[error("Anchors do not enclose a volume: {0}")]
    Degenerate(&'static str),

    /// No three anchors span a plane, so a flat shape cannot be extruded
    #[error("All anchors are collinear, cannot derive an extrusion normal")]
    Collinear,
}

/// Result type for hull operations
pub type Result<T> = std::result::Result<T, HullError>;
