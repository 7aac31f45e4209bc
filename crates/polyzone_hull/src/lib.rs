//! Polyzone Hull - Convex Shapes from Anchor Points
//!
//! Turns a caller-supplied anchor cloud into a triangulated convex polytope.
//!
//! # Pipeline
//!
//! ```text
//!  anchors ──► validate_separation ──► (warn only)
//!     │
//!     ├──► are_coplanar ──► extrude_coplanar (flat shapes only)
//!     │                            │
//!     └────────────────────────────┴──► build_hull ──► Vec<Triangle>
//! ```
//!
//! # Example
//!
//! ```
//! use polyzone_hull::prelude::*;
//! use polyzone_math::LocalPoint;
//!
//! let anchors = vec![
//!     LocalPoint::new(0.0, 0.0, 0.0),
//!     LocalPoint::new(1.0, 0.0, 0.0),
//!     LocalPoint::new(0.0, 1.0, 0.0),
//!     LocalPoint::new(0.0, 0.0, 1.0),
//! ];
//! assert!(!are_coplanar(&anchors));
//!
//! let triangles = build_hull(&anchors).unwrap();
//! assert_eq!(triangles.len(), 4);
//! ```

pub mod degeneracy;
pub mod error;
pub mod extrude;
pub mod hull;

pub mod prelude {
    pub use crate::degeneracy::{are_coplanar, validate_separation, MIN_SEPARATION};
    pub use crate::error::{HullError, Result};
    pub use crate::extrude::{extrude_coplanar, plane_normal, EXTRUSION_THICKNESS};
    pub use crate::hull::{build_hull, ConvexHull, Triangle};
}

pub use prelude::*;
