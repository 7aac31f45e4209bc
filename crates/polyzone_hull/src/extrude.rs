//! Coplanar extrusion
//!
//! A flat anchor set has no volume, so a hull of it would be infinitely
//! thin. Extrusion turns it into a thin slab by duplicating every anchor on
//! both sides of the plane.

use crate::error::{HullError, Result};
use polyzone_math::consts::EPSILON;
use polyzone_math::{LocalPoint, Vec3d};

/// Total slab thickness in world units
pub const EXTRUSION_THICKNESS: f64 = 0.1;

/// Unit normal of the plane through the first non-collinear anchor triple.
///
/// Triples are tried in order starting with the first three anchors, always
/// keeping the first anchor as the apex. Returns `None` if every anchor lies
/// on one line.
pub fn plane_normal(points: &[LocalPoint]) -> Option<Vec3d> {
    let (&origin, rest) = points.split_first()?;
    for (i, &p1) in rest.iter().enumerate() {
        let edge1 = p1 - origin;
        for &p2 in &rest[i + 1..] {
            let edge2 = p2 - origin;
            let cross = edge1.cross(edge2);
            if cross.length() > EPSILON * edge1.length() * edge2.length() {
                return Some(cross.normalize());
            }
        }
    }
    None
}

/// Replace a flat anchor set with a slab `thickness` thick.
///
/// Every anchor `p` becomes `p + n * thickness / 2` followed by
/// `p - n * thickness / 2`, so the result has twice as many points.
pub fn extrude_coplanar(points: &[LocalPoint], thickness: f64) -> Result<Vec<LocalPoint>> {
    let normal = plane_normal(points).ok_or(HullError::Collinear)?;
    let offset = normal * (thickness / 2.0);

    let mut extruded = Vec::with_capacity(points.len() * 2);
    for &point in points {
        extruded.push(point.offset(offset));
        extruded.push(point.offset(-offset));
    }
    Ok(extruded)
}
