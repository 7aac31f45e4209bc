//! Separating-axis containment test
//!
//! Two convex point sets are disjoint iff some axis separates their
//! projections. The candidate axes used here are the trigger's triangle
//! normals plus the three world axes.
//!
//! This is deliberately not full polytope-vs-polytope SAT:
//! - triangle normals are used as-is, so a quad face contributes its normal
//!   twice;
//! - the query shape is a raw point set, and apart from the world axes
//!   (which are exactly the face normals of an axis-aligned hitbox) its own
//!   face normals and the edge-edge cross products are never tried.
//!
//! For small axis-aligned query boxes this errs towards reporting overlap
//! near hull edges, which is acceptable for trigger volumes.

use polyzone_math::{Vec3d, WorldPoint};

/// World X, Y and Z axes
pub const WORLD_AXES: [Vec3d; 3] = [Vec3d::X, Vec3d::Y, Vec3d::Z];

/// Closed projection interval `[min, max]` on an axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Project points onto an axis. An empty set yields an empty
    /// (inverted) interval that overlaps nothing.
    pub fn project<I>(axis: Vec3d, points: I) -> Self
    where
        I: IntoIterator<Item = WorldPoint>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            let projection = point.vec().dot(axis);
            min = min.min(projection);
            max = max.max(projection);
        }
        Self { min, max }
    }

    /// Closed-interval overlap: touching intervals overlap
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// Returns `true` iff no axis separates `hull` from `query`.
///
/// Stops at the first separating axis.
pub fn sat_overlaps<A>(axes: A, hull: &[WorldPoint], query: &[WorldPoint]) -> bool
where
    A: IntoIterator<Item = Vec3d>,
{
    axes.into_iter().all(|axis| {
        let hull_projection = Interval::project(axis, hull.iter().copied());
        let query_projection = Interval::project(axis, query.iter().copied());
        hull_projection.overlaps(&query_projection)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Vec<WorldPoint> {
        let mut points = Vec::new();
        for x in [0.0, 1.0] {
            for y in [0.0, 1.0] {
                for z in [0.0, 1.0] {
                    points.push(WorldPoint::new(x, y, z));
                }
            }
        }
        points
    }

    #[test]
    fn test_interval_overlap() {
        let a = Interval { min: 0.0, max: 1.0 };
        let touching = Interval { min: 1.0, max: 2.0 };
        let apart = Interval { min: 1.5, max: 2.0 };

        assert!(a.overlaps(&touching));
        assert!(touching.overlaps(&a));
        assert!(!a.overlaps(&apart));
        assert!(!apart.overlaps(&a));
    }

    #[test]
    fn test_empty_projection_overlaps_nothing() {
        let empty = Interval::project(Vec3d::X, std::iter::empty());
        let a = Interval { min: -1.0, max: 1.0 };
        assert!(!empty.overlaps(&a));
    }

    #[test]
    fn test_point_inside_cube() {
        let cube = unit_cube();
        let inside = [WorldPoint::new(0.5, 0.5, 0.5)];
        assert!(sat_overlaps(WORLD_AXES, &cube, &inside));
    }

    #[test]
    fn test_point_outside_cube() {
        let cube = unit_cube();
        let outside = [WorldPoint::new(0.5, 1.5, 0.5)];
        assert!(!sat_overlaps(WORLD_AXES, &cube, &outside));
    }

    #[test]
    fn test_diagonal_separation_needs_hull_axis() {
        // Triangle prism under the plane x + y = 1, point just above it
        let prism = [
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(1.0, 0.0, 0.0),
            WorldPoint::new(0.0, 1.0, 0.0),
            WorldPoint::new(0.0, 0.0, 1.0),
            WorldPoint::new(1.0, 0.0, 1.0),
            WorldPoint::new(0.0, 1.0, 1.0),
        ];
        let point = [WorldPoint::new(0.8, 0.8, 0.5)];

        // World axes alone cannot separate them
        assert!(sat_overlaps(WORLD_AXES, &prism, &point));

        let diagonal = Vec3d::new(1.0, 1.0, 0.0).normalize();
        let axes = WORLD_AXES.into_iter().chain(std::iter::once(diagonal));
        assert!(!sat_overlaps(axes, &prism, &point));
    }
}
