//! Convex hull construction
//!
//! The hull itself comes from parry's quickhull as a triangle mesh. Triangles
//! sharing a supporting plane are grouped back into polygonal faces, each
//! face keeps only its strict corners (points on an edge or inside the face
//! are dropped), and every polygon is fan-triangulated from its first corner.
//! Neighbouring faces therefore always agree on their shared edges and the
//! triangle count stays minimal.

use crate::degeneracy::are_coplanar;
use crate::error::{HullError, Result};
use parry3d_f64::math::Point;
use parry3d_f64::transformation::try_convex_hull;
use polyzone_math::consts::EPSILON;
use polyzone_math::{LocalPoint, Vec3d, WorldPoint};
use std::collections::HashMap;

/// Two triangle normals closer than this belong to the same face
const PLANE_COS_EPSILON: f64 = 1e-10;

/// Relative turn below which a face corner counts as straight
const CORNER_EPSILON: f64 = 1e-10;

/// A hull triangle in the owning trigger's local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: LocalPoint,
    pub b: LocalPoint,
    pub c: LocalPoint,
    /// Unit outward normal, `normalize((b - a) x (c - a))`
    pub normal: Vec3d,
}

impl Triangle {
    /// Create a triangle, or `None` if its corners are collinear
    pub fn new(a: LocalPoint, b: LocalPoint, c: LocalPoint) -> Option<Self> {
        let ab = b - a;
        let ac = c - a;
        let cross = ab.cross(ac);
        if cross.length() <= EPSILON * ab.length() * ac.length() {
            return None;
        }
        Some(Self {
            a,
            b,
            c,
            normal: cross.normalize(),
        })
    }

    /// Corners in winding order
    #[inline]
    pub fn corners(&self) -> [LocalPoint; 3] {
        [self.a, self.b, self.c]
    }

    /// Corners translated into world space
    #[inline]
    pub fn to_world(&self, origin: WorldPoint) -> [WorldPoint; 3] {
        self.corners().map(|corner| corner.to_world(origin))
    }

    /// Signed distance of a point from this triangle's plane (positive = outside)
    #[inline]
    pub fn signed_distance(&self, point: LocalPoint) -> f64 {
        self.normal.dot(point - self.a)
    }
}

/// Convex hull with polygonal faces
#[derive(Debug, Clone)]
pub struct ConvexHull {
    vertices: Vec<LocalPoint>,
    /// Counter-clockwise (seen from outside) corner loops
    faces: Vec<Vec<usize>>,
}

/// Triangles of the parry mesh that share one supporting plane
struct PlaneGroup {
    normal: Vec3d,
    offset: f64,
    members: Vec<usize>,
}

impl ConvexHull {
    /// Compute the convex hull of `points`.
    ///
    /// Requires at least four finite points that are not all coplanar.
    /// Interior, duplicate, edge and in-face points are not hull corners.
    pub fn build(points: &[LocalPoint]) -> Result<Self> {
        if points.len() < 4 {
            return Err(HullError::InsufficientPoints {
                found: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.vec().is_finite()) {
            return Err(HullError::NonFinite { index });
        }
        if are_coplanar(points) {
            return Err(HullError::Degenerate("anchors do not span a volume"));
        }

        let cloud: Vec<Point<f64>> = points
            .iter()
            .map(|p| {
                let v = p.vec();
                Point::new(v.x, v.y, v.z)
            })
            .collect();
        let (mesh_points, indices) = try_convex_hull(&cloud)
            .map_err(|_| HullError::Degenerate("quickhull rejected the anchors"))?;
        if indices.len() < 4 {
            return Err(HullError::Degenerate("hull has no volume"));
        }

        let corners: Vec<Vec3d> = mesh_points.iter().map(|p| Vec3d::new(p.x, p.y, p.z)).collect();
        let inside = corners.iter().copied().sum::<Vec3d>() / corners.len() as f64;
        let extent = corners
            .iter()
            .map(|&c| (c - inside).length())
            .fold(0.0, f64::max);

        let mut groups: Vec<PlaneGroup> = Vec::new();
        for &triangle in &indices {
            let [a, b, c] = triangle.map(|i| corners[i as usize]);
            let cross = (b - a).cross(c - a);
            if cross.length() <= CORNER_EPSILON * (b - a).length() * (c - a).length() {
                continue;
            }
            let mut normal = cross.normalize();
            if normal.dot(a - inside) < 0.0 {
                normal = -normal;
            }
            let offset = normal.dot(a);

            let group = groups.iter_mut().find(|g| {
                g.normal.dot(normal) >= 1.0 - PLANE_COS_EPSILON
                    && (g.offset - offset).abs() <= EPSILON * extent.max(1.0)
            });
            let members = triangle.iter().map(|&i| i as usize);
            match group {
                Some(group) => group.members.extend(members),
                None => groups.push(PlaneGroup {
                    normal,
                    offset,
                    members: members.collect(),
                }),
            }
        }

        let mut remap: HashMap<usize, usize> = HashMap::new();
        let mut vertices = Vec::new();
        let mut faces = Vec::with_capacity(groups.len());
        for mut group in groups {
            group.members.sort_unstable();
            group.members.dedup();

            let polygon = face_corners(&corners, &group.members, group.normal);
            if polygon.len() < 3 {
                continue;
            }
            let face: Vec<usize> = polygon
                .into_iter()
                .map(|index| {
                    *remap.entry(index).or_insert_with(|| {
                        vertices.push(LocalPoint(corners[index]));
                        vertices.len() - 1
                    })
                })
                .collect();
            faces.push(face);
        }

        if faces.len() < 4 {
            return Err(HullError::Degenerate("hull has fewer than four faces"));
        }
        Ok(Self { vertices, faces })
    }

    /// Points on the hull boundary
    pub fn vertices(&self) -> &[LocalPoint] {
        &self.vertices
    }

    /// Polygonal faces as index loops into [`ConvexHull::vertices`]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Number of polygonal faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Split every face into a triangle fan anchored at its first vertex
    pub fn triangulate(&self) -> Vec<Triangle> {
        let mut triangles = Vec::new();
        let mut dropped = 0usize;

        for face in &self.faces {
            let a = self.vertices[face[0]];
            for window in face[1..].windows(2) {
                let b = self.vertices[window[0]];
                let c = self.vertices[window[1]];
                match Triangle::new(a, b, c) {
                    Some(triangle) => triangles.push(triangle),
                    None => dropped += 1,
                }
            }
        }

        if dropped > 0 {
            log::debug!("Skipped {} zero-area fan triangles", dropped);
        }
        triangles
    }
}

/// Build the triangulated convex hull of `points`
pub fn build_hull(points: &[LocalPoint]) -> Result<Vec<Triangle>> {
    Ok(ConvexHull::build(points)?.triangulate())
}

/// Strict corners of a planar point group, counter-clockwise around
/// `normal`.
///
/// Monotone chain in the face plane: points on an edge or inside the face
/// never make a strict left turn and are dropped.
fn face_corners(points: &[Vec3d], members: &[usize], normal: Vec3d) -> Vec<usize> {
    let helper = if normal.x.abs() < 0.9 { Vec3d::X } else { Vec3d::Y };
    let u = normal.cross(helper).normalize();
    let v = normal.cross(u);

    let mut planar: Vec<(f64, f64, usize)> = members
        .iter()
        .map(|&i| (points[i].dot(u), points[i].dot(v), i))
        .collect();
    planar.sort_by(|p, q| p.0.total_cmp(&q.0).then(p.1.total_cmp(&q.1)));
    planar.dedup_by(|p, q| p.0 == q.0 && p.1 == q.1);

    let turns_left = |o: (f64, f64, usize), a: (f64, f64, usize), b: (f64, f64, usize)| {
        let (ax, ay) = (a.0 - o.0, a.1 - o.1);
        let (bx, by) = (b.0 - o.0, b.1 - o.1);
        ax * by - ay * bx > CORNER_EPSILON * ax.hypot(ay) * bx.hypot(by)
    };
    let half_chain = |points: &mut dyn Iterator<Item = (f64, f64, usize)>| {
        let mut chain: Vec<(f64, f64, usize)> = Vec::new();
        for point in points {
            while chain.len() >= 2 && !turns_left(chain[chain.len() - 2], chain[chain.len() - 1], point) {
                chain.pop();
            }
            chain.push(point);
        }
        chain.pop();
        chain
    };

    let mut corners = half_chain(&mut planar.iter().copied());
    corners.extend(half_chain(&mut planar.iter().rev().copied()));
    corners.into_iter().map(|(_, _, i)| i).collect()
}
