//! Anchor sanity checks
//!
//! Two independent checks run before a hull is built: a pairwise separation
//! test (near-duplicate anchors make hull predicates unstable) and a
//! coplanarity test that decides whether a flat shape must be extruded.

use polyzone_math::{LocalPoint, Vec3d};

/// Minimum distance between two anchors before they count as duplicates
pub const MIN_SEPARATION: f64 = 1e-6;

/// Pivot threshold for the rank computation
const RANK_EPSILON: f64 = 1e-12;

/// Below this squared spread the cloud is not rescaled
const SCALE_EPSILON: f64 = 1e-14;

/// Check that no two points are closer than `epsilon`.
///
/// Returns `true` if all points are sufficiently spaced. Points exactly
/// `epsilon` apart pass.
pub fn validate_separation(points: &[LocalPoint], epsilon: f64) -> bool {
    for (i, p1) in points.iter().enumerate() {
        for p2 in &points[i + 1..] {
            if (*p1 - *p2).length() < epsilon {
                return false;
            }
        }
    }
    true
}

/// Check whether all points lie on a single plane.
///
/// Three or fewer points are always coplanar. Larger sets are centered on
/// their centroid, normalized to unit spread and tested for the rank of
/// their homogeneous coordinate matrix `[x y z 1]`; rank 3 or less means
/// the points span no volume.
pub fn are_coplanar(points: &[LocalPoint]) -> bool {
    if points.len() <= 3 {
        return true;
    }

    let centroid = points.iter().map(|p| p.vec()).sum::<Vec3d>() / points.len() as f64;

    let max_dist_squared = points
        .iter()
        .map(|p| (p.vec() - centroid).length_squared())
        .fold(0.0, f64::max);

    let scale = if max_dist_squared > SCALE_EPSILON {
        1.0 / max_dist_squared.sqrt()
    } else {
        1.0
    };

    let mut matrix: Vec<[f64; 4]> = points
        .iter()
        .map(|p| {
            let v = (p.vec() - centroid) * scale;
            [v.x, v.y, v.z, 1.0]
        })
        .collect();

    matrix_rank(&mut matrix, RANK_EPSILON) <= 3
}

/// Rank of an N x 4 matrix by Gauss-Jordan elimination with partial
/// pivoting. The matrix is reduced in place.
pub fn matrix_rank(matrix: &mut [[f64; 4]], epsilon: f64) -> usize {
    let rows = matrix.len();
    let mut row_used = vec![false; rows];
    let mut rank = 0;

    for col in 0..4 {
        let mut pivot_row = None;
        let mut pivot_value = epsilon;
        for (r, row) in matrix.iter().enumerate() {
            if !row_used[r] && row[col].abs() > pivot_value {
                pivot_row = Some(r);
                pivot_value = row[col].abs();
            }
        }

        let Some(pivot) = pivot_row else {
            continue;
        };
        row_used[pivot] = true;
        rank += 1;

        let pivot_scale = 1.0 / matrix[pivot][col];
        for value in &mut matrix[pivot][col..] {
            *value *= pivot_scale;
        }
        let pivot_values = matrix[pivot];

        for (r, row) in matrix.iter_mut().enumerate() {
            if r == pivot || row[col].abs() <= epsilon {
                continue;
            }
            let factor = row[col];
            for j in col..4 {
                row[j] -= factor * pivot_values[j];
                if row[j].abs() < epsilon {
                    row[j] = 0.0;
                }
            }
        }
    }

    rank
}
