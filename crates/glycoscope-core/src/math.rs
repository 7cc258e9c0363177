//! Small numeric helpers: safe normalization and principal-axis
//! extraction for the best-fit ring plane.

use glam::Vec3;

/// Norm below which a vector is treated as degenerate.
pub const NORMALIZE_EPSILON: f32 = 1e-9;

/// Normalizes `v`, falling back to the global Z axis for near-zero
/// input.
///
/// Degenerate input (e.g. coincident atoms) is a warning, not a
/// failure; callers must tolerate a frame built entirely from fallback
/// defaults.
#[must_use]
pub fn normalize_or_default(v: Vec3) -> Vec3 {
    let norm = v.length();
    if norm < NORMALIZE_EPSILON {
        log::warn!("attempted to normalize a near-zero vector {v:?}, returning +Z");
        return Vec3::Z;
    }
    v / norm
}

/// Returns the unit direction of least variance for a point set: the
/// eigenvector of the covariance matrix with the smallest eigenvalue.
///
/// This is the normal of the best-fit plane through the points
/// (equivalent to the smallest-singular-value right singular vector of
/// the centered coordinate matrix). Returns `None` when fewer than 3
/// points are given or when the points are rank-degenerate (collinear
/// or coincident), in which case no unique plane normal exists.
#[must_use]
pub fn smallest_covariance_axis(points: &[Vec3]) -> Option<Vec3> {
    if points.len() < 3 {
        return None;
    }

    let n = points.len() as f64;
    let mut centroid = [0.0_f64; 3];
    for p in points {
        centroid[0] += f64::from(p.x);
        centroid[1] += f64::from(p.y);
        centroid[2] += f64::from(p.z);
    }
    for c in &mut centroid {
        *c /= n;
    }

    // Covariance accumulated in f64; atomic coordinates are noisy
    // enough without adding f32 summation error.
    let mut cov = [[0.0_f64; 3]; 3];
    for p in points {
        let d = [
            f64::from(p.x) - centroid[0],
            f64::from(p.y) - centroid[1],
            f64::from(p.z) - centroid[2],
        ];
        for i in 0..3 {
            for j in i..3 {
                cov[i][j] += d[i] * d[j];
            }
        }
    }
    for i in 0..3 {
        for j in 0..i {
            cov[i][j] = cov[j][i];
        }
        for j in 0..3 {
            cov[i][j] /= n;
        }
    }

    let (eigenvalues, eigenvectors) = jacobi_eigen_3x3(cov);

    // Sort eigenvalue indices descending.
    let mut order = [0_usize, 1, 2];
    order.sort_by(|&a, &b| {
        eigenvalues[b]
            .partial_cmp(&eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // A unique plane normal needs rank >= 2: the two largest
    // eigenvalues must be nonzero. Scale the test by the dominant
    // eigenvalue so absolute coordinate magnitude does not matter.
    let lambda_max = eigenvalues[order[0]];
    let lambda_mid = eigenvalues[order[1]];
    if lambda_max <= 0.0 || lambda_mid <= lambda_max * 1e-9 {
        return None;
    }

    let v = eigenvectors[order[2]];
    let axis = Vec3::new(v[0] as f32, v[1] as f32, v[2] as f32);
    Some(normalize_or_default(axis))
}

/// Jacobi eigendecomposition for a symmetric 3x3 matrix.
///
/// Returns `(eigenvalues, eigenvectors)` where `eigenvectors[i]` is the
/// unit eigenvector for `eigenvalues[i]`, unsorted.
fn jacobi_eigen_3x3(mut a: [[f64; 3]; 3]) -> ([f64; 3], [[f64; 3]; 3]) {
    let mut v = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    const MAX_ITER: usize = 50;
    const EPSILON: f64 = 1e-15;

    for _ in 0..MAX_ITER {
        // Largest off-diagonal element picks the rotation plane.
        let mut max_off = 0.0_f64;
        let mut p = 0;
        let mut q = 1;
        for i in 0..3 {
            for j in (i + 1)..3 {
                if a[i][j].abs() > max_off {
                    max_off = a[i][j].abs();
                    p = i;
                    q = j;
                }
            }
        }
        if max_off < EPSILON {
            break;
        }

        let diff = a[q][q] - a[p][p];
        let t = if diff.abs() < EPSILON {
            if a[p][q] >= 0.0 {
                1.0
            } else {
                -1.0
            }
        } else {
            let phi = diff / (2.0 * a[p][q]);
            if phi >= 0.0 {
                1.0 / (phi + (1.0 + phi * phi).sqrt())
            } else {
                1.0 / (phi - (1.0 + phi * phi).sqrt())
            }
        };

        let c = 1.0 / (1.0 + t * t).sqrt();
        let s = t * c;
        let tau = s / (1.0 + c);

        let h = t * a[p][q];
        a[p][p] -= h;
        a[q][q] += h;
        a[p][q] = 0.0;
        a[q][p] = 0.0;

        for j in 0..p {
            let g = a[j][p];
            let h = a[j][q];
            a[j][p] = g - s * (h + g * tau);
            a[j][q] = h + s * (g - h * tau);
        }
        for j in (p + 1)..q {
            let g = a[p][j];
            let h = a[j][q];
            a[p][j] = g - s * (h + g * tau);
            a[j][q] = h + s * (g - h * tau);
        }
        for j in (q + 1)..3 {
            let g = a[p][j];
            let h = a[q][j];
            a[p][j] = g - s * (h + g * tau);
            a[q][j] = h + s * (g - h * tau);
        }
        for i in 0..3 {
            for j in (i + 1)..3 {
                a[j][i] = a[i][j];
            }
        }

        for row in &mut v {
            let g = row[p];
            let h = row[q];
            row[p] = g - s * (h + g * tau);
            row[q] = h + s * (g - h * tau);
        }
    }

    let eigenvalues = [a[0][0], a[1][1], a[2][2]];
    // Columns of V are the eigenvectors; transpose to rows.
    let eigenvectors = [
        [v[0][0], v[1][0], v[2][0]],
        [v[0][1], v[1][1], v[2][1]],
        [v[0][2], v[1][2], v[2][2]],
    ];
    (eigenvalues, eigenvectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit_result() {
        let v = normalize_or_default(Vec3::new(3.0, 4.0, 0.0));
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_near_zero_returns_z() {
        let v = normalize_or_default(Vec3::splat(1e-12));
        assert_eq!(v, Vec3::Z);
    }

    #[test]
    fn test_plane_normal_of_xy_points() {
        // Points in the z = 2 plane; the least-variance axis is +/-Z.
        let points = vec![
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(1.0, 1.0, 2.0),
        ];
        let axis = smallest_covariance_axis(&points).unwrap();
        assert!(axis.z.abs() > 0.999);
        assert!(axis.x.abs() < 1e-3);
        assert!(axis.y.abs() < 1e-3);
    }

    #[test]
    fn test_plane_normal_of_tilted_plane() {
        // Points in the plane x + y + z = 0.
        let points = vec![
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, -1.0),
            Vec3::new(-1.0, 0.0, 1.0),
            Vec3::new(2.0, -1.0, -1.0),
        ];
        let axis = smallest_covariance_axis(&points).unwrap();
        let expected = Vec3::ONE.normalize();
        assert!(axis.dot(expected).abs() > 0.999);
    }

    #[test]
    fn test_collinear_points_have_no_normal() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::new(3.0, 3.0, 3.0),
        ];
        assert!(smallest_covariance_axis(&points).is_none());
    }

    #[test]
    fn test_coincident_points_have_no_normal() {
        let points = vec![Vec3::ONE; 5];
        assert!(smallest_covariance_axis(&points).is_none());
    }

    #[test]
    fn test_too_few_points_have_no_normal() {
        let points = vec![Vec3::ZERO, Vec3::X];
        assert!(smallest_covariance_axis(&points).is_none());
    }
}
