//! Perspective-to-plane collineation and homogeneous projection
use nalgebra::{Matrix4, Point2, Point3, Vector4};

use crate::plane::Plane;
use crate::{ProjectError, Result, DEGENERACY_EPSILON};

/// A vertex after projection: plane-local coordinates plus the post-divide
/// depth component consumed by painter's ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertex {
    pub local: Point2<f64>,
    pub depth: f64,
}

/// Closed-form perspective projection onto `plane` as seen from
/// `viewpoint` C = (a, b, c).
///
/// With N = (nx, ny, nz) the unit plane normal, d0 = r0 . N,
/// d1 = C . N and d = d0 - d1:
///
/// ```text
/// | d + a*nx   a*ny       a*nz       -a*d0 |
/// | b*nx       d + b*ny   b*nz       -b*d0 |
/// | c*nx       c*ny       d + c*nz   -c*d0 |
/// | nx         ny         nz         -d1   |
/// ```
///
/// The w row ends in `-d1`, making this a true projective collineation:
/// a point already on the plane has w = d and divides back to itself
/// exactly. Construction itself never divides, so a viewpoint lying on
/// the plane (d = 0) still yields a matrix; the degeneracy surfaces later
/// as a failed homogeneous divide in [`project`].
pub fn projection_matrix(viewpoint: &Point3<f64>, plane: &Plane) -> Matrix4<f64> {
    let n = plane.normal();
    let (nx, ny, nz) = (n.x, n.y, n.z);
    let (a, b, c) = (viewpoint.x, viewpoint.y, viewpoint.z);
    let d0 = plane.reference().coords.dot(n);
    let d1 = viewpoint.coords.dot(n);
    let d = d0 - d1;

    #[rustfmt::skip]
    let m = Matrix4::new(
        d + a * nx, a * ny,     a * nz,     -a * d0,
        b * nx,     d + b * ny, b * nz,     -b * d0,
        c * nx,     c * ny,     d + c * nz, -c * d0,
        nx,         ny,         nz,         -d1,
    );
    m
}

/// Apply the collineation to a point and divide through by w.
///
/// Fails with [`ProjectError::DegenerateProjection`] when |w| falls below
/// [`DEGENERACY_EPSILON`], i.e. the point projects to infinity (it is
/// collinear with the viewpoint along a direction parallel to the plane,
/// or the viewpoint itself lies on the plane).
pub fn project(matrix: &Matrix4<f64>, point: &Point3<f64>) -> Result<Point3<f64>> {
    let h = matrix * Vector4::new(point.x, point.y, point.z, 1.0);
    if h.w.abs() < DEGENERACY_EPSILON {
        return Err(ProjectError::DegenerateProjection);
    }
    Ok(Point3::new(h.x / h.w, h.y / h.w, h.z / h.w))
}

/// Project a point onto the plane and express it in the plane's local
/// (u, v) frame.
pub fn project_to_plane(
    matrix: &Matrix4<f64>,
    plane: &Plane,
    point: &Point3<f64>,
) -> Result<ProjectedVertex> {
    let projected = project(matrix, point)?;
    Ok(ProjectedVertex {
        local: plane.to_local(&projected),
        depth: projected.z,
    })
}
