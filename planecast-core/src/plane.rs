//! Projection plane and its local 2D frame
use nalgebra::{Point2, Point3, Vector3};

use crate::{ProjectError, Result, DEGENERACY_EPSILON};

/// A plane given by three non-collinear points, carrying an orthonormal
/// local frame derived once at construction.
///
/// `normal` is normalize((p2 - p1) x (p3 - p1)), `axis_u` points along
/// p1 -> p2, and `axis_v` = normal x axis_u completes the right-handed
/// frame. For the canonical z = 0 plane (p1 at the origin, p2 on +x, p3
/// on +y) this gives axis_u = +x and axis_v = +y, so in-plane points keep
/// their coordinates under [`Plane::to_local`]. The reference point feeds
/// the distance term of the projection matrix and defaults to `p1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    origin: Point3<f64>,
    reference: Point3<f64>,
    normal: Vector3<f64>,
    axis_u: Vector3<f64>,
    axis_v: Vector3<f64>,
}

impl Plane {
    /// Build a plane using `p1` as the reference point.
    pub fn from_points(p1: Point3<f64>, p2: Point3<f64>, p3: Point3<f64>) -> Result<Self> {
        Self::with_reference(p1, p2, p3, p1)
    }

    /// Build a plane with an explicit reference point.
    ///
    /// Fails with [`ProjectError::DegeneratePlane`] when the defining
    /// points are collinear or coincident.
    pub fn with_reference(
        p1: Point3<f64>,
        p2: Point3<f64>,
        p3: Point3<f64>,
        reference: Point3<f64>,
    ) -> Result<Self> {
        let normal = (p2 - p1)
            .cross(&(p3 - p1))
            .try_normalize(DEGENERACY_EPSILON)
            .ok_or(ProjectError::DegeneratePlane)?;
        let axis_u = (p2 - p1)
            .try_normalize(DEGENERACY_EPSILON)
            .ok_or(ProjectError::DegeneratePlane)?;
        // Unit because normal and axis_u are orthonormal by construction
        let axis_v = normal.cross(&axis_u);

        Ok(Self {
            origin: p1,
            reference,
            normal,
            axis_u,
            axis_v,
        })
    }

    /// Unit plane normal.
    pub fn normal(&self) -> &Vector3<f64> {
        &self.normal
    }

    /// Unit local u axis (along p1 -> p2).
    pub fn axis_u(&self) -> &Vector3<f64> {
        &self.axis_u
    }

    /// Unit local v axis (normal x axis_u).
    pub fn axis_v(&self) -> &Vector3<f64> {
        &self.axis_v
    }

    /// First defining point; the origin of the local frame.
    pub fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    /// Reference point used for the projection distance term.
    pub fn reference(&self) -> &Point3<f64> {
        &self.reference
    }

    /// Coordinates of a 3D point in the plane's local (u, v) frame.
    pub fn to_local(&self, point: &Point3<f64>) -> Point2<f64> {
        let v = point - self.origin;
        Point2::new(v.dot(&self.axis_u), v.dot(&self.axis_v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_frame_is_orthonormal() {
        let plane = Plane::from_points(
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, -1.0, 2.0),
            Point3::new(0.5, 3.0, -2.0),
        )
        .unwrap();

        assert_abs_diff_eq!(plane.axis_u().norm(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plane.axis_v().norm(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plane.normal().norm(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plane.axis_u().dot(plane.axis_v()), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plane.axis_u().dot(plane.normal()), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plane.axis_v().dot(plane.normal()), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_canonical_axes() {
        let plane = Plane::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap();

        assert_abs_diff_eq!(*plane.normal(), Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-9);
        assert_abs_diff_eq!(*plane.axis_u(), Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(*plane.axis_v(), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_to_local_on_canonical_plane() {
        let plane = Plane::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
        .unwrap();

        let local = plane.to_local(&Point3::new(0.25, -0.75, 0.0));
        assert_abs_diff_eq!(local.x, 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(local.y, -0.75, epsilon = 1e-9);
    }

    #[test]
    fn test_collinear_points_rejected() {
        let result = Plane::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        assert!(matches!(result, Err(ProjectError::DegeneratePlane)));

        let coincident = Plane::from_points(
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert!(matches!(coincident, Err(ProjectError::DegeneratePlane)));
    }
}
