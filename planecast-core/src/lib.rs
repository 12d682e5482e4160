//! Planecast Core Library - Shared geometry and projection logic
//!
//! This library provides the stateless core for projecting a 3D wireframe
//! object onto an arbitrarily oriented plane: scene parsing, the plane's
//! local frame, the perspective collineation, and window-to-viewport
//! mapping.

pub mod geometry;
pub mod plane;
pub mod projection;
pub mod viewport;
pub mod pipeline;
pub mod scene;

// Re-export commonly used types
pub use geometry::{Face, Mesh};
pub use pipeline::{depth_sorted, face_polygons, project_vertices, render_frame, FacePolygon, Frame};
pub use plane::Plane;
pub use projection::{project, project_to_plane, projection_matrix, ProjectedVertex};
pub use scene::{parse_scene, Scene};
pub use viewport::{from_pixel, to_pixel, FitPolicy, Viewport, Window};

/// Threshold below which a vector length or homogeneous w coordinate is
/// treated as degenerate.
pub const DEGENERACY_EPSILON: f64 = 1e-9;

/// Result type for planecast operations
pub type Result<T> = std::result::Result<T, ProjectError>;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("plane definition points are collinear")]
    DegeneratePlane,

    #[error("point projects to infinity")]
    DegenerateProjection,

    #[error("scene parse failed: {0}")]
    Parse(String),
}
