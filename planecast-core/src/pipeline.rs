//! One-pass projection pipeline and painter's-algorithm face ordering
use std::cmp::Ordering;

use nalgebra::{Point2, Point3};

use crate::geometry::{Face, Mesh};
use crate::plane::Plane;
use crate::projection::{self, ProjectedVertex};
use crate::viewport::{to_pixel, FitPolicy, Viewport, Window};

/// Output of a single frame pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Pixel-space line segments, one per drawable face edge, in face order.
    pub segments: Vec<[Point2<f64>; 2]>,
    /// The fitted window, retained for diagnostic display.
    pub window: Window,
    /// Pixel position of each mesh vertex; `None` where the projection
    /// was degenerate.
    pub vertex_pixels: Vec<Option<Point2<f64>>>,
}

/// Project every mesh vertex; degenerate projections come back as `None`.
pub fn project_vertices(
    mesh: &Mesh,
    plane: &Plane,
    viewpoint: &Point3<f64>,
) -> Vec<Option<ProjectedVertex>> {
    let matrix = projection::projection_matrix(viewpoint, plane);
    mesh.vertices
        .iter()
        .map(|v| projection::project_to_plane(&matrix, plane, v).ok())
        .collect()
}

/// Run one full pass: project, fit the window, map every face edge into
/// pixel space.
///
/// Edges referencing an out-of-range vertex index or a degenerate
/// projection are skipped, never reported; the worst visible outcome is a
/// missing edge. The pass is a pure function of its arguments, so
/// interactive callers simply re-run it whenever the viewpoint changes.
pub fn render_frame(
    mesh: &Mesh,
    plane: &Plane,
    viewpoint: &Point3<f64>,
    viewport: &Viewport,
    fit: FitPolicy,
) -> Frame {
    let projected = project_vertices(mesh, plane, viewpoint);
    let bounds = Window::from_points(projected.iter().flatten().map(|pv| &pv.local));
    let window = fit.apply(&bounds).fit_aspect(viewport);

    let vertex_pixels: Vec<Option<Point2<f64>>> = projected
        .iter()
        .map(|pv| pv.as_ref().map(|pv| to_pixel(&pv.local, &window, viewport)))
        .collect();

    let mut segments = Vec::new();
    for face in &mesh.faces {
        for (ia, ib) in face.edges() {
            let (Some(Some(a)), Some(Some(b))) = (vertex_pixels.get(ia), vertex_pixels.get(ib))
            else {
                continue;
            };
            segments.push([*a, *b]);
        }
    }

    Frame {
        segments,
        window,
        vertex_pixels,
    }
}

/// Face indices ordered farthest-first by mean projected depth.
///
/// Painter's-algorithm approximation: interpenetrating or self-occluding
/// faces are not ordered correctly; acceptable for convex,
/// non-intersecting geometry only.
pub fn depth_sorted(mesh: &Mesh, projected: &[Option<ProjectedVertex>]) -> Vec<usize> {
    let mut order: Vec<(usize, f64)> = mesh
        .faces
        .iter()
        .enumerate()
        .map(|(i, face)| (i, mean_depth(face, projected)))
        .collect();
    order.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    order.into_iter().map(|(i, _)| i).collect()
}

fn mean_depth(face: &Face, projected: &[Option<ProjectedVertex>]) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for &index in &face.indices {
        if let Some(Some(pv)) = projected.get(index) {
            sum += pv.depth;
            n += 1;
        }
    }
    if n == 0 {
        f64::NEG_INFINITY
    } else {
        sum / n as f64
    }
}

/// A face ready for back-to-front painting: its pixel-space ring plus the
/// mean depth it was ordered by.
#[derive(Debug, Clone)]
pub struct FacePolygon {
    pub face: usize,
    pub depth: f64,
    pub points: Vec<Point2<f64>>,
}

/// Depth-sorted pixel-space polygons for the export path.
///
/// Vertices that are out of range or projected degenerately are dropped
/// from a ring, mirroring the edge-skip rule; rings left with fewer than
/// two points are omitted entirely.
pub fn face_polygons(
    mesh: &Mesh,
    projected: &[Option<ProjectedVertex>],
    window: &Window,
    viewport: &Viewport,
) -> Vec<FacePolygon> {
    depth_sorted(mesh, projected)
        .into_iter()
        .filter_map(|face_index| {
            let face = &mesh.faces[face_index];
            let points: Vec<Point2<f64>> = face
                .indices
                .iter()
                .filter_map(|&i| projected.get(i).and_then(|pv| pv.as_ref()))
                .map(|pv| to_pixel(&pv.local, window, viewport))
                .collect();
            if points.len() < 2 {
                return None;
            }
            Some(FacePolygon {
                face: face_index,
                depth: mean_depth(face, projected),
                points,
            })
        })
        .collect()
}
