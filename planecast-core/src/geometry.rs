//! Geometry primitives for wireframe projection
use nalgebra::Point3;

/// An ordered ring of vertex indices into a mesh's vertex list.
///
/// Two indices form a single segment; three or more close into a polygon
/// when the last index wraps back to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Edge index pairs in ring order, wrapping the last vertex back to
    /// the first. A two-index face yields one edge rather than a doubled
    /// back-edge; faces with fewer than two indices yield nothing.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        let emitted = match n {
            0 | 1 => 0,
            2 => 1,
            _ => n,
        };
        (0..emitted).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }
}

/// A 3D wireframe object: indexed vertices plus faces over them.
///
/// Indices are 0-based. Faces are not validated against the vertex list;
/// an out-of-range index is skipped at draw time.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn add_face(&mut self, indices: Vec<usize>) {
        self.faces.push(Face::new(indices));
    }

    /// Axis-aligned cube with 8 vertices and 6 quad faces, used by the
    /// demo binaries and tests.
    pub fn cube(size: f64) -> Self {
        let half = size / 2.0;
        let vertices = vec![
            Point3::new(-half, -half, -half),
            Point3::new(half, -half, -half),
            Point3::new(half, half, -half),
            Point3::new(-half, half, -half),
            Point3::new(-half, -half, half),
            Point3::new(half, -half, half),
            Point3::new(half, half, half),
            Point3::new(-half, half, half),
        ];
        let faces = vec![
            Face::new(vec![0, 1, 2, 3]),
            Face::new(vec![4, 5, 6, 7]),
            Face::new(vec![0, 1, 5, 4]),
            Face::new(vec![1, 2, 6, 5]),
            Face::new(vec![2, 3, 7, 6]),
            Face::new(vec![3, 0, 4, 7]),
        ];
        Self { vertices, faces }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.faces.len(), 6);
        for face in &cube.faces {
            assert!(face.indices.iter().all(|&i| i < cube.vertices.len()));
        }
    }

    #[test]
    fn test_face_edges_wrap() {
        let face = Face::new(vec![0, 1, 2, 3]);
        let edges: Vec<_> = face.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }

    #[test]
    fn test_two_index_face_single_edge() {
        let face = Face::new(vec![4, 7]);
        let edges: Vec<_> = face.edges().collect();
        assert_eq!(edges, vec![(4, 7)]);
    }

    #[test]
    fn test_short_faces_have_no_edges() {
        assert_eq!(Face::new(vec![]).edges().count(), 0);
        assert_eq!(Face::new(vec![3]).edges().count(), 0);
    }
}
