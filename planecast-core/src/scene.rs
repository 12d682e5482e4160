//! Scene text-format parser
//!
//! A scene document is whitespace-separated numbers: the viewpoint (3
//! reals), three plane points (3 reals each), an optional reference point
//! (3 reals), a vertex count followed by that many coordinate triples,
//! then a face count followed by face records of (index count, that many
//! 0-based vertex indices).
use nalgebra::Point3;
use nom::{
    branch::alt,
    character::complete::{digit1, multispace0},
    combinator::{eof, map_res},
    multi::count,
    number::complete::double,
    sequence::preceded,
    IResult,
};

use crate::geometry::{Face, Mesh};
use crate::plane::Plane;
use crate::{ProjectError, Result};

/// A fully parsed input: viewpoint, validated plane, and mesh.
#[derive(Debug, Clone)]
pub struct Scene {
    pub viewpoint: Point3<f64>,
    pub plane: Plane,
    pub mesh: Mesh,
}

/// Parse a whole scene document.
///
/// The optional reference point is resolved by trying the with-reference
/// grammar first and falling back to the plain one; each alternative must
/// consume the entire document, so a missing or extra triple cannot
/// silently shift the numbers (the rare document valid under both
/// readings resolves as with-reference). Collinear plane points surface
/// as [`ProjectError::DegeneratePlane`], grammar violations as
/// [`ProjectError::Parse`].
pub fn parse_scene(input: &str) -> Result<Scene> {
    let (_, raw) = scene_document(input)
        .map_err(|e| ProjectError::Parse(format!("{:?}", e)))?;

    let plane = match raw.reference {
        Some(r0) => Plane::with_reference(raw.p1, raw.p2, raw.p3, r0)?,
        None => Plane::from_points(raw.p1, raw.p2, raw.p3)?,
    };

    Ok(Scene {
        viewpoint: raw.viewpoint,
        plane,
        mesh: raw.mesh,
    })
}

struct RawScene {
    viewpoint: Point3<f64>,
    p1: Point3<f64>,
    p2: Point3<f64>,
    p3: Point3<f64>,
    reference: Option<Point3<f64>>,
    mesh: Mesh,
}

fn scene_document(input: &str) -> IResult<&str, RawScene> {
    alt((scene_with_reference, scene_plain))(input)
}

fn scene_with_reference(input: &str) -> IResult<&str, RawScene> {
    let (input, viewpoint) = point3(input)?;
    let (input, p1) = point3(input)?;
    let (input, p2) = point3(input)?;
    let (input, p3) = point3(input)?;
    let (input, reference) = point3(input)?;
    let (input, mesh) = mesh_body(input)?;
    let (input, _) = document_end(input)?;
    Ok((
        input,
        RawScene {
            viewpoint,
            p1,
            p2,
            p3,
            reference: Some(reference),
            mesh,
        },
    ))
}

fn scene_plain(input: &str) -> IResult<&str, RawScene> {
    let (input, viewpoint) = point3(input)?;
    let (input, p1) = point3(input)?;
    let (input, p2) = point3(input)?;
    let (input, p3) = point3(input)?;
    let (input, mesh) = mesh_body(input)?;
    let (input, _) = document_end(input)?;
    Ok((
        input,
        RawScene {
            viewpoint,
            p1,
            p2,
            p3,
            reference: None,
            mesh,
        },
    ))
}

fn mesh_body(input: &str) -> IResult<&str, Mesh> {
    let (input, vertex_count) = index(input)?;
    let (input, vertices) = count(point3, vertex_count)(input)?;
    let (input, face_count) = index(input)?;
    let (input, faces) = count(face, face_count)(input)?;
    Ok((input, Mesh { vertices, faces }))
}

fn face(input: &str) -> IResult<&str, Face> {
    let (input, n) = index(input)?;
    let (input, indices) = count(index, n)(input)?;
    Ok((input, Face::new(indices)))
}

fn point3(input: &str) -> IResult<&str, Point3<f64>> {
    let (input, x) = real(input)?;
    let (input, y) = real(input)?;
    let (input, z) = real(input)?;
    Ok((input, Point3::new(x, y, z)))
}

fn real(input: &str) -> IResult<&str, f64> {
    preceded(multispace0, double)(input)
}

fn index(input: &str) -> IResult<&str, usize> {
    map_res(preceded(multispace0, digit1), str::parse)(input)
}

fn document_end(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, eof)(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const CUBE_PLAIN: &str = "\
5 5 5
1 1 0
-1 1 0
-1 -1 0
8
-1 -1 -1
 1 -1 -1
 1  1 -1
-1  1 -1
-1 -1  1
 1 -1  1
 1  1  1
-1  1  1
6
4 0 1 2 3
4 4 5 6 7
4 0 1 5 4
4 1 2 6 5
4 2 3 7 6
4 3 0 4 7
";

    #[test]
    fn test_parse_without_reference_point() {
        let scene = parse_scene(CUBE_PLAIN).unwrap();
        assert_abs_diff_eq!(scene.viewpoint, Point3::new(5.0, 5.0, 5.0), epsilon = 1e-12);
        assert_eq!(scene.mesh.vertices.len(), 8);
        assert_eq!(scene.mesh.faces.len(), 6);
        assert_eq!(scene.mesh.faces[5].indices, vec![3, 0, 4, 7]);
        // Reference defaults to p1.
        assert_abs_diff_eq!(
            *scene.plane.reference(),
            Point3::new(1.0, 1.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_parse_with_reference_point() {
        let text = "\
0 0 10
0 0 0
1 0 0
0 1 0
0.5 0.5 0
3
0 0 1
1 0 1
0 1 1
1
3 0 1 2
";
        let scene = parse_scene(text).unwrap();
        assert_abs_diff_eq!(
            *scene.plane.reference(),
            Point3::new(0.5, 0.5, 0.0),
            epsilon = 1e-12
        );
        assert_eq!(scene.mesh.vertices.len(), 3);
        assert_eq!(scene.mesh.faces.len(), 1);
    }

    #[test]
    fn test_truncated_document_is_a_parse_error() {
        // Face record promises 4 indices but only carries 3.
        let text = "\
5 5 5
1 1 0
-1 1 0
-1 -1 0
2
0 0 0
1 1 1
1
4 0 1 0
";
        let result = parse_scene(text);
        assert!(matches!(result, Err(ProjectError::Parse(_))));
    }

    #[test]
    fn test_trailing_garbage_is_a_parse_error() {
        let text = format!("{CUBE_PLAIN}\nextra tokens");
        assert!(matches!(
            parse_scene(&text),
            Err(ProjectError::Parse(_))
        ));
    }

    #[test]
    fn test_collinear_plane_points_are_rejected() {
        let text = "\
5 5 5
0 0 0
1 1 1
2 2 2
1
0 0 0
0
";
        assert!(matches!(
            parse_scene(text),
            Err(ProjectError::DegeneratePlane)
        ));
    }
}
