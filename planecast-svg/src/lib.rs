//! SVG export for plane-projected wireframe scenes.
//!
//! Produces a standalone SVG document from one pipeline pass:
//! depth-ordered filled faces (painter's algorithm), a dashed border
//! around the fitted window, and vertex markers.
use nalgebra::Point2;
use planecast_core::{face_polygons, project_vertices, to_pixel, FitPolicy, Scene, Viewport, Window};

/// Output settings for [`render_svg`].
#[derive(Debug, Clone)]
pub struct SvgConfig {
    pub width: u32,
    pub height: u32,
    pub fit: FitPolicy,
    /// Translucent face fill; `false` leaves outlines only.
    pub fill_faces: bool,
    /// Dashed rectangle around the fitted window.
    pub window_border: bool,
    /// Small circles at projected vertex positions.
    pub vertex_markers: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            fit: FitPolicy::Margin(0.5),
            fill_faces: true,
            window_border: true,
            vertex_markers: true,
        }
    }
}

/// Render one pipeline pass over the scene into an SVG document.
///
/// Faces are painted farthest-first by mean projected depth; an empty
/// mesh still yields a valid document, just with nothing in it.
pub fn render_svg(scene: &Scene, config: &SvgConfig) -> String {
    let viewport = Viewport::new(0.0, 0.0, config.width as f64, config.height as f64);
    let projected = project_vertices(&scene.mesh, &scene.plane, &scene.viewpoint);
    let bounds = Window::from_points(projected.iter().flatten().map(|pv| &pv.local));
    let window = config.fit.apply(&bounds).fit_aspect(&viewport);

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = config.width,
        h = config.height
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\" />\n");

    if config.window_border {
        push_window_border(&mut svg, &window, &viewport);
    }

    let fill = if config.fill_faces {
        "rgba(150,150,250,0.6)"
    } else {
        "none"
    };
    for polygon in face_polygons(&scene.mesh, &projected, &window, &viewport) {
        let points = polygon
            .points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            "<polygon points=\"{points}\" style=\"fill:{fill};stroke:black;stroke-width:1\" />\n"
        ));
    }

    if config.vertex_markers {
        for pv in projected.iter().flatten() {
            let pixel = to_pixel(&pv.local, &window, &viewport);
            svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"3\" fill=\"red\" />\n",
                pixel.x, pixel.y
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_window_border(svg: &mut String, window: &Window, viewport: &Viewport) {
    let corners = [
        Point2::new(window.min_x, window.min_y),
        Point2::new(window.max_x, window.min_y),
        Point2::new(window.max_x, window.max_y),
        Point2::new(window.min_x, window.max_y),
        Point2::new(window.min_x, window.min_y),
    ];
    let points = corners
        .iter()
        .map(|c| {
            let p = to_pixel(c, window, viewport);
            format!("{:.2},{:.2}", p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ");
    svg.push_str(&format!(
        "<polyline points=\"{points}\" style=\"fill:none;stroke:gray;stroke-dasharray:4\" />\n"
    ));
}
