//! Planecast SVG Exporter
//!
//! Usage: planecast-svg [scene-file] [output-file]
//!
//! Reads a scene document (from the given file, or stdin when absent),
//! projects it onto its plane, and writes an SVG rendering (default:
//! output.svg).

use std::env;
use std::fs;
use std::io::{self, Read};

use planecast_core::parse_scene;
use planecast_svg::{render_svg, SvgConfig};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let text = match args.get(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let scene = parse_scene(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Failed to parse scene: {}", e)))?;

    let output = args.get(2).map(String::as_str).unwrap_or("output.svg");
    let svg = render_svg(&scene, &SvgConfig::default());
    fs::write(output, svg)?;

    println!(
        "Wrote {} ({} vertices, {} faces)",
        output,
        scene.mesh.vertices.len(),
        scene.mesh.faces.len()
    );
    Ok(())
}
