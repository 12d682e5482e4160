//! Planecast Terminal Viewer
//!
//! Projects a wireframe scene onto its projection plane and renders the
//! result as ASCII. Controls:
//!   - Arrow keys: move the viewpoint in x/y
//!   - W/S: move the viewpoint in z
//!   - +/-: zoom
//!   - Q/ESC: quit

use std::env;
use std::fs;
use std::io;

use nalgebra::Point3;
use planecast_core::{parse_scene, Mesh, Plane, Scene};
use planecast_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let scene = match args.get(1) {
        Some(path) => load_scene(path)?,
        None => {
            println!("No scene file provided, using the built-in cube demo...");
            demo_scene()
        }
    };

    println!(
        "Loaded {} vertices, {} faces",
        scene.mesh.vertices.len(),
        scene.mesh.faces.len()
    );
    println!("Starting terminal viewer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(scene)?;
    app.run()?;

    println!("Thank you for using the Planecast terminal viewer!");
    Ok(())
}

fn load_scene(path: &str) -> io::Result<Scene> {
    let text = fs::read_to_string(path)
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, format!("Failed to read scene file: {}", e)))?;
    parse_scene(&text)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Failed to parse scene: {}", e)))
}

/// Cube above the z = 0 plane, seen from (5, 5, 5).
fn demo_scene() -> Scene {
    let plane = Plane::from_points(
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(-1.0, 1.0, 0.0),
        Point3::new(-1.0, -1.0, 0.0),
    )
    .expect("demo plane points are not collinear");

    Scene {
        viewpoint: Point3::new(5.0, 5.0, 5.0),
        plane,
        mesh: Mesh::cube(2.0),
    }
}
