//! Terminal-based interactive viewer for plane-projected wireframes
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use nalgebra::Point3;
use planecast_core::{render_frame, FitPolicy, Scene, Viewport};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::WireRenderer;

const VIEWPOINT_STEP: f64 = 0.5;
const ZOOM_STEP: f64 = 0.1;

/// Main application struct for the interactive viewer.
///
/// Owns the scene and the mutable viewpoint; every loop iteration feeds
/// both into one pure pipeline pass, so there is no projection state
/// carried across frames.
pub struct TerminalApp {
    scene: Scene,
    viewpoint: Point3<f64>,
    zoom: f64,
    viewport: Viewport,
    renderer: WireRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let viewpoint = scene.viewpoint;

        Ok(Self {
            scene,
            viewpoint,
            zoom: 1.2,
            viewport: Viewport::new(0.0, 0.0, width as f64, height as f64),
            renderer: WireRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Left => {
                    self.viewpoint.x -= VIEWPOINT_STEP;
                }
                KeyCode::Right => {
                    self.viewpoint.x += VIEWPOINT_STEP;
                }
                KeyCode::Up => {
                    self.viewpoint.y += VIEWPOINT_STEP;
                }
                KeyCode::Down => {
                    self.viewpoint.y -= VIEWPOINT_STEP;
                }
                KeyCode::Char('w') => {
                    self.viewpoint.z += VIEWPOINT_STEP;
                }
                KeyCode::Char('s') => {
                    self.viewpoint.z -= VIEWPOINT_STEP;
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.zoom += ZOOM_STEP;
                }
                KeyCode::Char('-') => {
                    self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_STEP);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        // One full pass per frame; a viewpoint crossing the plane just
        // drops the degenerate edges for that frame.
        let frame = render_frame(
            &self.scene.mesh,
            &self.scene.plane,
            &self.viewpoint,
            &self.viewport,
            FitPolicy::Zoom(self.zoom),
        );

        self.renderer.clear();
        self.renderer.draw_segments(&frame.segments);
        self.renderer.draw_vertices(&frame.vertex_pixels);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Planecast | C=({:.1}, {:.1}, {:.1}) | FPS: {:.1} | Arrows=X/Y W/S=Z +/-=Zoom Q=Quit",
                self.viewpoint.x, self.viewpoint.y, self.viewpoint.z, self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
