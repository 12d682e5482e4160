//! ASCII wireframe rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::Write;

const EDGE_CHAR: char = '#';
const VERTEX_CHAR: char = 'o';

/// Renders pixel-space line segments into a character grid.
pub struct WireRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl WireRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.char_buffer {
            *cell = ' ';
        }
    }

    pub fn draw_segments(&mut self, segments: &[[Point2<f64>; 2]]) {
        for segment in segments {
            self.draw_segment(&segment[0], &segment[1]);
        }
    }

    pub fn draw_vertices(&mut self, vertex_pixels: &[Option<Point2<f64>>]) {
        for pixel in vertex_pixels.iter().flatten() {
            self.plot(pixel.x.round() as i64, pixel.y.round() as i64, VERTEX_CHAR);
        }
    }

    /// Step the segment cell by cell; cells outside the grid are dropped
    /// individually, so a partially visible segment still draws its
    /// on-screen part.
    fn draw_segment(&mut self, a: &Point2<f64>, b: &Point2<f64>) {
        let (x0, y0) = (a.x.round() as i64, a.y.round() as i64);
        let (x1, y1) = (b.x.round() as i64, b.y.round() as i64);

        let steps = (x1 - x0).abs().max((y1 - y0).abs());
        if steps == 0 {
            self.plot(x0, y0, EDGE_CHAR);
            return;
        }

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = x0 as f64 + t * (x1 - x0) as f64;
            let y = y0 as f64 + t * (y1 - y0) as f64;
            self.plot(x.round() as i64, y.round() as i64, EDGE_CHAR);
        }
    }

    fn plot(&mut self, x: i64, y: i64, c: char) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.char_buffer[y as usize * self.width + x as usize] = c;
    }

    /// Character at a grid cell; used by the overlay and by tests.
    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_at(x, y);
                let color = match c {
                    VERTEX_CHAR => Color::Yellow,
                    EDGE_CHAR => Color::Cyan,
                    _ => Color::DarkGrey,
                };
                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
