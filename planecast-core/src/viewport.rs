//! Window fitting and window-to-viewport mapping
use nalgebra::Point2;

use crate::DEGENERACY_EPSILON;

/// Half-extent pushed onto each side of a flat window axis so the window
/// can always be mapped onto a viewport.
const FLAT_AXIS_HALF_EXTENT: f64 = 0.5;

/// Axis-aligned rectangle in plane-local (u, v) space.
///
/// Recomputed from the projected point set on every pass; the default is
/// the fallback for an empty point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Window {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Tight bounds over the points, in a single scan.
    ///
    /// Empty input yields the default window; an axis flatter than
    /// [`DEGENERACY_EPSILON`] (all points coincide or project to a line)
    /// is pushed out by a fixed half-extent on both sides.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point2<f64>>,
    {
        let mut iter = points.into_iter();
        let first = match iter.next() {
            Some(p) => p,
            None => return Self::default(),
        };

        let mut window = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in iter {
            window.min_x = window.min_x.min(p.x);
            window.max_x = window.max_x.max(p.x);
            window.min_y = window.min_y.min(p.y);
            window.max_y = window.max_y.max(p.y);
        }
        window.widen_flat_axes();
        window
    }

    fn widen_flat_axes(&mut self) {
        if self.width() < DEGENERACY_EPSILON {
            self.min_x -= FLAT_AXIS_HALF_EXTENT;
            self.max_x += FLAT_AXIS_HALF_EXTENT;
        }
        if self.height() < DEGENERACY_EPSILON {
            self.min_y -= FLAT_AXIS_HALF_EXTENT;
            self.max_y += FLAT_AXIS_HALF_EXTENT;
        }
    }

    /// Additive margin on all four sides.
    pub fn with_margin(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            max_x: self.max_x + margin,
            min_y: self.min_y - margin,
            max_y: self.max_y + margin,
        }
    }

    /// Multiplicative expansion about the window center.
    pub fn zoomed(&self, factor: f64) -> Self {
        let center = self.center();
        let half_width = self.width() / 2.0 * factor;
        let half_height = self.height() / 2.0 * factor;
        Self {
            min_x: center.x - half_width,
            max_x: center.x + half_width,
            min_y: center.y - half_height,
            max_y: center.y + half_height,
        }
    }

    /// Grow the window so its aspect ratio exactly matches the viewport's.
    ///
    /// Whichever axis is too small relative to the viewport grows about
    /// its center; the window never shrinks, so all content stays visible
    /// (letterboxing, not cropping). Requires a non-degenerate window,
    /// which [`Window::from_points`] guarantees.
    pub fn fit_aspect(&self, viewport: &Viewport) -> Self {
        let ratio_window = self.width() / self.height();
        let ratio_view = viewport.aspect();
        let mut fitted = *self;
        if ratio_window > ratio_view {
            let new_height = self.width() / ratio_view;
            let cy = (self.min_y + self.max_y) / 2.0;
            fitted.min_y = cy - new_height / 2.0;
            fitted.max_y = cy + new_height / 2.0;
        } else {
            let new_width = self.height() * ratio_view;
            let cx = (self.min_x + self.max_x) / 2.0;
            fitted.min_x = cx - new_width / 2.0;
            fitted.max_x = cx + new_width / 2.0;
        }
        fitted
    }
}

impl Default for Window {
    /// Unit half-extent about the origin.
    fn default() -> Self {
        Self {
            min_x: -1.0,
            max_x: 1.0,
            min_y: -1.0,
            max_y: 1.0,
        }
    }
}

/// How the bounding window is padded before aspect fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitPolicy {
    /// Additive margin on every side, in plane-local units.
    Margin(f64),
    /// Multiplicative expansion about the window center.
    Zoom(f64),
}

impl FitPolicy {
    /// Apply the policy; flat axes are re-widened afterwards so a
    /// zero/negative zoom or margin can't hand a degenerate window to the
    /// viewport mapping.
    pub fn apply(&self, window: &Window) -> Window {
        let mut padded = match *self {
            FitPolicy::Margin(margin) => window.with_margin(margin),
            FitPolicy::Zoom(factor) => window.zoomed(factor),
        };
        padded.widen_flat_axes();
        padded
    }
}

impl Default for FitPolicy {
    fn default() -> Self {
        FitPolicy::Margin(0.5)
    }
}

/// Fixed pixel-space rectangle that content is drawn into. Immutable once
/// configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Map a plane-local point into pixel space.
///
/// Window v grows upward while screen y grows downward, so the vertical
/// axis is flipped. Precondition: the window has nonzero extent on both
/// axes (enforced upstream by [`Window::from_points`]).
pub fn to_pixel(point: &Point2<f64>, window: &Window, viewport: &Viewport) -> Point2<f64> {
    let nx = (point.x - window.min_x) / window.width();
    let ny = (point.y - window.min_y) / window.height();
    Point2::new(
        viewport.x + nx * viewport.width,
        viewport.y + (1.0 - ny) * viewport.height,
    )
}

/// Inverse of [`to_pixel`]: pixel space back into plane-local coordinates.
pub fn from_pixel(pixel: &Point2<f64>, window: &Window, viewport: &Viewport) -> Point2<f64> {
    let nx = (pixel.x - viewport.x) / viewport.width;
    let ny = 1.0 - (pixel.y - viewport.y) / viewport.height;
    Point2::new(
        window.min_x + nx * window.width(),
        window.min_y + ny * window.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_points_yield_default_window() {
        let window = Window::from_points(std::iter::empty());
        assert_eq!(window, Window::default());
    }

    #[test]
    fn test_bounding_scan() {
        let points = [
            Point2::new(10.0, 20.0),
            Point2::new(30.0, 40.0),
            Point2::new(5.0, 35.0),
        ];
        let window = Window::from_points(points.iter());
        assert_eq!(window.min_x, 5.0);
        assert_eq!(window.max_x, 30.0);
        assert_eq!(window.min_y, 20.0);
        assert_eq!(window.max_y, 40.0);
    }

    #[test]
    fn test_flat_axes_are_widened() {
        // Every point coincides: both axes must open up.
        let points = [Point2::new(3.0, -2.0), Point2::new(3.0, -2.0)];
        let window = Window::from_points(points.iter());
        assert!(window.width() > 0.0);
        assert!(window.height() > 0.0);
        assert_abs_diff_eq!(window.center().x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(window.center().y, -2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fit_policies() {
        let window = Window {
            min_x: -1.0,
            max_x: 1.0,
            min_y: -2.0,
            max_y: 2.0,
        };

        let with_margin = FitPolicy::Margin(0.5).apply(&window);
        assert_eq!(with_margin.min_x, -1.5);
        assert_eq!(with_margin.max_y, 2.5);

        let zoomed = FitPolicy::Zoom(2.0).apply(&window);
        assert_abs_diff_eq!(zoomed.width(), 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(zoomed.height(), 8.0, epsilon = 1e-9);
        assert_eq!(zoomed.center(), window.center());
    }

    #[test]
    fn test_fit_aspect_matches_and_never_shrinks() {
        let viewport = Viewport::new(0.0, 0.0, 400.0, 200.0);

        for window in [
            // Too tall for the viewport: width must grow.
            Window {
                min_x: 0.0,
                max_x: 1.0,
                min_y: 0.0,
                max_y: 4.0,
            },
            // Too wide: height must grow.
            Window {
                min_x: -8.0,
                max_x: 8.0,
                min_y: 0.0,
                max_y: 1.0,
            },
        ] {
            let fitted = window.fit_aspect(&viewport);
            assert_abs_diff_eq!(
                fitted.width() / fitted.height(),
                viewport.aspect(),
                epsilon = 1e-9
            );
            assert!(fitted.width() >= window.width());
            assert!(fitted.height() >= window.height());
            assert_abs_diff_eq!(fitted.center().x, window.center().x, epsilon = 1e-9);
            assert_abs_diff_eq!(fitted.center().y, window.center().y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_to_pixel_flips_vertically() {
        let window = Window::default();
        let viewport = Viewport::new(0.0, 0.0, 100.0, 100.0);

        let bottom_left = to_pixel(&Point2::new(-1.0, -1.0), &window, &viewport);
        assert_abs_diff_eq!(bottom_left, Point2::new(0.0, 100.0), epsilon = 1e-9);

        let top_right = to_pixel(&Point2::new(1.0, 1.0), &window, &viewport);
        assert_abs_diff_eq!(top_right, Point2::new(100.0, 0.0), epsilon = 1e-9);

        let center = to_pixel(&Point2::new(0.0, 0.0), &window, &viewport);
        assert_abs_diff_eq!(center, Point2::new(50.0, 50.0), epsilon = 1e-9);
    }

    #[test]
    fn test_pixel_round_trip() {
        let window = Window {
            min_x: -3.0,
            max_x: 7.0,
            min_y: 2.0,
            max_y: 12.0,
        };
        let viewport = Viewport::new(50.0, 10.0, 640.0, 480.0);

        for point in [
            Point2::new(-3.0, 2.0),
            Point2::new(7.0, 12.0),
            Point2::new(0.0, 5.0),
            Point2::new(1.234, 9.876),
        ] {
            let round_tripped = from_pixel(&to_pixel(&point, &window, &viewport), &window, &viewport);
            assert_abs_diff_eq!(round_tripped, point, epsilon = 1e-9);
        }
    }
}
