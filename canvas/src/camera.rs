//! Camera, rational zoom and the world ↔ screen projection.
//!
//! Every coordinate conversion in the crate goes through [`Camera::project_point`]
//! or [`Camera::project_rect`], so camera and zoom semantics are defined here
//! exactly once. The math is integer-only with floored division; round trips
//! at zoom ≠ 1/1 may be off by one unit per axis (more when zoomed out).

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::cmp::Ordering;

use crate::error::SceneError;
use crate::geom::{Point, Rect, Space};

/// Discrete zoom steps used by wheel zooming, smallest first.
const ZOOM_LADDER: [(i64, i64); 9] = [(1, 4), (1, 3), (1, 2), (2, 3), (1, 1), (3, 2), (2, 1), (3, 1), (4, 1)];

/// Rational zoom factor `num / den`; both terms positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    num: i64,
    den: i64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { num: 1, den: 1 }
    }
}

impl Zoom {
    /// Build a zoom factor.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidZoom`] unless both terms are positive.
    pub fn new(num: i64, den: i64) -> Result<Self, SceneError> {
        if num <= 0 || den <= 0 {
            return Err(SceneError::InvalidZoom { num, den });
        }
        Ok(Self { num, den })
    }

    #[must_use]
    pub fn num(self) -> i64 {
        self.num
    }

    #[must_use]
    pub fn den(self) -> i64 {
        self.den
    }

    /// Compare two zoom factors by value (1/2 == 2/4).
    #[must_use]
    pub fn cmp_value(self, other: Self) -> Ordering {
        (self.num * other.den).cmp(&(other.num * self.den))
    }

    /// The next ladder step above the current value, or `self` at the top.
    #[must_use]
    pub fn step_in(self) -> Self {
        ZOOM_LADDER
            .iter()
            .map(|&(num, den)| Self { num, den })
            .find(|z| z.cmp_value(self) == Ordering::Greater)
            .unwrap_or(self)
    }

    /// The next ladder step below the current value, or `self` at the bottom.
    #[must_use]
    pub fn step_out(self) -> Self {
        ZOOM_LADDER
            .iter()
            .rev()
            .map(|&(num, den)| Self { num, den })
            .find(|z| z.cmp_value(self) == Ordering::Less)
            .unwrap_or(self)
    }
}

/// Pixel size of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: i64,
    pub height: i64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Screen-space center, floored.
    #[must_use]
    pub fn center(self) -> Point {
        Point::screen(self.width.div_euclid(2), self.height.div_euclid(2))
    }
}

/// Camera state: the world point `(x, y)` shown at the viewport center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Camera {
    pub x: i64,
    pub y: i64,
    pub zoom: Zoom,
    pub viewport: Viewport,
}

impl Camera {
    /// Convert a world-space point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        let c = self.viewport.center();
        let z = self.zoom;
        Point::screen(
            ((world.x - self.x) * z.num).div_euclid(z.den) + c.x,
            ((world.y - self.y) * z.num).div_euclid(z.den) + c.y,
        )
    }

    /// Convert a screen-space point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let c = self.viewport.center();
        let z = self.zoom;
        Point::world(
            ((screen.x - c.x) * z.den).div_euclid(z.num) + self.x,
            ((screen.y - c.y) * z.den).div_euclid(z.num) + self.y,
        )
    }

    /// Re-express `p` in `target` space. No-op when it is already there.
    #[must_use]
    pub fn project_point(&self, p: Point, target: Space) -> Point {
        match (p.space, target) {
            (Space::World, Space::Screen) => self.world_to_screen(p),
            (Space::Screen, Space::World) => self.screen_to_world(p),
            _ => p,
        }
    }

    /// Re-express both corners of `r` in `target` space.
    #[must_use]
    pub fn project_rect(&self, r: Rect, target: Space) -> Rect {
        let a = self.project_point(Point::new(r.x0, r.y0, r.space), target);
        let b = self.project_point(Point::new(r.x1, r.y1, r.space), target);
        Rect::new(a.x, a.y, b.x, b.y, target)
    }

    /// Pan by a screen-space pointer delta: `camera -= delta * den / num`.
    ///
    /// Division truncates toward zero, so sub-unit deltas at high zoom are dropped.
    pub fn pan_by(&mut self, dx: i64, dy: i64) {
        self.x -= dx * self.zoom.den / self.zoom.num;
        self.y -= dy * self.zoom.den / self.zoom.num;
    }
}
