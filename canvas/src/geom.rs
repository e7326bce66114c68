//! Integer point/rect value types tagged with the coordinate space they live in.
//!
//! Everything here is pure and `Copy`. Reading a corner or a center returns a
//! new value; "storing" a point back into a rect builds a new rect. Nested
//! read-modify-project sequences simply keep the outer value in a local.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// Coordinate system a [`Point`] or [`Rect`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    /// Camera-independent space in which attachments are stored.
    World,
    /// Camera/zoom-projected space addressing the display surface.
    Screen,
}

/// One of the four rect corners; also the tag of a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    Nw,
    Ne,
    Se,
    Sw,
}

impl Corner {
    /// All corners in handle order: nw, ne, se, sw.
    pub const ALL: [Self; 4] = [Self::Nw, Self::Ne, Self::Se, Self::Sw];

    /// The diagonally opposite corner.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Nw => Self::Se,
            Self::Ne => Self::Sw,
            Self::Se => Self::Nw,
            Self::Sw => Self::Ne,
        }
    }
}

/// An integer point in a tagged space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub space: Space,
}

impl Point {
    #[must_use]
    pub fn new(x: i64, y: i64, space: Space) -> Self {
        Self { x, y, space }
    }

    #[must_use]
    pub fn world(x: i64, y: i64) -> Self {
        Self::new(x, y, Space::World)
    }

    /// Pointer positions always arrive in screen space.
    #[must_use]
    pub fn screen(x: i64, y: i64) -> Self {
        Self::new(x, y, Space::Screen)
    }

    /// Add a delta in the point's own space.
    #[must_use]
    pub fn translate(self, dx: i64, dy: i64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..self }
    }

    /// A rect centered on this point with half-extent `size`.
    #[must_use]
    pub fn expand(self, size: i64) -> Rect {
        Rect::new(self.x - size, self.y - size, self.x + size, self.y + size, self.space)
    }
}

/// An integer rect `(x0, y0)`-`(x1, y1)` in a tagged space.
///
/// Corners are not normalized: a resize can legitimately leave `x1 < x0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
    pub space: Space,
}

impl Rect {
    #[must_use]
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64, space: Space) -> Self {
        Self { x0, y0, x1, y1, space }
    }

    #[must_use]
    pub fn world(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self::new(x0, y0, x1, y1, Space::World)
    }

    #[must_use]
    pub fn screen(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self::new(x0, y0, x1, y1, Space::Screen)
    }

    /// The bbox as `[x0, y0, x1, y1]`.
    #[must_use]
    pub fn to_array(self) -> [i64; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }

    #[must_use]
    pub fn width(self) -> i64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(self) -> i64 {
        self.y1 - self.y0
    }

    /// Read one corner as a point.
    #[must_use]
    pub fn corner(self, corner: Corner) -> Point {
        let (x, y) = match corner {
            Corner::Nw => (self.x0, self.y0),
            Corner::Ne => (self.x1, self.y0),
            Corner::Se => (self.x1, self.y1),
            Corner::Sw => (self.x0, self.y1),
        };
        Point::new(x, y, self.space)
    }

    /// Integer center, floored.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            (self.x0 + self.x1).div_euclid(2),
            (self.y0 + self.y1).div_euclid(2),
            self.space,
        )
    }

    /// Move a single corner to `p`; the opposite corner stays put.
    ///
    /// `p` is taken to be in the rect's space.
    #[must_use]
    pub fn with_corner(self, corner: Corner, p: Point) -> Self {
        let mut out = self;
        match corner {
            Corner::Nw => {
                out.x0 = p.x;
                out.y0 = p.y;
            }
            Corner::Ne => {
                out.x1 = p.x;
                out.y0 = p.y;
            }
            Corner::Se => {
                out.x1 = p.x;
                out.y1 = p.y;
            }
            Corner::Sw => {
                out.x0 = p.x;
                out.y1 = p.y;
            }
        }
        out
    }

    /// Translate the whole rect so its center lands on `p`.
    #[must_use]
    pub fn centered_on(self, p: Point) -> Self {
        let c = self.center();
        self.translate(p.x - c.x, p.y - c.y)
    }

    /// Add a delta in the rect's own space.
    #[must_use]
    pub fn translate(self, dx: i64, dy: i64) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            space: self.space,
        }
    }

    /// Whether `p` lies inside the rect (edges inclusive), regardless of corner order.
    #[must_use]
    pub fn contains(self, p: Point) -> bool {
        let (lx, hx) = (self.x0.min(self.x1), self.x0.max(self.x1));
        let (ly, hy) = (self.y0.min(self.y1), self.y0.max(self.y1));
        (lx..=hx).contains(&p.x) && (ly..=hy).contains(&p.y)
    }
}
