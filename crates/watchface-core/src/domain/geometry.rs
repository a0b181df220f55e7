//! Screen geometry: points, sizes, rectangles and screen shapes.
//!
//! Coordinates are in display pixels with the origin at the top-left corner,
//! `x` growing right and `y` growing down.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub w: i16,
    pub h: i16,
}

impl Size {
    pub const fn new(w: i16, h: i16) -> Self {
        Self { w, h }
    }
}

/// An axis-aligned rectangle (origin + size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i16, y: i16, w: i16, h: i16) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// Centre point, rounded towards the origin.
    pub const fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.w / 2,
            self.origin.y + self.size.h / 2,
        )
    }
}

/// Physical display shape of the watch.
///
/// Serialized in lowercase (`"round"`, `"rect"`) so it can be set from the
/// host TOML configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenShape {
    /// 180×180 round display.
    #[default]
    Round,
    /// 144×168 rectangular display.
    Rect,
}

impl ScreenShape {
    /// Window bounds for this display.
    pub const fn bounds(self) -> Rect {
        match self {
            ScreenShape::Round => Rect::new(0, 0, 180, 180),
            ScreenShape::Rect => Rect::new(0, 0, 144, 168),
        }
    }

    /// Picks `round` on a round display and `rect` otherwise.
    pub const fn round_else<T: Copy>(self, round: T, rect: T) -> T {
        match self {
            ScreenShape::Round => round,
            ScreenShape::Rect => rect,
        }
    }
}
