// Plain geometry in the button area's local frame
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero extent means the element has not been laid out yet.
    pub fn is_unmeasured(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned bounding box as reported by the layout collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Converts a viewport coordinate into this rect's local frame.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.x, client_y - self.y)
    }
}

/// Margin-inset region the movable button's top-left corner may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafeRegion {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl SafeRegion {
    /// `None` when the container is too small for the target plus margins.
    pub fn within(container: Size, target: Size, margin: f64) -> Option<Self> {
        let region = Self {
            min_x: margin,
            max_x: container.width - target.width - margin,
            min_y: margin,
            max_y: container.height - target.height - margin,
        };
        if region.max_x <= region.min_x || region.max_y <= region.min_y {
            return None;
        }
        Some(region)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Maps unit samples `u, v` in `[0, 1)` onto the region.
    pub fn lerp(&self, u: f64, v: f64) -> Point {
        Point::new(
            self.min_x + u * (self.max_x - self.min_x),
            self.min_y + v * (self.max_y - self.min_y),
        )
    }
}
