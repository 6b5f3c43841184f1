//! Drawable shapes used by the grid.
//!
//! Coordinates are y-up with the origin in the bottom-left corner of the window,
//! positions are shape centres.

pub type Rgba = [u8; 4];

pub const YELLOW: Rgba = [255, 255, 0, 255];
pub const LIGHT_GRAY: Rgba = [211, 211, 211, 255];
pub const BLACK: Rgba = [0, 0, 0, 255];
pub const RED: Rgba = [255, 0, 0, 255];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl BoundingBox {
    /// Horizontal edges are inclusive, vertical edges are exclusive.
    pub fn contains(&self, (x, y): (f32, f32)) -> bool {
        self.left <= x && self.right >= x && self.top > y && self.bottom < y
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pos: (f32, f32),
    size: (f32, f32),
    color: Rgba,
}

impl Rect {
    pub fn new(pos: (f32, f32), size: (f32, f32), color: Rgba) -> Self {
        Self { pos, size, color }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            left: self.pos.0 - self.size.0 / 2.0,
            right: self.pos.0 + self.size.0 / 2.0,
            bottom: self.pos.1 - self.size.1 / 2.0,
            top: self.pos.1 + self.size.1 / 2.0,
        }
    }

    pub fn is_overlapping(&self, point: (f32, f32)) -> bool {
        self.bounding_box().contains(point)
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn color(&self) -> Rgba {
        self.color
    }
}

/// Every shape the renderer knows how to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect),
}

impl Shape {
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Rect(rect) => rect.bounding_box(),
        }
    }

    pub fn is_overlapping(&self, point: (f32, f32)) -> bool {
        match self {
            Shape::Rect(rect) => rect.is_overlapping(point),
        }
    }

    pub fn set_color(&mut self, color: Rgba) {
        match self {
            Shape::Rect(rect) => rect.set_color(color),
        }
    }

    pub fn color(&self) -> Rgba {
        match self {
            Shape::Rect(rect) => rect.color(),
        }
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}
