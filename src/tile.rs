use crate::shape::{Rect, Rgba, Shape, LIGHT_GRAY, YELLOW};

#[derive(Debug, Clone)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    is_on: bool,
    shape: Shape, // position and size never change after construction
}

impl Tile {
    pub fn new(row: usize, col: usize, pos: (f32, f32), size: f32, is_on: bool) -> Self {
        Self {
            row,
            col,
            is_on,
            shape: Rect::new(pos, (size, size), Self::color_for(is_on)).into(),
        }
    }

    fn color_for(is_on: bool) -> Rgba {
        if is_on {
            YELLOW
        } else {
            LIGHT_GRAY
        }
    }

    pub fn toggle(&mut self) {
        self.set_on(!self.is_on);
    }

    pub fn set_on(&mut self, is_on: bool) {
        self.is_on = is_on;
        self.shape.set_color(Self::color_for(is_on));
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn contains(&self, point: (f32, f32)) -> bool {
        self.shape.is_overlapping(point)
    }
}
