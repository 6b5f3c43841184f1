use serde::Deserialize;

use crate::shape::{Rect, Shape, BLACK, RED};
use crate::tile::Tile;

pub const GRID_SIZE: usize = 5;
pub const TILE_SIZE: u32 = 75;
pub const TILE_SPACING: u32 = 10;
/// Invisible box behind each tile, only drawn when hovered.
pub const HOVER_SIZE: u32 = 80;

const HOVER_COLOR: [u8; 4] = RED;
const HOVER_IDLE_COLOR: [u8; 4] = BLACK;

/// Which uniform board counts as solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinCondition {
    /// Every tile shares one state, whichever it is.
    #[default]
    Uniform,
    AllOff,
    AllOn,
}

#[derive(Debug, Clone)]
pub struct Grid {
    tiles: [[Tile; GRID_SIZE]; GRID_SIZE],
    hover_boxes: Vec<Shape>,
}

impl Grid {
    /// Lays the grid out as one block centred in a window of the given size.
    /// All tiles start off.
    pub fn new(window_width: u32, window_height: u32) -> Self {
        let span = (GRID_SIZE as u32) * TILE_SIZE + (GRID_SIZE as u32 - 1) * TILE_SPACING;
        let start_x = (window_width as f32 - span as f32) / 2.0;
        let start_y = (window_height as f32 - span as f32) / 2.0;
        let stride = (TILE_SIZE + TILE_SPACING) as f32;
        let half_tile = (TILE_SIZE / 2) as f32;

        let center = |row: usize, col: usize| {
            (
                start_x + half_tile + col as f32 * stride,
                start_y + half_tile + row as f32 * stride,
            )
        };

        let tiles = std::array::from_fn(|row| {
            std::array::from_fn(|col| Tile::new(row, col, center(row, col), TILE_SIZE as f32, false))
        });

        let mut hover_boxes = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let size = HOVER_SIZE as f32;
                hover_boxes.push(Rect::new(center(row, col), (size, size), HOVER_IDLE_COLOR).into());
            }
        }

        Self { tiles, hover_boxes }
    }

    fn in_bounds(row: isize, col: isize) -> bool {
        row >= 0 && row < GRID_SIZE as isize && col >= 0 && col < GRID_SIZE as isize
    }

    fn toggle_if_exists(&mut self, row: isize, col: isize) {
        if Self::in_bounds(row, col) {
            self.tiles[row as usize][col as usize].toggle();
        }
    }

    /// Flips the tile and its up/down/left/right neighbours. Cells outside the
    /// grid are skipped, there is no wraparound.
    pub fn toggle(&mut self, row: usize, col: usize) {
        let (Ok(row), Ok(col)) = (isize::try_from(row), isize::try_from(col)) else {
            return;
        };
        if !Self::in_bounds(row, col) {
            return;
        }

        self.toggle_if_exists(row, col);
        self.toggle_if_exists(row - 1, col);
        self.toggle_if_exists(row + 1, col);
        self.toggle_if_exists(row, col - 1);
        self.toggle_if_exists(row, col + 1);
    }

    pub fn set_all(&mut self, is_on: bool) {
        for tile in self.tiles_iter_mut() {
            tile.set_on(is_on);
        }
    }

    pub fn lit_count(&self) -> usize {
        self.tiles().filter(|tile| tile.is_on()).count()
    }

    pub fn is_solved(&self, condition: WinCondition) -> bool {
        let lit = self.lit_count();
        match condition {
            WinCondition::Uniform => lit == 0 || lit == GRID_SIZE * GRID_SIZE,
            WinCondition::AllOff => lit == 0,
            WinCondition::AllOn => lit == GRID_SIZE * GRID_SIZE,
        }
    }

    /// Every tile containing the point, in row-major order.
    pub fn tiles_at(&self, point: (f32, f32)) -> Vec<(usize, usize)> {
        self.tiles()
            .filter(|tile| tile.contains(point))
            .map(|tile| (tile.row, tile.col))
            .collect()
    }

    pub fn update_hover(&mut self, point: (f32, f32)) {
        for hover in &mut self.hover_boxes {
            let color = if hover.is_overlapping(point) {
                HOVER_COLOR
            } else {
                HOVER_IDLE_COLOR
            };
            hover.set_color(color);
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    fn tiles_iter_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut().flatten()
    }

    pub fn hover_boxes(&self) -> &[Shape] {
        &self.hover_boxes
    }

    /// Row-major on/off snapshot, handy for comparisons.
    #[cfg(test)]
    pub fn cells(&self) -> [[bool; GRID_SIZE]; GRID_SIZE] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.tiles[row][col].is_on()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(750, 750)
    }

    fn lit(grid: &Grid) -> Vec<(usize, usize)> {
        grid.tiles().filter(|t| t.is_on()).map(|t| (t.row, t.col)).collect()
    }

    #[test]
    fn starts_with_all_tiles_off() {
        let grid = grid();
        assert_eq!(grid.tiles().count(), 25);
        assert_eq!(grid.lit_count(), 0);
        assert_eq!(grid.hover_boxes().len(), 25);
    }

    #[test]
    fn toggle_is_self_inverse_everywhere() {
        let mut grid = grid();
        grid.toggle(1, 3);
        grid.toggle(4, 0);
        let before = grid.cells();

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                grid.toggle(row, col);
                grid.toggle(row, col);
                assert_eq!(grid.cells(), before, "toggle({row}, {col}) twice");
            }
        }
    }

    #[test]
    fn corner_toggle_flips_three_tiles() {
        let mut grid = grid();
        grid.toggle(0, 0);
        assert_eq!(lit(&grid), vec![(0, 0), (0, 1), (1, 0)]);

        let mut grid = self::grid();
        grid.toggle(4, 4);
        assert_eq!(lit(&grid), vec![(3, 4), (4, 3), (4, 4)]);
    }

    #[test]
    fn interior_toggle_flips_five_tiles() {
        let mut grid = grid();
        grid.toggle(2, 2);
        assert_eq!(lit(&grid), vec![(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]);
    }

    #[test]
    fn edge_toggle_flips_four_tiles() {
        let mut grid = grid();
        grid.toggle(0, 2);
        assert_eq!(lit(&grid), vec![(0, 1), (0, 2), (0, 3), (1, 2)]);
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut grid = grid();
        grid.toggle(5, 0);
        grid.toggle(0, 7);
        grid.toggle(usize::MAX, usize::MAX);
        assert_eq!(grid.lit_count(), 0);
    }

    #[test]
    fn win_conditions() {
        let mut grid = grid();
        assert!(grid.is_solved(WinCondition::Uniform));
        assert!(grid.is_solved(WinCondition::AllOff));
        assert!(!grid.is_solved(WinCondition::AllOn));

        grid.toggle(2, 2);
        assert!(!grid.is_solved(WinCondition::Uniform));
        assert!(!grid.is_solved(WinCondition::AllOff));

        grid.set_all(true);
        assert!(grid.is_solved(WinCondition::Uniform));
        assert!(grid.is_solved(WinCondition::AllOn));
        assert!(!grid.is_solved(WinCondition::AllOff));
    }

    #[test]
    fn layout_is_centred() {
        let grid = grid();
        let first = grid.tiles().next().map(|t| t.shape().bounding_box());
        let last = grid.tiles().last().map(|t| t.shape().bounding_box());
        // start = (750 - 415) / 2 = 167.5, centre = start + 37
        assert_eq!(first.map(|bb| bb.left), Some(167.0));
        assert_eq!(last.map(|bb| bb.right), Some(167.5 + 37.0 + 4.0 * 85.0 + 37.5));
    }

    #[test]
    fn tiles_at_hits_only_the_tile_under_the_point() {
        let grid = grid();
        let centre = (167.5 + 37.0 + 85.0, 167.5 + 37.0 + 2.0 * 85.0);
        assert_eq!(grid.tiles_at(centre), vec![(2, 1)]);
        // the gap between tiles belongs to nobody
        assert!(grid.tiles_at((167.5 + 37.0 + 42.5, 167.5 + 37.0)).is_empty());
    }

    #[test]
    fn hover_marks_only_the_box_under_the_cursor() {
        let mut grid = grid();
        let centre = (167.5 + 37.0, 167.5 + 37.0);
        grid.update_hover(centre);
        let hovered: Vec<usize> = grid
            .hover_boxes()
            .iter()
            .enumerate()
            .filter(|(_, b)| b.color() == HOVER_COLOR)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(hovered, vec![0]);

        grid.update_hover((0.0, 0.0));
        assert!(grid.hover_boxes().iter().all(|b| b.color() == HOVER_IDLE_COLOR));
    }

    #[test]
    fn hover_edges_follow_the_overlap_rule() {
        let mut grid = grid();
        let bb = grid.hover_boxes()[0].bounding_box();
        let mid_y = (bb.bottom + bb.top) / 2.0;
        let mid_x = (bb.left + bb.right) / 2.0;

        grid.update_hover((bb.left, mid_y));
        assert_eq!(grid.hover_boxes()[0].color(), HOVER_COLOR);

        grid.update_hover((mid_x, bb.top));
        assert_eq!(grid.hover_boxes()[0].color(), HOVER_IDLE_COLOR);
    }
}
