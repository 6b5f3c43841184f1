use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Grid, GRID_SIZE};

/// Number of random moves applied to a solved board.
pub const SCRAMBLE_MOVES: usize = GRID_SIZE * GRID_SIZE;

/// Scrambles a board by playing random moves on it, so every puzzle it
/// produces can be undone by replaying the same moves.
pub struct PuzzleGenerator {
    rng: StdRng,
}

impl PuzzleGenerator {
    /// `None` seeds from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Turns every tile off, then toggles a fresh random cell per move.
    /// Cells may repeat. Returns the moves in the order they were played.
    pub fn scramble(&mut self, grid: &mut Grid) -> Vec<(usize, usize)> {
        grid.set_all(false);

        let mut moves = Vec::with_capacity(SCRAMBLE_MOVES);
        for _ in 0..SCRAMBLE_MOVES {
            let row = self.rng.gen_range(0..GRID_SIZE);
            let col = self.rng.gen_range(0..GRID_SIZE);
            grid.toggle(row, col);
            moves.push((row, col));
        }

        log::debug!("Scrambled board with {} moves, {} tiles lit", moves.len(), grid.lit_count());
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::WinCondition;

    #[test]
    fn replaying_moves_solves_the_board() {
        for seed in 0..32 {
            let mut grid = Grid::new(750, 750);
            let moves = PuzzleGenerator::new(Some(seed)).scramble(&mut grid);
            assert_eq!(moves.len(), SCRAMBLE_MOVES);

            for (row, col) in moves {
                grid.toggle(row, col);
            }
            assert!(grid.is_solved(WinCondition::AllOff), "seed {seed}");
        }
    }

    #[test]
    fn same_seed_gives_same_board() {
        let mut a = Grid::new(750, 750);
        let mut b = Grid::new(750, 750);
        let moves_a = PuzzleGenerator::new(Some(7)).scramble(&mut a);
        let moves_b = PuzzleGenerator::new(Some(7)).scramble(&mut b);
        assert_eq!(moves_a, moves_b);
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn moves_stay_in_bounds() {
        let mut grid = Grid::new(750, 750);
        let moves = PuzzleGenerator::new(Some(99)).scramble(&mut grid);
        assert!(moves.iter().all(|&(r, c)| r < GRID_SIZE && c < GRID_SIZE));
    }

    #[test]
    fn scramble_starts_from_a_dark_board() {
        let mut grid = Grid::new(750, 750);
        grid.set_all(true);
        let moves = PuzzleGenerator::new(Some(3)).scramble(&mut grid);
        for (row, col) in moves.into_iter().rev() {
            grid.toggle(row, col);
        }
        assert_eq!(grid.lit_count(), 0);
    }
}
