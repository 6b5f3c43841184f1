use std::time::{Duration, Instant};

use crate::config::Config;
use crate::game_state::{ScreenState, ScreenStateMachine};
use crate::generator::PuzzleGenerator;
use crate::grid::{Grid, WinCondition};
use crate::input::InputSnapshot;
use crate::input_mapping::{InputAction, InputMapper};

const PROMPT_BLINK: Duration = Duration::from_millis(500);
/// Guards against a generator that keeps producing solved boards.
const MAX_SCRAMBLE_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Time between frames and since the game started.
#[derive(Debug)]
pub struct FrameTimer {
    started: Instant,
    last_frame: Instant,
    delta: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            delta: Duration::ZERO,
        }
    }

    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Duration {
        self.delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.delta
    }

    pub fn elapsed(&self) -> Duration {
        self.last_frame.saturating_duration_since(self.started)
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// One game session: the board, the active screen and everything that drives them.
pub struct Game {
    grid: Grid,
    screens: ScreenStateMachine,
    mapper: InputMapper,
    timer: FrameTimer,
    win_condition: WinCondition,
    finish_on_win: bool,
    moves: u32,
    solved: bool,
}

impl Game {
    pub fn new(config: &Config, width: u32, height: u32) -> Self {
        let mut grid = Grid::new(width, height);
        let mut generator = PuzzleGenerator::new(config.seed);

        let mut attempts = 0;
        loop {
            generator.scramble(&mut grid);
            attempts += 1;
            if !grid.is_solved(config.win_condition) || attempts >= MAX_SCRAMBLE_ATTEMPTS {
                break;
            }
            log::debug!("Scramble produced a solved board, trying again");
        }

        Self {
            grid,
            screens: ScreenStateMachine::new(),
            mapper: InputMapper::new(),
            timer: FrameTimer::new(),
            win_condition: config.win_condition,
            finish_on_win: config.finish_on_win,
            moves: 0,
            solved: false,
        }
    }

    /// Runs the game logic for one frame.
    pub fn frame(&mut self, input: &InputSnapshot) -> FrameOutcome {
        let delta = self.timer.tick();
        log::trace!("Frame delta {:.2} ms", delta.as_secs_f64() * 1000.0);

        self.mapper.apply_hover(input, &mut self.grid);

        let actions = self.mapper.map(input, self.screens.current(), &self.grid);
        self.apply(&actions)
    }

    pub fn apply(&mut self, actions: &[InputAction]) -> FrameOutcome {
        let mut outcome = FrameOutcome::Continue;

        for action in actions {
            match *action {
                InputAction::Quit => outcome = FrameOutcome::Quit,
                InputAction::AdvanceScreen => {
                    self.screens.advance();
                }
                InputAction::TileClicked(row, col) => {
                    if self.screens.is_playing() {
                        self.grid.toggle(row, col);
                        self.moves += 1;
                        log::debug!("Move {}: toggled ({}, {})", self.moves, row, col);
                    }
                }
            }
        }

        self.check_win();
        outcome
    }

    fn check_win(&mut self) {
        if !self.screens.is_playing() {
            return;
        }

        let solved = self.grid.is_solved(self.win_condition);
        if solved && !self.solved {
            log::info!("Puzzle solved in {} moves", self.moves);
            if self.finish_on_win {
                self.screens.finish();
            }
        }
        self.solved = solved;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn screen(&self) -> ScreenState {
        self.screens.current()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.grid.is_solved(self.win_condition)
    }

    fn prompt_visible(&self) -> bool {
        (self.timer.elapsed().as_millis() / PROMPT_BLINK.as_millis()) % 2 == 0
    }

    /// Text shown on the start and end screens, top to bottom.
    pub fn screen_lines(&self) -> Vec<String> {
        match self.screen() {
            ScreenState::Start => {
                let mut lines = vec![
                    "LIGHTS OUT".to_string(),
                    String::new(),
                    "Click a tile to flip it".to_string(),
                    "and its neighbours.".to_string(),
                    String::new(),
                ];
                if self.prompt_visible() {
                    lines.push("Press SPACE to start".to_string());
                } else {
                    lines.push(String::new());
                }
                lines
            }
            ScreenState::Play => Vec::new(),
            ScreenState::Over => {
                let verdict = if self.is_solved() { "Solved!" } else { "Game over" };
                vec![
                    verdict.to_string(),
                    String::new(),
                    format!("Moves: {}", self.moves),
                    String::new(),
                    "Press ESC to quit".to_string(),
                ]
            }
        }
    }
}
