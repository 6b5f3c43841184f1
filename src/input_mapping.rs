use winit::event::VirtualKeyCode;

use crate::game_state::ScreenState;
use crate::grid::Grid;
use crate::input::InputSnapshot;

pub const QUIT_KEY: VirtualKeyCode = VirtualKeyCode::Escape;
pub const START_KEY: VirtualKeyCode = VirtualKeyCode::Space;
pub const END_KEY: VirtualKeyCode = VirtualKeyCode::Return;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    AdvanceScreen,
    TileClicked(usize, usize),
}

/// Turns a frame's input snapshot into game actions.
pub struct InputMapper {
    quit: VirtualKeyCode,
    start: VirtualKeyCode,
    end: VirtualKeyCode,
}

impl InputMapper {
    pub fn new() -> Self {
        Self {
            quit: QUIT_KEY,
            start: START_KEY,
            end: END_KEY,
        }
    }

    /// Keys are level triggered: a held key repeats its action every frame.
    /// Clicks fire once on release for every tile under the cursor.
    pub fn map(&self, input: &InputSnapshot, screen: ScreenState, grid: &Grid) -> Vec<InputAction> {
        let mut actions = Vec::new();

        if input.is_key_down(self.quit) {
            actions.push(InputAction::Quit);
        }

        let advance = match screen {
            ScreenState::Start => input.is_key_down(self.start),
            ScreenState::Play => input.is_key_down(self.end),
            ScreenState::Over => false,
        };
        if advance {
            actions.push(InputAction::AdvanceScreen);
        }

        if input.mouse_released() {
            actions.extend(
                grid.tiles_at(input.cursor)
                    .into_iter()
                    .map(|(row, col)| InputAction::TileClicked(row, col)),
            );
        }

        actions
    }

    /// Highlights the hover box under the cursor.
    pub fn apply_hover(&self, input: &InputSnapshot, grid: &mut Grid) {
        grid.update_hover(input.cursor);
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}
