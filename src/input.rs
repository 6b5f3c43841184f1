use std::collections::HashSet;
use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode};

/// Device state sampled once per frame.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub pressed_keys: HashSet<VirtualKeyCode>,
    /// Frame-buffer coordinates, y-up.
    pub cursor: (f32, f32),
    pub mouse_down: bool,
    pub mouse_down_last_frame: bool,
}

impl InputSnapshot {
    pub fn is_key_down(&self, key: VirtualKeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Button held last frame and up now.
    pub fn mouse_released(&self) -> bool {
        self.mouse_down_last_frame && !self.mouse_down
    }
}

/// Collects window events between frames.
pub struct InputHandler {
    pressed_keys: HashSet<VirtualKeyCode>,
    cursor: (f32, f32),
    mouse_down: bool,
    mouse_down_last_frame: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            cursor: (0.0, 0.0),
            mouse_down: false,
            mouse_down_last_frame: false,
        }
    }

    pub fn handle_keyboard_input(&mut self, input: &KeyboardInput) {
        if let Some(key_code) = input.virtual_keycode {
            match input.state {
                ElementState::Pressed => {
                    self.pressed_keys.insert(key_code);
                }
                ElementState::Released => {
                    self.pressed_keys.remove(&key_code);
                }
            }
        }
    }

    pub fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button == MouseButton::Left {
            self.mouse_down = state == ElementState::Pressed;
        }
    }

    /// Cursor position in frame-buffer pixels, y-down as reported by the window.
    pub fn handle_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
    }

    /// Keys stay down until released, dropping focus releases everything.
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.mouse_down = false;
    }

    /// Samples the current state and starts a new frame. The cursor y axis is
    /// flipped so it matches the rendering coordinates.
    pub fn snapshot(&mut self, window_height: u32) -> InputSnapshot {
        let snapshot = InputSnapshot {
            pressed_keys: self.pressed_keys.clone(),
            cursor: (self.cursor.0, window_height as f32 - self.cursor.1),
            mouse_down: self.mouse_down,
            mouse_down_last_frame: self.mouse_down_last_frame,
        };
        self.mouse_down_last_frame = self.mouse_down;
        snapshot
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
