/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    #[default]
    Start,
    Play,
    Over,
}

impl ScreenState {
    /// The screen after this one. `Over` is terminal.
    pub fn next(self) -> Self {
        match self {
            ScreenState::Start => ScreenState::Play,
            ScreenState::Play | ScreenState::Over => ScreenState::Over,
        }
    }
}

/// Owns the active screen for one game session.
#[derive(Debug, Default)]
pub struct ScreenStateMachine {
    state: ScreenState,
}

impl ScreenStateMachine {
    pub fn new() -> Self {
        Self {
            state: ScreenState::Start,
        }
    }

    pub fn current(&self) -> ScreenState {
        self.state
    }

    /// Moves to the next screen, returns whether the screen changed.
    pub fn advance(&mut self) -> bool {
        let next = self.state.next();
        let changed = next != self.state;
        if changed {
            log::debug!("Screen {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        changed
    }

    /// Ends a running game. No effect outside `Play`.
    pub fn finish(&mut self) -> bool {
        if self.is_playing() {
            self.advance()
        } else {
            false
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == ScreenState::Play
    }
}
