use std::fmt;

use tracing::trace;

/// A point on the 2D playing field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The receiver the demo commands act on.
///
/// A `Player` only knows its own fields; it has no notion of commands or
/// history, so new command kinds never require changes here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Player {
    position: Position,
    current_action: String,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            position,
            current_action: String::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn current_action(&self) -> &str {
        &self.current_action
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.position = self.position.offset(dx, dy);
        trace!(position = %self.position, "player moved");
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
        trace!(position = %self.position, "player placed");
    }

    pub fn set_action(&mut self, label: impl Into<String>) {
        self.current_action = label.into();
        trace!(action = %self.current_action, "player action changed");
    }
}
