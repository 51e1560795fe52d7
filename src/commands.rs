use std::borrow::Cow;

use crate::{
    error::{CommandResult, CommandState},
    player::{Player, Position},
    snapshot::Snapshot,
    traits::command::Command,
};

/// Label an [`AttackCommand`] puts on the player.
pub const ATTACK_LABEL: &str = "Attack";

/// Moves the player by a fixed delta. Undo puts it back where it stood
/// before the move, not at `position - delta`.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveCommand {
    dx: f32,
    dy: f32,
    previous: Snapshot<Position>,
}

impl MoveCommand {
    #[must_use]
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            dx,
            dy,
            previous: Snapshot::Pending,
        }
    }

    #[must_use]
    pub fn delta(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }
}

impl Command for MoveCommand {
    type Receiver = Player;

    fn execute(&mut self, player: &mut Player) -> CommandResult<()> {
        self.previous.capture(player.position())?;
        player.move_by(self.dx, self.dy);
        Ok(())
    }

    fn undo(&mut self, player: &mut Player) -> CommandResult<()> {
        let previous = self.previous.restore()?;
        player.set_position(previous);
        Ok(())
    }

    fn state(&self) -> CommandState {
        self.previous.state()
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Move({}, {})", self.dx, self.dy))
    }
}

/// Switches the player's current action to [`ATTACK_LABEL`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttackCommand {
    previous: Snapshot<String>,
}

impl AttackCommand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for AttackCommand {
    type Receiver = Player;

    fn execute(&mut self, player: &mut Player) -> CommandResult<()> {
        self.previous.capture(player.current_action().to_owned())?;
        player.set_action(ATTACK_LABEL);
        Ok(())
    }

    fn undo(&mut self, player: &mut Player) -> CommandResult<()> {
        let previous = self.previous.restore()?;
        player.set_action(previous);
        Ok(())
    }

    fn state(&self) -> CommandState {
        self.previous.state()
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed(ATTACK_LABEL)
    }
}

/// Closed set of commands a [`Player`] understands.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Move(MoveCommand),
    Attack(AttackCommand),
}

impl PlayerCommand {
    #[must_use]
    pub fn move_by(dx: f32, dy: f32) -> Self {
        PlayerCommand::Move(MoveCommand::new(dx, dy))
    }

    #[must_use]
    pub fn attack() -> Self {
        PlayerCommand::Attack(AttackCommand::new())
    }
}

impl From<MoveCommand> for PlayerCommand {
    fn from(command: MoveCommand) -> Self {
        PlayerCommand::Move(command)
    }
}

impl From<AttackCommand> for PlayerCommand {
    fn from(command: AttackCommand) -> Self {
        PlayerCommand::Attack(command)
    }
}

impl Command for PlayerCommand {
    type Receiver = Player;

    fn execute(&mut self, player: &mut Player) -> CommandResult<()> {
        match self {
            PlayerCommand::Move(command) => command.execute(player),
            PlayerCommand::Attack(command) => command.execute(player),
        }
    }

    fn undo(&mut self, player: &mut Player) -> CommandResult<()> {
        match self {
            PlayerCommand::Move(command) => command.undo(player),
            PlayerCommand::Attack(command) => command.undo(player),
        }
    }

    fn state(&self) -> CommandState {
        match self {
            PlayerCommand::Move(command) => command.state(),
            PlayerCommand::Attack(command) => command.state(),
        }
    }

    fn description(&self) -> Cow<'_, str> {
        match self {
            PlayerCommand::Move(command) => command.description(),
            PlayerCommand::Attack(command) => command.description(),
        }
    }
}
