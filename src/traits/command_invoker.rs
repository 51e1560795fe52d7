use std::num::NonZeroUsize;

use super::command::Command;
use crate::error::CommandResult;

pub trait CommandInvoker<C: Command> {
    fn set_command(&mut self, command: C) -> Option<C>;
    fn execute_command(&mut self, receiver: &mut C::Receiver) -> CommandResult<()>;
    fn undo_last_command(&mut self, receiver: &mut C::Receiver) -> CommandResult<Option<C>>;
    fn set_history_limit(&mut self, limit: Option<NonZeroUsize>);

    fn execute(&mut self, command: C, receiver: &mut C::Receiver) -> CommandResult<()> {
        self.set_command(command);
        self.execute_command(receiver)
    }

    /// Executes `commands` in order, stopping at the first failure. Commands
    /// before the failing one stay executed and recorded.
    fn batch_execute(&mut self, commands: Vec<C>, receiver: &mut C::Receiver) -> CommandResult<()> {
        for command in commands {
            self.execute(command, receiver)?;
        }
        Ok(())
    }
}
