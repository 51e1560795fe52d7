use std::borrow::Cow;

use crate::error::{CommandResult, CommandState};

/// A reversible unit of work against a receiver.
///
/// # Associated Types
///
/// * `Receiver`: The type of the domain object the command mutates.
///
/// # Required Methods
///
/// * `execute(&mut self, receiver: &mut Self::Receiver)`: Captures the receiver state the command will
///   overwrite, then applies the forward mutation.
/// * `undo(&mut self, receiver: &mut Self::Receiver)`: Restores the state captured by `execute`.
/// * `state(&self) -> CommandState`: Where the command is in its `Created → Executed → Undone` lifecycle.
///
/// # Provided Methods
///
/// * `description(&self) -> Cow<str>`: Returns a description of the command. The default implementation returns "Unknown command".
///
/// # Contract
///
/// A command is executed at most once and undone at most once, in that order. Implementations
/// report a violation as [`CommandError::InvalidCommandState`](crate::error::CommandError) and
/// must not touch the receiver when they do.
///
/// # Example
///
/// ```
/// use command_invoker::prelude::*;
///
/// struct Increment {
///     by: i32,
///     before: Snapshot<i32>,
/// }
///
/// impl Command for Increment {
///     type Receiver = i32;
///
///     fn execute(&mut self, receiver: &mut i32) -> CommandResult<()> {
///         self.before.capture(*receiver)?;
///         *receiver += self.by;
///         Ok(())
///     }
///
///     fn undo(&mut self, receiver: &mut i32) -> CommandResult<()> {
///         *receiver = self.before.restore()?;
///         Ok(())
///     }
///
///     fn state(&self) -> CommandState {
///         self.before.state()
///     }
/// }
///
/// let mut value = 1;
/// let mut cmd = Increment { by: 2, before: Snapshot::default() };
/// cmd.execute(&mut value).unwrap();
/// assert_eq!(value, 3);
/// cmd.undo(&mut value).unwrap();
/// assert_eq!(value, 1);
/// assert!(cmd.undo(&mut value).is_err());
/// ```
pub trait Command {
    type Receiver;

    /// Executes the command against the given receiver.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommandState` if the command was already executed.
    fn execute(&mut self, receiver: &mut Self::Receiver) -> CommandResult<()>;

    /// Undoes the command against the given receiver.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommandState` unless the command is currently executed.
    fn undo(&mut self, receiver: &mut Self::Receiver) -> CommandResult<()>;

    fn state(&self) -> CommandState;

    /// Returns a description of the command. The default implementation returns "Unknown command".
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Unknown command")
    }
}
