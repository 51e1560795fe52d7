use std::fmt;

use thiserror::Error;

/// Result type for command operations.
pub type CommandResult<T> = Result<T, CommandError>;

/// Lifecycle of a single command value.
///
/// A command moves `Created → Executed → Undone` and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandState {
    Created,
    Executed,
    Undone,
}

impl fmt::Display for CommandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandState::Created => "created",
            CommandState::Executed => "executed",
            CommandState::Undone => "undone",
        };
        f.write_str(name)
    }
}

/// The two calls a command answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Execute,
    Undo,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Execute => f.write_str("execute"),
            Operation::Undo => f.write_str("undo"),
        }
    }
}

/// Errors surfaced by commands and invokers.
///
/// Undoing with an empty history is not an error and has no variant here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A command was asked to do something its lifecycle does not allow,
    /// e.g. executing twice or undoing before executing.
    #[error("invalid command state: cannot {operation} a command that is {state}")]
    InvalidCommandState {
        operation: Operation,
        state: CommandState,
    },

    #[error("no command has been set on the invoker")]
    NoPendingCommand,
}

impl CommandError {
    pub(crate) fn invalid(operation: Operation, state: CommandState) -> Self {
        CommandError::InvalidCommandState { operation, state }
    }
}
