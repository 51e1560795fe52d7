use crate::error::{CommandError, CommandResult, CommandState, Operation};

/// The receiver state a command overwrites, captured at execute time.
///
/// The variant doubles as the command's lifecycle: `Pending` is a created
/// command, `Captured` an executed one and `Restored` an undone one. Commands
/// keep one of these per field they touch and let it police the
/// execute-once, undo-once contract.
///
/// # Example
///
/// ```
/// use command_invoker::snapshot::Snapshot;
/// use command_invoker::error::CommandState;
///
/// let mut snapshot = Snapshot::default();
/// snapshot.capture(5).unwrap();
/// assert_eq!(snapshot.state(), CommandState::Executed);
/// assert_eq!(snapshot.restore().unwrap(), 5);
/// assert_eq!(snapshot.state(), CommandState::Undone);
/// assert!(snapshot.restore().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Snapshot<T> {
    #[default]
    Pending,
    Captured(T),
    Restored,
}

impl<T> Snapshot<T> {
    #[must_use]
    pub fn state(&self) -> CommandState {
        match self {
            Snapshot::Pending => CommandState::Created,
            Snapshot::Captured(_) => CommandState::Executed,
            Snapshot::Restored => CommandState::Undone,
        }
    }

    /// Fails unless the snapshot is still pending. Call this before mutating
    /// the receiver so a rejected execute leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidCommandState`] if a value was already
    /// captured or restored.
    pub fn ensure_pending(&self) -> CommandResult<()> {
        match self {
            Snapshot::Pending => Ok(()),
            other => Err(CommandError::invalid(Operation::Execute, other.state())),
        }
    }

    /// Stores the pre-execute value.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidCommandState`] if the snapshot is not pending.
    pub fn capture(&mut self, value: T) -> CommandResult<()> {
        self.ensure_pending()?;
        *self = Snapshot::Captured(value);
        Ok(())
    }

    /// Hands back the captured value and marks the snapshot restored.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidCommandState`] unless a value is captured.
    pub fn restore(&mut self) -> CommandResult<T> {
        match std::mem::replace(self, Snapshot::Restored) {
            Snapshot::Captured(value) => Ok(value),
            other => {
                let state = other.state();
                *self = other;
                Err(CommandError::invalid(Operation::Undo, state))
            }
        }
    }
}
