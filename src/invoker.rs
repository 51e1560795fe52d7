use std::{borrow::Cow, num::NonZeroUsize};

use tracing::{debug, trace};

use crate::{
    config::InvokerConfig,
    error::{CommandError, CommandResult},
    history::History,
    traits::{command::Command, command_invoker::CommandInvoker},
};

/// Binds, executes and undoes commands against a receiver passed in per call.
///
/// Commands follow the set-then-execute idiom: [`set_command`] stores a
/// pending command and [`execute_command`] runs it and moves it into the
/// history. [`undo_last_command`] pops the most recent entry, undoes it and
/// hands it back, so the same entry can never be undone twice.
///
/// [`set_command`]: CommandInvoker::set_command
/// [`execute_command`]: CommandInvoker::execute_command
/// [`undo_last_command`]: CommandInvoker::undo_last_command
#[derive(Debug)]
pub struct Invoker<C: Command> {
    pending: Option<C>,
    history: History<C>,
}

impl<C: Command> Invoker<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&InvokerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &InvokerConfig) -> Self {
        Self {
            pending: None,
            history: History::new(config.history_limit),
        }
    }

    #[must_use]
    pub fn pending(&self) -> Option<&C> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &History<C> {
        &self.history
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Descriptions of the undoable commands, most recent first.
    #[must_use]
    pub fn undo_descriptions(&self) -> Vec<Cow<'_, str>> {
        self.history.descriptions()
    }

    /// Forgets every recorded command without undoing it.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl<C: Command> Default for Invoker<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command> CommandInvoker<C> for Invoker<C> {
    fn set_command(&mut self, command: C) -> Option<C> {
        debug!(command = %command.description(), "command set");
        self.pending.replace(command)
    }

    fn execute_command(&mut self, receiver: &mut C::Receiver) -> CommandResult<()> {
        let mut command = self.pending.take().ok_or(CommandError::NoPendingCommand)?;

        command.execute(receiver)?;
        debug!(
            command = %command.description(),
            depth = self.history.len() + 1,
            "command executed"
        );

        self.history.push(command);
        Ok(())
    }

    fn undo_last_command(&mut self, receiver: &mut C::Receiver) -> CommandResult<Option<C>> {
        let Some(mut command) = self.history.pop() else {
            trace!("undo requested with empty history");
            return Ok(None);
        };

        if let Err(err) = command.undo(receiver) {
            self.history.push(command);
            return Err(err);
        }

        debug!(command = %command.description(), depth = self.history.len(), "command undone");
        Ok(Some(command))
    }

    fn set_history_limit(&mut self, limit: Option<NonZeroUsize>) {
        self.history.set_limit(limit);
    }
}
