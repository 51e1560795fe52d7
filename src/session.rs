use std::{borrow::Cow, fmt, num::NonZeroUsize};

use crate::{
    config::InvokerConfig,
    error::CommandResult,
    invoker::Invoker,
    traits::{command::Command, command_invoker::CommandInvoker},
};

/// One receiver together with the invoker that drives it.
///
/// Each session is an independent command stream; nothing is shared between
/// two sessions, even when they hold the same command type.
pub struct Session<C: Command> {
    receiver: C::Receiver,
    invoker: Invoker<C>,
}

impl<C: Command> Session<C> {
    pub fn new(receiver: C::Receiver) -> Self {
        Self::with_config(receiver, &InvokerConfig::default())
    }

    pub fn with_config(receiver: C::Receiver, config: &InvokerConfig) -> Self {
        Self {
            receiver,
            invoker: Invoker::with_config(config),
        }
    }

    #[must_use]
    pub fn receiver(&self) -> &C::Receiver {
        &self.receiver
    }

    #[must_use]
    pub fn invoker(&self) -> &Invoker<C> {
        &self.invoker
    }

    #[must_use]
    pub fn into_receiver(self) -> C::Receiver {
        self.receiver
    }

    pub fn set_command(&mut self, command: C) -> Option<C> {
        self.invoker.set_command(command)
    }

    /// # Errors
    ///
    /// See [`CommandInvoker::execute_command`].
    pub fn execute_command(&mut self) -> CommandResult<()> {
        self.invoker.execute_command(&mut self.receiver)
    }

    /// # Errors
    ///
    /// See [`CommandInvoker::execute`].
    pub fn execute(&mut self, command: C) -> CommandResult<()> {
        self.invoker.execute(command, &mut self.receiver)
    }

    /// # Errors
    ///
    /// See [`CommandInvoker::batch_execute`].
    pub fn batch_execute(&mut self, commands: Vec<C>) -> CommandResult<()> {
        self.invoker.batch_execute(commands, &mut self.receiver)
    }

    /// Undoes the most recent command. An empty history yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// See [`CommandInvoker::undo_last_command`].
    pub fn undo_last_command(&mut self) -> CommandResult<Option<C>> {
        self.invoker.undo_last_command(&mut self.receiver)
    }

    /// Undoes every recorded command, returning how many were undone.
    ///
    /// # Errors
    ///
    /// Stops at the first command whose undo fails.
    pub fn undo_all(&mut self) -> CommandResult<usize> {
        let mut undone = 0;
        while self.undo_last_command()?.is_some() {
            undone += 1;
        }
        Ok(undone)
    }

    pub fn set_history_limit(&mut self, limit: Option<NonZeroUsize>) {
        self.invoker.set_history_limit(limit);
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.invoker.history_len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.invoker.can_undo()
    }

    #[must_use]
    pub fn undo_descriptions(&self) -> Vec<Cow<'_, str>> {
        self.invoker.undo_descriptions()
    }
}

impl<C> Default for Session<C>
where
    C: Command,
    C::Receiver: Default,
{
    fn default() -> Self {
        Self::new(C::Receiver::default())
    }
}

impl<C> fmt::Debug for Session<C>
where
    C: Command + fmt::Debug,
    C::Receiver: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("receiver", &self.receiver)
            .field("invoker", &self.invoker)
            .finish()
    }
}
