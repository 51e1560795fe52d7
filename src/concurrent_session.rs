use std::{fmt, num::NonZeroUsize, sync::Arc};

use parking_lot::{Mutex, MutexGuard};

use crate::{
    config::InvokerConfig, error::CommandResult, session::Session, traits::command::Command,
};

/// A thread-safe handle to a [`Session`], shareable by cloning.
///
/// Every operation takes one lock around both the history update and the
/// receiver mutation, so an execute or undo is never observed half done and
/// undo order follows the order in which callers acquired the lock.
///
/// # Examples
///
/// ```
/// use command_invoker::prelude::*;
///
/// let session = ConcurrentSession::<PlayerCommand>::new(Player::new());
/// let worker = session.clone();
///
/// std::thread::spawn(move || worker.execute(PlayerCommand::move_by(10.0, 0.0)))
///     .join()
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(session.with_receiver(Player::position), Position::new(10.0, 0.0));
/// session.undo_last_command().unwrap();
/// assert_eq!(session.with_receiver(Player::position), Position::new(0.0, 0.0));
/// ```
pub struct ConcurrentSession<C: Command> {
    inner: Arc<Mutex<Session<C>>>,
}

impl<C> ConcurrentSession<C>
where
    C: Command + Send,
    C::Receiver: Send,
{
    pub fn new(receiver: C::Receiver) -> Self {
        Self::from(Session::new(receiver))
    }

    pub fn with_config(receiver: C::Receiver, config: &InvokerConfig) -> Self {
        Self::from(Session::with_config(receiver, config))
    }

    /// # Errors
    ///
    /// See [`Session::execute`].
    pub fn execute(&self, command: C) -> CommandResult<()> {
        self.inner.lock().execute(command)
    }

    /// Runs the whole batch under a single lock, so no other caller's command
    /// lands between two of these.
    ///
    /// # Errors
    ///
    /// See [`Session::batch_execute`].
    pub fn batch_execute(&self, commands: Vec<C>) -> CommandResult<()> {
        self.inner.lock().batch_execute(commands)
    }

    /// # Errors
    ///
    /// See [`Session::undo_last_command`].
    pub fn undo_last_command(&self) -> CommandResult<Option<C>> {
        self.inner.lock().undo_last_command()
    }

    pub fn set_history_limit(&self, limit: Option<NonZeroUsize>) {
        self.inner.lock().set_history_limit(limit);
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.inner.lock().history_len()
    }

    pub fn with_receiver<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&C::Receiver) -> R,
    {
        f(self.inner.lock().receiver())
    }

    pub fn lock(&self) -> MutexGuard<'_, Session<C>> {
        self.inner.lock()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn try_lock(&self) -> Option<MutexGuard<'_, Session<C>>> {
        self.inner.try_lock()
    }

    /// Unwraps the session if this is the last handle to it, otherwise hands
    /// the handle back.
    ///
    /// # Errors
    ///
    /// Returns `self` while other clones are alive.
    pub fn try_into_inner(self) -> Result<Session<C>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<C: Command> Clone for ConcurrentSession<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Command> From<Session<C>> for ConcurrentSession<C> {
    fn from(session: Session<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }
}

impl<C> fmt::Debug for ConcurrentSession<C>
where
    C: Command + fmt::Debug,
    C::Receiver: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(session) => write!(f, "ConcurrentSession({:?})", *session),
            None => write!(f, "ConcurrentSession(<locked>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{hint::black_box, thread, time};

    use rand::Rng;

    use super::*;
    use crate::{
        commands::{PlayerCommand, ATTACK_LABEL},
        error::{CommandError, CommandState},
        player::{Player, Position},
    };

    #[test]
    fn test_execute_and_undo() {
        let session = ConcurrentSession::<PlayerCommand>::new(Player::new());

        session.execute(PlayerCommand::move_by(10.0, 0.0)).unwrap();
        session.execute(PlayerCommand::attack()).unwrap();
        assert_eq!(session.with_receiver(|p| p.current_action().to_owned()), ATTACK_LABEL);
        assert_eq!(session.history_len(), 2);

        let undone = session.undo_last_command().unwrap().unwrap();
        assert_eq!(undone.state(), CommandState::Undone);
        assert!(session.with_receiver(|p| p.current_action().is_empty()));
        assert_eq!(session.with_receiver(Player::position), Position::new(10.0, 0.0));
    }

    #[test]
    fn test_clone_shares_session() {
        let session = ConcurrentSession::<PlayerCommand>::new(Player::new());
        let other = session.clone();

        other.execute(PlayerCommand::move_by(1.0, 2.0)).unwrap();
        assert_eq!(session.with_receiver(Player::position), Position::new(1.0, 2.0));
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_empty_undo_is_noop() {
        let session = ConcurrentSession::<PlayerCommand>::new(Player::new());

        assert!(session.undo_last_command().unwrap().is_none());
        assert!(session.undo_last_command().unwrap().is_none());
        assert_eq!(session.with_receiver(Player::clone), Player::new());
    }

    #[test]
    fn test_concurrent_rng() {
        let count = rand::thread_rng().gen_range(10..80);
        let session = ConcurrentSession::<PlayerCommand>::new(Player::new());

        let mut handles = Vec::new();
        for _ in 0..count {
            let dx = f32::from(rand::thread_rng().gen_range(0_u8..20));
            let session_clone = session.clone();

            handles.push(black_box(thread::spawn(move || {
                thread::sleep(time::Duration::from_millis(
                    rand::thread_rng().gen_range(0..50),
                ));
                session_clone
                    .execute(PlayerCommand::move_by(dx, 0.0))
                    .map(|()| dx)
            })));
        }

        let mut sum = 0.0;
        for handle in handles {
            let result = handle.join();
            assert!(result.is_ok(), "Thread panicked during execution");
            sum += result.expect("Thread should return a value").unwrap();
        }

        assert_eq!(session.with_receiver(Player::position), Position::new(sum, 0.0));
        assert_eq!(session.history_len(), count);

        let mut handles = Vec::new();
        for _ in 0..count {
            let session_clone = session.clone();
            handles.push(thread::spawn(move || {
                thread::sleep(time::Duration::from_millis(
                    rand::thread_rng().gen_range(0..50),
                ));
                session_clone.undo_last_command().map(|undone| undone.is_some())
            }));
        }

        for handle in handles {
            let undone = handle.join().expect("Thread panicked during undo");
            assert_eq!(undone, Ok(true));
        }

        assert_eq!(session.with_receiver(Player::clone), Player::new());
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn test_batch_is_contiguous() {
        let session = ConcurrentSession::<PlayerCommand>::new(Player::new());
        session
            .batch_execute(vec![PlayerCommand::move_by(1.0, 0.0), PlayerCommand::attack()])
            .unwrap();

        assert_eq!(session.lock().undo_descriptions(), vec!["Attack", "Move(1, 0)"]);
    }

    #[test]
    fn test_rejected_command_surfaces_error() {
        let session = ConcurrentSession::<PlayerCommand>::new(Player::new());
        let mut spent = PlayerCommand::attack();
        spent.execute(&mut Player::new()).unwrap();

        let err = session.execute(spent).unwrap_err();
        assert!(matches!(err, CommandError::InvalidCommandState { .. }));
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn test_try_into_inner() {
        let session = ConcurrentSession::<PlayerCommand>::new(Player::new());
        let other = session.clone();
        session.execute(PlayerCommand::attack()).unwrap();

        let session = session.try_into_inner().unwrap_err();
        drop(other);

        let inner = session.try_into_inner().unwrap();
        assert_eq!(inner.into_receiver().current_action(), ATTACK_LABEL);
    }

    #[test]
    fn test_debug() {
        let session = ConcurrentSession::<PlayerCommand>::new(Player::new());
        assert!(format!("{session:?}").starts_with("ConcurrentSession(Session"));

        let _guard = session.lock();
        assert_eq!(format!("{session:?}"), "ConcurrentSession(<locked>)");
    }
}
