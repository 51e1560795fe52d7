#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::correctness)]
#![warn(clippy::complexity)]
#![warn(clippy::suspicious)]
#![warn(clippy::cargo)]

pub mod commands;
pub mod concurrent_session;
pub mod config;
pub mod error;
pub mod history;
pub mod invoker;
pub mod player;
pub mod session;
pub mod snapshot;
pub mod traits;

pub mod prelude {
	pub use crate::commands::{AttackCommand, MoveCommand, PlayerCommand, ATTACK_LABEL};
	pub use crate::concurrent_session::ConcurrentSession;
	pub use crate::config::{ConfigError, InvokerConfig};
	pub use crate::error::{CommandError, CommandResult, CommandState, Operation};
	pub use crate::history::History;
	pub use crate::invoker::Invoker;
	pub use crate::player::{Player, Position};
	pub use crate::session::Session;
	pub use crate::snapshot::Snapshot;
	pub use crate::traits::command::Command;
	pub use crate::traits::command_invoker::CommandInvoker;
}
