use std::process::ExitCode;

use command_invoker::prelude::*;
use tracing::{error, info, Level};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => InvokerConfig::from_toml_file(path)?,
        None => InvokerConfig::default(),
    };

    let mut session = Session::<PlayerCommand>::with_config(Player::new(), &config);

    session.set_command(PlayerCommand::move_by(10.0, 0.0));
    session.execute_command()?;
    info!(position = %session.receiver().position(), "player moved");

    session.set_command(PlayerCommand::attack());
    session.execute_command()?;
    info!(action = session.receiver().current_action(), "player attacked");

    session.undo_last_command()?;
    info!(
        action = session.receiver().current_action(),
        position = %session.receiver().position(),
        "attack undone"
    );

    session.undo_last_command()?;
    info!(position = %session.receiver().position(), "move undone");

    if session.undo_last_command()?.is_none() {
        info!("history empty, nothing left to undo");
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "demo failed");
            ExitCode::FAILURE
        }
    }
}
