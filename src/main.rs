use anyhow::Result;

use swiss_pairings::cli::Command;
use swiss_pairings::{
    handle_init, handle_pair, handle_register, handle_report, handle_reset, handle_standings,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Init => handle_init(),
        Command::Register { name } => handle_register(name),
        Command::Report {
            winner_id,
            loser_id,
        } => handle_report(*winner_id, *loser_id),
        Command::Standings { json } => handle_standings(*json),
        Command::Pair { json } => handle_pair(*json),
        Command::Reset => handle_reset(),
    }
}
