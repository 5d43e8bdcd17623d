pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod services;
pub mod tournament;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::TournamentService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_service() -> Result<TournamentService> {
    let config = AppConfig::new();
    let service = TournamentService::new(&config)?;
    Ok(service)
}

pub fn handle_init() -> Result<()> {
    let service = open_service()?;
    service.init_schema()?;
    println!("Database schema created");
    Ok(())
}

pub fn handle_register(name: &str) -> Result<()> {
    let service = open_service()?;
    let player = service.register_player(name)?;
    println!("Registered '{}' with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(winner_id: i32, loser_id: i32) -> Result<()> {
    let service = open_service()?;
    let result = service.report_match(winner_id, loser_id)?;
    println!(
        "Match {} recorded: {} beat {}",
        result.id, result.winner_id, result.loser_id
    );
    Ok(())
}

pub fn handle_standings(json: bool) -> Result<()> {
    let service = open_service()?;
    let entries = service.standings()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{:>4}  {:<24} {:>4} {:>7}", "id", "name", "wins", "played");
    for entry in &entries {
        println!(
            "{:>4}  {:<24} {:>4} {:>7}",
            entry.player_id, entry.name, entry.wins, entry.matches_played
        );
    }
    Ok(())
}

pub fn handle_pair(json: bool) -> Result<()> {
    let service = open_service()?;
    let pairings = service.swiss_pairings()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pairings)?);
        return Ok(());
    }

    for pairing in &pairings {
        println!(
            "{} ({}) vs {} ({})",
            pairing.first_name, pairing.first_id, pairing.second_name, pairing.second_id
        );
    }
    Ok(())
}

pub fn handle_reset() -> Result<()> {
    let service = open_service()?;
    service.delete_all_records()?;
    println!("All matches and players deleted");
    Ok(())
}
