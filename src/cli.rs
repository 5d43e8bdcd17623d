use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "swiss-pairings tournament tracker")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create (or recreate) the tournament database schema
    Init,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the winning player
        winner_id: i32,
        /// Id of the losing player
        loser_id: i32,
    },
    /// Show the current ranking, sorted by wins
    Standings {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Generate pairings for the next round
    Pair {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete all recorded matches and players
    Reset,
}
