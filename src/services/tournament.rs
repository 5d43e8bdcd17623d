use log::info;

use crate::config::settings::AppConfig;
use crate::database::models::{Match, Player};
use crate::database::{self, DbConn, DbPool};
use crate::errors::{Result, TournamentError};
use crate::tournament::{self, Pairing, PlayerId, StandingEntry};

/// Binds the record store to the standings and pairing engine. Owns the
/// connection pool; every operation checks out a connection, runs, and
/// returns it.
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.database.resolve_path())?;
        Ok(Self { pool })
    }

    /// For callers that already hold a pool, such as tests running against
    /// an in-memory store.
    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }

    /// Drops and recreates both tables.
    pub fn init_schema(&self) -> Result<()> {
        let mut conn = self.conn()?;
        database::setup::reset_database(&mut conn)
    }

    /// Registers a player under the next sequential id.
    ///
    /// The id is computed as count + 1 with a read-then-insert, so
    /// registration is single-writer only. Names need not be unique.
    pub fn register_player(&self, name: &str) -> Result<Player> {
        let mut conn = self.conn()?;
        let next_id = database::players::count(&mut conn)? + 1;
        let player = database::players::insert_player(&mut conn, next_id, name)?;

        info!("Registered player '{}' with id {}", player.name, player.id);
        Ok(player)
    }

    /// Records the outcome of a single completed match.
    ///
    /// A player cannot beat themselves; that is rejected before the store
    /// is touched. Id assignment is count + 1, single-writer only.
    pub fn report_match(&self, winner_id: PlayerId, loser_id: PlayerId) -> Result<Match> {
        if winner_id == loser_id {
            return Err(TournamentError::InvalidArgument(format!(
                "winner and loser must differ, got id {winner_id} for both"
            )));
        }

        let mut conn = self.conn()?;
        let next_id = database::matches::count(&mut conn)? + 1;
        let result = database::matches::insert_match(&mut conn, next_id, winner_id, loser_id)?;

        info!(
            "Recorded match {}: {} beat {}",
            result.id, result.winner_id, result.loser_id
        );
        Ok(result)
    }

    /// Current ranking, computed fresh from the full match history.
    pub fn standings(&self) -> Result<Vec<StandingEntry>> {
        let mut conn = self.conn()?;
        let players = database::players::list_all(&mut conn)?;
        let matches = database::matches::list_all(&mut conn)?;

        Ok(tournament::standings(&players, &matches))
    }

    /// Pairings for the next round.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let mut conn = self.conn()?;
        let players = database::players::list_all(&mut conn)?;
        let matches = database::matches::list_all(&mut conn)?;

        Ok(tournament::swiss_pairings(&players, &matches))
    }

    pub fn count_players(&self) -> Result<i32> {
        let mut conn = self.conn()?;
        database::players::count(&mut conn)
    }

    pub fn count_matches(&self) -> Result<i32> {
        let mut conn = self.conn()?;
        database::matches::count(&mut conn)
    }

    /// Deletes every record. Matches go first, they reference players.
    pub fn delete_all_records(&self) -> Result<()> {
        let mut conn = self.conn()?;
        database::matches::delete_all(&mut conn)?;
        database::players::delete_all(&mut conn)?;

        info!("Deleted all matches and players");
        Ok(())
    }
}
