use rusqlite::params;

use super::connection::DbConn;
use super::models::Match;
use crate::errors::Result;

pub fn insert_match(conn: &mut DbConn, id: i32, winner_id: i32, loser_id: i32) -> Result<Match> {
    let sql = "INSERT INTO matches (match_id, winner_id, loser_id) VALUES (?1, ?2, ?3) RETURNING match_id, winner_id, loser_id, created_at";

    let result = conn.query_row(sql, params![id, winner_id, loser_id], parse_match_row)?;
    Ok(result)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// All recorded matches in reporting order.
pub fn list_all(conn: &mut DbConn) -> Result<Vec<Match>> {
    let sql = "SELECT match_id, winner_id, loser_id, created_at FROM matches ORDER BY match_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count(conn: &mut DbConn) -> Result<i32> {
    let sql = "SELECT COUNT(match_id) FROM matches";

    let count = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(count)
}

pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    conn.execute("DELETE FROM matches", [])?;
    Ok(())
}
