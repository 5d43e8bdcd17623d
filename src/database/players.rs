use rusqlite::params;

use super::connection::DbConn;
use super::models::Player;
use crate::errors::Result;

pub fn insert_player(conn: &mut DbConn, id: i32, name: &str) -> Result<Player> {
    let sql =
        "INSERT INTO players (player_id, name) VALUES (?1, ?2) RETURNING player_id, name, created_at";

    let player = conn.query_row(sql, params![id, name], parse_player_row)?;
    Ok(player)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

/// All registered players in registration order.
pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT player_id, name, created_at FROM players ORDER BY player_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count(conn: &mut DbConn) -> Result<i32> {
    let sql = "SELECT COUNT(player_id) FROM players";

    let count = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(count)
}

pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    conn.execute("DELETE FROM players", [])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connection, setup};

    fn test_conn() -> DbConn {
        let pool = connection::create_memory_pool().unwrap();
        let mut conn = connection::get_connection(&pool).unwrap();
        setup::reset_database(&mut conn).unwrap();
        conn
    }

    #[test]
    fn insert_and_list_preserves_registration_order() {
        let mut conn = test_conn();

        insert_player(&mut conn, 1, "Marta").unwrap();
        insert_player(&mut conn, 2, "Jacek").unwrap();

        let players = list_all(&mut conn).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "Marta");
        assert_eq!(players[1].name, "Jacek");
        assert_eq!(count(&mut conn).unwrap(), 2);
    }

    #[test]
    fn duplicate_id_is_a_constraint_violation() {
        use crate::errors::TournamentError;

        let mut conn = test_conn();
        insert_player(&mut conn, 1, "Marta").unwrap();

        let err = insert_player(&mut conn, 1, "Jacek").unwrap_err();
        assert!(matches!(err, TournamentError::ConstraintViolation(_)));
    }

    #[test]
    fn delete_all_empties_the_table() {
        let mut conn = test_conn();
        insert_player(&mut conn, 1, "Marta").unwrap();

        delete_all(&mut conn).unwrap();
        assert_eq!(count(&mut conn).unwrap(), 0);
    }
}
