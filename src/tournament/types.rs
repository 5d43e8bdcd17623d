use serde::{Deserialize, Serialize};

pub type PlayerId = i32;

/// One row of the ranking table. Derived fresh from the match history on
/// every call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: i32,
    pub matches_played: i32,
}

/// A head-to-head assignment for the next round.
///
/// `first_id < second_id` always holds, so a pair and its mirror cannot
/// both appear in a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub first_id: PlayerId,
    pub first_name: String,
    pub second_id: PlayerId,
    pub second_name: String,
}
