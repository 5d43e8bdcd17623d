use std::collections::HashMap;

use super::types::{PlayerId, StandingEntry};
use crate::database::models::{Match, Player};

/// Ranks every registered player by wins, most wins first.
///
/// Players with no matches yet appear with zero wins and zero matches
/// played. Ties are left in player retrieval order (registration order);
/// there is no secondary sort key.
pub fn standings(players: &[Player], matches: &[Match]) -> Vec<StandingEntry> {
    let wins = count_wins(matches);
    let played = count_matches_played(matches);

    let mut entries: Vec<StandingEntry> = players
        .iter()
        .map(|player| StandingEntry {
            player_id: player.id,
            name: player.name.clone(),
            wins: wins.get(&player.id).copied().unwrap_or(0),
            matches_played: played.get(&player.id).copied().unwrap_or(0),
        })
        .collect();

    // Stable sort keeps registration order within equal win counts.
    entries.sort_by_key(|entry| std::cmp::Reverse(entry.wins));
    entries
}

pub(crate) fn count_wins(matches: &[Match]) -> HashMap<PlayerId, i32> {
    let mut wins = HashMap::new();
    for m in matches {
        *wins.entry(m.winner_id).or_insert(0) += 1;
    }
    wins
}

fn count_matches_played(matches: &[Match]) -> HashMap<PlayerId, i32> {
    let mut played = HashMap::new();
    for m in matches {
        *played.entry(m.winner_id).or_insert(0) += 1;
        *played.entry(m.loser_id).or_insert(0) += 1;
    }
    played
}
