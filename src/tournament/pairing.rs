use std::collections::HashSet;

use log::debug;

use super::standings::count_wins;
use super::types::{Pairing, PlayerId};
use crate::database::models::{Match, Player};

/// Derives next-round pairings from the current win records.
///
/// Two players are candidates for each other when their win counts are
/// exactly equal and they have never met before, in either orientation.
/// Candidates are enumerated lowest win count first and resolved by greedy
/// first-fit: a candidate pair is accepted only while both players are
/// still unassigned this round.
///
/// Greedy first-fit is not a maximum matching. A player appearing in
/// several candidate pairs is bound to the first one encountered, which
/// can leave a solvable configuration partially unpaired. With an odd
/// number of players (or no remaining opponent at a win count), the
/// leftover player simply has no pair.
pub fn swiss_pairings(players: &[Player], matches: &[Match]) -> Vec<Pairing> {
    let ranked = rank_ascending_by_wins(players, matches);
    let candidates = candidate_pairs(&ranked, matches);
    debug!(
        "{} candidate pairs for {} players",
        candidates.len(),
        players.len()
    );

    select_first_fit(candidates)
}

/// Players with their win counts, lowest win count first. The sort is
/// stable, so equal win counts stay in retrieval order.
fn rank_ascending_by_wins<'a>(
    players: &'a [Player],
    matches: &[Match],
) -> Vec<(&'a Player, i32)> {
    let wins = count_wins(matches);

    let mut ranked: Vec<(&Player, i32)> = players
        .iter()
        .map(|player| (player, wins.get(&player.id).copied().unwrap_or(0)))
        .collect();

    ranked.sort_by_key(|(_, wins)| *wins);
    ranked
}

/// Every unordered pair of equal-win players with no prior meeting, in
/// enumeration order over the ascending-by-wins ranking. The id ordering
/// inside each pair keeps a pair and its mirror from both appearing.
fn candidate_pairs(ranked: &[(&Player, i32)], matches: &[Match]) -> Vec<Pairing> {
    let met = prior_meetings(matches);

    let mut candidates = Vec::new();
    for (first, first_wins) in ranked {
        for (second, second_wins) in ranked {
            if first.id >= second.id || first_wins != second_wins {
                continue;
            }
            if met.contains(&meeting_key(first.id, second.id)) {
                continue;
            }
            candidates.push(Pairing {
                first_id: first.id,
                first_name: first.name.clone(),
                second_id: second.id,
                second_name: second.name.clone(),
            });
        }
    }

    candidates
}

fn prior_meetings(matches: &[Match]) -> HashSet<(PlayerId, PlayerId)> {
    matches
        .iter()
        .map(|m| meeting_key(m.winner_id, m.loser_id))
        .collect()
}

fn meeting_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    (a.min(b), a.max(b))
}

/// Walks the candidate list once, accepting a pair only while neither
/// player is assigned yet.
fn select_first_fit(candidates: Vec<Pairing>) -> Vec<Pairing> {
    let mut assigned: HashSet<PlayerId> = HashSet::new();
    let mut pairings = Vec::new();

    for candidate in candidates {
        if assigned.contains(&candidate.first_id) || assigned.contains(&candidate.second_id) {
            continue;
        }
        assigned.insert(candidate.first_id);
        assigned.insert(candidate.second_id);
        pairings.push(candidate);
    }

    pairings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::test_support::{match_row, player_row};

    fn four_players() -> Vec<Player> {
        vec![
            player_row(1, "Anna"),
            player_row(2, "Bartek"),
            player_row(3, "Celina"),
            player_row(4, "Dawid"),
        ]
    }

    #[test]
    fn fresh_field_is_fully_paired() {
        let players = four_players();

        let pairings = swiss_pairings(&players, &[]);

        assert_eq!(pairings.len(), 2);
        let mut seen: Vec<PlayerId> = pairings
            .iter()
            .flat_map(|p| [p.first_id, p.second_id])
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn winners_pair_with_winners_and_losers_with_losers() {
        let players = four_players();
        let matches = vec![match_row(1, 1, 2), match_row(2, 3, 4)];

        let pairings = swiss_pairings(&players, &matches);

        assert_eq!(pairings.len(), 2);
        // Losers (zero wins) come first in the candidate ordering.
        assert_eq!((pairings[0].first_id, pairings[0].second_id), (2, 4));
        assert_eq!((pairings[1].first_id, pairings[1].second_id), (1, 3));
    }

    #[test]
    fn players_who_met_are_never_repaired() {
        let players = vec![player_row(1, "Anna"), player_row(2, "Bartek")];
        let matches = vec![match_row(1, 1, 2)];

        // Their win counts differ now, and even once equal again the prior
        // meeting keeps them apart.
        assert!(swiss_pairings(&players, &matches).is_empty());

        let players = four_players();
        let matches = vec![
            match_row(1, 1, 2),
            match_row(2, 3, 4),
            match_row(3, 2, 1),
            match_row(4, 4, 3),
        ];

        // Everyone is back to one win each, but 1-2 and 3-4 already met.
        let pairings = swiss_pairings(&players, &matches);
        for pairing in &pairings {
            assert_ne!((pairing.first_id, pairing.second_id), (1, 2));
            assert_ne!((pairing.first_id, pairing.second_id), (3, 4));
        }
        assert_eq!(pairings.len(), 2);
    }

    #[test]
    fn no_player_appears_in_two_pairs() {
        let players = (1..=8).map(|id| player_row(id, "p")).collect::<Vec<_>>();

        let pairings = swiss_pairings(&players, &[]);

        let ids: Vec<PlayerId> = pairings
            .iter()
            .flat_map(|p| [p.first_id, p.second_id])
            .collect();
        let unique: HashSet<PlayerId> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn pairs_always_have_equal_win_counts() {
        let players = four_players();
        let matches = vec![match_row(1, 1, 2), match_row(2, 1, 3), match_row(3, 2, 4)];

        let pairings = swiss_pairings(&players, &matches);

        let entries = crate::tournament::standings(&players, &matches);
        let wins_of = |id: PlayerId| {
            entries
                .iter()
                .find(|e| e.player_id == id)
                .map(|e| e.wins)
                .unwrap()
        };
        for pairing in &pairings {
            assert_eq!(wins_of(pairing.first_id), wins_of(pairing.second_id));
        }
    }

    #[test]
    fn odd_player_count_leaves_one_player_unpaired() {
        let players = vec![
            player_row(1, "Anna"),
            player_row(2, "Bartek"),
            player_row(3, "Celina"),
        ];

        let pairings = swiss_pairings(&players, &[]);

        assert_eq!(pairings.len(), 1);
    }

    #[test]
    fn first_fit_binds_a_player_to_the_earliest_candidate() {
        // All four players are tied, so candidates arrive as (1,2), (1,3),
        // (1,4), (2,3), (2,4), (3,4). First-fit takes (1,2) then (3,4).
        let players = four_players();

        let pairings = swiss_pairings(&players, &[]);

        assert_eq!((pairings[0].first_id, pairings[0].second_id), (1, 2));
        assert_eq!((pairings[1].first_id, pairings[1].second_id), (3, 4));
    }
}
