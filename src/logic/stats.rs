//! Per-player statistics folded from played match records.

use crate::models::{MatchRecord, PlayerId, PlayerStats};

/// Walk the division's played matches and total one player's record.
///
/// `matches` must already be restricted to `Played` records of the division/stage.
/// Matches where the player holds no registered slot are ignored.
pub fn aggregate_player_stats(player_id: PlayerId, matches: &[MatchRecord]) -> PlayerStats {
    let mut stats = PlayerStats::new(player_id);
    for m in matches {
        let Some(side) = m.side_of(player_id) else {
            continue;
        };
        let won = m.winning_team == Some(side);
        let (set_diff, game_diff) = m.differentials(side);
        stats.add_match(won, set_diff, game_diff);
        // A walkover still counts as played; it is also tallied on its own.
        if m.walkover_player_ids.contains(&player_id) {
            stats.add_walkover();
        }
    }
    stats
}

/// Keep only records that can contribute to standings: played, and with no player filling two slots.
pub fn usable_matches(matches: &[MatchRecord]) -> Vec<MatchRecord> {
    matches
        .iter()
        .filter(|m| m.is_played())
        .filter(|m| {
            if m.has_duplicate_player() {
                log::warn!("Skipping match {}: a player appears in more than one slot", m.id);
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchStatus, Side, TeamSlot};
    use chrono::NaiveDate;

    fn played(team_a: [u32; 2], team_b: [u32; 2], winner: Side, sets: (u32, u32), games: (u32, u32)) -> MatchRecord {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut m = MatchRecord::pending(1, 1, date, team_a, team_b);
        m.status = MatchStatus::Played;
        m.winning_team = Some(winner);
        m.sets_a = sets.0;
        m.sets_b = sets.1;
        m.games_a = games.0;
        m.games_b = games.1;
        m
    }

    #[test]
    fn team_b_differentials_are_sign_flipped() {
        let matches = vec![played([1, 2], [3, 4], Side::A, (2, 0), (12, 5))];
        let a = aggregate_player_stats(1, &matches);
        let b = aggregate_player_stats(3, &matches);
        assert_eq!((a.matches_won, a.set_diff, a.game_diff), (1, 2, 7));
        assert_eq!((b.matches_won, b.set_diff, b.game_diff), (0, -2, -7));
        assert_eq!(b.matches_played, 1);
    }

    #[test]
    fn guest_slots_do_not_count_and_absent_players_get_zero() {
        let mut m = played([1, 2], [3, 4], Side::B, (1, 2), (10, 13));
        m.team_b[1] = TeamSlot::Unregistered("Guest".into());
        let matches = vec![m];
        assert_eq!(aggregate_player_stats(3, &matches).matches_won, 1);
        assert_eq!(aggregate_player_stats(4, &matches).matches_played, 0);
        assert_eq!(aggregate_player_stats(99, &matches), PlayerStats::new(99));
    }

    #[test]
    fn walkovers_are_counted() {
        let mut m = played([1, 2], [3, 4], Side::A, (2, 0), (12, 0));
        m.walkover_player_ids.insert(3);
        let stats = aggregate_player_stats(3, &[m]);
        assert_eq!(stats.walkovers, 1);
        assert_eq!(stats.matches_played, 1);
    }

    #[test]
    fn malformed_and_unplayed_matches_are_dropped() {
        let ok = played([1, 2], [3, 4], Side::A, (2, 0), (12, 3));
        let dup = played([1, 2], [1, 4], Side::A, (2, 0), (12, 3));
        let mut pending = ok.clone();
        pending.status = MatchStatus::Pending;
        let usable = usable_matches(&[ok.clone(), dup, pending]);
        assert_eq!(usable, vec![ok]);
    }
}
