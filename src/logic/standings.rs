//! Standings: two-pass ranking of a division.
//!
//! 1. Provisional order by final average, set and game differential.
//! 2. Take the first three eligible players from it as the reference set.
//! 3. Count each player's wins against that set and re-sort with it as the last tie-break.
//! 4. Eligible rows come first and are numbered 1..=k; the rest follow unnumbered.

use crate::logic::averages::{compute_averages, DivisionTotals};
use crate::logic::eligibility::split_by_eligibility;
use crate::logic::stats::{aggregate_player_stats, usable_matches};
use crate::models::{DivisionConfig, Enrollment, MatchRecord, PlayerId, StandingRow};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Size of the reference set used for the wins-against-the-best tie-break.
const TOP_REFERENCE_SIZE: usize = 3;

/// C1: final average desc, set diff desc, game diff desc.
fn compare_provisional(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.averages
        .final_average
        .total_cmp(&a.averages.final_average)
        .then_with(|| b.stats.set_diff.cmp(&a.stats.set_diff))
        .then_with(|| b.stats.game_diff.cmp(&a.stats.game_diff))
}

/// C2: C1 then wins against the top three desc.
fn compare_final(a: &StandingRow, b: &StandingRow) -> Ordering {
    compare_provisional(a, b).then_with(|| b.wins_against_top_three.cmp(&a.wins_against_top_three))
}

/// Distinct active player ids, in enrollment order.
fn active_players(enrollments: &[Enrollment]) -> Vec<PlayerId> {
    let mut seen = HashSet::new();
    enrollments
        .iter()
        .filter(|e| e.is_active())
        .map(|e| e.player_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Matches won by `player_id` in which at least one opponent is in `reference`.
fn wins_against(player_id: PlayerId, matches: &[MatchRecord], reference: &HashSet<PlayerId>) -> u32 {
    matches
        .iter()
        .filter(|m| {
            let Some(side) = m.side_of(player_id) else {
                return false;
            };
            m.winning_team == Some(side) && m.registered(side.opponent()).any(|id| reference.contains(&id))
        })
        .count() as u32
}

/// Build the full standings table for one division of a stage.
///
/// `enrollments` and `matches` must belong to the same stage/division. Inactive
/// enrollments and non-played or malformed matches are ignored.
pub fn compute_standings(
    enrollments: &[Enrollment],
    matches: &[MatchRecord],
    config: &DivisionConfig,
) -> Vec<StandingRow> {
    let players = active_players(enrollments);
    let played = usable_matches(matches);
    let totals = DivisionTotals {
        matches_played: played.len() as u32,
        enrolled: players.len() as u32,
    };

    let mut rows: Vec<StandingRow> = players
        .iter()
        .map(|&id| {
            let stats = aggregate_player_stats(id, &played);
            let averages = compute_averages(&stats, totals, config);
            StandingRow {
                stats,
                averages,
                wins_against_top_three: 0,
                rank_position: None,
            }
        })
        .collect();

    // First pass
    rows.sort_by(|a, b| compare_provisional(a, b).then_with(|| a.player_id().cmp(&b.player_id())));
    let top_three: HashSet<PlayerId> = split_by_eligibility(&rows)
        .eligible
        .iter()
        .take(TOP_REFERENCE_SIZE)
        .map(|r| r.player_id())
        .collect();

    // Second pass
    for row in &mut rows {
        row.wins_against_top_three = wins_against(row.player_id(), &played, &top_three);
    }
    rows.sort_by(|a, b| compare_final(a, b).then_with(|| a.player_id().cmp(&b.player_id())));

    let (mut ordered, ineligible): (Vec<StandingRow>, Vec<StandingRow>) =
        rows.into_iter().partition(|r| r.meets_minimum());
    for (idx, row) in ordered.iter_mut().enumerate() {
        row.rank_position = Some(idx as u32 + 1);
    }
    ordered.extend(ineligible);

    log::debug!(
        "Ranked {} players ({} played matches, reference set {:?})",
        ordered.len(),
        totals.matches_played,
        top_three
    );
    ordered
}
