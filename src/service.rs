//! Store-backed entry points: fetch a snapshot, run the pure logic, write draws back.

use crate::logic::{
    allocate_slots, compute_standings, draw_full_round, draw_single_match, select_promotion_relegation,
};
use crate::models::{
    DivisionScope, DrawOutcome, DrawRequest, DrawSnapshot, LeagueError, MatchStatus, PlayerId,
    Selection, SlotCounts, StandingRow,
};
use crate::store::LeagueStore;
use chrono::NaiveDate;
use rand::Rng;

/// Standings of a division from its stored enrollments, played matches and configuration.
pub fn division_standings<S: LeagueStore + ?Sized>(store: &S, scope: DivisionScope) -> Vec<StandingRow> {
    let config = store.division_config(scope).unwrap_or_default();
    let enrollments = store.active_enrollments(scope);
    let matches = store.matches(scope, Some(MatchStatus::Played));
    compute_standings(&enrollments, &matches, &config)
}

/// Slot counts for a division, sized by its distinct active players.
pub fn division_slots<S: LeagueStore + ?Sized>(store: &S, scope: DivisionScope) -> SlotCounts {
    let config = store.division_config(scope).unwrap_or_default();
    allocate_slots(&config, division_standings(store, scope).len())
}

/// Standings together with the promotion/relegation outcome they imply.
pub fn division_selection<S: LeagueStore + ?Sized>(
    store: &S,
    scope: DivisionScope,
) -> (Vec<StandingRow>, Selection) {
    let config = store.division_config(scope).unwrap_or_default();
    let standings = division_standings(store, scope);
    let slots = allocate_slots(&config, standings.len());
    let selection = select_promotion_relegation(&standings, &slots);
    (standings, selection)
}

#[derive(Clone, Copy)]
enum DrawKind {
    FullRound,
    SingleMatch,
}

fn run_draw<S: LeagueStore + ?Sized, R: Rng + ?Sized>(
    store: &mut S,
    kind: DrawKind,
    scope: DivisionScope,
    date: NaiveDate,
    available_player_ids: Vec<PlayerId>,
    rng: &mut R,
) -> Result<DrawOutcome, LeagueError> {
    let enrollments = store.active_enrollments(scope);
    let confirmed_pairs = store.confirmed_pairs(scope, date);
    let matches = store.matches(scope, None);
    let snapshot = DrawSnapshot {
        enrollments: &enrollments,
        confirmed_pairs: &confirmed_pairs,
        matches: &matches,
    };
    let request = DrawRequest {
        scope,
        date,
        available_player_ids,
    };
    let outcome = match kind {
        DrawKind::FullRound => draw_full_round(&request, &snapshot, rng)?,
        DrawKind::SingleMatch => draw_single_match(&request, &snapshot, rng)?,
    };

    store.save_pairs(scope, date, &outcome.pairs);
    store.save_matches(&outcome.matches);
    log::info!(
        "Draw for stage {} division {} on {}: {} pairs, {} matches",
        scope.stage_id,
        scope.division_id,
        date,
        outcome.pairs.len(),
        outcome.matches.len()
    );
    Ok(outcome)
}

/// Full-round draw for a fixture date; pairs and matches are saved on success.
pub fn draw_full_round_for<S: LeagueStore + ?Sized, R: Rng + ?Sized>(
    store: &mut S,
    scope: DivisionScope,
    date: NaiveDate,
    available_player_ids: Vec<PlayerId>,
    rng: &mut R,
) -> Result<DrawOutcome, LeagueError> {
    run_draw(store, DrawKind::FullRound, scope, date, available_player_ids, rng)
}

/// Single-match draw for a fixture date; nothing is saved when it fails.
pub fn draw_single_match_for<S: LeagueStore + ?Sized, R: Rng + ?Sized>(
    store: &mut S,
    scope: DivisionScope,
    date: NaiveDate,
    available_player_ids: Vec<PlayerId>,
    rng: &mut R,
) -> Result<DrawOutcome, LeagueError> {
    run_draw(store, DrawKind::SingleMatch, scope, date, available_player_ids, rng)
}
