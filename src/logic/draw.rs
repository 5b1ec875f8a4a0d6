//! Draws (sorteos): pair up available players and schedule pair-vs-pair matches for a date.

use crate::models::{
    DrawOutcome, DrawPair, DrawRequest, DrawSnapshot, FormationType, LeagueError, MatchRecord,
    MatchStatus, PlayerId, Side,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};

/// Fewest validated players a full-round draw accepts.
pub const MIN_PLAYERS_FOR_PAIRING: usize = 2;

/// Players in one doubles match.
pub const PLAYERS_PER_MATCH: usize = 4;

/// Two pairs that already met this many times in played matches are not drawn again.
pub const MAX_PRIOR_MEETINGS: usize = 2;

/// Available ids that hold an active enrollment in the requested division, deduplicated, in request order.
fn validate_available(request: &DrawRequest, snapshot: &DrawSnapshot<'_>) -> Vec<PlayerId> {
    let enrolled: HashSet<PlayerId> = snapshot
        .enrollments
        .iter()
        .filter(|e| {
            e.is_active()
                && e.stage_id == request.scope.stage_id
                && e.division_id == request.scope.division_id
        })
        .map(|e| e.player_id)
        .collect();
    let mut seen = HashSet::new();
    let valid: Vec<PlayerId> = request
        .available_player_ids
        .iter()
        .copied()
        .filter(|id| enrolled.contains(id) && seen.insert(*id))
        .collect();
    if valid.len() != request.available_player_ids.len() {
        log::debug!(
            "Discarded {} available entries not enrolled in stage {} division {}",
            request.available_player_ids.len() - valid.len(),
            request.scope.stage_id,
            request.scope.division_id
        );
    }
    valid
}

/// Players already holding a pending match on the request's date.
fn booked_on_date(request: &DrawRequest, snapshot: &DrawSnapshot<'_>) -> HashSet<PlayerId> {
    snapshot
        .matches
        .iter()
        .filter(|m| m.status == MatchStatus::Pending && m.date == Some(request.date))
        .flat_map(|m| m.registered(Side::A).chain(m.registered(Side::B)))
        .collect()
}

/// Validated available players minus those already booked that day.
fn free_players(request: &DrawRequest, snapshot: &DrawSnapshot<'_>) -> Vec<PlayerId> {
    let booked = booked_on_date(request, snapshot);
    validate_available(request, snapshot)
        .into_iter()
        .filter(|id| !booked.contains(id))
        .collect()
}

/// How many played matches had exactly these two pairs on opposite sides.
pub fn prior_meetings(a: &DrawPair, b: &DrawPair, matches: &[MatchRecord]) -> usize {
    let a: BTreeSet<PlayerId> = a.players().into_iter().collect();
    let b: BTreeSet<PlayerId> = b.players().into_iter().collect();
    matches
        .iter()
        .filter(|m| m.is_played())
        .filter(|m| {
            let side_a: BTreeSet<PlayerId> = m.registered(Side::A).collect();
            let side_b: BTreeSet<PlayerId> = m.registered(Side::B).collect();
            (side_a == a && side_b == b) || (side_a == b && side_b == a)
        })
        .count()
}

/// Draw a full round for the request's date.
///
/// 1. Validate the available players against active enrollments, dropping anyone who
///    already has a pending match that day.
/// 2. Keep confirmed pairs whose two players are both available.
/// 3. Shuffle everyone else and pair them consecutively; an odd player sits out.
/// 4. With an odd number of pairs, the last one is benched for this draw.
/// 5. Shuffle the pairs and match them consecutively, skipping pairs that already met
///    [`MAX_PRIOR_MEETINGS`] times.
pub fn draw_full_round<R: Rng + ?Sized>(
    request: &DrawRequest,
    snapshot: &DrawSnapshot<'_>,
    rng: &mut R,
) -> Result<DrawOutcome, LeagueError> {
    let available = free_players(request, snapshot);
    if available.len() < MIN_PLAYERS_FOR_PAIRING {
        return Err(LeagueError::InsufficientPlayers {
            needed: MIN_PLAYERS_FOR_PAIRING,
            available: available.len(),
        });
    }
    let available_set: HashSet<PlayerId> = available.iter().copied().collect();

    let mut used: HashSet<PlayerId> = HashSet::new();
    let mut pairs: Vec<DrawPair> = Vec::new();
    for pair in snapshot.confirmed_pairs {
        if pair.player1_id == pair.player2_id {
            continue;
        }
        let free = pair
            .players()
            .iter()
            .all(|id| available_set.contains(id) && !used.contains(id));
        if free {
            used.extend(pair.players());
            pairs.push(*pair);
        }
    }

    let mut remaining: Vec<PlayerId> = available.into_iter().filter(|id| !used.contains(id)).collect();
    remaining.shuffle(rng);
    let mut chunks = remaining.chunks_exact(2);
    for chunk in &mut chunks {
        pairs.push(DrawPair::new(chunk[0], chunk[1], FormationType::OrganizationAssigned));
    }
    let sitting_out = chunks.remainder().to_vec();

    // TODO: confirm with the circuit organisers whether the odd pair should get a bye instead.
    let benched_pair = if pairs.len() % 2 == 1 { pairs.pop() } else { None };

    pairs.shuffle(rng);
    let mut matches = Vec::new();
    let mut unmatched_pairs = Vec::new();
    for duo in pairs.chunks_exact(2) {
        let (first, second) = (&duo[0], &duo[1]);
        let meetings = prior_meetings(first, second, snapshot.matches);
        if meetings >= MAX_PRIOR_MEETINGS {
            log::debug!(
                "Skipping rematch {:?} vs {:?}: already met {} times",
                first.players(),
                second.players(),
                meetings
            );
            unmatched_pairs.extend([*first, *second]);
            continue;
        }
        matches.push(MatchRecord::pending(
            request.scope.stage_id,
            request.scope.division_id,
            request.date,
            first.players(),
            second.players(),
        ));
    }

    Ok(DrawOutcome {
        pairs,
        matches,
        benched_pair,
        unmatched_pairs,
        sitting_out,
    })
}

/// Draw exactly one match from four random available players.
///
/// Players already holding a pending match on the request's date are not eligible.
pub fn draw_single_match<R: Rng + ?Sized>(
    request: &DrawRequest,
    snapshot: &DrawSnapshot<'_>,
    rng: &mut R,
) -> Result<DrawOutcome, LeagueError> {
    let mut eligible = free_players(request, snapshot);
    if eligible.len() < PLAYERS_PER_MATCH {
        return Err(LeagueError::InsufficientPlayers {
            needed: PLAYERS_PER_MATCH,
            available: eligible.len(),
        });
    }

    eligible.shuffle(rng);
    let first = DrawPair::new(eligible[0], eligible[1], FormationType::OrganizationAssigned);
    let second = DrawPair::new(eligible[2], eligible[3], FormationType::OrganizationAssigned);
    let single = MatchRecord::pending(
        request.scope.stage_id,
        request.scope.division_id,
        request.date,
        first.players(),
        second.players(),
    );

    Ok(DrawOutcome {
        pairs: vec![first, second],
        matches: vec![single],
        ..DrawOutcome::default()
    })
}
