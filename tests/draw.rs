//! Integration tests for draws: pair formation, odd counts, rematch limits, single matches.

use chrono::NaiveDate;
use padel_circuit_web::logic::prior_meetings;
use padel_circuit_web::{
    draw_full_round, draw_single_match, DivisionScope, DrawPair, DrawRequest, DrawSnapshot,
    Enrollment, FormationType, LeagueError, MatchRecord, MatchStatus, PlayerId, Side,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 16).unwrap()
}

fn scope() -> DivisionScope {
    DivisionScope::new(2, 1)
}

fn enrolled(ids: impl IntoIterator<Item = PlayerId>) -> Vec<Enrollment> {
    ids.into_iter().map(|id| Enrollment::active(id, 2, 1)).collect()
}

fn request(available: impl IntoIterator<Item = PlayerId>) -> DrawRequest {
    DrawRequest {
        scope: scope(),
        date: date(),
        available_player_ids: available.into_iter().collect(),
    }
}

fn played(team_a: [PlayerId; 2], team_b: [PlayerId; 2]) -> MatchRecord {
    let mut m = MatchRecord::pending(2, 1, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(), team_a, team_b);
    m.status = MatchStatus::Played;
    m.winning_team = Some(Side::A);
    m
}

fn assert_no_duplicates(pairs: &[DrawPair], matches: &[MatchRecord]) {
    let mut seen = HashSet::new();
    for p in pairs {
        assert_ne!(p.player1_id, p.player2_id);
        assert!(seen.insert(p.player1_id) && seen.insert(p.player2_id), "player in two pairs");
    }
    for m in matches {
        let ids: HashSet<PlayerId> = m.registered(Side::A).chain(m.registered(Side::B)).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(m.status, MatchStatus::Pending);
        assert_eq!(m.date, Some(date()));
    }
}

#[test]
fn five_available_players_leave_one_out() {
    let e = enrolled(1..=5);
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &[],
        matches: &[],
    };
    let mut rng = StdRng::seed_from_u64(7);
    let outcome = draw_full_round(&request(1..=5), &snapshot, &mut rng).unwrap();
    assert_eq!(outcome.pairs.len(), 2);
    assert_eq!(outcome.sitting_out.len(), 1);
    assert_eq!(outcome.benched_pair, None);
    assert_eq!(outcome.matches.len(), 1);
    assert!(outcome
        .pairs
        .iter()
        .all(|p| p.formation == FormationType::OrganizationAssigned));
}

#[test]
fn unknown_and_repeated_players_are_discarded() {
    let e = enrolled([1, 2, 3]);
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &[],
        matches: &[],
    };
    let mut rng = StdRng::seed_from_u64(1);
    let err = draw_full_round(&request([1, 1, 40, 41]), &snapshot, &mut rng).unwrap_err();
    assert_eq!(
        err,
        LeagueError::InsufficientPlayers {
            needed: 2,
            available: 1
        }
    );
}

#[test]
fn enrollments_of_other_divisions_do_not_count() {
    let mut e = enrolled([1, 2]);
    e.push(Enrollment::active(3, 2, 9));
    e.push(Enrollment::active(4, 2, 9));
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &[],
        matches: &[],
    };
    let mut rng = StdRng::seed_from_u64(3);
    let outcome = draw_full_round(&request([1, 2, 3, 4]), &snapshot, &mut rng).unwrap();
    // One pair only: it is benched, so nothing is scheduled.
    assert!(outcome.pairs.is_empty());
    assert!(outcome.benched_pair.is_some());
    assert!(outcome.matches.is_empty());
}

#[test]
fn odd_number_of_pairs_benches_one() {
    let e = enrolled(1..=6);
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &[],
        matches: &[],
    };
    let mut rng = StdRng::seed_from_u64(11);
    let outcome = draw_full_round(&request(1..=6), &snapshot, &mut rng).unwrap();
    assert_eq!(outcome.pairs.len(), 2);
    assert_eq!(outcome.matches.len(), 1);
    let benched = outcome.benched_pair.expect("third pair is benched");
    assert!(outcome.pairs.iter().all(|p| !p.contains(benched.player1_id)));
}

#[test]
fn confirmed_pairs_are_kept_when_both_players_are_available() {
    let e = enrolled(1..=10);
    let confirmed = vec![
        DrawPair::new(1, 2, FormationType::PreChosen),
        DrawPair::new(3, 9, FormationType::PreChosen),
    ];
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &confirmed,
        matches: &[],
    };
    let mut rng = StdRng::seed_from_u64(5);
    let outcome = draw_full_round(&request(1..=8), &snapshot, &mut rng).unwrap();
    assert_eq!(outcome.pairs.len(), 4);
    assert!(outcome.pairs.contains(&confirmed[0]));
    assert!(!outcome.pairs.contains(&confirmed[1]));
    let pre_chosen = outcome
        .pairs
        .iter()
        .filter(|p| p.formation == FormationType::PreChosen)
        .count();
    assert_eq!(pre_chosen, 1);
    assert_eq!(outcome.matches.len(), 2);
}

#[test]
fn draws_never_repeat_a_player() {
    let e = enrolled(1..=15);
    let confirmed = vec![DrawPair::new(4, 5, FormationType::PreChosen)];
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &confirmed,
        matches: &[],
    };
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = draw_full_round(&request(1..=15), &snapshot, &mut rng).unwrap();
        assert_no_duplicates(&outcome.pairs, &outcome.matches);
        assert_eq!(outcome.pairs.len() % 2, 0);
    }
}

#[test]
fn pairs_that_met_twice_are_not_drawn_again() {
    let e = enrolled(1..=4);
    let confirmed = vec![
        DrawPair::new(1, 2, FormationType::PreChosen),
        DrawPair::new(3, 4, FormationType::PreChosen),
    ];
    let history = vec![played([1, 2], [4, 3]), played([3, 4], [2, 1])];
    assert_eq!(prior_meetings(&confirmed[0], &confirmed[1], &history), 2);

    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &confirmed,
        matches: &history,
    };
    let mut rng = StdRng::seed_from_u64(9);
    let outcome = draw_full_round(&request(1..=4), &snapshot, &mut rng).unwrap();
    assert!(outcome.matches.is_empty());
    assert_eq!(outcome.unmatched_pairs.len(), 2);
}

#[test]
fn one_prior_meeting_still_allows_a_match() {
    let e = enrolled(1..=4);
    let confirmed = vec![
        DrawPair::new(1, 2, FormationType::PreChosen),
        DrawPair::new(3, 4, FormationType::PreChosen),
    ];
    let mut cancelled = played([1, 2], [3, 4]);
    cancelled.status = MatchStatus::Cancelled;
    let history = vec![played([2, 1], [3, 4]), cancelled, played([1, 3], [2, 4])];
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &confirmed,
        matches: &history,
    };
    let mut rng = StdRng::seed_from_u64(9);
    let outcome = draw_full_round(&request(1..=4), &snapshot, &mut rng).unwrap();
    assert_eq!(outcome.matches.len(), 1);
    assert!(outcome.unmatched_pairs.is_empty());
}

#[test]
fn single_match_needs_four_players() {
    let e = enrolled(1..=3);
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &[],
        matches: &[],
    };
    let mut rng = StdRng::seed_from_u64(2);
    let err = draw_single_match(&request(1..=3), &snapshot, &mut rng).unwrap_err();
    assert_eq!(
        err,
        LeagueError::InsufficientPlayers {
            needed: 4,
            available: 3
        }
    );
    assert_eq!(
        err.to_string(),
        "Need at least 4 eligible players for this draw (available 3)"
    );
}

#[test]
fn single_match_skips_players_already_booked_that_day() {
    let e = enrolled(1..=6);
    let booked = MatchRecord::pending(2, 1, date(), [5, 6], [7, 8]);
    let other_day = MatchRecord::pending(2, 1, NaiveDate::from_ymd_opt(2026, 5, 23).unwrap(), [1, 2], [3, 4]);
    let history = vec![booked, other_day];
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &[],
        matches: &history,
    };
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = draw_single_match(&request(1..=6), &snapshot, &mut rng).unwrap();
        assert_eq!(outcome.pairs.len(), 2);
        assert_eq!(outcome.matches.len(), 1);
        assert_no_duplicates(&outcome.pairs, &outcome.matches);
        let m = &outcome.matches[0];
        let ids: HashSet<PlayerId> = m.registered(Side::A).chain(m.registered(Side::B)).collect();
        assert_eq!(ids, HashSet::from([1, 2, 3, 4]));
    }
}

#[test]
fn single_match_fails_when_bookings_leave_too_few() {
    let e = enrolled(1..=5);
    let history = vec![MatchRecord::pending(2, 1, date(), [1, 2], [9, 10])];
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &[],
        matches: &history,
    };
    let mut rng = StdRng::seed_from_u64(4);
    assert_eq!(
        draw_single_match(&request(1..=5), &snapshot, &mut rng),
        Err(LeagueError::InsufficientPlayers {
            needed: 4,
            available: 3
        })
    );
}

#[test]
fn full_round_skips_players_already_booked_that_day() {
    let e = enrolled(1..=8);
    let history = vec![MatchRecord::pending(2, 1, date(), [1, 2], [3, 4])];
    let confirmed = vec![DrawPair::new(1, 2, FormationType::PreChosen)];
    let snapshot = DrawSnapshot {
        enrollments: &e,
        confirmed_pairs: &confirmed,
        matches: &history,
    };
    let mut rng = StdRng::seed_from_u64(17);
    let outcome = draw_full_round(&request(1..=8), &snapshot, &mut rng).unwrap();
    assert_eq!(outcome.pairs.len(), 2);
    assert_eq!(outcome.matches.len(), 1);
    for pair in &outcome.pairs {
        assert!(pair.players().iter().all(|id| *id >= 5));
    }
    assert_no_duplicates(&outcome.pairs, &outcome.matches);
}
