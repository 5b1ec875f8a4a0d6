//! Ranking averages. Every function here is pure: same inputs, same output.

use crate::models::{Averages, BonusCurve, DivisionConfig, PlayerStats};

/// Division-wide figures every player's averages are measured against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DivisionTotals {
    /// Played matches in the division (each match counted once).
    pub matches_played: u32,
    /// Active enrolled players.
    pub enrolled: u32,
}

/// Won / played; 0 when nothing has been played.
pub fn individual_average(matches_won: u32, matches_played: u32) -> f64 {
    if matches_played == 0 {
        return 0.0;
    }
    f64::from(matches_won) / f64::from(matches_played)
}

/// Won / all matches played in the division; rewards volume.
pub fn general_average(matches_won: u32, division_matches: u32) -> f64 {
    if division_matches == 0 {
        return 0.0;
    }
    f64::from(matches_won) / f64::from(division_matches)
}

/// Linear in matches played per enrolled player, capped at `curve.cap`.
pub fn bonus_for_playing(matches_played: u32, enrolled: u32, curve: &BonusCurve) -> f64 {
    if enrolled == 0 {
        return 0.0;
    }
    let bonus = curve.weight * f64::from(matches_played) / f64::from(enrolled);
    bonus.clamp(0.0, curve.cap.max(0.0))
}

pub fn final_average(individual: f64, general: f64, bonus: f64) -> f64 {
    individual.max(0.0) + general.max(0.0) + bonus.max(0.0)
}

/// Matches a player must have played to get a numeric rank.
///
/// 0 while the division has no played matches, otherwise the rounded share of
/// matches per enrolled player, never below 1.
pub fn minimum_required(division_matches: u32, enrolled: u32, participation_share: f64) -> u32 {
    if division_matches == 0 || enrolled == 0 {
        return 0;
    }
    let share = f64::from(division_matches) * participation_share.max(0.0) / f64::from(enrolled);
    (share.round() as u32).max(1)
}

pub fn meets_minimum(matches_played: u32, minimum: u32) -> bool {
    matches_played >= minimum
}

/// All averages for one player.
pub fn compute_averages(stats: &PlayerStats, totals: DivisionTotals, config: &DivisionConfig) -> Averages {
    let individual = individual_average(stats.matches_won, stats.matches_played);
    let general = general_average(stats.matches_won, totals.matches_played);
    let bonus = bonus_for_playing(stats.matches_played, totals.enrolled, &config.bonus);
    let minimum = minimum_required(totals.matches_played, totals.enrolled, config.participation_share);
    Averages {
        individual_average: individual,
        general_average: general,
        bonus_for_playing: bonus,
        final_average: final_average(individual, general, bonus),
        minimum_required: minimum,
        meets_minimum: meets_minimum(stats.matches_played, minimum),
    }
}
