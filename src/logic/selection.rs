//! Promotion, relegation and playoff groups from ranked standings.

use crate::logic::eligibility::split_by_eligibility;
use crate::models::{PlayerId, Selection, SlotCounts, StandingRow};
use std::collections::HashSet;

/// Partition ranked standings into promoted, relegated, playoff-up and playoff-down.
///
/// `standings` must be in ranking order as returned by `compute_standings`.
/// Promotion and playoff-up need eligibility; relegation and playoff-down look at
/// the full list, so under-participating players can still go down.
pub fn select_promotion_relegation(standings: &[StandingRow], slots: &SlotCounts) -> Selection {
    let eligible = split_by_eligibility(standings).eligible;
    let promotion = slots.promotion_slots as usize;
    let relegation = slots.relegation_slots as usize;
    let playoff = slots.playoff_slots as usize;

    let promoted: Vec<PlayerId> = eligible.iter().take(promotion).map(|r| r.player_id()).collect();
    let mut taken: HashSet<PlayerId> = promoted.iter().copied().collect();

    let relegation_cutoff = standings.len().saturating_sub(relegation);
    let relegated: Vec<PlayerId> = standings[relegation_cutoff..]
        .iter()
        .map(|r| r.player_id())
        .filter(|id| !taken.contains(id))
        .collect();
    taken.extend(relegated.iter().copied());

    let playoff_up: Vec<PlayerId> = eligible
        .iter()
        .skip(promotion)
        .take(playoff)
        .map(|r| r.player_id())
        .filter(|id| !taken.contains(id))
        .collect();
    taken.extend(playoff_up.iter().copied());

    let playoff_down: Vec<PlayerId> = standings[relegation_cutoff.saturating_sub(playoff)..relegation_cutoff]
        .iter()
        .map(|r| r.player_id())
        .filter(|id| !taken.contains(id))
        .collect();

    let selection = Selection {
        promoted,
        relegated,
        playoff_up,
        playoff_down,
    };
    debug_assert!(selection.is_disjoint());
    log::debug!(
        "Selection: {} up, {} down, {} playoff-up, {} playoff-down",
        selection.promoted.len(),
        selection.relegated.len(),
        selection.playoff_up.len(),
        selection.playoff_down.len()
    );
    selection
}
