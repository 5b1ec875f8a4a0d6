//! Derived ranking structures: averages, standing rows, slot counts and the promotion selection.

use crate::models::player::{PlayerId, PlayerStats};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ranking components for one player.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    pub individual_average: f64,
    pub general_average: f64,
    pub bonus_for_playing: f64,
    pub final_average: f64,
    /// Matches needed to receive a numeric rank.
    pub minimum_required: u32,
    pub meets_minimum: bool,
}

/// One line of the standings table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    #[serde(flatten)]
    pub stats: PlayerStats,
    #[serde(flatten)]
    pub averages: Averages,
    pub wins_against_top_three: u32,
    /// None for players below the participation minimum.
    pub rank_position: Option<u32>,
}

impl StandingRow {
    pub fn player_id(&self) -> PlayerId {
        self.stats.player_id
    }

    pub fn meets_minimum(&self) -> bool {
        self.averages.meets_minimum
    }
}

/// How many players move up, down, or into the playoff zone.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SlotCounts {
    pub promotion_slots: u32,
    pub relegation_slots: u32,
    pub playoff_slots: u32,
}

/// Players partitioned by end-of-stage outcome. Everyone else stays in the division.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub promoted: Vec<PlayerId>,
    pub relegated: Vec<PlayerId>,
    pub playoff_up: Vec<PlayerId>,
    pub playoff_down: Vec<PlayerId>,
}

impl Selection {
    /// True when no player appears in more than one group.
    pub fn is_disjoint(&self) -> bool {
        let mut seen = HashSet::new();
        self.promoted
            .iter()
            .chain(&self.relegated)
            .chain(&self.playoff_up)
            .chain(&self.playoff_down)
            .all(|id| seen.insert(*id))
    }
}
