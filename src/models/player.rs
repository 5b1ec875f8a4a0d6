//! Enrollment and PlayerStats data structures.

use crate::models::league::{DivisionId, StageId};
use serde::{Deserialize, Serialize};

/// Unique identifier for a registered player (used in matches and lookups).
pub type PlayerId = u32;

/// Whether an enrollment takes part in standings and draws.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Inactive,
}

/// A player's registration in a division for a stage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub player_id: PlayerId,
    pub stage_id: StageId,
    pub division_id: DivisionId,
    #[serde(default)]
    pub status: EnrollmentStatus,
}

impl Enrollment {
    /// Create an active enrollment.
    pub fn active(player_id: PlayerId, stage_id: StageId, division_id: DivisionId) -> Self {
        Self {
            player_id,
            stage_id,
            division_id,
            status: EnrollmentStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }
}

/// Per-player totals derived from played matches. Never stored; rebuilt on every call.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub matches_won: u32,
    pub matches_played: u32,
    /// Sets won minus sets lost, summed over every played match.
    pub set_diff: i32,
    /// Games won minus games lost.
    pub game_diff: i32,
    /// Matches this player conceded without playing.
    pub walkovers: u32,
}

impl PlayerStats {
    /// Empty stats for a player with no matches yet.
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    /// Record one played match from this player's point of view.
    pub fn add_match(&mut self, won: bool, set_diff: i32, game_diff: i32) {
        self.matches_played += 1;
        if won {
            self.matches_won += 1;
        }
        self.set_diff += set_diff;
        self.game_diff += game_diff;
    }

    /// Record that the player conceded a match by walkover.
    pub fn add_walkover(&mut self) {
        self.walkovers += 1;
    }
}
