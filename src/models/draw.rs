//! Draw (sorteo) structures: pairs, requests, and outcomes.

use crate::models::game::MatchRecord;
use crate::models::league::DivisionScope;
use crate::models::player::{Enrollment, PlayerId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a pair came to be.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormationType {
    /// The players chose each other before the draw.
    PreChosen,
    /// The draw put them together.
    OrganizationAssigned,
}

/// Two players who play on the same side for a fixture date.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct DrawPair {
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub formation: FormationType,
}

impl DrawPair {
    pub fn new(player1_id: PlayerId, player2_id: PlayerId, formation: FormationType) -> Self {
        Self {
            player1_id,
            player2_id,
            formation,
        }
    }

    pub fn players(&self) -> [PlayerId; 2] {
        [self.player1_id, self.player2_id]
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }
}

/// A pair as kept by the store: scoped to a division and fixture date.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StoredPair {
    pub scope: DivisionScope,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub pair: DrawPair,
}

/// Who is available for which fixture date.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub scope: DivisionScope,
    pub date: NaiveDate,
    pub available_player_ids: Vec<PlayerId>,
}

/// Everything the draw reads from storage, fetched up front.
#[derive(Clone, Copy, Debug)]
pub struct DrawSnapshot<'a> {
    pub enrollments: &'a [Enrollment],
    /// Pairs already confirmed for the requested date.
    pub confirmed_pairs: &'a [DrawPair],
    /// Match history of the division (any status).
    pub matches: &'a [MatchRecord],
}

/// Result of a draw. The caller persists `pairs` and `matches`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// Pairs taking part in this draw.
    pub pairs: Vec<DrawPair>,
    pub matches: Vec<MatchRecord>,
    /// Pair left out because the pair count was odd.
    pub benched_pair: Option<DrawPair>,
    /// Pairs whose candidate match was rejected as a repeated rematch.
    pub unmatched_pairs: Vec<DrawPair>,
    /// Available players not placed in any pair.
    pub sitting_out: Vec<PlayerId>,
}
