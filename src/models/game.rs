//! Match records, team slots, and the Side enum for 2v2 padel matches.

use crate::models::league::{DivisionId, StageId};
use crate::models::player::PlayerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which side of the court: team A or team B.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Lifecycle of a match record.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Played,
    Cancelled,
}

/// One position on a team: either a registered player or a guest known only by name.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSlot {
    Registered(PlayerId),
    Unregistered(String),
}

impl TeamSlot {
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            TeamSlot::Registered(id) => Some(*id),
            TeamSlot::Unregistered(_) => None,
        }
    }
}

impl From<PlayerId> for TeamSlot {
    fn from(id: PlayerId) -> Self {
        TeamSlot::Registered(id)
    }
}

/// A doubles match between team A and team B.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub stage_id: StageId,
    pub division_id: DivisionId,
    /// Fixture date; None for legacy rows imported without one.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub team_a: [TeamSlot; 2],
    pub team_b: [TeamSlot; 2],
    /// None if not yet decided.
    #[serde(default)]
    pub winning_team: Option<Side>,
    #[serde(default)]
    pub sets_a: u32,
    #[serde(default)]
    pub sets_b: u32,
    #[serde(default)]
    pub games_a: u32,
    #[serde(default)]
    pub games_b: u32,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub walkover_player_ids: BTreeSet<PlayerId>,
}

impl MatchRecord {
    /// A freshly drawn match: pending, no scores.
    pub fn pending(
        stage_id: StageId,
        division_id: DivisionId,
        date: NaiveDate,
        team_a: [PlayerId; 2],
        team_b: [PlayerId; 2],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            stage_id,
            division_id,
            date: Some(date),
            team_a: team_a.map(TeamSlot::Registered),
            team_b: team_b.map(TeamSlot::Registered),
            winning_team: None,
            sets_a: 0,
            sets_b: 0,
            games_a: 0,
            games_b: 0,
            status: MatchStatus::Pending,
            walkover_player_ids: BTreeSet::new(),
        }
    }

    /// Registered player ids on one side (guests are skipped).
    pub fn registered(&self, side: Side) -> impl Iterator<Item = PlayerId> + '_ {
        let team = match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        };
        team.iter().filter_map(TeamSlot::player_id)
    }

    /// Which side a registered player is on, if any.
    pub fn side_of(&self, player_id: PlayerId) -> Option<Side> {
        if self.registered(Side::A).any(|id| id == player_id) {
            Some(Side::A)
        } else if self.registered(Side::B).any(|id| id == player_id) {
            Some(Side::B)
        } else {
            None
        }
    }

    /// True when the same registered player fills more than one slot.
    pub fn has_duplicate_player(&self) -> bool {
        let ids: Vec<PlayerId> = self
            .registered(Side::A)
            .chain(self.registered(Side::B))
            .collect();
        let unique: BTreeSet<PlayerId> = ids.iter().copied().collect();
        unique.len() != ids.len()
    }

    /// (sets, games) won minus lost, from the given side's point of view.
    pub fn differentials(&self, side: Side) -> (i32, i32) {
        let sets = self.sets_a as i32 - self.sets_b as i32;
        let games = self.games_a as i32 - self.games_b as i32;
        match side {
            Side::A => (sets, games),
            Side::B => (-sets, -games),
        }
    }

    pub fn is_played(&self) -> bool {
        self.status == MatchStatus::Played
    }
}
