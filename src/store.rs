//! Storage collaborator: what the engine reads, and where draw results are written back.

use crate::models::{
    DivisionConfig, DivisionScope, DrawPair, Enrollment, MatchRecord, MatchStatus, StoredPair,
};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Data access used by the store-backed entry points in [`crate::service`].
pub trait LeagueStore {
    /// Active enrollments of one division in one stage.
    fn active_enrollments(&self, scope: DivisionScope) -> Vec<Enrollment>;

    /// Match records of one division, optionally restricted to a status.
    fn matches(&self, scope: DivisionScope, status: Option<MatchStatus>) -> Vec<MatchRecord>;

    /// Pairs already confirmed for a fixture date.
    fn confirmed_pairs(&self, scope: DivisionScope, date: NaiveDate) -> Vec<DrawPair>;

    /// None when the division has no stored configuration.
    fn division_config(&self, scope: DivisionScope) -> Option<DivisionConfig>;

    fn save_pairs(&mut self, scope: DivisionScope, date: NaiveDate, pairs: &[DrawPair]);

    fn save_matches(&mut self, matches: &[MatchRecord]);
}

/// In-memory store used by the web binary and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    enrollments: Vec<Enrollment>,
    matches: Vec<MatchRecord>,
    pairs: Vec<StoredPair>,
    configs: HashMap<DivisionScope, DivisionConfig>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace enrollments (one per player per stage/division).
    pub fn upsert_enrollments(&mut self, enrollments: impl IntoIterator<Item = Enrollment>) {
        for e in enrollments {
            match self.enrollments.iter_mut().find(|x| {
                x.player_id == e.player_id && x.stage_id == e.stage_id && x.division_id == e.division_id
            }) {
                Some(existing) => *existing = e,
                None => self.enrollments.push(e),
            }
        }
    }

    /// Add or replace match records by id.
    pub fn upsert_matches(&mut self, matches: impl IntoIterator<Item = MatchRecord>) {
        for m in matches {
            match self.matches.iter_mut().find(|x| x.id == m.id) {
                Some(existing) => *existing = m,
                None => self.matches.push(m),
            }
        }
    }

    pub fn set_config(&mut self, scope: DivisionScope, config: DivisionConfig) {
        self.configs.insert(scope, config);
    }

    /// True when anything at all is known about the division.
    pub fn knows(&self, scope: DivisionScope) -> bool {
        self.configs.contains_key(&scope)
            || self
                .enrollments
                .iter()
                .any(|e| e.stage_id == scope.stage_id && e.division_id == scope.division_id)
    }
}

impl LeagueStore for MemoryStore {
    fn active_enrollments(&self, scope: DivisionScope) -> Vec<Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.is_active() && e.stage_id == scope.stage_id && e.division_id == scope.division_id)
            .cloned()
            .collect()
    }

    fn matches(&self, scope: DivisionScope, status: Option<MatchStatus>) -> Vec<MatchRecord> {
        self.matches
            .iter()
            .filter(|m| m.stage_id == scope.stage_id && m.division_id == scope.division_id)
            .filter(|m| status.map_or(true, |s| m.status == s))
            .cloned()
            .collect()
    }

    fn confirmed_pairs(&self, scope: DivisionScope, date: NaiveDate) -> Vec<DrawPair> {
        self.pairs
            .iter()
            .filter(|p| p.scope == scope && p.date == date)
            .map(|p| p.pair)
            .collect()
    }

    fn division_config(&self, scope: DivisionScope) -> Option<DivisionConfig> {
        self.configs.get(&scope).copied()
    }

    fn save_pairs(&mut self, scope: DivisionScope, date: NaiveDate, pairs: &[DrawPair]) {
        for pair in pairs {
            let exists = self.pairs.iter().any(|p| {
                p.scope == scope
                    && p.date == date
                    && p.pair.contains(pair.player1_id)
                    && p.pair.contains(pair.player2_id)
            });
            if !exists {
                self.pairs.push(StoredPair {
                    scope,
                    date,
                    pair: *pair,
                });
            }
        }
    }

    fn save_matches(&mut self, matches: &[MatchRecord]) {
        self.upsert_matches(matches.iter().cloned());
    }
}
