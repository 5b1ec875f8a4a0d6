//! Data structures for the padel circuit: enrollments, matches, standings, draws.

mod config;
mod draw;
mod game;
mod league;
mod player;
mod standings;

pub use config::{BonusCurve, DivisionConfig, PLAYOFF_SLOTS};
pub use draw::{DrawOutcome, DrawPair, DrawRequest, DrawSnapshot, FormationType, StoredPair};
pub use game::{MatchId, MatchRecord, MatchStatus, Side, TeamSlot};
pub use league::{DivisionId, DivisionScope, LeagueError, StageId};
pub use player::{Enrollment, EnrollmentStatus, PlayerId, PlayerStats};
pub use standings::{Averages, Selection, SlotCounts, StandingRow};
