//! Padel circuit web app: library with models, standings and draw logic.

pub mod import;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use logic::{
    allocate_slots, compute_standings, draw_full_round, draw_single_match,
    select_promotion_relegation,
};
pub use models::{
    Averages, BonusCurve, DivisionConfig, DivisionId, DivisionScope, DrawOutcome, DrawPair,
    DrawRequest, DrawSnapshot, Enrollment, EnrollmentStatus, FormationType, LeagueError, MatchId,
    MatchRecord, MatchStatus, PlayerId, PlayerStats, Selection, Side, SlotCounts, StageId,
    StandingRow, TeamSlot, PLAYOFF_SLOTS,
};
pub use service::{
    division_selection, division_slots, division_standings, draw_full_round_for,
    draw_single_match_for,
};
pub use store::{LeagueStore, MemoryStore};
