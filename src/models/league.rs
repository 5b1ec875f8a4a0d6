//! Stage/division identifiers and LeagueError.

use serde::{Deserialize, Serialize};

/// Identifier of a stage (etapa): a time-bounded period of the circuit.
pub type StageId = u32;

/// Identifier of a division: a skill tier ranked separately within a stage.
pub type DivisionId = u32;

/// Errors that can occur during league operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// Not enough eligible players to perform a draw.
    InsufficientPlayers { needed: usize, available: usize },
    /// No enrollments or configuration known for this stage/division.
    DivisionNotFound {
        stage_id: StageId,
        division_id: DivisionId,
    },
    /// A CSV row could not be read.
    Import { line: u64, message: String },
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::InsufficientPlayers { needed, available } => write!(
                f,
                "Need at least {} eligible players for this draw (available {})",
                needed, available
            ),
            LeagueError::DivisionNotFound {
                stage_id,
                division_id,
            } => write!(f, "Division {} not found in stage {}", division_id, stage_id),
            LeagueError::Import { line, message } => {
                write!(f, "Invalid CSV row at line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for LeagueError {}

/// A (stage, division) pair: the unit that standings and draws operate on.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DivisionScope {
    pub stage_id: StageId,
    pub division_id: DivisionId,
}

impl DivisionScope {
    pub fn new(stage_id: StageId, division_id: DivisionId) -> Self {
        Self {
            stage_id,
            division_id,
        }
    }
}
