//! CSV import of enrollments and match results.
//!
//! Enrollments: `player_id,stage_id,division_id[,status]`.
//! Matches: `id,stage_id,division_id,date,team_a_1,team_a_2,team_b_1,team_b_2,winner,sets_a,sets_b,games_a,games_b,status,walkovers`.
//! A team cell holding an integer is a registered player id; any other text is a guest name.
//! `walkovers` lists player ids separated by `;`.

use crate::models::{
    DivisionId, Enrollment, LeagueError, MatchRecord, MatchStatus, PlayerId, Side, StageId, TeamSlot,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::Read;
use uuid::Uuid;

#[derive(Deserialize)]
struct MatchRow {
    #[serde(default)]
    id: Option<Uuid>,
    stage_id: StageId,
    division_id: DivisionId,
    #[serde(default)]
    date: Option<NaiveDate>,
    team_a_1: String,
    team_a_2: String,
    team_b_1: String,
    team_b_2: String,
    #[serde(default)]
    winner: Option<Side>,
    sets_a: u32,
    sets_b: u32,
    games_a: u32,
    games_b: u32,
    #[serde(default)]
    status: Option<MatchStatus>,
    #[serde(default)]
    walkovers: String,
}

fn csv_error(err: csv::Error, fallback_line: u64) -> LeagueError {
    let line = err.position().map(|p| p.line()).unwrap_or(fallback_line);
    LeagueError::Import {
        line,
        message: err.to_string(),
    }
}

fn parse_slot(cell: &str, line: u64) -> Result<TeamSlot, LeagueError> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Err(LeagueError::Import {
            line,
            message: "empty team slot".to_string(),
        });
    }
    Ok(match cell.parse::<PlayerId>() {
        Ok(id) => TeamSlot::Registered(id),
        Err(_) => TeamSlot::Unregistered(cell.to_string()),
    })
}

fn parse_walkovers(cell: &str, line: u64) -> Result<BTreeSet<PlayerId>, LeagueError> {
    cell.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<PlayerId>().map_err(|_| LeagueError::Import {
                line,
                message: format!("invalid walkover player id '{}'", s),
            })
        })
        .collect()
}

/// Read enrollments from CSV with a header row.
pub fn read_enrollments<R: Read>(reader: R) -> Result<Vec<Enrollment>, LeagueError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    rdr.deserialize::<Enrollment>()
        .enumerate()
        .map(|(idx, row)| row.map_err(|e| csv_error(e, idx as u64 + 2)))
        .collect()
}

/// Read match records from CSV with a header row. Rows without an id get a fresh one.
pub fn read_matches<R: Read>(reader: R) -> Result<Vec<MatchRecord>, LeagueError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut matches = Vec::new();
    for (idx, row) in rdr.deserialize::<MatchRow>().enumerate() {
        let fallback_line = idx as u64 + 2;
        let row = row.map_err(|e| csv_error(e, fallback_line))?;
        matches.push(MatchRecord {
            id: row.id.unwrap_or_else(Uuid::new_v4),
            stage_id: row.stage_id,
            division_id: row.division_id,
            date: row.date,
            team_a: [
                parse_slot(&row.team_a_1, fallback_line)?,
                parse_slot(&row.team_a_2, fallback_line)?,
            ],
            team_b: [
                parse_slot(&row.team_b_1, fallback_line)?,
                parse_slot(&row.team_b_2, fallback_line)?,
            ],
            winning_team: row.winner,
            sets_a: row.sets_a,
            sets_b: row.sets_b,
            games_a: row.games_a,
            games_b: row.games_b,
            status: row.status.unwrap_or_default(),
            walkover_player_ids: parse_walkovers(&row.walkovers, fallback_line)?,
        });
    }
    Ok(matches)
}
