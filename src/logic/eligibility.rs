//! Split standing rows by whether they met the participation minimum.

use crate::models::StandingRow;

/// Rows that may receive a numeric rank, and rows that may not. Order is preserved.
#[derive(Debug)]
pub struct Eligibility<'a> {
    pub eligible: Vec<&'a StandingRow>,
    pub ineligible: Vec<&'a StandingRow>,
}

pub fn split_by_eligibility(rows: &[StandingRow]) -> Eligibility<'_> {
    let (eligible, ineligible): (Vec<_>, Vec<_>) = rows.iter().partition(|r| r.meets_minimum());
    Eligibility {
        eligible,
        ineligible,
    }
}
