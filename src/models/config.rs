//! Per-division configuration. Absent values fall back to the circuit defaults.

use serde::{Deserialize, Serialize};

/// Number of playoff (repechaje) slots on each side. Not configurable.
pub const PLAYOFF_SLOTS: u32 = 2;

fn default_promotion_percentage() -> f64 {
    20.0
}

fn default_slots_minimum() -> u32 {
    2
}

fn default_slots_maximum() -> u32 {
    10
}

fn default_participation_share() -> f64 {
    1.0
}

fn default_bonus_weight() -> f64 {
    0.05
}

fn default_bonus_cap() -> f64 {
    0.10
}

/// Shape of the bonus-for-playing component: linear in matches played per enrolled player, capped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BonusCurve {
    #[serde(default = "default_bonus_weight")]
    pub weight: f64,
    #[serde(default = "default_bonus_cap")]
    pub cap: f64,
}

impl Default for BonusCurve {
    fn default() -> Self {
        Self {
            weight: default_bonus_weight(),
            cap: default_bonus_cap(),
        }
    }
}

/// Settings for one division of a stage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DivisionConfig {
    /// Share of enrolled players promoted (and relegated), in percent.
    #[serde(default = "default_promotion_percentage")]
    pub promotion_percentage: f64,
    #[serde(default = "default_slots_minimum")]
    pub slots_minimum: u32,
    #[serde(default = "default_slots_maximum")]
    pub slots_maximum: u32,
    /// Multiplier on the division's matches-per-player used as the eligibility minimum.
    #[serde(default = "default_participation_share")]
    pub participation_share: f64,
    #[serde(default)]
    pub bonus: BonusCurve,
}

impl Default for DivisionConfig {
    fn default() -> Self {
        Self {
            promotion_percentage: default_promotion_percentage(),
            slots_minimum: default_slots_minimum(),
            slots_maximum: default_slots_maximum(),
            participation_share: default_participation_share(),
            bonus: BonusCurve::default(),
        }
    }
}
