//! League business logic: statistics, averages, standings, slots, selection, draws.

mod averages;
mod draw;
mod eligibility;
mod selection;
mod slots;
mod standings;
mod stats;

pub use averages::{
    bonus_for_playing, compute_averages, final_average, general_average, individual_average,
    meets_minimum, minimum_required, DivisionTotals,
};
pub use draw::{
    draw_full_round, draw_single_match, prior_meetings, MAX_PRIOR_MEETINGS,
    MIN_PLAYERS_FOR_PAIRING, PLAYERS_PER_MATCH,
};
pub use eligibility::{split_by_eligibility, Eligibility};
pub use selection::select_promotion_relegation;
pub use slots::allocate_slots;
pub use standings::compute_standings;
pub use stats::{aggregate_player_stats, usable_matches};
