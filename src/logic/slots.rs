//! Promotion/relegation slot counts from the division configuration.

use crate::models::{DivisionConfig, SlotCounts, PLAYOFF_SLOTS};

/// `clamp(round(enrolled * percentage / 100), minimum, maximum)`, used for both
/// promotion and relegation. Playoff slots are always [`PLAYOFF_SLOTS`].
pub fn allocate_slots(config: &DivisionConfig, enrolled: usize) -> SlotCounts {
    let minimum = config.slots_minimum;
    let maximum = config.slots_maximum.max(minimum);
    let raw = (enrolled as f64 * config.promotion_percentage.max(0.0) / 100.0).round();
    let slots = (raw as u32).clamp(minimum, maximum);
    SlotCounts {
        promotion_slots: slots,
        relegation_slots: slots,
        playoff_slots: PLAYOFF_SLOTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_players_at_twenty_percent_gives_two() {
        let slots = allocate_slots(&DivisionConfig::default(), 10);
        assert_eq!(slots.promotion_slots, 2);
        assert_eq!(slots.relegation_slots, 2);
        assert_eq!(slots.playoff_slots, 2);
    }

    #[test]
    fn slots_stay_within_bounds() {
        let config = DivisionConfig {
            promotion_percentage: 35.0,
            slots_minimum: 3,
            slots_maximum: 6,
            ..DivisionConfig::default()
        };
        for enrolled in 0..60 {
            let slots = allocate_slots(&config, enrolled);
            assert!((3..=6).contains(&slots.promotion_slots));
            assert_eq!(slots.promotion_slots, slots.relegation_slots);
            assert_eq!(slots.playoff_slots, PLAYOFF_SLOTS);
        }
    }

    #[test]
    fn inverted_bounds_use_the_minimum() {
        let config = DivisionConfig {
            slots_minimum: 4,
            slots_maximum: 1,
            ..DivisionConfig::default()
        };
        assert_eq!(allocate_slots(&config, 50).promotion_slots, 4);
    }
}
