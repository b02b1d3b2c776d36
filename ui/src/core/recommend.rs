//! Party-size recommendations.
//!
//! How many savory snacks and sweets to order for a given number of guests.
//! The per-person ratios depend on whether the snacks accompany a meal or are
//! the only food served:
//!
//! - with other food: 5 savory + 3 sweets per person
//! - snacks only: 12 savory + 4.5 sweets per person
//!
//! The ratios live in `site.toml` ([`RecommendationPolicy`]); the numbers
//! above are the shipped defaults. Counts are rounded up to whole units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Units per guest for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio {
    pub savory: Decimal,
    pub sweet: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationPolicy {
    pub with_other_food: Ratio,
    pub snacks_only: Ratio,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            with_other_food: Ratio {
                savory: Decimal::from(5),
                sweet: Decimal::from(3),
            },
            snacks_only: Ratio {
                savory: Decimal::from(12),
                sweet: Decimal::new(45, 1),
            },
        }
    }
}

impl RecommendationPolicy {
    pub fn ratio(&self, has_other_food: bool) -> Ratio {
        if has_other_food {
            self.with_other_food
        } else {
            self.snacks_only
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Recommendation {
    pub savory: u32,
    pub sweet: u32,
}

/// Recommended unit counts. Guest counts below one are treated as one.
pub fn recommend(
    guests: u32,
    has_other_food: bool,
    policy: &RecommendationPolicy,
) -> Recommendation {
    let guests = Decimal::from(guests.max(1));
    let ratio = policy.ratio(has_other_food);
    Recommendation {
        savory: units(guests * ratio.savory),
        sweet: units(guests * ratio.sweet),
    }
}

fn units(amount: Decimal) -> u32 {
    amount.ceil().to_u32().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_guests_with_food() {
        let r = recommend(20, true, &RecommendationPolicy::default());
        assert_eq!(r, Recommendation { savory: 100, sweet: 60 });
    }

    #[test]
    fn twenty_guests_snacks_only() {
        let r = recommend(20, false, &RecommendationPolicy::default());
        assert_eq!(r, Recommendation { savory: 240, sweet: 90 });
    }

    #[test]
    fn fractional_ratio_rounds_up() {
        let r = recommend(7, false, &RecommendationPolicy::default());
        // 7 * 4.5 = 31.5
        assert_eq!(r.sweet, 32);
        assert_eq!(r.savory, 84);
    }

    #[test]
    fn zero_guests_counts_as_one() {
        let r = recommend(0, true, &RecommendationPolicy::default());
        assert_eq!(r, Recommendation { savory: 5, sweet: 3 });
    }
}
