//! Static tip tables and deterministic selection.

use crate::catalog::Category;
use crate::dashboard::CategoryTotal;

/// At most this many tips are returned, however many categories rank.
pub const MAX_TIPS: usize = 8;

const TRANSPORT_TIPS: [&str; 4] = [
    "Try walking or cycling for trips under 2km",
    "Use public transport instead of driving alone",
    "Consider carpooling for longer journeys",
    "Work from home when possible to reduce commuting",
];

const ENERGY_TIPS: [&str; 4] = [
    "Switch to LED light bulbs",
    "Unplug electronics when not in use",
    "Set your thermostat 1-2 degrees lower in winter",
    "Use energy-efficient appliances",
];

const FOOD_TIPS: [&str; 4] = [
    "Try 'Meatless Monday' or reduce meat consumption",
    "Buy local and seasonal produce",
    "Reduce food waste by meal planning",
    "Choose organic options when possible",
];

const DIGITAL_TIPS: [&str; 4] = [
    "Stream videos in lower quality when possible",
    "Reduce email subscriptions and delete unused accounts",
    "Use cloud storage efficiently",
    "Choose dark mode to save device energy",
];

/// Shown when the ranking is empty (no activity in the window).
const FALLBACK_TIPS: [&str; 4] = [
    "Start tracking your daily activities to identify improvement areas",
    "Set a daily CO2 goal and try to stay under it",
    "Make one small sustainable change each week",
    "Share your progress with friends to stay motivated",
];

pub fn tips_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Transport => &TRANSPORT_TIPS,
        Category::Energy => &ENERGY_TIPS,
        Category::Food => &FOOD_TIPS,
        Category::Digital => &DIGITAL_TIPS,
    }
}

/// Concatenate each ranked category's tips in ranking order, capped at
/// [`MAX_TIPS`]. An empty ranking gets the generic fallback list instead
/// of nothing.
pub fn select_tips(ranked: &[CategoryTotal]) -> Vec<&'static str> {
    let mut tips: Vec<&'static str> = ranked
        .iter()
        .flat_map(|entry| tips_for(entry.category).iter().copied())
        .collect();

    if tips.is_empty() {
        return FALLBACK_TIPS.to_vec();
    }

    tips.truncate(MAX_TIPS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(entries: &[(Category, f64)]) -> Vec<CategoryTotal> {
        entries
            .iter()
            .map(|&(category, total)| CategoryTotal { category, total })
            .collect()
    }

    #[test]
    fn empty_ranking_gets_fallback_list() {
        let tips = select_tips(&[]);
        assert_eq!(tips.len(), 4);
        assert_eq!(
            tips[0],
            "Start tracking your daily activities to identify improvement areas"
        );
    }

    #[test]
    fn single_category_gets_its_four_tips_in_order() {
        let tips = select_tips(&ranked(&[(Category::Transport, 10.0)]));
        assert_eq!(tips, TRANSPORT_TIPS.to_vec());
    }

    #[test]
    fn ranking_order_drives_concatenation() {
        let tips = select_tips(&ranked(&[(Category::Food, 9.0), (Category::Energy, 3.0)]));
        assert_eq!(tips.len(), 8);
        assert_eq!(&tips[..4], &FOOD_TIPS);
        assert_eq!(&tips[4..], &ENERGY_TIPS);
    }

    #[test]
    fn three_categories_truncate_to_eight() {
        let tips = select_tips(&ranked(&[
            (Category::Digital, 12.0),
            (Category::Transport, 7.0),
            (Category::Food, 1.0),
        ]));
        assert_eq!(tips.len(), MAX_TIPS);
        assert_eq!(&tips[..4], &DIGITAL_TIPS);
        assert_eq!(&tips[4..], &TRANSPORT_TIPS);
    }

    #[test]
    fn selection_is_deterministic() {
        let input = ranked(&[(Category::Energy, 5.0), (Category::Digital, 2.0)]);
        assert_eq!(select_tips(&input), select_tips(&input));
    }
}
