//! Pure goal arithmetic, kept out of the handlers so it can be tested
//! without a database.

use time::{Date, Duration};

/// Percentage of the daily goal consumed. A goal of zero or less yields
/// 0 rather than dividing by it.
pub fn goal_percentage(daily_total: f64, daily_goal: f64) -> f64 {
    if daily_goal > 0.0 {
        daily_total / daily_goal * 100.0
    } else {
        0.0
    }
}

/// How far over the goal today's total is; never negative.
pub fn over_goal(daily_total: f64, daily_goal: f64) -> f64 {
    (daily_total - daily_goal).max(0.0)
}

/// First day of an inclusive trailing window of `days` days ending today.
pub fn window_start(today: Date, days: i64) -> Date {
    today - Duration::days(days.max(1) - 1)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn goal_percentage_basic() {
        assert_eq!(goal_percentage(5.0, 10.0), 50.0);
        assert_eq!(goal_percentage(0.0, 10.0), 0.0);
        assert_eq!(goal_percentage(20.0, 10.0), 200.0);
    }

    #[test]
    fn goal_percentage_is_zero_for_nonpositive_goal() {
        assert_eq!(goal_percentage(7.5, 0.0), 0.0);
        assert_eq!(goal_percentage(7.5, -3.0), 0.0);
    }

    #[test]
    fn over_goal_clamps_at_zero() {
        assert_eq!(over_goal(4.0, 10.0), 0.0);
        assert_eq!(over_goal(12.5, 10.0), 2.5);
        assert_eq!(over_goal(10.0, 10.0), 0.0);
    }

    #[test]
    fn window_start_is_inclusive() {
        // A 7-day window ending on the 26th starts on the 20th.
        assert_eq!(window_start(date!(2026 - 08 - 26), 7), date!(2026 - 08 - 20));
        // A 1-day window is just today.
        assert_eq!(window_start(date!(2026 - 08 - 26), 1), date!(2026 - 08 - 26));
        assert_eq!(
            window_start(date!(2026 - 08 - 26), 30),
            date!(2026 - 07 - 28)
        );
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(4.199999), 4.2);
        assert_eq!(round2(0.004999), 0.0);
        assert_eq!(round1(33.333), 33.3);
    }

    #[test]
    fn worked_example_from_catalog() {
        // Gasoline car (medium), 0.21 kg/km, 20 km.
        let emissions = 20.0 * 0.21;
        assert_eq!(round2(emissions), 4.2);
        assert_eq!(round1(goal_percentage(emissions, 10.0)), 42.0);
        assert_eq!(over_goal(emissions, 10.0), 0.0);
    }
}
