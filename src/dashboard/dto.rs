use serde::{Deserialize, Serialize};

use crate::dashboard::repo::CategoryTotal;

/// Headline numbers for the dashboard. Emissions rounded to 2 decimals,
/// goal figures to 1, matching what the UI renders.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub today_emissions: f64,
    pub week_emissions: f64,
    pub daily_goal: f64,
    pub goal_percentage: f64,
    pub over_goal: f64,
}

/// One day of the weekly chart series.
#[derive(Debug, Serialize)]
pub struct WeeklyPoint {
    pub date: String,         // ISO-8601
    pub day: &'static str,    // Mon..Sun
    pub emissions: f64,       // 2 decimals
}

#[derive(Debug, Serialize)]
pub struct WeeklyResponse {
    pub data: Vec<WeeklyPoint>,
}

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub categories: Vec<CategoryTotal>,
}

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    #[serde(default = "default_window_days")]
    pub days: i64,
}
fn default_window_days() -> i64 {
    30
}
