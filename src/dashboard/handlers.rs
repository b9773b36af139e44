use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use time::Duration;
use tracing::instrument;

use crate::{
    auth::AuthUser,
    dashboard::dto::{BreakdownResponse, SummaryResponse, WeeklyPoint, WeeklyResponse, WindowQuery},
    dashboard::services::{goal_percentage, over_goal, round1, round2, window_start},
    dashboard::{repo, CategoryTotal},
    error::{AppError, Result},
    profile::Profile,
    state::AppState,
    time_utils::{format_date, today_utc, weekday_abbrev},
};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/summary", get(summary))
        .route("/dashboard/weekly", get(weekly))
        .route("/dashboard/categories", get(categories))
}

#[instrument(skip(state))]
pub async fn summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<SummaryResponse>> {
    let profile = Profile::find(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("profile not found".into()))?;

    let today = today_utc();
    let today_emissions = repo::daily_total(&state.db, user_id, today).await?;
    let week_emissions = repo::weekly_total(&state.db, user_id, today).await?;

    Ok(Json(SummaryResponse {
        today_emissions: round2(today_emissions),
        week_emissions: round2(week_emissions),
        daily_goal: profile.daily_goal,
        goal_percentage: round1(goal_percentage(today_emissions, profile.daily_goal)),
        over_goal: round1(over_goal(today_emissions, profile.daily_goal)),
    }))
}

/// Seven records spanning today and the six preceding days, oldest first.
#[instrument(skip(state))]
pub async fn weekly(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<WeeklyResponse>> {
    let today = today_utc();

    let mut data = Vec::with_capacity(7);
    for i in (0..7).rev() {
        let date = today - Duration::days(i);
        let emissions = repo::daily_total(&state.db, user_id, date).await?;
        data.push(WeeklyPoint {
            date: format_date(date),
            day: weekday_abbrev(date),
            emissions: round2(emissions),
        });
    }

    Ok(Json(WeeklyResponse { data }))
}

#[instrument(skip(state))]
pub async fn categories(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<WindowQuery>,
) -> Result<Json<BreakdownResponse>> {
    if !(1..=365).contains(&query.days) {
        return Err(AppError::Validation("days must be between 1 and 365".into()));
    }

    let from = window_start(today_utc(), query.days);
    let rows = repo::category_breakdown(&state.db, user_id, from).await?;
    let categories = rows
        .into_iter()
        .map(|c| CategoryTotal {
            category: c.category,
            total: round2(c.total),
        })
        .collect();

    Ok(Json(BreakdownResponse { categories }))
}
