use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::AuthUser,
    dashboard::{repo as dashboard_repo, services::window_start},
    error::{AppError, Result},
    state::AppState,
    time_utils::today_utc,
    tips::dto::TipsResponse,
    tips::services::select_tips,
};

/// How many top categories feed the recommendation.
const TOP_N: i64 = 3;

pub fn tips_routes() -> Router<AppState> {
    Router::new().route("/tips", get(get_tips))
}

#[derive(Debug, serde::Deserialize)]
pub struct TipsQuery {
    #[serde(default = "default_days")]
    pub days: i64,
}
fn default_days() -> i64 {
    30
}

/// Tips for the user's most frequent categories in the trailing window,
/// ranked by logged quantity.
#[instrument(skip(state))]
pub async fn get_tips(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<TipsQuery>,
) -> Result<Json<TipsResponse>> {
    if !(1..=365).contains(&query.days) {
        return Err(AppError::Validation("days must be between 1 and 365".into()));
    }

    let from = window_start(today_utc(), query.days);
    let ranked = dashboard_repo::top_categories(&state.db, user_id, from, TOP_N).await?;

    let tips = select_tips(&ranked);
    let top_categories = ranked.iter().map(|entry| entry.category).collect();

    Ok(Json(TipsResponse {
        tips,
        top_categories,
    }))
}
