use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::AuthUser,
    error::{AppError, Result},
    profile::dto::{ProfileResponse, UpdateProfileRequest},
    profile::repo::Profile,
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile", put(update_profile))
}

fn to_response(profile: Profile) -> ProfileResponse {
    ProfileResponse {
        daily_goal: profile.daily_goal,
        location: profile.location,
        created_at: profile.created_at,
    }
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileResponse>> {
    let profile = Profile::find(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("profile not found".into()))?;
    Ok(Json(to_response(profile)))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>> {
    if let Some(goal) = payload.daily_goal {
        if !goal.is_finite() || goal <= 0.0 {
            return Err(AppError::Validation("daily_goal must be positive".into()));
        }
    }

    let profile = Profile::update(&state.db, user_id, payload.daily_goal, payload.location)
        .await?
        .ok_or_else(|| AppError::NotFound("profile not found".into()))?;

    info!(user_id = %user_id, daily_goal = profile.daily_goal, "profile updated");
    Ok(Json(to_response(profile)))
}
