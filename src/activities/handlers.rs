use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    activities::dto::{ActivityFilter, ActivityResponse, CreateActivityRequest},
    activities::Activity,
    auth::AuthUser,
    catalog::EmissionFactor,
    error::{AppError, Result},
    state::AppState,
    time_utils::parse_date,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/activities", get(list_activities))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", post(create_activity))
        .route("/activities/:id", delete(delete_activity))
}

#[instrument(skip(state))]
pub async fn list_activities(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(filter): Query<ActivityFilter>,
) -> Result<Json<Vec<ActivityResponse>>> {
    filter.validate()?;
    let date_from = filter.date_from.as_deref().map(parse_date).transpose()?;
    let date_to = filter.date_to.as_deref().map(parse_date).transpose()?;

    let rows = Activity::list_for_user(
        &state.db,
        user_id,
        filter.category,
        date_from,
        date_to,
        filter.limit,
        filter.offset,
    )
    .await?;

    Ok(Json(rows.into_iter().map(ActivityResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_activity(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>)> {
    if !payload.quantity.is_finite() || payload.quantity < 0.0 {
        warn!(quantity = payload.quantity, "rejected negative quantity");
        return Err(AppError::Validation("quantity must be non-negative".into()));
    }

    let date = parse_date(&payload.date)?;

    // An unknown factor id is a bad request, not a missing resource:
    // the factor is an input to the write, not its target.
    let factor = EmissionFactor::find_by_id(&state.db, payload.factor_id)
        .await?
        .ok_or_else(|| AppError::Validation("unknown emission factor".into()))?;

    let activity = Activity::insert(
        &state.db,
        user_id,
        factor.id,
        payload.quantity,
        date,
        &payload.notes,
    )
    .await?;

    let response = ActivityResponse::from_parts(activity, &factor);
    info!(
        user_id = %user_id,
        activity_id = %response.id,
        co2_emissions = response.co2_emissions,
        "activity logged"
    );
    Ok((StatusCode::CREATED, Json(response)))
}

#[instrument(skip(state))]
pub async fn delete_activity(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    // Ownership is part of the predicate; someone else's activity id
    // looks identical to a nonexistent one.
    if !Activity::delete_owned(&state.db, user_id, id).await? {
        return Err(AppError::NotFound("activity not found".into()));
    }
    info!(user_id = %user_id, activity_id = %id, "activity deleted");
    Ok(StatusCode::NO_CONTENT)
}
