use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    catalog::{Category, EmissionFactor},
    error::{AppError, Result},
    state::AppState,
};

pub fn factor_routes() -> Router<AppState> {
    Router::new()
        .route("/factors", get(list_factors))
        .route("/factors/:id", get(get_factor))
}

#[derive(Debug, Deserialize)]
pub struct FactorFilter {
    pub category: Option<Category>,
}

#[instrument(skip(state))]
pub async fn list_factors(
    State(state): State<AppState>,
    Query(filter): Query<FactorFilter>,
) -> Result<Json<Vec<EmissionFactor>>> {
    let factors = EmissionFactor::list(&state.db, filter.category).await?;
    Ok(Json(factors))
}

#[instrument(skip(state))]
pub async fn get_factor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmissionFactor>> {
    let factor = EmissionFactor::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("emission factor not found".into()))?;
    Ok(Json(factor))
}
