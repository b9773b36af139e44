use crate::state::AppState;
use axum::Router;

pub mod handlers;
pub mod repo;
mod repo_types;

pub use repo_types::{Category, EmissionFactor};

pub fn router() -> Router<AppState> {
    handlers::factor_routes()
}
