use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;
pub mod services;

pub use repo::CategoryTotal;

pub fn router() -> Router<AppState> {
    handlers::dashboard_routes()
}
