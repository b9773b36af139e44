use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;

pub use repo::Profile;

pub fn router() -> Router<AppState> {
    handlers::profile_routes()
}
