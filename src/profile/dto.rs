use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Request body for profile updates. Absent fields keep their value.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub daily_goal: Option<f64>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub daily_goal: f64,
    pub location: String,
    pub created_at: OffsetDateTime,
}
