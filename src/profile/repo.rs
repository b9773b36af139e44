use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Per-user settings, one row per user, created at registration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub user_id: Uuid,
    pub daily_goal: f64, // kg CO2 per day
    pub location: String,
    pub created_at: OffsetDateTime,
}

impl Profile {
    pub async fn find(db: &PgPool, user_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
        sqlx::query_as::<_, Profile>(
            r#"
            SELECT user_id, daily_goal, location, created_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Update goal and/or location, keeping the current value where the
    /// caller passed nothing.
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        daily_goal: Option<f64>,
        location: Option<String>,
    ) -> Result<Option<Profile>, sqlx::Error> {
        sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET daily_goal = COALESCE($2, daily_goal),
                location = COALESCE($3, location)
            WHERE user_id = $1
            RETURNING user_id, daily_goal, location, created_at
            "#,
        )
        .bind(user_id)
        .bind(daily_goal)
        .bind(location)
        .fetch_optional(db)
        .await
    }
}
