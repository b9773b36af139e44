use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::activities::repo_types::{Activity, ActivityWithFactor};
use crate::catalog::Category;

impl Activity {
    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        factor_id: Uuid,
        quantity: f64,
        date: Date,
        notes: &str,
    ) -> Result<Activity, sqlx::Error> {
        sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO activities (id, user_id, factor_id, quantity, date, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, factor_id, quantity, date, notes, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(factor_id)
        .bind(quantity)
        .bind(date)
        .bind(notes)
        .fetch_one(db)
        .await
    }

    /// Delete an activity owned by `user_id`. Returns whether a row was
    /// removed; a foreign activity id deletes nothing.
    pub async fn delete_owned(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM activities
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a user's activities with their factors, newest first
    /// (date, then creation time), optionally filtered.
    #[allow(clippy::too_many_arguments)]
    pub async fn list_for_user(
        db: &PgPool,
        user_id: Uuid,
        category: Option<Category>,
        date_from: Option<Date>,
        date_to: Option<Date>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ActivityWithFactor>, sqlx::Error> {
        sqlx::query_as::<_, ActivityWithFactor>(
            r#"
            SELECT a.id, a.factor_id, a.quantity, a.date, a.notes, a.created_at,
                   f.name AS factor_name, f.category, f.unit, f.co2_per_unit,
                   a.quantity * f.co2_per_unit AS co2_emissions
            FROM activities a
            JOIN emission_factors f ON f.id = a.factor_id
            WHERE a.user_id = $1
              AND ($2::category IS NULL OR f.category = $2)
              AND ($3::date IS NULL OR a.date >= $3)
              AND ($4::date IS NULL OR a.date <= $4)
            ORDER BY a.date DESC, a.created_at DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(user_id)
        .bind(category)
        .bind(date_from)
        .bind(date_to)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }
}
