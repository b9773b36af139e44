//! Emissions aggregation queries.
//!
//! Totals are always `SUM(quantity * co2_per_unit)` computed per row at
//! read time against the factor's current coefficient; nothing is
//! snapshotted or cached, so factor edits reprice history.

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::{Date, Duration};
use uuid::Uuid;

use crate::catalog::Category;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Sum of emissions over the inclusive date range `[from, to]`.
/// No matching activities is a valid zero, not an error.
pub async fn emissions_between(
    db: &PgPool,
    user_id: Uuid,
    from: Date,
    to: Date,
) -> Result<f64, sqlx::Error> {
    sqlx::query_scalar::<_, f64>(
        r#"
        SELECT COALESCE(SUM(a.quantity * f.co2_per_unit), 0.0)
        FROM activities a
        JOIN emission_factors f ON f.id = a.factor_id
        WHERE a.user_id = $1 AND a.date BETWEEN $2 AND $3
        "#,
    )
    .bind(user_id)
    .bind(from)
    .bind(to)
    .fetch_one(db)
    .await
}

pub async fn daily_total(db: &PgPool, user_id: Uuid, date: Date) -> Result<f64, sqlx::Error> {
    emissions_between(db, user_id, date, date).await
}

/// Inclusive 7-day window ending at `as_of`.
pub async fn weekly_total(db: &PgPool, user_id: Uuid, as_of: Date) -> Result<f64, sqlx::Error> {
    emissions_between(db, user_id, as_of - Duration::days(6), as_of).await
}

/// Per-category emissions over `[from, today]`; categories with a zero
/// total are omitted. Ordered by total descending.
pub async fn category_breakdown(
    db: &PgPool,
    user_id: Uuid,
    from: Date,
) -> Result<Vec<CategoryTotal>, sqlx::Error> {
    sqlx::query_as::<_, CategoryTotal>(
        r#"
        SELECT f.category, SUM(a.quantity * f.co2_per_unit) AS total
        FROM activities a
        JOIN emission_factors f ON f.id = a.factor_id
        WHERE a.user_id = $1 AND a.date >= $2
        GROUP BY f.category
        HAVING SUM(a.quantity * f.co2_per_unit) > 0
        ORDER BY total DESC, f.category::text ASC
        "#,
    )
    .bind(user_id)
    .bind(from)
    .fetch_all(db)
    .await
}

/// Categories ranked by summed raw *quantity*, not emissions; this feeds
/// tip selection, which cares about what the user does most, not what
/// emits most. Ties break on category name ascending.
pub async fn top_categories(
    db: &PgPool,
    user_id: Uuid,
    from: Date,
    n: i64,
) -> Result<Vec<CategoryTotal>, sqlx::Error> {
    sqlx::query_as::<_, CategoryTotal>(
        r#"
        SELECT f.category, SUM(a.quantity) AS total
        FROM activities a
        JOIN emission_factors f ON f.id = a.factor_id
        WHERE a.user_id = $1 AND a.date >= $2
        GROUP BY f.category
        ORDER BY total DESC, f.category::text ASC
        LIMIT $3
        "#,
    )
    .bind(user_id)
    .bind(from)
    .bind(n)
    .fetch_all(db)
    .await
}

#[cfg(test)]
mod db_tests {
    use super::*;
    use crate::activities::Activity;
    use crate::auth::repo::User;
    use crate::catalog::EmissionFactor;
    use crate::time_utils::today_utc;

    async fn test_user(db: &PgPool, email: &str) -> Uuid {
        User::create_with_profile(db, email, "unused-hash")
            .await
            .expect("create user")
            .id
    }

    async fn seeded_factor(db: &PgPool, name: &str) -> EmissionFactor {
        EmissionFactor::list(db, None)
            .await
            .expect("list factors")
            .into_iter()
            .find(|f| f.name == name)
            .expect("factor present in seed data")
    }

    #[sqlx::test]
    async fn totals_reprice_after_factor_edit(pool: PgPool) {
        let user = test_user(&pool, "reprice@example.com").await;
        let factor = seeded_factor(&pool, "Gasoline car (medium)").await; // 0.21 kg/km
        let today = today_utc();

        Activity::insert(&pool, user, factor.id, 20.0, today, "")
            .await
            .expect("insert");

        let before = daily_total(&pool, user, today).await.expect("daily total");
        assert!((before - 4.2).abs() < 1e-9);

        // Emissions are derived on read, so a coefficient edit changes
        // already-logged history.
        sqlx::query("UPDATE emission_factors SET co2_per_unit = $1 WHERE id = $2")
            .bind(0.42)
            .bind(factor.id)
            .execute(&pool)
            .await
            .expect("update factor");

        let after = daily_total(&pool, user, today).await.expect("daily total");
        assert!((after - 8.4).abs() < 1e-9);
    }

    #[sqlx::test]
    async fn totals_sum_per_day_and_default_to_zero(pool: PgPool) {
        let user = test_user(&pool, "totals@example.com").await;
        let factor = seeded_factor(&pool, "Grid electricity").await; // 0.5 kg/kWh
        let today = today_utc();

        for (quantity, days_ago) in [(2.0, 0), (4.0, 0), (6.0, 3)] {
            Activity::insert(&pool, user, factor.id, quantity, today - Duration::days(days_ago), "")
                .await
                .expect("insert");
        }
        // Day 7 back is just outside the weekly window.
        Activity::insert(&pool, user, factor.id, 100.0, today - Duration::days(7), "")
            .await
            .expect("insert");

        let today_total = daily_total(&pool, user, today).await.expect("daily total");
        assert!((today_total - 3.0).abs() < 1e-9);

        // Absent data is a valid zero, not an error.
        let empty_day = daily_total(&pool, user, today - Duration::days(1))
            .await
            .expect("daily total");
        assert_eq!(empty_day, 0.0);

        // The weekly total is exactly the sum of its seven daily totals.
        let mut summed = 0.0;
        for i in 0..7 {
            summed += daily_total(&pool, user, today - Duration::days(i))
                .await
                .expect("daily total");
        }
        let weekly = weekly_total(&pool, user, today).await.expect("weekly total");
        assert!((weekly - summed).abs() < 1e-9);
        assert!((weekly - 6.0).abs() < 1e-9);
    }

    #[sqlx::test]
    async fn breakdown_omits_zero_total_categories(pool: PgPool) {
        let user = test_user(&pool, "breakdown@example.com").await;
        let walking = seeded_factor(&pool, "Walking").await; // 0 kg/km
        let grid = seeded_factor(&pool, "Grid electricity").await;
        let today = today_utc();

        Activity::insert(&pool, user, walking.id, 5.0, today, "")
            .await
            .expect("insert");
        Activity::insert(&pool, user, grid.id, 2.0, today, "")
            .await
            .expect("insert");

        let rows = category_breakdown(&pool, user, today - Duration::days(29))
            .await
            .expect("breakdown");
        assert_eq!(rows.len(), 1, "transport sums to zero and is omitted");
        assert_eq!(rows[0].category, Category::Energy);
        assert!((rows[0].total - 1.0).abs() < 1e-9);
    }

    #[sqlx::test]
    async fn top_categories_rank_by_quantity(pool: PgPool) {
        let user = test_user(&pool, "ranking@example.com").await;
        let car = seeded_factor(&pool, "Gasoline car (medium)").await;
        let today = today_utc();

        Activity::insert(&pool, user, car.id, 10.0, today, "")
            .await
            .expect("insert");

        let ranked = top_categories(&pool, user, today - Duration::days(29), 3)
            .await
            .expect("top categories");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].category, Category::Transport);
        assert!((ranked[0].total - 10.0).abs() < 1e-9, "ranked by quantity, not emissions");
    }
}
