use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::repo_types::{Category, EmissionFactor};

impl EmissionFactor {
    /// List the catalog, optionally restricted to one category.
    pub async fn list(
        db: &PgPool,
        category: Option<Category>,
    ) -> Result<Vec<EmissionFactor>, sqlx::Error> {
        sqlx::query_as::<_, EmissionFactor>(
            r#"
            SELECT id, category, name, unit, co2_per_unit, description
            FROM emission_factors
            WHERE ($1::category IS NULL OR category = $1)
            ORDER BY category, name
            "#,
        )
        .bind(category)
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<EmissionFactor>, sqlx::Error> {
        sqlx::query_as::<_, EmissionFactor>(
            r#"
            SELECT id, category, name, unit, co2_per_unit, description
            FROM emission_factors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }
}
