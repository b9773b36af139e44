use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::catalog::Category;

/// A logged activity as stored. Emissions are not a column: they are
/// derived on read from the referenced factor's current coefficient.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub factor_id: Uuid,
    pub quantity: f64,
    pub date: Date,
    pub notes: String,
    pub created_at: OffsetDateTime,
}

/// Activity joined with its emission factor, including the computed
/// `quantity * co2_per_unit`.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityWithFactor {
    pub id: Uuid,
    pub factor_id: Uuid,
    pub quantity: f64,
    pub date: Date,
    pub notes: String,
    pub created_at: OffsetDateTime,
    pub factor_name: String,
    pub category: Category,
    pub unit: String,
    pub co2_per_unit: f64,
    pub co2_emissions: f64,
}
