use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::activities::{Activity, ActivityWithFactor};
use crate::catalog::{Category, EmissionFactor};
use crate::error::AppError;
use crate::time_utils::format_date;

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    pub factor_id: Uuid,
    pub quantity: f64,
    pub date: String, // YYYY-MM-DD, parsed explicitly
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct ActivityFilter {
    pub category: Option<Category>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
fn default_limit() -> i64 {
    20
}

impl ActivityFilter {
    /// Negative paging values would otherwise reach LIMIT/OFFSET and
    /// come back as a database error instead of a bad request.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.limit < 0 || self.offset < 0 {
            return Err(AppError::Validation(
                "limit and offset must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub factor_id: Uuid,
    pub factor_name: String,
    pub category: Category,
    pub unit: String,
    pub quantity: f64,
    pub date: String,
    pub notes: String,
    pub co2_emissions: f64,
    pub created_at: OffsetDateTime,
}

impl From<ActivityWithFactor> for ActivityResponse {
    fn from(row: ActivityWithFactor) -> Self {
        Self {
            id: row.id,
            factor_id: row.factor_id,
            factor_name: row.factor_name,
            category: row.category,
            unit: row.unit,
            quantity: row.quantity,
            date: format_date(row.date),
            notes: row.notes,
            co2_emissions: row.co2_emissions,
            created_at: row.created_at,
        }
    }
}

impl ActivityResponse {
    /// Build the response for a freshly inserted row from the factor the
    /// insert was validated against.
    pub fn from_parts(activity: Activity, factor: &EmissionFactor) -> Self {
        Self {
            id: activity.id,
            factor_id: factor.id,
            factor_name: factor.name.clone(),
            category: factor.category,
            unit: factor.unit.clone(),
            quantity: activity.quantity,
            date: format_date(activity.date),
            notes: activity.notes,
            co2_emissions: activity.quantity * factor.co2_per_unit,
            created_at: activity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(limit: i64, offset: i64) -> ActivityFilter {
        ActivityFilter {
            category: None,
            date_from: None,
            date_to: None,
            limit,
            offset,
        }
    }

    #[test]
    fn paging_rejects_negative_values() {
        assert!(matches!(
            filter(-1, 0).validate(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            filter(20, -5).validate(),
            Err(AppError::Validation(_))
        ));
        assert!(filter(0, 0).validate().is_ok());
        assert!(filter(20, 40).validate().is_ok());
    }

    #[test]
    fn filter_defaults() {
        let f: ActivityFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(f.limit, 20);
        assert_eq!(f.offset, 0);
        assert!(f.category.is_none());
    }
}
