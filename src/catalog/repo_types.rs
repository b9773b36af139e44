use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Activity category. Stored as the Postgres `category` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "category", rename_all = "lowercase")]
pub enum Category {
    Transport,
    Energy,
    Food,
    Digital,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Energy,
        Category::Food,
        Category::Digital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Energy => "energy",
            Category::Food => "food",
            Category::Digital => "digital",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable reference data: kg CO2 emitted per unit of an activity.
///
/// Activities store no emissions of their own; every read multiplies the
/// logged quantity by the coefficient as it is *now*, so editing a factor
/// retroactively changes all reported history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmissionFactor {
    pub id: Uuid,
    pub category: Category,
    pub name: String,
    pub unit: String,
    pub co2_per_unit: f64,
    pub description: String,
}
