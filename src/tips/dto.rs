use serde::Serialize;

use crate::catalog::Category;

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub tips: Vec<&'static str>,
    pub top_categories: Vec<Category>,
}
