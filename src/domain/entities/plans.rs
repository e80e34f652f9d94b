use serde::{Deserialize, Serialize};

/// A subscription tier. Defined by the catalog at process start; only ever
/// replaced wholesale by an administrative action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanEntity {
    pub id: String,
    pub name: String,
    /// Price in centavos.
    pub price_minor: i32,
    pub duration_days: i32,
    pub desc: String,
    pub icon: String,
    pub max_photos: i32,
    #[serde(default)]
    pub highlight: bool,
    pub benefits: Vec<String>,
}
