use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, EntityStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: EntityId,
    pub name: String,
    #[serde(alias = "categoryId")]
    pub category_id: EntityId,
    #[serde(default, alias = "categoryName")]
    pub category_name: Option<String>,
    #[serde(default, alias = "subcategoryId")]
    pub subcategory_id: Option<EntityId>,
    #[serde(default, alias = "subcategoryName")]
    pub subcategory_name: Option<String>,
    #[serde(default, alias = "attributeId")]
    pub attribute_id: Option<EntityId>,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "durationMinutes")]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}
