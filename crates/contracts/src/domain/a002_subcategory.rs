use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, EntityStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: EntityId,
    pub name: String,
    #[serde(alias = "categoryId")]
    pub category_id: EntityId,
    #[serde(default, alias = "categoryName")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}
