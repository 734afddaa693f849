use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, EntityStatus};

/// Service attribute (e.g. "2 BHK", "Deep clean") hanging off a subcategory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: EntityId,
    pub name: String,
    #[serde(alias = "subcategoryId")]
    pub subcategory_id: EntityId,
    #[serde(default, alias = "subcategoryName")]
    pub subcategory_name: Option<String>,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}
