use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, EntityStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<EntityStatus>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}
