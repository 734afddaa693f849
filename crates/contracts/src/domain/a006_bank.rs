use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, EntityStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: EntityId,
    pub name: String,
    #[serde(default, alias = "ifscPrefix")]
    pub code: Option<String>,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}
