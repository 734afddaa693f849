use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, EntityStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}
