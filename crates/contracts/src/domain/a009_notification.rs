use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, EntityStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default, alias = "sentAt")]
    pub sent_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}
