use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::EntityId;

/// Payments are read-only in the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: EntityId,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default, alias = "customerName")]
    pub customer_name: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default, alias = "paidAt")]
    pub paid_at: Option<DateTime<Utc>>,
    /// Gateway state ("captured", "refunded", ...), not an [`crate::shared::EntityStatus`].
    #[serde(default)]
    pub state: Option<String>,
}
