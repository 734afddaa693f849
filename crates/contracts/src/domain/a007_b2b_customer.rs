use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, EntityStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct B2bCustomer {
    pub id: EntityId,
    #[serde(alias = "companyName")]
    pub company_name: String,
    #[serde(default, alias = "contactName")]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}
