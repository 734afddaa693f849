use serde::{Deserialize, Serialize};

use crate::shared::{EntityId, EntityStatus};

/// Training course for service partners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_record_with_numeric_id() {
        let c: Course = serde_json::from_str(
            r#"{"id":12,"title":"Safety basics","video":"/media/v.mp4","status":1}"#,
        )
        .unwrap();
        assert_eq!(c.id.as_str(), "12");
        assert_eq!(c.status, Some(EntityStatus::Active));
        assert!(c.thumbnail.is_none());
    }
}
