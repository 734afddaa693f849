use serde::{Deserialize, Serialize};

use super::EntityId;

/// One entry of a select / dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(alias = "id")]
    pub value: EntityId,
    #[serde(alias = "name", alias = "title")]
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<EntityId>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_id_name_records() {
        let opts: Vec<SelectOption> =
            serde_json::from_str(r#"[{"id":7,"name":"Cleaning"},{"value":"x","title":"Other"}]"#)
                .unwrap();
        assert_eq!(opts[0], SelectOption::new("7", "Cleaning"));
        assert_eq!(opts[1], SelectOption::new("x", "Other"));
    }
}
