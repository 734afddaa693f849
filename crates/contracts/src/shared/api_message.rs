use serde::{Deserialize, Serialize};

/// Body of a non-2xx response.
///
/// The backend is not consistent about the key it uses for the
/// human-readable reason, so both are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiMessage {
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_message_over_error() {
        let m: ApiMessage =
            serde_json::from_str(r#"{"message":"Name already exists","error":"conflict"}"#)
                .unwrap();
        assert_eq!(m.text(), Some("Name already exists"));
    }

    #[test]
    fn blank_message_is_none() {
        let m: ApiMessage = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(m.text(), None);
    }
}
