use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state lifecycle code used by every backend entity.
///
/// The client never transitions an entity on its own; a status only changes
/// through an explicit update call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StatusCode", into = "u8")]
pub enum EntityStatus {
    Inactive,
    Active,
    Deleted,
}

/// The backend sends the code either as a number or as a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum StatusCode {
    Number(u8),
    Text(String),
}

impl EntityStatus {
    pub const ALL: [EntityStatus; 3] = [Self::Inactive, Self::Active, Self::Deleted];

    pub fn code(self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
            Self::Deleted => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Inactive),
            1 => Some(Self::Active),
            2 => Some(Self::Deleted),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Inactive => "Inactive",
            Self::Active => "Active",
            Self::Deleted => "Deleted",
        }
    }

    /// Badge variant understood by the UI badge component.
    pub fn badge_variant(self) -> &'static str {
        match self {
            Self::Inactive => "warning",
            Self::Active => "success",
            Self::Deleted => "error",
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<EntityStatus> for u8 {
    fn from(value: EntityStatus) -> Self {
        value.code()
    }
}

impl TryFrom<StatusCode> for EntityStatus {
    type Error = String;

    fn try_from(raw: StatusCode) -> Result<Self, Self::Error> {
        let code = match raw {
            StatusCode::Number(n) => n,
            StatusCode::Text(s) => s
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid status code: {s:?}"))?,
        };
        EntityStatus::from_code(code).ok_or_else(|| format!("unknown status code: {code}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_and_textual_codes() {
        let a: EntityStatus = serde_json::from_str("1").unwrap();
        let b: EntityStatus = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(a, EntityStatus::Active);
        assert_eq!(b, EntityStatus::Deleted);
    }

    #[test]
    fn rejects_unknown_code() {
        assert!(serde_json::from_str::<EntityStatus>("3").is_err());
        assert!(serde_json::from_str::<EntityStatus>("\"active\"").is_err());
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&EntityStatus::Inactive).unwrap(), "0");
    }
}
