use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        assert_eq!(SortDirection::Ascending.flip(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flip(), SortDirection::Ascending);
    }

    #[test]
    fn test_default_is_descending() {
        assert_eq!(SortDirection::default(), SortDirection::Descending);
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(SortDirection::Ascending.to_string(), "ascending");
        assert_eq!(
            serde_json::to_string(&SortDirection::Descending).unwrap(),
            "\"descending\""
        );
    }
}
