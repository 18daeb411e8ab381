use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Senior/Junior partition shared by classes and events. Stored as TEXT and
/// parsed at the domain boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Senior,
    Junior,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid category '{0}': must be 'Senior' or 'Junior'")]
pub struct InvalidCategory(pub String);

impl Category {
    pub fn parse(value: &str) -> Result<Self, InvalidCategory> {
        match value {
            "Senior" => Ok(Self::Senior),
            "Junior" => Ok(Self::Junior),
            other => Err(InvalidCategory(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Senior => "Senior",
            Self::Junior => "Junior",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(Category::parse("Senior"), Ok(Category::Senior));
        assert_eq!(Category::parse("Junior"), Ok(Category::Junior));
    }

    #[test]
    fn test_parse_rejects_unknown_and_wrong_case() {
        assert!(Category::parse("senior").is_err());
        assert!(Category::parse("Middle").is_err());
        assert!(Category::parse("").is_err());
    }

    #[test]
    fn test_roundtrip() {
        for category in [Category::Senior, Category::Junior] {
            assert_eq!(Category::parse(category.as_str()), Ok(category));
        }
    }
}
