//! PropertyCategory - Which variant a catalog entry is

use serde::{Deserialize, Serialize};

/// Property variant classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Residential,
    Commercial,
}

impl std::fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyCategory::Residential => write!(f, "residential"),
            PropertyCategory::Commercial => write!(f, "commercial"),
        }
    }
}

impl std::str::FromStr for PropertyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "residential" => Ok(PropertyCategory::Residential),
            "commercial" => Ok(PropertyCategory::Commercial),
            _ => Err(format!("Unknown property category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            "Residential".parse::<PropertyCategory>(),
            Ok(PropertyCategory::Residential)
        );
        assert_eq!(
            "COMMERCIAL".parse::<PropertyCategory>(),
            Ok(PropertyCategory::Commercial)
        );
        assert!("industrial".parse::<PropertyCategory>().is_err());
    }
}
