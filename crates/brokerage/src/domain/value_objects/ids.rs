//! Identifiers for catalog entries and agents
//!
//! Both are caller-supplied strings (e.g. `#R001`, `#A001`). Agents refer to
//! properties, and properties to their selling agent, only through these keys.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new<S: Into<String>>(id: S) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a property in the catalog
    PropertyId
);

string_id!(
    /// Identifier of an agent
    AgentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_compare() {
        let id = PropertyId::from("#R001");
        assert_eq!(id.to_string(), "#R001");
        assert_eq!(id, "#R001");
        assert_eq!(id, PropertyId::new(String::from("#R001")));
    }

    #[test]
    fn test_serde_transparent() {
        let id = AgentId::new("#A001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"#A001\"");

        let back: AgentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
