//! Frontend Models
//!
//! The stored to-do record.

use serde::{Deserialize, Serialize};

/// A single to-do item as persisted in the stored collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (millisecond timestamp string)
    pub id: String,
    /// Item text, may contain line breaks
    pub text: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_and_names() {
        let json = serde_json::to_string(&Item::new("1", "a\nb")).unwrap();
        assert_eq!(json, r#"{"id":"1","text":"a\nb","completed":false}"#);
    }

    #[test]
    fn test_missing_completed_defaults_false() {
        let item: Item = serde_json::from_str(r#"{"id":"7","text":"x","extra":1}"#).unwrap();
        assert_eq!(item, Item::new("7", "x"));
    }
}
