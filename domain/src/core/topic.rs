//! Topic value object

use serde::{Deserialize, Serialize};

/// The motion being debated (Value Object)
///
/// Represents the statement the Pro persona argues for and the Con
/// persona argues against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a new topic
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Topic cannot be empty");
        Self { content }
    }

    /// Try to create a new topic, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let t = Topic::new("Social media platforms should be regulated as public utilities");
        assert!(t.content().starts_with("Social media"));
    }

    #[test]
    #[should_panic]
    fn test_empty_topic_panics() {
        Topic::new("   ");
    }

    #[test]
    fn test_try_new() {
        assert!(Topic::try_new("").is_none());
        assert!(Topic::try_new("  \t ").is_none());
        assert!(Topic::try_new("AI should be regulated").is_some());
    }
}
