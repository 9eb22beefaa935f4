//! Debate run specification (Entity)

use crate::core::model::Model;
use crate::core::topic::Topic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of utterances in the fixed protocol
pub const PROTOCOL_TURNS: u32 = 6;

/// Errors raised when a [`DebateSpec`] is invalid
///
/// These are surfaced before any generation call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("debate topic cannot be empty")]
    EmptyTopic,

    #[error("max turns {given} is below the fixed six-turn protocol")]
    MaxTurnsTooLow { given: u32 },
}

/// Configuration for one debate run (Entity)
///
/// Immutable once the run starts. `max_turns` is a lower-bound guard only:
/// the protocol is structurally fixed at six turns, so the value is checked
/// once at construction and never drives the loop count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateSpec {
    topic: Topic,
    max_turns: u32,
    model: Model,
}

impl DebateSpec {
    /// Validate and build a spec
    pub fn new(
        topic: impl Into<String>,
        max_turns: u32,
        model: Model,
    ) -> Result<Self, ConfigError> {
        let topic = Topic::try_new(topic).ok_or(ConfigError::EmptyTopic)?;
        if max_turns < PROTOCOL_TURNS {
            return Err(ConfigError::MaxTurnsTooLow { given: max_turns });
        }
        Ok(Self {
            topic,
            max_turns,
            model,
        })
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_spec() {
        let spec = DebateSpec::new("AI should be regulated", 20, Model::default()).unwrap();
        assert_eq!(spec.topic().content(), "AI should be regulated");
        assert_eq!(spec.max_turns(), 20);
    }

    #[test]
    fn test_empty_topic_rejected() {
        let err = DebateSpec::new("", 20, Model::default()).unwrap_err();
        assert_eq!(err, ConfigError::EmptyTopic);

        let err = DebateSpec::new("   ", 20, Model::default()).unwrap_err();
        assert_eq!(err, ConfigError::EmptyTopic);
    }

    #[test]
    fn test_max_turns_below_protocol_rejected() {
        let err = DebateSpec::new("X", 3, Model::default()).unwrap_err();
        assert_eq!(err, ConfigError::MaxTurnsTooLow { given: 3 });
    }

    #[test]
    fn test_max_turns_at_protocol_length_accepted() {
        assert!(DebateSpec::new("X", 6, Model::default()).is_ok());
    }
}
