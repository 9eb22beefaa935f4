//! Advocate personas
//!
//! Persona behavior is data, not code: both advocates share the same
//! invocation machinery and differ only by this configuration record.

use crate::debate::transcript::Speaker;
use crate::prompt::DebatePrompt;
use serde::{Deserialize, Serialize};

/// The stance a persona is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    For,
    Against,
}

impl Stance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::For => "for",
            Stance::Against => "against",
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configured debate persona (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub stance: Stance,
    pub system_prompt: String,
}

impl Persona {
    /// The advocate arguing in favor of the motion
    pub fn advocate_for() -> Self {
        Self {
            name: "ProAgent".to_string(),
            stance: Stance::For,
            system_prompt: DebatePrompt::pro_system().to_string(),
        }
    }

    /// The advocate arguing against the motion
    pub fn advocate_against() -> Self {
        Self {
            name: "ConAgent".to_string(),
            stance: Stance::Against,
            system_prompt: DebatePrompt::con_system().to_string(),
        }
    }

    /// The persona bound to the given protocol speaker
    pub fn for_speaker(speaker: Speaker) -> Self {
        match speaker {
            Speaker::Pro => Self::advocate_for(),
            Speaker::Con => Self::advocate_against(),
        }
    }
}
