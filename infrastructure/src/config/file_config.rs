//! File-backed configuration schema

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration loaded from `debate.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub debate: DebateSection,
    pub api: ApiSection,
    pub output: OutputSection,
}

/// Defaults for a debate run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebateSection {
    /// Default model identifier when none is given on the command line
    pub model: Option<String>,
    /// Turn cap passed to the spec; the protocol itself is fixed at six
    pub max_turns: u32,
}

impl Default for DebateSection {
    fn default() -> Self {
        Self {
            model: None,
            max_turns: 20,
        }
    }
}

/// Generation service endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: crate::openai::DEFAULT_BASE_URL.to_string(),
            timeout_secs: crate::openai::gateway::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Where run artifacts (report, trace) are written
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Directory for per-run report and trace files
    pub log_dir: PathBuf,
    /// Whether to write run artifacts at all
    pub save: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("debate_logs"),
            save: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert!(config.debate.model.is_none());
        assert_eq!(config.debate.max_turns, 20);
        assert_eq!(config.api.base_url, "https://api.openai.com/v1");
        assert!(config.output.save);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [debate]
            model = "gpt-4o-mini"
            "#,
        )
        .unwrap();
        assert_eq!(config.debate.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.debate.max_turns, 20);
        assert_eq!(config.api.timeout_secs, 120);
    }
}
