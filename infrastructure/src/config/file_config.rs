//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; provider construction happens in the
//! binary, not here.

use concord_application::DEFAULT_CONCURRENCY;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion provider settings
    pub provider: FileProviderConfig,
    /// Batch execution settings
    pub batch: FileBatchConfig,
}

/// Which completion backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Deterministic offline provider, no network required
    #[default]
    Scripted,
    /// OpenAI-compatible chat completions endpoint (feature `openai`)
    OpenAi,
}

/// `[provider]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    pub kind: ProviderKind,
    /// Model name passed to the backend
    pub model: String,
    /// Base URL of the chat completions API
    pub api_base: String,
    /// Environment variable holding the API key. The key itself never
    /// appears in config files.
    pub api_key_env: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Scripted,
            model: "gpt-4o-mini".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

/// `[batch]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Upper bound on concurrently running item analyses
    pub concurrency: usize,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.provider.kind, ProviderKind::Scripted);
        assert_eq!(config.batch.concurrency, DEFAULT_CONCURRENCY);
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [provider]
            kind = "openai"
            model = "gpt-4o"
            "#,
        )
        .unwrap();

        assert_eq!(config.provider.kind, ProviderKind::OpenAi);
        assert_eq!(config.provider.model, "gpt-4o");
        // Unspecified fields keep their defaults
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.batch.concurrency, DEFAULT_CONCURRENCY);
    }

    #[test]
    fn test_deserialize_batch_section() {
        let config: FileConfig = toml::from_str(
            r#"
            [batch]
            concurrency = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.batch.concurrency, 8);
    }
}
