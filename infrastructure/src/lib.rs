//! Infrastructure layer for concord
//!
//! Implements the application layer's ports with concrete adapters:
//! configuration loading, completion providers, and the JSONL round log.

pub mod config;
pub mod logging;
pub mod providers;

pub use config::{
    ConfigError, ConfigLoader, FileBatchConfig, FileConfig, FileProviderConfig, ProviderKind,
};
pub use logging::JsonlRoundLogger;
pub use providers::ScriptedCompletion;

#[cfg(feature = "openai")]
pub use providers::OpenAiCompletion;
