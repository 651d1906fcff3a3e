//! Configuration loading and file-level config types

mod file_config;
mod loader;

pub use file_config::{FileBatchConfig, FileConfig, FileProviderConfig, ProviderKind};
pub use loader::{ConfigError, ConfigLoader};
