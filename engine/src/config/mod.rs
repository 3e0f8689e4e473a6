//! YAML-backed configuration plumbing shared by every binary in the workspace.
//!
//! A [`ConfigManager`] pairs a content source (a file, or memory in tests)
//! with a serializer, validates whatever it loads and caches the result.

mod config_content_provider;
mod config_manager;
mod config_serializer;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider, MemoryConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
