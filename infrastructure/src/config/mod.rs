//! Configuration file loading

pub mod file_config;
pub mod loader;

pub use file_config::{ApiSection, DebateSection, FileConfig, OutputSection};
pub use loader::ConfigLoader;
