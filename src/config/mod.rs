//! Configuration: typed settings with Figment-based layered loading.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{Config, ConfluenceConfig, FigmaConfig, LlmConfig, PromptConfig};
