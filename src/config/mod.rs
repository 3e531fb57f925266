//! Configuration for secreport.
//!
//! - Type-safe configuration structures with serde defaults
//! - Validation through the [`Validatable`] trait
//! - YAML config file discovery and loading
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.secreport.yaml` file in your project root or
//! `~/.config/secreport/`:
//!
//! ```yaml
//! output:
//!   format: summary
//! view:
//!   default_filter: CRITICAL
//! tui:
//!   theme: light
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, OutputConfig, TuiConfig, ViewConfig, ViewPreferences};
pub use validation::{ConfigError, Validatable, VALID_THEMES};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.secreport.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
