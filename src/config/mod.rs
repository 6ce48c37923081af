//! Configuration module for chatlore
//!
//! This module handles:
//! - Archive-level configuration (chatlore.toml)
//! - Command-line overrides of file settings

mod project_config;

pub use project_config::{
    load_project_config,
    MarkovConfig,
    OutputConfig,
    ProjectConfig,
    CONFIG_FILE_NAME,
    DEFAULT_OUTPUT_DIR,
    DEFAULT_REPORT_SUFFIX,
    EXAMPLE_CONFIG,
};
