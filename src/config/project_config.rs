//! Archive-level configuration support
//!
//! Loads optional settings from a `chatlore.toml` file in the archive
//! directory. A missing file means defaults; a file that fails to parse is
//! reported and ignored.
//!
//! # Configuration Format
//!
//! ```toml
//! # chatlore.toml
//!
//! [markov]
//! messages_per_sender = 10
//! seed = 1234
//!
//! [output]
//! dir = "out"
//! report_suffix = "_nicknames.txt"
//! ```

use crate::markov::DEFAULT_MESSAGES_PER_SENDER;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up in the archive directory
pub const CONFIG_FILE_NAME: &str = "chatlore.toml";

pub const DEFAULT_OUTPUT_DIR: &str = "out";
pub const DEFAULT_REPORT_SUFFIX: &str = "_nicknames.txt";

/// Commented example written by `chatlore init`
pub const EXAMPLE_CONFIG: &str = r#"# chatlore configuration

[markov]
# Number of fake messages generated per sender
messages_per_sender = 10

# Fixed seed for reproducible output (omit for fresh output every run)
# seed = 1234

[output]
# Where generated files are written (relative to the working directory)
dir = "out"

# Nickname report file name: <archive folder name><suffix>
report_suffix = "_nicknames.txt"
"#;

/// Complete archive configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub markov: MarkovConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Message generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct MarkovConfig {
    /// Generated messages per sender
    #[serde(default = "default_messages_per_sender")]
    pub messages_per_sender: usize,

    /// Seed for reproducible generation
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for MarkovConfig {
    fn default() -> Self {
        Self {
            messages_per_sender: DEFAULT_MESSAGES_PER_SENDER,
            seed: None,
        }
    }
}

fn default_messages_per_sender() -> usize {
    DEFAULT_MESSAGES_PER_SENDER
}

/// Output file settings
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_report_suffix")]
    pub report_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            report_suffix: default_report_suffix(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_report_suffix() -> String {
    DEFAULT_REPORT_SUFFIX.to_string()
}

impl ProjectConfig {
    /// Apply command-line overrides (flags beat the file).
    pub fn with_overrides(
        mut self,
        output_dir: Option<PathBuf>,
        count: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(dir) = output_dir {
            self.output.dir = dir;
        }
        if let Some(count) = count {
            self.markov.messages_per_sender = count;
        }
        if seed.is_some() {
            self.markov.seed = seed;
        }
        self
    }
}

/// Load `chatlore.toml` from the archive directory, falling back to
/// defaults.
pub fn load_project_config(archive_dir: &Path) -> ProjectConfig {
    let path = archive_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, archive_dir.display());
        return ProjectConfig::default();
    }

    match load_toml_config(&path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {}", path.display(), e);
            ProjectConfig::default()
        }
    }
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}
