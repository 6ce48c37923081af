//! Init command - write an example chatlore.toml

use anyhow::{Context, Result};
use chatlore::config::{CONFIG_FILE_NAME, EXAMPLE_CONFIG};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let archive_dir = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !archive_dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", archive_dir.display());
    }

    let config_path = archive_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!(
            "{} Already configured at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}
