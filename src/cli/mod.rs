//! CLI command definitions and handlers

mod analyze;
mod init;
mod kicks;
mod markov;
mod nicknames;

use anyhow::Result;
use chatlore::config::{load_project_config, ProjectConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chatlore - fun statistics from a group chat export
///
/// Point it at a directory of JSON export files (message_1.json, ...).
#[derive(Parser, Debug)]
#[command(name = "chatlore")]
#[command(
    version,
    about = "Fake messages, nickname histories and kick counts from a group chat export",
    after_help = "\
Examples:
  chatlore ./groupchat                   Analyze an archive and write out/
  chatlore markov ./groupchat --seed 7   Reproducible fake messages as JSON
  chatlore markov ./groupchat --sender Ann -n 3
  chatlore nicknames ./groupchat         Print the nickname history
  chatlore init ./groupchat              Write an example chatlore.toml"
)]
pub struct Cli {
    /// Path to the archive directory (default: current directory)
    #[arg(global = true, default_value = ".")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Output directory (overrides [output] dir)
    #[arg(long, short = 'o', global = true)]
    pub output_dir: Option<PathBuf>,

    /// Generated messages per sender (overrides [markov] messages_per_sender)
    #[arg(long, short = 'n', global = true)]
    pub count: Option<usize>,

    /// Seed for reproducible generation (overrides [markov] seed)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every analysis and write the output files (default)
    Analyze,

    /// Print generated messages as JSON
    Markov {
        /// Only generate for this sender
        #[arg(long, short = 's')]
        sender: Option<String>,
    },

    /// Print the nickname history report
    Nicknames,

    /// Print kick counts as JSON
    Kicks,

    /// Write an example chatlore.toml into the archive directory
    Init,
}

impl Cli {
    /// Archive config with command-line overrides applied
    fn config(&self) -> ProjectConfig {
        load_project_config(&self.path).with_overrides(self.output_dir.clone(), self.count, self.seed)
    }
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Init) => init::run(&cli.path),
        Some(Commands::Markov { sender }) => markov::run(&cli.path, &cli.config(), sender.as_deref()),
        Some(Commands::Nicknames) => nicknames::run(&cli.path),
        Some(Commands::Kicks) => kicks::run(&cli.path),
        Some(Commands::Analyze) | None => analyze::run(&cli.path, &cli.config()),
    }
}
