//! Output writers for a finished analysis
//!
//! Three files land in the output directory:
//! - `markov_messages.json` - generated messages per sender
//! - `<archive><suffix>` - the nickname history report
//! - `kick_counts.json` - removals per person

pub mod json;
pub mod text;

use crate::pipeline::Analysis;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

pub const MARKOV_FILE_NAME: &str = "markov_messages.json";
pub const KICKS_FILE_NAME: &str = "kick_counts.json";

/// Paths of the files written by [`write_outputs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutputs {
    pub markov: PathBuf,
    pub nicknames: PathBuf,
    pub kicks: PathBuf,
}

/// File name of the nickname report for an archive.
pub fn report_file_name(archive_name: &str, report_suffix: &str) -> String {
    format!("{archive_name}{report_suffix}")
}

/// Create `out_dir` if needed and write every output of `analysis` into it.
pub fn write_outputs(
    analysis: &Analysis,
    out_dir: &Path,
    report_suffix: &str,
) -> Result<WrittenOutputs> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let written = WrittenOutputs {
        markov: out_dir.join(MARKOV_FILE_NAME),
        nicknames: out_dir.join(report_file_name(&analysis.archive_name, report_suffix)),
        kicks: out_dir.join(KICKS_FILE_NAME),
    };

    write_file(&written.markov, &json::render_generated(&analysis.generated)?)?;
    write_file(&written.nicknames, &analysis.nickname_report)?;
    write_file(&written.kicks, &json::render_kicks(&analysis.kicks)?)?;

    info!("Wrote outputs to {}", out_dir.display());
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
