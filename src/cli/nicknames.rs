//! Nicknames command - print the nickname history report

use anyhow::Result;
use chatlore::nickname::render_report;
use chatlore::pipeline;
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    let corpus = pipeline::load(path)?;
    let history = pipeline::build_nicknames(&corpus);
    print!("{}", render_report(&history, chrono::Utc::now().timestamp_millis()));
    Ok(())
}
