//! Kicks command - print kick counts as JSON

use anyhow::Result;
use chatlore::kicks::count_kicks;
use chatlore::pipeline;
use chatlore::reporters::json;
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    let corpus = pipeline::load(path)?;
    println!("{}", json::render_kicks(&count_kicks(&corpus.messages))?);
    Ok(())
}
