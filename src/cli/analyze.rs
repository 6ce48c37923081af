//! Analyze command - run the full pipeline and write every output

use anyhow::Result;
use chatlore::config::ProjectConfig;
use chatlore::markov::source_for;
use chatlore::pipeline::{self, PipelineOptions};
use chatlore::reporters::{self, text};
use console::style;
use std::path::Path;

pub fn run(path: &Path, config: &ProjectConfig) -> Result<()> {
    let options = PipelineOptions::new(config.markov.messages_per_sender);
    let mut source = source_for(config.markov.seed);
    let analysis = pipeline::run(path, &options, source.as_mut())?;

    let written =
        reporters::write_outputs(&analysis, &config.output.dir, &config.output.report_suffix)?;

    print!("{}", text::render(&analysis));
    println!();
    for file in [&written.markov, &written.nicknames, &written.kicks] {
        println!("{} Wrote {}", style("✓").green(), style(file.display()).cyan());
    }
    Ok(())
}
