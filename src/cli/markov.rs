//! Markov command - print generated messages as JSON

use anyhow::Result;
use chatlore::config::ProjectConfig;
use chatlore::markov::{generate_batch, generate_for, source_for, GeneratedMessages};
use chatlore::pipeline;
use chatlore::reporters::json;
use std::path::Path;

pub fn run(path: &Path, config: &ProjectConfig, sender: Option<&str>) -> Result<()> {
    let corpus = pipeline::load(path)?;
    let model = pipeline::build_model(&corpus);
    let mut source = source_for(config.markov.seed);
    let count = config.markov.messages_per_sender;

    let generated = match sender {
        Some(sender) => {
            let messages = (0..count)
                .map(|_| generate_for(&model, sender, source.as_mut()))
                .collect::<Result<Vec<_>, _>>()?;
            let mut one = GeneratedMessages::new();
            one.insert(sender.to_string(), messages);
            one
        }
        None => generate_batch(&model, count, source.as_mut())?,
    };

    println!("{}", json::render_generated(&generated)?);
    Ok(())
}
