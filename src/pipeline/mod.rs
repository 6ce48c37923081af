//! Batch analysis pipeline
//!
//! Loader -> classifier -> {markov, nicknames, kicks}. Each stage runs to
//! completion before the next; nothing here touches the output directory.

use crate::classifier::CorpusViews;
use crate::corpus::{load_corpus, Corpus};
use crate::kicks::{count_kicks, KickCounts};
use crate::markov::{generate_batch, GeneratedMessages, MarkovError, MarkovModel, RandomSource};
use crate::nickname::{render_report, NicknameHistory};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Name used when the archive path has no final component
const FALLBACK_ARCHIVE_NAME: &str = "archive";

/// Knobs for one run
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub messages_per_sender: usize,
    /// "Now" for open-ended nickname intervals, in epoch milliseconds
    pub now_ms: i64,
}

impl PipelineOptions {
    pub fn new(messages_per_sender: usize) -> Self {
        Self {
            messages_per_sender,
            now_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Corpus totals, for the terminal summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusSummary {
    pub messages: usize,
    pub content_messages: usize,
    pub system_messages: usize,
    pub participants: usize,
    pub senders_modeled: usize,
    pub people_renamed: usize,
}

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct Analysis {
    pub archive_name: String,
    pub summary: CorpusSummary,
    pub generated: GeneratedMessages,
    pub nicknames: NicknameHistory,
    pub nickname_report: String,
    pub kicks: KickCounts,
}

/// Load the archive in `archive_dir` and run every stage over it.
pub fn run(
    archive_dir: &Path,
    options: &PipelineOptions,
    source: &mut dyn RandomSource,
) -> Result<Analysis> {
    let corpus = load(archive_dir)?;
    let analysis = analyze(&archive_name(archive_dir), &corpus, options, source)?;
    Ok(analysis)
}

pub fn load(archive_dir: &Path) -> Result<Corpus> {
    load_corpus(archive_dir)
        .with_context(|| format!("Failed to load archive {}", archive_dir.display()))
}

/// Run every stage over an already loaded corpus.
pub fn analyze(
    archive_name: &str,
    corpus: &Corpus,
    options: &PipelineOptions,
    source: &mut dyn RandomSource,
) -> Result<Analysis, MarkovError> {
    let views = CorpusViews::split(&corpus.messages);

    info!("Building Markov chains from {} content messages", views.content.len());
    let model = MarkovModel::build(views.content.iter().copied());
    let generated = generate_batch(&model, options.messages_per_sender, source)?;

    info!("Reconstructing nickname history");
    let nicknames = NicknameHistory::build(views.all, &corpus.participants);
    let nickname_report = render_report(&nicknames, options.now_ms);

    info!("Counting kicks");
    let kicks = count_kicks(views.all);

    let summary = CorpusSummary {
        messages: views.all.len(),
        content_messages: views.content.len(),
        system_messages: views.system_count(),
        participants: corpus.participants.len(),
        senders_modeled: model.len(),
        people_renamed: nicknames.len(),
    };

    Ok(Analysis {
        archive_name: archive_name.to_string(),
        summary,
        generated,
        nicknames,
        nickname_report,
        kicks,
    })
}

/// Markov model over the content view only.
pub fn build_model(corpus: &Corpus) -> MarkovModel {
    let views = CorpusViews::split(&corpus.messages);
    MarkovModel::build(views.content.iter().copied())
}

/// Nickname history over the unfiltered view.
pub fn build_nicknames(corpus: &Corpus) -> NicknameHistory {
    NicknameHistory::build(&corpus.messages, &corpus.participants)
}

/// Final path component of the archive directory, used to name the report.
pub fn archive_name(archive_dir: &Path) -> String {
    let resolved = archive_dir
        .canonicalize()
        .unwrap_or_else(|_| archive_dir.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_ARCHIVE_NAME.to_string())
}
