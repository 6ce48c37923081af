//! Terminal summary of a finished run

use crate::pipeline::Analysis;
use console::style;
use std::fmt::Write;

/// Number of most-kicked people listed in the summary
const TOP_KICKED: usize = 3;

/// Render the run summary shown after `analyze`.
pub fn render(analysis: &Analysis) -> String {
    let s = &analysis.summary;
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", style(format!("chatlore: {}", analysis.archive_name)).bold());
    let _ = writeln!(out, "{}", style("──────────────────────────────────────").dim());
    let _ = writeln!(
        out,
        "Messages: {}  Content: {}  System: {}  Participants: {}",
        style(s.messages).bold(),
        s.content_messages,
        s.system_messages,
        s.participants
    );
    let _ = writeln!(
        out,
        "Markov models: {}  Nickname histories: {}",
        style(s.senders_modeled).cyan(),
        style(s.people_renamed).cyan()
    );

    if !analysis.kicks.is_empty() {
        let mut ranked: Vec<(&String, &u64)> = analysis.kicks.iter().collect();
        // stable: equal counts keep first-appearance order
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        let top = ranked
            .iter()
            .take(TOP_KICKED)
            .map(|(name, count)| format!("{name} ({count})"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Most kicked: {}", style(top).yellow());
    }

    out
}
