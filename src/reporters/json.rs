//! JSON reporter
//!
//! Generated messages are written with 4-space indentation; kick counts use
//! serde_json's default pretty printer.

use crate::kicks::KickCounts;
use crate::markov::GeneratedMessages;
use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// Render generated messages, sender -> list of strings.
pub fn render_generated(generated: &GeneratedMessages) -> Result<String> {
    render_indented(generated)
}

/// Render kick counts, person -> count.
pub fn render_kicks(kicks: &KickCounts) -> Result<String> {
    Ok(serde_json::to_string_pretty(kicks)?)
}

fn render_indented<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}
