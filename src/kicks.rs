//! Kick counts: how often each person was removed from the group

use crate::models::{RawMessage, UNSUBSCRIBE_MESSAGE};
use indexmap::IndexMap;

/// Narration suffix of a removal (as opposed to someone leaving)
pub const KICK_SUFFIX: &str = "from the group.";

/// Person -> number of times removed, in first-appearance order
pub type KickCounts = IndexMap<String, u64>;

/// Tally unsubscribe events ending in [`KICK_SUFFIX`] against the first
/// entry of their `users` list.
pub fn count_kicks<'a>(messages: impl IntoIterator<Item = &'a RawMessage>) -> KickCounts {
    let mut kicked = KickCounts::new();
    for message in messages {
        if !message.is_kind(UNSUBSCRIBE_MESSAGE) {
            continue;
        }
        let is_kick = message
            .text()
            .is_some_and(|text| text.ends_with(KICK_SUFFIX));
        if let (true, Some(name)) = (is_kick, message.first_user()) {
            *kicked.entry(name.to_string()).or_insert(0) += 1;
        }
    }
    kicked
}
