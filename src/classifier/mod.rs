//! Message classification
//!
//! Separates human-written text from the narration the messenger inserts
//! for in-app actions (polls, reminders, nickname changes, ...). Only
//! `Generic` messages can be content; anything else is system narration.
//!
//! Two views come out of a corpus: the content-only view feeds the Markov
//! chains, while the nickname and kick parsers read the unfiltered view
//! because the narration they parse is exactly what gets filtered here.

use crate::models::{RawMessage, GENERIC_MESSAGE};
use tracing::debug;

/// Substrings that only occur in automated action narration
pub const ACTION_PHRASES: &[&str] = &[
    " in the poll.",
    " created a poll: ",
    " responded with ",
    " created the reminder: ",
    " created the group.",
    " created a plan.",
    " set the nickname for ",
    " set your nickname to ",
    " to your message ",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageClass {
    /// Genuine human-authored text
    Content,
    /// Automated narration, non-text payloads, or empty messages
    System,
}

pub fn classify(message: &RawMessage) -> MessageClass {
    if !message.is_kind(GENERIC_MESSAGE) {
        return MessageClass::System;
    }
    let Some(text) = message.text() else {
        return MessageClass::System;
    };
    if ACTION_PHRASES.iter().any(|phrase| text.contains(phrase)) {
        MessageClass::System
    } else {
        MessageClass::Content
    }
}

pub fn is_content(message: &RawMessage) -> bool {
    classify(message) == MessageClass::Content
}

/// The two views of a corpus used downstream
#[derive(Debug, Clone)]
pub struct CorpusViews<'a> {
    /// Every message, unfiltered
    pub all: &'a [RawMessage],
    /// Content messages only, in corpus order
    pub content: Vec<&'a RawMessage>,
}

impl<'a> CorpusViews<'a> {
    pub fn split(messages: &'a [RawMessage]) -> Self {
        let content: Vec<_> = messages.iter().filter(|m| is_content(m)).collect();
        debug!(
            "Classified {} messages: {} content, {} system",
            messages.len(),
            content.len(),
            messages.len() - content.len()
        );
        Self {
            all: messages,
            content,
        }
    }

    pub fn system_count(&self) -> usize {
        self.all.len() - self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic(text: &str) -> RawMessage {
        RawMessage {
            sender_name: Some("Alex".into()),
            content: Some(text.into()),
            kind: Some(GENERIC_MESSAGE.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_text_is_content() {
        assert_eq!(classify(&generic("see you at 6")), MessageClass::Content);
    }

    #[test]
    fn test_poll_creation_is_system() {
        assert_eq!(
            classify(&generic("Alex created a poll: Lunch?")),
            MessageClass::System
        );
    }

    #[test]
    fn test_every_action_phrase_is_system() {
        for phrase in ACTION_PHRASES {
            let text = format!("Alex{phrase}something");
            assert_eq!(classify(&generic(&text)), MessageClass::System, "{text}");
        }
    }

    #[test]
    fn test_nickname_narration_is_system() {
        let msg = generic("Alex set the nickname for Sam to Sammy.");
        assert!(!is_content(&msg));
        let msg = generic("Alex set your nickname to Boss.");
        assert!(!is_content(&msg));
    }

    #[test]
    fn test_non_generic_type_is_system() {
        let mut msg = generic("hello there");
        msg.kind = Some("Share".into());
        assert_eq!(classify(&msg), MessageClass::System);

        msg.kind = None;
        assert_eq!(classify(&msg), MessageClass::System);
    }

    #[test]
    fn test_missing_or_empty_content_is_system() {
        let mut msg = generic("");
        assert_eq!(classify(&msg), MessageClass::System);
        msg.content = None;
        assert_eq!(classify(&msg), MessageClass::System);
    }

    #[test]
    fn test_phrase_needs_surrounding_spaces() {
        // "poll." without the leading " in the" is ordinary chat
        assert!(is_content(&generic("did you see the poll.")));
    }

    #[test]
    fn test_split_keeps_both_views() {
        let messages = vec![
            generic("hi"),
            generic("Alex created the group."),
            RawMessage::default(),
            generic("bye"),
        ];
        let views = CorpusViews::split(&messages);
        assert_eq!(views.all.len(), 4);
        assert_eq!(views.content.len(), 2);
        assert_eq!(views.system_count(), 2);
        assert_eq!(views.content[1].text(), Some("bye"));
    }
}
