//! Recognizers for the two nickname-change narration templates

const NAMED_MARKER: &str = " set the nickname for ";
const NAMED_TARGET: &str = " to ";
const SELF_MARKER: &str = " set your nickname to ";

/// A parsed nickname change, borrowing from the message content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NicknameChange<'a> {
    /// "<actor> set the nickname for <person> to <nickname>."
    Named { person: &'a str, nickname: &'a str },
    /// "<actor> set your nickname to <nickname>." (the exporting account)
    Own { nickname: &'a str },
}

/// Parse a message body. Text matching neither template yields `None`.
pub fn parse_change(content: &str) -> Option<NicknameChange<'_>> {
    if let Some((_, rest)) = content.split_once(NAMED_MARKER) {
        // the person is everything before the first " to "; the nickname
        // keeps any later ones
        let (person, nickname) = rest.split_once(NAMED_TARGET)?;
        return Some(NicknameChange::Named {
            person,
            nickname: strip_period(nickname),
        });
    }

    let (_, nickname) = content.split_once(SELF_MARKER)?;
    Some(NicknameChange::Own {
        nickname: strip_period(nickname),
    })
}

fn strip_period(s: &str) -> &str {
    s.strip_suffix('.').unwrap_or(s)
}
