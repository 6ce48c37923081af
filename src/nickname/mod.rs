//! Nickname history reconstruction
//!
//! Recovers who was called what, and when, from the messenger's
//! nickname-change narration:
//!
//! - "`<actor>` set the nickname for `<person>` to `<nickname>`."
//! - "`<actor>` set your nickname to `<nickname>`."
//!
//! The second form never names its subject. Its subject is the account
//! that exported the archive, identified as the single participant who
//! is never named by the first form. When that is ambiguous the events
//! are reported under an explicit "Unresolved owner" label.

mod history;
mod parser;
mod report;

pub use history::{
    longest_standing, LongestStanding, NicknameEvent, NicknameHistory, NicknameScan,
    OwnerIdentity, MS_PER_DAY, OWNER, UNRESOLVED_OWNER,
};
pub use parser::{parse_change, NicknameChange};
pub use report::{format_date, render_report};
