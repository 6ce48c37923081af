//! Nickname event collection, owner resolution and interval analysis

use super::parser::{parse_change, NicknameChange};
use crate::models::RawMessage;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

/// Synthetic subject for "set your nickname to" events
pub const OWNER: &str = "owner";

/// Label used for owner events when the owner cannot be identified
pub const UNRESOLVED_OWNER: &str = "Unresolved owner";

pub const MS_PER_DAY: i64 = 86_400_000;

/// "`person`'s display name became `nickname` at `timestamp_ms`"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameEvent {
    pub person: String,
    pub timestamp_ms: i64,
    pub nickname: String,
}

/// Raw events from one pass over the unfiltered corpus, before the owner
/// is identified.
#[derive(Debug, Clone, Default)]
pub struct NicknameScan {
    named: IndexMap<String, Vec<NicknameEvent>>,
    owner: Vec<NicknameEvent>,
}

impl NicknameScan {
    pub fn scan<'a>(messages: impl IntoIterator<Item = &'a RawMessage>) -> Self {
        let mut scan = Self::default();
        for message in messages {
            scan.observe(message);
        }
        debug!(
            "Nickname scan: {} named subjects, {} owner events",
            scan.named.len(),
            scan.owner.len()
        );
        scan
    }

    /// Record the message if it is a nickname change with a timestamp.
    pub fn observe(&mut self, message: &RawMessage) {
        let (Some(content), Some(timestamp_ms)) = (message.text(), message.timestamp_ms) else {
            return;
        };
        match parse_change(content) {
            Some(NicknameChange::Named { person, nickname }) => {
                self.named
                    .entry(person.to_string())
                    .or_default()
                    .push(NicknameEvent {
                        person: person.to_string(),
                        timestamp_ms,
                        nickname: nickname.to_string(),
                    });
            }
            Some(NicknameChange::Own { nickname }) => self.owner.push(NicknameEvent {
                person: OWNER.to_string(),
                timestamp_ms,
                nickname: nickname.to_string(),
            }),
            None => {}
        }
    }

    /// Participants never named as the subject of a "set the nickname for"
    /// event, in participant order.
    pub fn unattributed<'p>(&self, participants: &'p IndexSet<String>) -> Vec<&'p str> {
        participants
            .iter()
            .filter(|p| !self.named.contains_key(p.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Attach owner events to a real name when exactly one participant is
    /// unattributed, otherwise keep them under [`UNRESOLVED_OWNER`].
    pub fn resolve(self, participants: &IndexSet<String>) -> NicknameHistory {
        let candidates: Vec<String> = self
            .unattributed(participants)
            .into_iter()
            .map(str::to_string)
            .collect();
        let Self { mut named, owner } = self;
        let mut people = IndexMap::new();

        let identity = if owner.is_empty() {
            OwnerIdentity::Absent
        } else if let [name] = candidates.as_slice() {
            let mut events = named.shift_remove(name).unwrap_or_default();
            for event in owner {
                let duplicate = events
                    .iter()
                    .any(|e| e.timestamp_ms == event.timestamp_ms && e.nickname == event.nickname);
                if !duplicate {
                    events.push(NicknameEvent {
                        person: name.clone(),
                        ..event
                    });
                }
            }
            debug!("Resolved owner as {}", name);
            people.insert(name.clone(), events);
            OwnerIdentity::Resolved(name.clone())
        } else {
            warn!(
                "Could not identify the archive owner ({} candidates); reporting their nicknames as '{}'",
                candidates.len(),
                UNRESOLVED_OWNER
            );
            let events = owner
                .into_iter()
                .map(|event| NicknameEvent {
                    person: UNRESOLVED_OWNER.to_string(),
                    ..event
                })
                .collect();
            people.insert(UNRESOLVED_OWNER.to_string(), events);
            OwnerIdentity::Ambiguous { candidates }
        };

        people.extend(named);
        for events in people.values_mut() {
            events.sort_by_key(|e| e.timestamp_ms);
        }
        NicknameHistory {
            owner: identity,
            people,
        }
    }
}

/// Who the "set your nickname" events belong to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerIdentity {
    /// No owner events were found
    Absent,
    /// Exactly one participant was never a named subject
    Resolved(String),
    /// Zero or several participants could be the owner
    Ambiguous { candidates: Vec<String> },
}

/// Person -> chronologically ascending events. The owner (resolved or
/// not) comes first, then everyone else in first-appearance order.
#[derive(Debug, Clone)]
pub struct NicknameHistory {
    owner: OwnerIdentity,
    people: IndexMap<String, Vec<NicknameEvent>>,
}

impl NicknameHistory {
    pub fn build<'a>(
        messages: impl IntoIterator<Item = &'a RawMessage>,
        participants: &IndexSet<String>,
    ) -> Self {
        NicknameScan::scan(messages).resolve(participants)
    }

    pub fn owner(&self) -> &OwnerIdentity {
        &self.owner
    }

    pub fn people(&self) -> impl Iterator<Item = (&str, &[NicknameEvent])> {
        self.people
            .iter()
            .map(|(name, events)| (name.as_str(), events.as_slice()))
    }

    pub fn events_for(&self, person: &str) -> Option<&[NicknameEvent]> {
        self.people.get(person).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// The nickname a person kept for the most whole days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestStanding {
    pub nickname: String,
    pub duration_days: i64,
    pub start_ms: i64,
    pub end_ms: i64,
}

/// Longest-held nickname among chronologically sorted `events`. The last
/// nickname is held until `now_ms`. Ties go to the earlier interval; a
/// best interval of zero days yields `None`.
pub fn longest_standing(events: &[NicknameEvent], now_ms: i64) -> Option<LongestStanding> {
    let last = events.last()?;
    let closed = events
        .windows(2)
        .map(|pair| (&pair[0], pair[1].timestamp_ms));
    let open = std::iter::once((last, now_ms));

    let mut best: Option<(&NicknameEvent, i64, i64)> = None;
    for (event, end_ms) in closed.chain(open) {
        let days = whole_days(event.timestamp_ms, end_ms);
        if best.map_or(true, |(_, _, best_days)| days > best_days) {
            best = Some((event, end_ms, days));
        }
    }

    let (event, end_ms, days) = best?;
    (days > 0).then(|| LongestStanding {
        nickname: event.nickname.clone(),
        duration_days: days,
        start_ms: event.timestamp_ms,
        end_ms,
    })
}

fn whole_days(start_ms: i64, end_ms: i64) -> i64 {
    (end_ms - start_ms).div_euclid(MS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(ts: i64, text: &str) -> RawMessage {
        RawMessage {
            sender_name: Some("Someone".into()),
            content: Some(text.into()),
            timestamp_ms: Some(ts),
            ..Default::default()
        }
    }

    fn event(person: &str, day: i64, nickname: &str) -> NicknameEvent {
        NicknameEvent {
            person: person.into(),
            timestamp_ms: day * MS_PER_DAY,
            nickname: nickname.into(),
        }
    }

    fn participants(names: &[&str]) -> IndexSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_longest_tie_goes_to_earlier_interval() {
        let events = vec![event("P", 0, "Al"), event("P", 10, "Bo"), event("P", 25, "Cy")];
        let best = longest_standing(&events, 40 * MS_PER_DAY).unwrap();
        assert_eq!(best.nickname, "Bo");
        assert_eq!(best.duration_days, 15);
        assert_eq!(best.start_ms, 10 * MS_PER_DAY);
        assert_eq!(best.end_ms, 25 * MS_PER_DAY);
    }

    #[test]
    fn test_longest_can_be_current_nickname() {
        let events = vec![event("P", 0, "Al"), event("P", 3, "Bo")];
        let best = longest_standing(&events, 100 * MS_PER_DAY).unwrap();
        assert_eq!(best.nickname, "Bo");
        assert_eq!(best.duration_days, 97);
        assert_eq!(best.end_ms, 100 * MS_PER_DAY);
    }

    #[test]
    fn test_partial_days_are_floored() {
        let mut events = vec![event("P", 0, "Al"), event("P", 0, "Bo")];
        events[1].timestamp_ms = 2 * MS_PER_DAY - 1;
        let best = longest_standing(&events, 2 * MS_PER_DAY - 1).unwrap();
        assert_eq!(best.nickname, "Al");
        assert_eq!(best.duration_days, 1);
    }

    #[test]
    fn test_single_event_uses_open_interval() {
        let events = vec![event("P", 5, "Solo")];
        let best = longest_standing(&events, 12 * MS_PER_DAY).unwrap();
        assert_eq!(best.nickname, "Solo");
        assert_eq!(best.duration_days, 7);
    }

    #[test]
    fn test_zero_day_interval_is_not_reported() {
        let events = vec![event("P", 5, "Fresh")];
        assert!(longest_standing(&events, 5 * MS_PER_DAY + 1000).is_none());
        assert!(longest_standing(&[], 0).is_none());
    }

    #[test]
    fn test_scan_ignores_untimed_and_unrelated() {
        let mut untimed = msg(0, "A set the nickname for B to C.");
        untimed.timestamp_ms = None;
        let scan = NicknameScan::scan(&[untimed, msg(1, "nothing to see")]);
        let history = scan.resolve(&participants(&["A", "B"]));
        assert!(history.is_empty());
        assert_eq!(history.owner(), &OwnerIdentity::Absent);
    }

    #[test]
    fn test_owner_resolves_to_single_unattributed() {
        let messages = [
            msg(100, "A set the nickname for B to Bee."),
            msg(200, "B set your nickname to Ace."),
        ];
        let history = NicknameHistory::build(&messages, &participants(&["A", "B"]));

        assert_eq!(history.owner(), &OwnerIdentity::Resolved("A".into()));
        let people: Vec<_> = history.people().map(|(name, _)| name).collect();
        assert_eq!(people, vec!["A", "B"]);
        let owner_events = history.events_for("A").unwrap();
        assert_eq!(owner_events.len(), 1);
        assert_eq!(owner_events[0].person, "A");
        assert_eq!(owner_events[0].nickname, "Ace");
    }

    #[test]
    fn test_ambiguous_owner_is_kept_under_label() {
        let messages = [
            msg(100, "A set the nickname for B to Bee."),
            msg(200, "B set your nickname to Ace."),
        ];
        let history = NicknameHistory::build(&messages, &participants(&["A", "B", "C"]));

        assert_eq!(
            history.owner(),
            &OwnerIdentity::Ambiguous {
                candidates: vec!["A".into(), "C".into()]
            }
        );
        let (first, events) = history.people().next().unwrap();
        assert_eq!(first, UNRESOLVED_OWNER);
        assert_eq!(events[0].nickname, "Ace");
        assert!(history.events_for("A").is_none());
    }

    #[test]
    fn test_no_unattributed_participant_is_ambiguous() {
        let messages = [
            msg(100, "A set the nickname for B to Bee."),
            msg(150, "B set the nickname for A to Ay."),
            msg(200, "B set your nickname to Ace."),
        ];
        let history = NicknameHistory::build(&messages, &participants(&["A", "B"]));
        assert_eq!(
            history.owner(),
            &OwnerIdentity::Ambiguous { candidates: vec![] }
        );
        assert!(history.events_for(UNRESOLVED_OWNER).is_some());
    }

    #[test]
    fn test_events_sorted_and_people_in_first_appearance_order() {
        // exports list newest messages first
        let messages = [
            msg(300, "A set the nickname for C to Three."),
            msg(200, "A set the nickname for B to Two."),
            msg(100, "A set the nickname for C to One."),
        ];
        let history = NicknameHistory::build(&messages, &participants(&["A", "B", "C"]));
        let people: Vec<_> = history.people().map(|(name, _)| name).collect();
        assert_eq!(people, vec!["C", "B"]);

        let nicks: Vec<_> = history
            .events_for("C")
            .unwrap()
            .iter()
            .map(|e| e.nickname.as_str())
            .collect();
        assert_eq!(nicks, vec!["One", "Three"]);
    }

    #[test]
    fn test_repeated_owner_events_are_merged() {
        // the same message can appear in two overlapping fragments
        let messages = [
            msg(MS_PER_DAY, "B set your nickname to Ace."),
            msg(MS_PER_DAY, "B set your nickname to Ace."),
            msg(2 * MS_PER_DAY, "B set your nickname to King."),
            msg(3 * MS_PER_DAY, "A set the nickname for B to Bee."),
        ];
        let history = NicknameHistory::build(&messages, &participants(&["A", "B"]));
        assert_eq!(history.owner(), &OwnerIdentity::Resolved("A".into()));
        let nicks: Vec<_> = history
            .events_for("A")
            .unwrap()
            .iter()
            .map(|e| e.nickname.as_str())
            .collect();
        assert_eq!(nicks, vec!["Ace", "King"]);
    }

    #[test]
    fn test_unattributed_keeps_participant_order() {
        let scan = NicknameScan::scan(&[msg(1, "X set the nickname for B to b.")]);
        assert_eq!(scan.unattributed(&participants(&["C", "B", "A"])), vec!["C", "A"]);
    }
}
