//! First-order transition counts per sender

use super::tokenize::{tokenize, Token};
use crate::models::RawMessage;
use indexmap::IndexMap;

/// Successor token -> occurrence count, in first-seen order
pub type Transitions = IndexMap<Token, u64>;

/// One sender's chain: current token -> successors.
///
/// Every message contributes a path from `Start` to `End`, so every state
/// present as a key has at least one outgoing edge.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    transitions: IndexMap<Token, Transitions>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one message's token sequence, bracketed by the sentinels.
    pub fn observe(&mut self, tokens: &[Token]) {
        let mut prev = Token::Start;
        for token in tokens {
            self.record(prev, token.clone());
            prev = token.clone();
        }
        self.record(prev, Token::End);
    }

    fn record(&mut self, current: Token, next: Token) {
        *self
            .transitions
            .entry(current)
            .or_default()
            .entry(next)
            .or_insert(0) += 1;
    }

    pub fn successors(&self, token: &Token) -> Option<&Transitions> {
        self.transitions.get(token)
    }

    /// Observed count of `from -> to` (0 when never seen)
    pub fn count(&self, from: &Token, to: &Token) -> u64 {
        self.successors(from)
            .and_then(|next| next.get(to))
            .copied()
            .unwrap_or(0)
    }

    /// Number of messages observed (every message leaves `Start` once)
    pub fn message_count(&self) -> u64 {
        self.successors(&Token::Start)
            .map(|next| next.values().sum())
            .unwrap_or(0)
    }

    pub fn states(&self) -> impl Iterator<Item = (&Token, &Transitions)> {
        self.transitions.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Sender name -> chain, senders in first-appearance order
#[derive(Debug, Clone, Default)]
pub struct MarkovModel {
    chains: IndexMap<String, Chain>,
}

impl MarkovModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from content messages. Messages without a sender or body are
    /// skipped.
    pub fn build<'a>(messages: impl IntoIterator<Item = &'a RawMessage>) -> Self {
        let mut model = Self::new();
        for message in messages {
            let (Some(sender), Some(text)) = (message.sender_name.as_deref(), message.text())
            else {
                continue;
            };
            model.train(sender, text);
        }
        model
    }

    pub fn train(&mut self, sender: &str, text: &str) {
        let tokens = tokenize(text);
        self.chains
            .entry(sender.to_string())
            .or_default()
            .observe(&tokens);
    }

    pub fn chain(&self, sender: &str) -> Option<&Chain> {
        self.chains.get(sender)
    }

    pub fn senders(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    pub fn chains(&self) -> impl Iterator<Item = (&str, &Chain)> {
        self.chains.iter().map(|(name, chain)| (name.as_str(), chain))
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
