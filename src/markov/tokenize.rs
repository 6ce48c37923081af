//! Message tokenization
//!
//! Lowercases a message and splits it into word tokens (runs of letters,
//! apostrophes and hyphens) and punctuation tokens (runs of periods and
//! commas). Everything else (digits, emoji, whitespace, other symbols)
//! produces no token.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-z'\-]+|[.,]+").expect("valid regex"))
}

/// A chain state. `Start` and `End` bound every message and are never
/// produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Start,
    End,
    Word(String),
    Punct(String),
}

impl Token {
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Token::Start | Token::End)
    }

    /// Surface text; empty for the sentinels.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Word(s) | Token::Punct(s) => s,
            Token::Start | Token::End => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Start => write!(f, "<START>"),
            Token::End => write!(f, "<END>"),
            Token::Word(s) | Token::Punct(s) => write!(f, "{s}"),
        }
    }
}

pub fn tokenize(text: &str) -> Vec<Token> {
    let lowered = text.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|m| {
            let s = m.as_str();
            if s.starts_with(['.', ',']) {
                Token::Punct(s.to_string())
            } else {
                Token::Word(s.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_tokenize_words_and_punctuation() {
        let tokens = tokenize("Hey, it's a well-known fact...");
        assert_eq!(
            words(&tokens),
            vec!["hey", ",", "it's", "a", "well-known", "fact", "..."]
        );
        assert_eq!(tokens[1], Token::Punct(",".into()));
        assert_eq!(tokens[2], Token::Word("it's".into()));
    }

    #[test]
    fn test_tokenize_skips_digits_and_symbols() {
        let tokens = tokenize("see you at 6 :) \u{1f600}!");
        assert_eq!(words(&tokens), vec!["see", "you", "at"]);
    }

    #[test]
    fn test_tokenize_mixed_punctuation_cluster() {
        let tokens = tokenize("wait.,.what");
        assert_eq!(words(&tokens), vec!["wait", ".,.", "what"]);
    }

    #[test]
    fn test_tokenize_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 !!! ??").is_empty());
    }

    #[test]
    fn test_sentinels_display() {
        assert_eq!(Token::Start.to_string(), "<START>");
        assert_eq!(Token::End.to_string(), "<END>");
        assert!(Token::End.is_sentinel());
        assert!(!Token::Word("x".into()).is_sentinel());
    }
}
