//! Random-walk message generation

use super::model::{Chain, MarkovModel};
use super::sampler::{sample_weighted, RandomSource};
use super::tokenize::Token;
use super::MarkovError;
use indexmap::IndexMap;

/// Generated messages per sender
pub type GeneratedMessages = IndexMap<String, Vec<String>>;

/// Walk `chain` from `Start` until `End` is drawn and render the result.
pub fn generate<S>(chain: &Chain, source: &mut S) -> Result<String, MarkovError>
where
    S: RandomSource + ?Sized,
{
    let start = Token::Start;
    let mut walked: Vec<&Token> = Vec::new();
    let mut current = &start;
    loop {
        let next = chain
            .successors(current)
            .and_then(|successors| sample_weighted(successors, &mut *source))
            .ok_or_else(|| MarkovError::DeadEnd(current.to_string()))?;
        if *next == Token::End {
            break;
        }
        walked.push(next);
        current = next;
    }
    Ok(render(&walked))
}

/// Generate one message in the style of `sender`.
pub fn generate_for<S>(model: &MarkovModel, sender: &str, source: &mut S) -> Result<String, MarkovError>
where
    S: RandomSource + ?Sized,
{
    let chain = model
        .chain(sender)
        .ok_or_else(|| MarkovError::UnknownSender(sender.to_string()))?;
    generate(chain, source)
}

/// Generate `count` messages for every sender in the model.
pub fn generate_batch<S>(
    model: &MarkovModel,
    count: usize,
    source: &mut S,
) -> Result<GeneratedMessages, MarkovError>
where
    S: RandomSource + ?Sized,
{
    let mut out = GeneratedMessages::new();
    for (sender, chain) in model.chains() {
        let messages = (0..count)
            .map(|_| generate(chain, &mut *source))
            .collect::<Result<Vec<_>, _>>()?;
        out.insert(sender.to_string(), messages);
    }
    Ok(out)
}

/// Join tokens with single spaces, attaching punctuation to the token
/// before it, then capitalize the first character.
pub fn render(tokens: &[&Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Punct(p) => out.push_str(p),
            Token::Word(w) => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(w);
            }
            Token::Start | Token::End => {}
        }
    }
    capitalize_first(&out)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
