//! Per-sender Markov text model
//!
//! Builds a first-order token transition model for every sender from
//! their content messages, then synthesizes new messages by a weighted
//! random walk from `Start` to `End`.
//!
//! # Example
//!
//! ```rust,ignore
//! let model = MarkovModel::build(views.content.iter().copied());
//! let mut source = RngSource::seeded(42);
//! let fakes = generate_batch(&model, 10, &mut source)?;
//! ```

mod generate;
mod model;
mod sampler;
mod tokenize;

pub use generate::{generate, generate_batch, generate_for, render, GeneratedMessages};
pub use model::{Chain, MarkovModel, Transitions};
pub use sampler::{sample_weighted, source_for, RandomSource, RngSource};
pub use tokenize::{tokenize, Token};

use thiserror::Error;

/// Default number of generated messages per sender
pub const DEFAULT_MESSAGES_PER_SENDER: usize = 10;

/// Errors from message generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkovError {
    #[error("No model for sender '{0}': they have no content messages")]
    UnknownSender(String),

    #[error("Token '{0}' has no outgoing transitions")]
    DeadEnd(String),
}
