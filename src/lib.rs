//! chatlore - group chat archive analysis
//!
//! Loads a Messenger-style JSON export, separates real messages from
//! system narration, and derives per-sender Markov text models, nickname
//! histories and kick counts.

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod kicks;
pub mod markov;
pub mod models;
pub mod nickname;
pub mod pipeline;
pub mod reporters;
