//! Trigram-based name generation library.
//!
//! This crate learns how letters follow one another in a word list and
//! samples new, pronounceable names from those statistics:
//! - Order-2 (trigram) transition counting over a restricted alphabet
//! - Per-context cumulative probability tables
//! - A sampling automaton with minimum/maximum-length control
//! - An injectable random source so generation can be replayed exactly
//!
//! The model is rebuilt from the corpus on every run; nothing is persisted.

/// Trained corpus model, probability tables and the name sampler.
pub mod model;

/// Uniform random source seam used by the sampler.
pub mod random;

/// Corpus file reading and location helpers.
pub mod io;

/// Crate-wide error type.
pub mod error;

pub use error::{Error, Result};
pub use model::config::{SamplerConfig, TerminationOverride};
pub use model::corpus_model::{CorpusBuilder, CorpusModel, ModelSummary};
pub use model::distribution::ZeroContextFallback;
pub use model::generator::Generator;
pub use random::{RandomSource, RngSource, ScriptedSource};
