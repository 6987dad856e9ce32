//! Top-level module for the trigram name model.
//!
//! This module provides:
//! - The restricted symbol alphabet and two-letter contexts (`symbol`)
//! - Raw order-2 transition counts (`counts`)
//! - Per-terminal-letter length statistics (`terminal`)
//! - Cumulative probability partitions (`distribution`)
//! - The corpus builder and immutable trained model (`corpus_model`)
//! - Sampler settings (`config`)
//! - The name sampling automaton (`sampler`)
//! - A high-level generation interface (`generator`)

/// Terminator plus `a..=z`, and the `(prev2, prev1)` context pair.
pub mod symbol;

/// Dense order-2 transition counts.
pub mod counts;

/// Word length statistics grouped by the word's final letter.
pub mod terminal;

/// Cumulative probability partitions and the per-context table.
///
/// Owns the explicit fallback used for contexts never seen in training.
pub mod distribution;

/// Corpus ingestion and the frozen trained model.
///
/// Supports sequential and parallel construction with merging.
pub mod corpus_model;

/// Validated sampler settings (length policy, iteration ceiling).
pub mod config;

/// Letter-by-letter name sampling automaton.
pub mod sampler;

/// High-level interface bundling a model with its sampler settings.
pub mod generator;
