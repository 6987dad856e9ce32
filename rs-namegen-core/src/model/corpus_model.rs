use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::counts::TransitionCounts;
use super::distribution::{Distribution, ProbabilityTable, ZeroContextFallback};
use super::symbol::{Context, Symbol};
use super::terminal::TerminalLengthStats;
use crate::error::{Error, Result};
use crate::io::read_lines;

/// Below this many lines the corpus is ingested on the calling thread.
const PARALLEL_THRESHOLD: usize = 4096;

/// Returns `true` if `word` is usable for training.
///
/// A word is accepted only if it is non-empty and made entirely of ASCII
/// letters (either case). Digits, punctuation and whitespace reject it.
pub fn is_accepted(word: &str) -> bool {
	!word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Mutable accumulator for corpus statistics.
///
/// ## Responsibilities:
/// - Filter candidate words and count the rejected ones
/// - Accumulate order-2 transitions, including the end-of-word transition
/// - Accumulate terminal letter length statistics
/// - Merge with another builder (parallel learning support)
#[derive(Clone, Debug, Default)]
pub struct CorpusBuilder {
	counts: TransitionCounts,
	terminal: TerminalLengthStats,
	accepted: usize,
	skipped: usize,
}

impl CorpusBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one candidate word to the statistics.
	///
	/// Scans letters left to right with a sliding `(prev2, prev1)` context
	/// starting at the terminator, then records the transition to the
	/// terminator from the word's final two symbols.
	///
	/// Returns `false` (and counts the word as skipped) if it is rejected.
	pub fn add_word(&mut self, word: &str) -> bool {
		if !is_accepted(word) {
			self.skipped += 1;
			return false;
		}

		let mut context = Context::START;
		let mut length = 0;
		for symbol in word.chars().filter_map(Symbol::from_char) {
			self.counts.increment(context, symbol);
			context = context.shift(symbol);
			length += 1;
		}
		self.counts.increment(context, Symbol::TERMINATOR);
		self.terminal.record(context.prev1, length);
		self.accepted += 1;
		true
	}

	/// Merges another builder into this one.
	///
	/// Counts and statistics are summed, so merge order does not matter.
	pub fn merge(&mut self, other: &Self) {
		self.counts.merge(&other.counts);
		self.terminal.merge(&other.terminal);
		self.accepted += other.accepted;
		self.skipped += other.skipped;
	}

	pub fn accepted(&self) -> usize {
		self.accepted
	}

	pub fn skipped(&self) -> usize {
		self.skipped
	}

	/// Freezes the statistics and normalizes them into probability tables.
	pub fn build(self, fallback: ZeroContextFallback) -> CorpusModel {
		let table = ProbabilityTable::from_counts(&self.counts, fallback);
		let model = CorpusModel {
			counts: self.counts,
			terminal: self.terminal,
			table,
			accepted: self.accepted,
			skipped: self.skipped,
		};

		debug!(
			"Corpus model built: {} words accepted, {} lines skipped, {} contexts observed",
			model.accepted,
			model.skipped,
			model.observed_contexts()
		);
		if model.accepted == 0 {
			warn!("No usable word in corpus, every context uses the {:?} fallback", fallback);
		}

		model
	}
}

/// Trained trigram model.
///
/// Built once from a corpus and read-only afterwards. It can be shared
/// across threads by reference.
///
/// This struct holds:
/// - `counts`: raw order-2 transition counts
/// - `terminal`: length statistics by terminal letter (not used for sampling)
/// - `table`: normalized cumulative partitions per context
#[derive(Clone, Debug)]
pub struct CorpusModel {
	counts: TransitionCounts,
	terminal: TerminalLengthStats,
	table: ProbabilityTable,
	accepted: usize,
	skipped: usize,
}

/// Serializable overview of a trained model.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelSummary {
	pub accepted_words: usize,
	pub skipped_lines: usize,
	pub observed_contexts: usize,
	pub transitions: u64,
	pub fallback: ZeroContextFallback,
}

impl CorpusModel {
	/// Builds a model from candidate words on the calling thread.
	pub fn from_words<I, S>(words: I, fallback: ZeroContextFallback) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut builder = CorpusBuilder::new();
		for word in words {
			builder.add_word(word.as_ref());
		}
		builder.build(fallback)
	}

	/// Builds a model by splitting the words into chunks, creating partial
	/// builders in parallel and merging them.
	///
	/// # Behavior
	/// - Small inputs are processed sequentially.
	/// - Splits input into chunks (based on CPU cores * factor).
	/// - Each worker fills its own `CorpusBuilder`; results come back over
	///   an MPSC channel and are merged.
	///
	/// The result is identical to [`CorpusModel::from_words`].
	pub fn from_words_parallel<S>(words: &[S], fallback: ZeroContextFallback) -> Self
	where
		S: AsRef<str> + Sync,
	{
		if words.len() < PARALLEL_THRESHOLD {
			return Self::from_words(words, fallback);
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = words.len().div_ceil(chunks).max(1);

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for chunk in words.chunks(chunk_size) {
				let tx = tx.clone();
				scope.spawn(move || {
					let mut partial = CorpusBuilder::new();
					for word in chunk {
						partial.add_word(word.as_ref());
					}
					if tx.send(partial).is_err() {
						warn!("Corpus worker could not hand back its partial model");
					}
				});
			}
		});
		drop(tx);

		let mut builder = CorpusBuilder::new();
		for partial in rx.iter() {
			builder.merge(&partial);
		}
		builder.build(fallback)
	}

	/// Reads a line-oriented corpus file (one candidate word per line) and
	/// builds the model.
	///
	/// # Errors
	/// Returns `Error::CorpusUnavailable` if the file cannot be opened or
	/// read. No partial model is built.
	pub fn from_file<P: AsRef<Path>>(path: P, fallback: ZeroContextFallback) -> Result<Self> {
		let path = path.as_ref();
		let lines = read_lines(path).map_err(|source| Error::CorpusUnavailable {
			path: path.to_path_buf(),
			source,
		})?;
		debug!("Read {} lines from {}", lines.len(), path.display());
		Ok(Self::from_words_parallel(&lines, fallback))
	}

	pub fn counts(&self) -> &TransitionCounts {
		&self.counts
	}

	pub fn terminal_stats(&self) -> &TerminalLengthStats {
		&self.terminal
	}

	pub fn table(&self) -> &ProbabilityTable {
		&self.table
	}

	/// Distribution sampled in `context` (trained or fallback).
	pub fn distribution(&self, context: Context) -> &Distribution {
		self.table.distribution(context)
	}

	pub fn accepted_words(&self) -> usize {
		self.accepted
	}

	pub fn skipped_lines(&self) -> usize {
		self.skipped
	}

	/// Number of contexts with at least one observed transition.
	pub fn observed_contexts(&self) -> usize {
		self.counts.observed_contexts().count()
	}

	pub fn summary(&self) -> ModelSummary {
		ModelSummary {
			accepted_words: self.accepted,
			skipped_lines: self.skipped,
			observed_contexts: self.observed_contexts(),
			transitions: self.counts.grand_total(),
			fallback: self.table.policy(),
		}
	}
}
