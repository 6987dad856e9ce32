use log::{trace, warn};

use super::config::{SamplerConfig, TerminationOverride};
use super::corpus_model::CorpusModel;
use super::symbol::{Context, LETTER_COUNT, Symbol};
use crate::random::RandomSource;

/// Why a sampling run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
	/// The terminator was drawn at or after the minimum length.
	Terminator,
	/// The name reached the length cap rolled for the last step.
	LengthCap,
	/// The defensive iteration ceiling was hit; the name is returned as is.
	IterationCeiling,
}

/// Result of one sampling run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleOutcome {
	pub name: String,
	/// Number of table draws performed.
	pub steps: usize,
	pub stop: StopReason,
}

/// Letter-by-letter name sampling automaton.
///
/// Borrows a trained model and its settings; every call to
/// [`NameSampler::sample`] starts from a fresh context and an empty name,
/// so one sampler can produce any number of independent names.
#[derive(Clone, Copy, Debug)]
pub struct NameSampler<'a> {
	model: &'a CorpusModel,
	config: &'a SamplerConfig,
}

impl<'a> NameSampler<'a> {
	pub fn new(model: &'a CorpusModel, config: &'a SamplerConfig) -> Self {
		Self { model, config }
	}

	/// Generates one name.
	pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> String {
		self.sample_outcome(rng).name
	}

	/// Generates one name and reports how the run ended.
	///
	/// # Behavior
	/// - The first letter is drawn uniformly from `a..=z`, independent of
	///   the model.
	/// - Each step shifts the current letter into the context, rolls a
	///   float and selects the next symbol from that context's partition.
	/// - A terminator drawn while the name is shorter than `min_length` is
	///   overridden according to the `TerminationOverride` policy. With
	///   `Placeholder`, the placeholder shifts into the context on the next
	///   step but is not written to the name.
	/// - A fresh length cap is rolled after every step; the run stops once
	///   the terminator is accepted or the name is at least as long as the
	///   cap.
	/// - The iteration ceiling stops runaway walks and keeps what was
	///   emitted so far.
	pub fn sample_outcome<R: RandomSource + ?Sized>(&self, rng: &mut R) -> SampleOutcome {
		let config = self.config;
		let table = self.model.table();
		let cap_range = config.length_cap();

		let mut name = String::new();
		let mut context = Context::START;
		let mut candidate = Symbol::letter(rng.int_inclusive(0, LETTER_COUNT - 1));
		let mut suppressed = false;
		let mut steps = 0;

		loop {
			if !suppressed {
				if let Some(c) = candidate.to_char() {
					name.push(c);
				}
			}
			context = context.shift(candidate);
			suppressed = false;
			steps += 1;

			let distribution = table.distribution(context);
			let roll = rng.unit_float();
			let mut next = distribution.select(roll);

			if next.is_terminator() && name.len() < config.min_length() {
				// Name below minimum length, the terminator is not accepted yet
				let replacement = match config.override_policy() {
					TerminationOverride::Placeholder => None,
					TerminationOverride::Resample => distribution.select_letter(roll),
				};
				next = match replacement {
					Some(letter) => letter,
					None => {
						suppressed = true;
						config.placeholder()
					}
				};
			}
			trace!("context {context} roll {roll:.4} -> {next}{}", if suppressed { " (suppressed)" } else { "" });

			let cap = rng.int_inclusive(*cap_range.start(), *cap_range.end());
			candidate = next;

			if candidate.is_terminator() {
				return SampleOutcome { name, steps, stop: StopReason::Terminator };
			}
			if name.len() >= cap {
				return SampleOutcome { name, steps, stop: StopReason::LengthCap };
			}
			if steps >= config.max_iterations() {
				warn!("Sampling stopped after {steps} steps, returning {name:?}");
				return SampleOutcome { name, steps, stop: StopReason::IterationCeiling };
			}
		}
	}

	/// Generates `count` independent names.
	pub fn sample_batch<R: RandomSource + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
		(0..count).map(|_| self.sample(rng)).collect()
	}
}
