use std::path::Path;

use super::config::SamplerConfig;
use super::corpus_model::CorpusModel;
use super::distribution::ZeroContextFallback;
use super::sampler::NameSampler;
use crate::error::Result;
use crate::random::RandomSource;

/// High-level generator bundling a trained model with sampler settings.
///
/// # Responsibilities
/// - Build the model from a corpus file or from in-memory words
/// - Generate single names or batches with an injected random source
///
/// The model is read-only, so a `Generator` can be shared between threads
/// as long as each thread brings its own random source.
#[derive(Clone, Debug)]
pub struct Generator {
	model: CorpusModel,
	config: SamplerConfig,
}

impl Generator {
	pub fn new(model: CorpusModel, config: SamplerConfig) -> Self {
		Self { model, config }
	}

	/// Creates a generator by training on a corpus file.
	///
	/// # Errors
	/// Returns an error if the corpus cannot be opened or read.
	pub fn from_file<P: AsRef<Path>>(path: P, fallback: ZeroContextFallback, config: SamplerConfig) -> Result<Self> {
		Ok(Self::new(CorpusModel::from_file(path, fallback)?, config))
	}

	/// Creates a generator by training on in-memory words.
	pub fn from_words<I, S>(words: I, fallback: ZeroContextFallback, config: SamplerConfig) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::new(CorpusModel::from_words(words, fallback), config)
	}

	pub fn model(&self) -> &CorpusModel {
		&self.model
	}

	pub fn config(&self) -> &SamplerConfig {
		&self.config
	}

	pub fn sampler(&self) -> NameSampler<'_> {
		NameSampler::new(&self.model, &self.config)
	}

	/// Generates one name.
	pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> String {
		self.sampler().sample(rng)
	}

	/// Generates `count` independent names, each from a fresh state.
	pub fn generate_batch<R: RandomSource + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
		self.sampler().sample_batch(count, rng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::{RngSource, ScriptedSource};

	#[test]
	fn generator_is_shareable() {
		fn assert_sync<T: Send + Sync>() {}
		assert_sync::<Generator>();
	}

	#[test]
	fn same_script_same_batch() {
		let generator = Generator::from_words(["ann", "anna", "ant"], ZeroContextFallback::default(), SamplerConfig::default());
		let script = || ScriptedSource::new(vec![0, 3, 9, 12], vec![0.1, 0.7, 0.35, 0.95]);
		assert_eq!(generator.generate_batch(5, &mut script()), generator.generate_batch(5, &mut script()));
	}

	#[test]
	fn names_are_lowercase_letters() {
		let generator = Generator::from_words(["Kestrel", "Marlin", "Osprey", "Heron"], ZeroContextFallback::default(), SamplerConfig::default());
		let mut rng = RngSource::seeded(11);
		for name in generator.generate_batch(50, &mut rng) {
			assert!(!name.is_empty());
			assert!(name.chars().all(|c| c.is_ascii_lowercase()), "{name}");
		}
	}
}
