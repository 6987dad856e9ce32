use proptest::prelude::*;

use rs_namegen_core::model::sampler::{NameSampler, StopReason};
use rs_namegen_core::model::symbol::{Context, Symbol};
use rs_namegen_core::{CorpusModel, RngSource, SamplerConfig, ZeroContextFallback};

fn corpus() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("[a-zA-Z]{1,12}|[a-z0-9' -]{0,6}", 0..60)
}

proptest! {
	#[test]
	fn observed_partitions_cover_unit_interval(words in corpus()) {
		let model = CorpusModel::from_words(&words, ZeroContextFallback::default());
		let counts = model.counts();

		for context in Context::all() {
			let total = counts.total(context);
			let Some(dist) = model.table().get(context) else {
				prop_assert_eq!(total, 0);
				continue;
			};
			prop_assert!(total > 0);

			let mut expected_lower = 0.0;
			let mut width_sum = 0.0;
			for (symbol, interval) in dist.iter() {
				prop_assert_eq!(interval.lower, expected_lower, "gap before {} in {}", symbol, context);
				prop_assert!(interval.upper >= interval.lower);
				let share = counts.get(context, symbol) as f64 / total as f64;
				prop_assert!((interval.width() - share).abs() < 1e-9);
				width_sum += interval.width();
				expected_lower = interval.upper;
			}
			prop_assert_eq!(expected_lower, 1.0);
			prop_assert!((width_sum - 1.0).abs() < 1e-9);
		}
	}

	#[test]
	fn accepted_words_account_for_every_line(words in corpus()) {
		let model = CorpusModel::from_words(&words, ZeroContextFallback::default());
		prop_assert_eq!(model.accepted_words() + model.skipped_lines(), words.len());
		// One end-of-word transition per accepted word
		let ends: u64 = Context::all().map(|c| model.counts().get(c, Symbol::TERMINATOR)).sum();
		prop_assert_eq!(ends, model.accepted_words() as u64);
	}

	#[test]
	fn sampling_always_terminates(words in corpus(), seed in any::<u64>()) {
		let model = CorpusModel::from_words(&words, ZeroContextFallback::default());
		let config = SamplerConfig::default();
		let sampler = NameSampler::new(&model, &config);
		let mut rng = RngSource::seeded(seed);

		for _ in 0..20 {
			let outcome = sampler.sample_outcome(&mut rng);
			prop_assert!(!outcome.name.is_empty());
			prop_assert!(outcome.name.len() <= *config.length_cap().end());
			prop_assert!(outcome.steps <= config.max_iterations());
			if outcome.stop != StopReason::IterationCeiling {
				prop_assert!(outcome.name.len() >= config.min_length());
			}
		}
	}
}
