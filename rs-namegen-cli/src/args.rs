//! Command line arguments for the `namegen` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rs_namegen_core::model::config::{DEFAULT_CAP_MAX, DEFAULT_CAP_MIN, DEFAULT_MIN_LENGTH};
use rs_namegen_core::{Result, SamplerConfig, TerminationOverride, ZeroContextFallback};

/// Generate pronounceable names from the letter statistics of a word list
#[derive(Parser, Debug)]
#[command(name = "namegen", version, about)]
pub struct Cli {
	/// Names printed per batch
	#[arg(short = 'n', long = "count", default_value_t = 10)]
	pub count: usize,

	/// Print one batch and exit instead of waiting for a key
	#[arg(short = 'q', long = "quit")]
	pub auto_quit: bool,

	/// Training corpus, one word per line (default: words.txt beside the executable)
	#[arg(long, env = "NAMEGEN_WORDS")]
	pub words: Option<PathBuf>,

	/// Seed for reproducible output
	#[arg(long)]
	pub seed: Option<u64>,

	/// Names shorter than this are not allowed to end
	#[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
	pub min_length: usize,

	/// Lowest length cap rolled at each step
	#[arg(long, default_value_t = DEFAULT_CAP_MIN)]
	pub cap_min: usize,

	/// Highest length cap rolled at each step
	#[arg(long, default_value_t = DEFAULT_CAP_MAX)]
	pub cap_max: usize,

	/// Hard ceiling on sampling steps per name (default: 8 times --cap-max)
	#[arg(long)]
	pub max_iterations: Option<usize>,

	/// Redraw a letter when a name would end too early, instead of
	/// shifting in a hidden placeholder
	#[arg(long)]
	pub resample: bool,

	/// Distribution used for letter pairs never seen in the corpus
	#[arg(long, value_enum, default_value_t = Fallback::StartingLetters)]
	pub fallback: Fallback,

	/// Enable verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Fallback {
	/// How corpus words start
	StartingLetters,
	/// Every letter equally likely
	Uniform,
	/// End the name
	Terminate,
}

impl From<Fallback> for ZeroContextFallback {
	fn from(fallback: Fallback) -> Self {
		match fallback {
			Fallback::StartingLetters => ZeroContextFallback::StartingLetters,
			Fallback::Uniform => ZeroContextFallback::UniformLetters,
			Fallback::Terminate => ZeroContextFallback::Terminate,
		}
	}
}

impl Cli {
	/// Builds the sampler settings from the flags.
	///
	/// # Errors
	/// Returns an error if the length cap range or iteration ceiling is invalid.
	pub fn sampler_config(&self) -> Result<SamplerConfig> {
		let mut config = SamplerConfig::default();
		config.set_min_length(self.min_length);
		config.set_length_cap(self.cap_min, self.cap_max)?;
		if let Some(max_iterations) = self.max_iterations {
			config.set_max_iterations(max_iterations)?;
		}
		if self.resample {
			config.set_override_policy(TerminationOverride::Resample);
		}
		Ok(config)
	}
}
