use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::error::{Error, Result};

/// Names shorter than this are not allowed to terminate.
pub const DEFAULT_MIN_LENGTH: usize = 6;

/// Lower bound of the per-step length cap roll.
pub const DEFAULT_CAP_MIN: usize = 6;

/// Upper bound (inclusive) of the per-step length cap roll.
pub const DEFAULT_CAP_MAX: usize = 16;

/// Unless set explicitly, the step ceiling is this multiple of the
/// largest length cap.
pub const ITERATION_CAP_FACTOR: usize = 8;

/// What happens when the terminator is drawn before the minimum length.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TerminationOverride {
	/// Substitute the placeholder letter. It shifts into the context but is
	/// never written to the name.
	#[default]
	Placeholder,
	/// Redraw among letters only, using the same roll rescaled over the
	/// letter mass. Uses the placeholder only when the context has no
	/// letter mass at all.
	Resample,
}

/// Settings for the name sampler.
///
/// # Responsibilities
/// - Track the length policy (`min_length`, `length_cap`)
/// - Track the defensive iteration ceiling, derived from the cap unless set
/// - Track how premature termination is overridden
///
/// # Invariants
/// - `length_cap` is non-empty and starts at 1 or more
/// - `max_iterations >= 1`
/// - `placeholder` is a letter, never the terminator
#[derive(Clone, Debug, PartialEq)]
pub struct SamplerConfig {
	min_length: usize,
	length_cap: RangeInclusive<usize>,
	max_iterations: Option<usize>,
	placeholder: Symbol,
	override_policy: TerminationOverride,
}

impl Default for SamplerConfig {
	fn default() -> Self {
		Self {
			min_length: DEFAULT_MIN_LENGTH,
			length_cap: DEFAULT_CAP_MIN..=DEFAULT_CAP_MAX,
			max_iterations: None,
			placeholder: Symbol::letter(0),
			override_policy: TerminationOverride::Placeholder,
		}
	}
}

impl SamplerConfig {
	pub fn min_length(&self) -> usize {
		self.min_length
	}

	pub fn length_cap(&self) -> &RangeInclusive<usize> {
		&self.length_cap
	}

	/// Ceiling on sampling steps per name.
	///
	/// Defaults to [`ITERATION_CAP_FACTOR`] times the largest length cap, so
	/// it keeps clear of the cap however far the range is raised.
	pub fn max_iterations(&self) -> usize {
		self.max_iterations
			.unwrap_or_else(|| self.length_cap.end().saturating_mul(ITERATION_CAP_FACTOR))
	}

	pub fn placeholder(&self) -> Symbol {
		self.placeholder
	}

	pub fn override_policy(&self) -> TerminationOverride {
		self.override_policy
	}

	/// Sets the minimum name length. `0` disables the override.
	pub fn set_min_length(&mut self, min_length: usize) {
		self.min_length = min_length;
	}

	/// Sets the inclusive range the length cap is rolled from.
	///
	/// # Errors
	/// Returns an error if the range is empty or starts at 0.
	pub fn set_length_cap(&mut self, min: usize, max: usize) -> Result<()> {
		if min == 0 || min > max {
			return Err(Error::InvalidConfig(format!(
				"length cap must satisfy 1 <= min <= max, got {min}..={max}"
			)));
		}
		self.length_cap = min..=max;
		Ok(())
	}

	/// Sets the defensive ceiling on sampling steps per name.
	///
	/// # Errors
	/// Returns an error if `max_iterations` is 0.
	pub fn set_max_iterations(&mut self, max_iterations: usize) -> Result<()> {
		if max_iterations == 0 {
			return Err(Error::InvalidConfig("max iterations must be at least 1".to_owned()));
		}
		self.max_iterations = Some(max_iterations);
		Ok(())
	}

	/// Sets the letter substituted for a premature terminator.
	///
	/// # Errors
	/// Returns an error if `placeholder` is not an ASCII letter.
	pub fn set_placeholder(&mut self, placeholder: char) -> Result<()> {
		self.placeholder = Symbol::from_char(placeholder)
			.ok_or_else(|| Error::InvalidConfig(format!("placeholder must be a letter, got {placeholder:?}")))?;
		Ok(())
	}

	pub fn set_override_policy(&mut self, override_policy: TerminationOverride) {
		self.override_policy = override_policy;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_use_six_to_sixteen_policy() {
		let config = SamplerConfig::default();
		assert_eq!(config.min_length(), 6);
		assert_eq!(config.length_cap(), &(6..=16));
		assert_eq!(config.max_iterations(), 128);
		assert_eq!(config.placeholder().to_char(), Some('a'));
		assert_eq!(config.override_policy(), TerminationOverride::Placeholder);
	}

	#[test]
	fn iteration_ceiling_follows_length_cap() {
		let mut config = SamplerConfig::default();
		config.set_length_cap(200, 200).unwrap();
		assert_eq!(config.max_iterations(), 1600);

		config.set_length_cap(6, usize::MAX).unwrap();
		assert_eq!(config.max_iterations(), usize::MAX);

		config.set_max_iterations(40).unwrap();
		config.set_length_cap(300, 300).unwrap();
		assert_eq!(config.max_iterations(), 40);
	}

	#[test]
	fn invalid_settings_are_rejected() {
		let mut config = SamplerConfig::default();
		assert!(config.set_length_cap(0, 4).is_err());
		assert!(config.set_length_cap(9, 8).is_err());
		assert!(config.set_max_iterations(0).is_err());
		assert!(config.set_placeholder('-').is_err());
		assert_eq!(config, SamplerConfig::default());
	}

	#[test]
	fn valid_settings_are_applied() {
		let mut config = SamplerConfig::default();
		config.set_length_cap(3, 3).unwrap();
		config.set_max_iterations(10).unwrap();
		config.set_placeholder('E').unwrap();
		config.set_override_policy(TerminationOverride::Resample);

		assert_eq!(config.length_cap(), &(3..=3));
		assert_eq!(config.max_iterations(), 10);
		assert_eq!(config.placeholder().to_char(), Some('e'));
		assert_eq!(config.override_policy(), TerminationOverride::Resample);
	}
}
