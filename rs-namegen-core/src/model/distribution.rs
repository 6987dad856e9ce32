use serde::{Deserialize, Serialize};

use super::counts::{CountRow, TransitionCounts};
use super::symbol::{ALPHABET_SIZE, Context, Symbol};

/// Half-open sub-interval `[lower, upper)` of `[0, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Interval {
	pub lower: f64,
	pub upper: f64,
}

impl Interval {
	pub fn width(&self) -> f64 {
		self.upper - self.lower
	}

	pub fn contains(&self, roll: f64) -> bool {
		roll >= self.lower && roll < self.upper
	}
}

/// Cumulative probability partition over the next symbol.
///
/// Each symbol owns a contiguous interval whose width is its share of
/// the observed count. Intervals are laid out in ascending symbol order,
/// so a single uniform roll selects a symbol with the right weight.
///
/// ## Invariants
/// - Intervals are contiguous and non-overlapping, starting at `0.0`
/// - The last non-empty interval ends exactly at `1.0`
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
	intervals: [Interval; ALPHABET_SIZE],
}

impl Distribution {
	/// Builds the partition for one context's counts.
	///
	/// Returns `None` if no transition was observed (zero total).
	pub fn from_counts(row: &CountRow) -> Option<Self> {
		let total: u64 = row.iter().sum();
		if total == 0 {
			return None;
		}
		// Some: total > 0
		let last = row.iter().rposition(|count| *count > 0)?;

		let mut intervals = [Interval::default(); ALPHABET_SIZE];
		let mut cumulative = 0.0;
		for (index, count) in row.iter().enumerate() {
			let lower = cumulative;
			cumulative += *count as f64 / total as f64;
			if index >= last {
				// Pin the top so rounding never leaves a gap below 1.0
				cumulative = 1.0;
			}
			intervals[index] = Interval { lower, upper: cumulative };
		}

		Some(Self { intervals })
	}

	/// Every letter equally likely, terminator impossible.
	pub fn uniform_letters() -> Self {
		let mut row = [1; ALPHABET_SIZE];
		row[Symbol::TERMINATOR.index()] = 0;
		Self::from_counts(&row).unwrap_or_else(Self::terminate_only)
	}

	/// The terminator with probability one.
	pub fn terminate_only() -> Self {
		let mut intervals = [Interval { lower: 1.0, upper: 1.0 }; ALPHABET_SIZE];
		intervals[Symbol::TERMINATOR.index()] = Interval { lower: 0.0, upper: 1.0 };
		Self { intervals }
	}

	pub fn interval(&self, symbol: Symbol) -> Interval {
		self.intervals[symbol.index()]
	}

	pub fn probability(&self, symbol: Symbol) -> f64 {
		self.interval(symbol).width()
	}

	/// Intervals paired with their symbols, in scan order.
	pub fn iter(&self) -> impl Iterator<Item = (Symbol, Interval)> + '_ {
		Symbol::ALL.into_iter().zip(self.intervals.iter().copied())
	}

	/// Highest symbol with a non-empty interval.
	pub fn last_nonempty(&self) -> Symbol {
		self.iter()
			.filter(|(_, interval)| interval.width() > 0.0)
			.map(|(symbol, _)| symbol)
			.last()
			.unwrap_or(Symbol::TERMINATOR)
	}

	/// Selects the first symbol whose interval contains `roll`.
	///
	/// Rolls below `0.0` are clamped to `0.0`; rolls at or above the top
	/// resolve to the last non-empty symbol, so selection never fails.
	pub fn select(&self, roll: f64) -> Symbol {
		let roll = roll.max(0.0);
		self.iter()
			.find(|(_, interval)| interval.contains(roll))
			.map(|(symbol, _)| symbol)
			.unwrap_or_else(|| self.last_nonempty())
	}

	/// Selects among letters only, rescaling `roll` over the letter mass.
	///
	/// Returns `None` if the terminator holds all of the mass.
	pub fn select_letter(&self, roll: f64) -> Option<Symbol> {
		let terminator = self.interval(Symbol::TERMINATOR);
		let letter_mass = 1.0 - terminator.upper;
		if letter_mass <= 0.0 {
			return None;
		}
		let target = terminator.upper + roll.clamp(0.0, 1.0) * letter_mass;
		let symbol = self.select(target);
		(!symbol.is_terminator()).then_some(symbol)
	}
}

/// Distribution used for contexts never observed in training.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ZeroContextFallback {
	/// How words in the corpus start (the start context), or uniform
	/// letters if the corpus accepted no word at all.
	#[default]
	StartingLetters,
	/// Every letter equally likely.
	UniformLetters,
	/// End the word immediately (subject to the minimum length).
	Terminate,
}

/// Cumulative partition for every context, frozen after training.
///
/// Contexts with a zero total share one explicit fallback distribution.
#[derive(Clone, Debug)]
pub struct ProbabilityTable {
	distributions: Vec<Option<Distribution>>,
	fallback: Distribution,
	policy: ZeroContextFallback,
}

impl ProbabilityTable {
	/// Normalizes every context's counts into a partition.
	pub fn from_counts(counts: &TransitionCounts, policy: ZeroContextFallback) -> Self {
		let distributions: Vec<Option<Distribution>> = Context::all()
			.map(|context| Distribution::from_counts(counts.row(context)))
			.collect();

		let fallback = match policy {
			ZeroContextFallback::StartingLetters => distributions[Context::START.index()]
				.clone()
				.unwrap_or_else(Distribution::uniform_letters),
			ZeroContextFallback::UniformLetters => Distribution::uniform_letters(),
			ZeroContextFallback::Terminate => Distribution::terminate_only(),
		};

		Self { distributions, fallback, policy }
	}

	/// The trained distribution for `context`, `None` if never observed.
	pub fn get(&self, context: Context) -> Option<&Distribution> {
		self.distributions[context.index()].as_ref()
	}

	/// The distribution to sample from in `context`, falling back when
	/// the context was never observed.
	pub fn distribution(&self, context: Context) -> &Distribution {
		self.get(context).unwrap_or(&self.fallback)
	}

	pub fn is_observed(&self, context: Context) -> bool {
		self.get(context).is_some()
	}

	pub fn fallback(&self) -> &Distribution {
		&self.fallback
	}

	pub fn policy(&self) -> ZeroContextFallback {
		self.policy
	}

	/// Most likely next symbol in `context`, lowest symbol on ties.
	pub fn most_likely(&self, context: Context) -> Symbol {
		let mut best = (Symbol::TERMINATOR, f64::MIN);
		for (symbol, interval) in self.distribution(context).iter() {
			if interval.width() > best.1 {
				best = (symbol, interval.width());
			}
		}
		best.0
	}
}
