use super::symbol::{ALPHABET_SIZE, Symbol};

/// Length statistics for words ending in one letter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminalEntry {
	/// Number of words ending in this letter.
	pub count: u64,
	/// Sum of the lengths of those words.
	pub total_length: u64,
}

impl TerminalEntry {
	/// Mean length of the words ending in this letter.
	pub fn average_length(&self) -> Option<f64> {
		if self.count == 0 {
			None
		} else {
			Some(self.total_length as f64 / self.count as f64)
		}
	}
}

/// Word length statistics grouped by terminal letter.
///
/// Averages are kept as exact integer totals so that partial statistics
/// built in parallel merge without rounding drift.
///
/// Not consumed by the sampler; exposed for length heuristics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalLengthStats {
	entries: [TerminalEntry; ALPHABET_SIZE],
}

impl Default for TerminalLengthStats {
	fn default() -> Self {
		Self { entries: [TerminalEntry::default(); ALPHABET_SIZE] }
	}
}

impl TerminalLengthStats {
	pub fn new() -> Self {
		Self::default()
	}

	/// Incorporates one word of `length` letters ending in `letter`.
	pub fn record(&mut self, letter: Symbol, length: usize) {
		let entry = &mut self.entries[letter.index()];
		entry.count += 1;
		entry.total_length += length as u64;
	}

	pub fn entry(&self, letter: Symbol) -> TerminalEntry {
		self.entries[letter.index()]
	}

	pub fn count(&self, letter: Symbol) -> u64 {
		self.entry(letter).count
	}

	pub fn average_length(&self, letter: Symbol) -> Option<f64> {
		self.entry(letter).average_length()
	}

	/// Letters that ended at least one word, with their statistics.
	pub fn iter(&self) -> impl Iterator<Item = (Symbol, TerminalEntry)> + '_ {
		Symbol::letters()
			.map(|letter| (letter, self.entry(letter)))
			.filter(|(_, entry)| entry.count > 0)
	}

	pub fn merge(&mut self, other: &Self) {
		for (entry, other) in self.entries.iter_mut().zip(&other.entries) {
			entry.count += other.count;
			entry.total_length += other.total_length;
		}
	}
}
