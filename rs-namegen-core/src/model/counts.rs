use super::symbol::{ALPHABET_SIZE, Context, Symbol};

/// Row of next-symbol counts observed after one context.
pub type CountRow = [u64; ALPHABET_SIZE];

/// Order-2 transition counts.
///
/// For every `(prev2, prev1)` context, stores how many times each next
/// symbol was observed. The terminator is counted like any letter when
/// a word ends.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during learning
/// - Merge with another set of counts (parallel learning support)
///
/// ## Invariants
/// - `rows.len() == Context::COUNT`, indexed by `Context::index`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionCounts {
	rows: Vec<CountRow>,
}

impl Default for TransitionCounts {
	fn default() -> Self {
		Self::new()
	}
}

impl TransitionCounts {
	/// Creates an all-zero table.
	pub fn new() -> Self {
		Self { rows: vec![[0; ALPHABET_SIZE]; Context::COUNT] }
	}

	/// Records one occurrence of `next` following `context`.
	pub fn increment(&mut self, context: Context, next: Symbol) {
		self.rows[context.index()][next.index()] += 1;
	}

	pub fn get(&self, context: Context, next: Symbol) -> u64 {
		self.rows[context.index()][next.index()]
	}

	/// All next-symbol counts for `context`, in ascending symbol order.
	pub fn row(&self, context: Context) -> &CountRow {
		&self.rows[context.index()]
	}

	/// Number of transitions observed out of `context`.
	pub fn total(&self, context: Context) -> u64 {
		self.row(context).iter().sum()
	}

	/// Number of transitions observed across every context.
	pub fn grand_total(&self) -> u64 {
		self.rows.iter().flatten().sum()
	}

	/// Contexts with at least one observed transition.
	pub fn observed_contexts(&self) -> impl Iterator<Item = Context> + '_ {
		Context::all().filter(|context| self.total(*context) > 0)
	}

	/// Adds every count of `other` into this table.
	pub fn merge(&mut self, other: &Self) {
		for (row, other_row) in self.rows.iter_mut().zip(&other.rows) {
			for (count, other_count) in row.iter_mut().zip(other_row) {
				*count += other_count;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sym(c: char) -> Symbol {
		Symbol::from_char(c).unwrap()
	}

	#[test]
	fn increments_are_per_context() {
		let mut counts = TransitionCounts::new();
		let context = Context::START.shift(sym('a'));
		counts.increment(context, sym('n'));
		counts.increment(context, sym('n'));
		counts.increment(context, Symbol::TERMINATOR);

		assert_eq!(counts.get(context, sym('n')), 2);
		assert_eq!(counts.get(context, Symbol::TERMINATOR), 1);
		assert_eq!(counts.total(context), 3);
		assert_eq!(counts.total(Context::START), 0);
		assert_eq!(counts.observed_contexts().collect::<Vec<_>>(), vec![context]);
	}

	#[test]
	fn merge_sums_counts() {
		let context = Context::new(sym('a'), sym('n'));
		let mut left = TransitionCounts::new();
		left.increment(context, sym('t'));
		let mut right = TransitionCounts::new();
		right.increment(context, sym('t'));
		right.increment(Context::START, sym('a'));

		left.merge(&right);
		assert_eq!(left.get(context, sym('t')), 2);
		assert_eq!(left.get(Context::START, sym('a')), 1);
		assert_eq!(left.grand_total(), 3);
	}
}
