use std::fmt;

/// Number of symbols: the terminator followed by `a..=z`.
pub const ALPHABET_SIZE: usize = 27;

/// Number of letters (symbols other than the terminator).
pub const LETTER_COUNT: usize = 26;

/// A symbol of the restricted alphabet.
///
/// Index `0` is the terminator, meaning "end of word" or "no preceding
/// letter". Indices `1..=26` are the letters `a..=z`. Ascending index
/// order is the order in which distributions are laid out and scanned.
///
/// ## Invariants
/// - The wrapped index is always `< ALPHABET_SIZE`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
	pub const TERMINATOR: Symbol = Symbol(0);

	/// Every symbol in ascending index order, terminator first.
	pub const ALL: [Symbol; ALPHABET_SIZE] = {
		let mut all = [Symbol(0); ALPHABET_SIZE];
		let mut i = 0;
		while i < ALPHABET_SIZE {
			all[i] = Symbol(i as u8);
			i += 1;
		}
		all
	};

	/// Maps an ASCII letter (either case) to its symbol.
	///
	/// Uppercase letters fold onto their lowercase symbol.
	/// Returns `None` for anything that is not an ASCII letter.
	pub fn from_char(c: char) -> Option<Self> {
		if c.is_ascii_alphabetic() {
			Some(Self(c.to_ascii_lowercase() as u8 - b'a' + 1))
		} else {
			None
		}
	}

	/// Returns the symbol at `index`, or `None` if out of the alphabet.
	pub fn from_index(index: usize) -> Option<Self> {
		Self::ALL.get(index).copied()
	}

	/// Returns the `offset`-th letter (`0` → `'a'`), clamped to `'z'`.
	pub fn letter(offset: usize) -> Self {
		Self(offset.min(LETTER_COUNT - 1) as u8 + 1)
	}

	/// Iterates over the 26 letters in ascending order.
	pub fn letters() -> impl Iterator<Item = Symbol> {
		Self::ALL.into_iter().skip(1)
	}

	pub fn index(self) -> usize {
		self.0 as usize
	}

	pub fn is_terminator(self) -> bool {
		self.0 == 0
	}

	/// The lowercase letter for this symbol; `None` for the terminator.
	pub fn to_char(self) -> Option<char> {
		if self.is_terminator() {
			None
		} else {
			Some((b'a' + self.0 - 1) as char)
		}
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.to_char() {
			Some(c) => write!(f, "{c}"),
			None => f.write_str("$"),
		}
	}
}

/// The two most recently emitted (or placeholder) symbols.
///
/// Both slots hold the terminator at the start of a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Context {
	pub prev2: Symbol,
	pub prev1: Symbol,
}

impl Context {
	/// Number of distinct contexts.
	pub const COUNT: usize = ALPHABET_SIZE * ALPHABET_SIZE;

	/// Context at the start of a word: no preceding letters.
	pub const START: Context = Context { prev2: Symbol::TERMINATOR, prev1: Symbol::TERMINATOR };

	pub fn new(prev2: Symbol, prev1: Symbol) -> Self {
		Self { prev2, prev1 }
	}

	/// Builds a context from two characters, `None` meaning the terminator.
	///
	/// Returns `None` if a character is not an ASCII letter.
	pub fn from_chars(prev2: Option<char>, prev1: Option<char>) -> Option<Self> {
		let symbol = |c: Option<char>| match c {
			Some(c) => Symbol::from_char(c),
			None => Some(Symbol::TERMINATOR),
		};
		Some(Self::new(symbol(prev2)?, symbol(prev1)?))
	}

	/// Slides the window: `prev2 <- prev1`, `prev1 <- next`.
	pub fn shift(self, next: Symbol) -> Self {
		Self { prev2: self.prev1, prev1: next }
	}

	/// Dense index in `0..Context::COUNT`.
	pub fn index(self) -> usize {
		self.prev2.index() * ALPHABET_SIZE + self.prev1.index()
	}

	/// Inverse of [`Context::index`].
	pub fn from_index(index: usize) -> Option<Self> {
		if index >= Self::COUNT {
			return None;
		}
		Some(Self::new(Symbol::ALL[index / ALPHABET_SIZE], Symbol::ALL[index % ALPHABET_SIZE]))
	}

	/// Iterates over every context in dense index order.
	pub fn all() -> impl Iterator<Item = Context> {
		(0..Self::COUNT).filter_map(Self::from_index)
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.prev2, self.prev1)
	}
}
