use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the name generation library.
///
/// An empty corpus is not an error: the model falls back to a defined
/// distribution and generation keeps working.
#[derive(Error, Debug)]
pub enum Error {
	/// The training corpus could not be located or read. No model is built.
	#[error("Can not open word dictionary at {}: {source}", .path.display())]
	CorpusUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A sampler setting was rejected.
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
