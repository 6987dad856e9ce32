use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, io};

/// File name of the training corpus looked up next to the executable.
pub const CORPUS_FILE_NAME: &str = "words.txt";

/// Reads a word list, one candidate word per line.
///
/// Line endings (`\n` or `\r\n`) are stripped; lines are returned as is
/// and filtering is left to the corpus builder.
pub fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Returns the directory containing the running executable.
///
/// Falls back to the current directory when the executable path
/// cannot be determined.
pub fn executable_dir() -> PathBuf {
	env::current_exe()
		.ok()
		.and_then(|exe| exe.parent().map(Path::to_path_buf))
		.unwrap_or_else(|| PathBuf::from("."))
}

/// Resolves the corpus location.
///
/// An explicit path wins; otherwise `words.txt` beside the executable.
pub fn resolve_corpus_path(explicit: Option<&Path>) -> PathBuf {
	match explicit {
		Some(path) => path.to_path_buf(),
		None => executable_dir().join(CORPUS_FILE_NAME),
	}
}
