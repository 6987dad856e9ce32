mod args;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use console::Term;
use log::{debug, info};
use rs_namegen_core::io::resolve_corpus_path;
use rs_namegen_core::{Error, Generator, RandomSource, RngSource};

use args::Cli;

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{err:#}");
			ExitCode::from(exit_code(&err))
		}
	}
}

fn init_logging(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
		.format_target(false)
		.init();
}

/// 1 when the corpus cannot be opened, 2 for rejected settings.
fn exit_code(err: &anyhow::Error) -> u8 {
	match err.downcast_ref::<Error>() {
		Some(Error::InvalidConfig(_)) => 2,
		Some(Error::CorpusUnavailable { .. }) | None => 1,
	}
}

fn run(cli: &Cli) -> Result<()> {
	let config = cli.sampler_config()?;
	let corpus_path = resolve_corpus_path(cli.words.as_deref());

	if !cli.auto_quit {
		println!("Analyzing dictionary...\n");
	}
	let generator = Generator::from_file(&corpus_path, cli.fallback.into(), config)?;
	info!("Trained on {} words from {}", generator.model().accepted_words(), corpus_path.display());

	let mut rng: Box<dyn RandomSource> = match cli.seed {
		Some(seed) => Box::new(RngSource::seeded(seed)),
		None => Box::new(RngSource::from_os_rng()),
	};

	if !cli.auto_quit {
		println!("Press space to generate more, or q to quit.\n");
	}

	let term = Term::stdout();
	loop {
		write_batch(&mut io::stdout().lock(), &generator, cli.count, rng.as_mut())?;
		if cli.auto_quit {
			break;
		}
		match term.read_char() {
			Ok('q') => break,
			Ok(_) => continue,
			Err(err) => {
				debug!("No keypress available ({err}), quitting");
				break;
			}
		}
	}

	Ok(())
}

/// Writes one batch: one name per line, then a blank line.
fn write_batch<W, R>(out: &mut W, generator: &Generator, count: usize, rng: &mut R) -> io::Result<()>
where
	W: Write,
	R: RandomSource + ?Sized,
{
	for name in generator.generate_batch(count, rng) {
		writeln!(out, "{name}")?;
	}
	writeln!(out)?;
	out.flush()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rs_namegen_core::{SamplerConfig, ScriptedSource, ZeroContextFallback};

	#[test]
	fn batch_is_followed_by_blank_line() {
		let generator = Generator::from_words(["ann", "anna", "ant"], ZeroContextFallback::default(), SamplerConfig::default());
		let mut out = Vec::new();
		let mut rng = ScriptedSource::new(vec![0, 6], vec![0.0]);
		write_batch(&mut out, &generator, 1, &mut rng).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "annaaa\n\n");

		let mut out = Vec::new();
		write_batch(&mut out, &generator, 4, &mut RngSource::seeded(1)).unwrap();
		let text = String::from_utf8(out).unwrap();
		let lines: Vec<&str> = text.split('\n').collect();
		// 4 names, the blank separator, and the empty tail after it
		assert_eq!(lines.len(), 6);
		assert!(lines[..4].iter().all(|name| !name.is_empty()));
		assert!(text.ends_with("\n\n"));
	}

	#[test]
	fn exit_codes_follow_failure_kind() {
		let missing = anyhow::Error::from(Error::CorpusUnavailable {
			path: "words.txt".into(),
			source: io::Error::from(io::ErrorKind::NotFound),
		});
		assert_eq!(exit_code(&missing), 1);
		assert_eq!(exit_code(&anyhow::Error::from(Error::InvalidConfig("cap".into()))), 2);
		assert_eq!(exit_code(&anyhow::anyhow!("terminal gone")), 1);
	}
}
