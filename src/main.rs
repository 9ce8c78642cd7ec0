use std::{
	fs,
	io::{self, Read},
	path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use sponge256::hash;
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Prints the 256-bit sponge digest of a message as lowercase hex.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Message to hash, taken as its UTF-8 bytes. Read from stdin when
	/// neither this nor --file is given.
	#[arg(conflicts_with = "file")]
	message: Option<String>,

	/// Hash the contents of this file instead.
	#[arg(long, short, value_name = "PATH", value_hint = ValueHint::FilePath)]
	file: Option<PathBuf>,
}

fn read_message(args: &Args, mut stdin: impl Read) -> Result<Vec<u8>> {
	if let Some(path) = &args.file {
		return fs::read(path).with_context(|| format!("failed to read {}", path.display()));
	}

	if let Some(message) = &args.message {
		return Ok(message.as_bytes().to_vec());
	}

	let mut message = Vec::new();
	stdin.read_to_end(&mut message).context("failed to read message from stdin")?;

	Ok(message)
}

fn init_logging() {
	let env_filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::WARN.into())
		.from_env_lossy();

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(io::stderr)
		.init();
}

fn main() -> Result<()> {
	init_logging();

	let args = Args::parse();
	let message = read_message(&args, io::stdin().lock())?;
	debug!(len = message.len(), "read message");

	println!("{}", hex::encode(hash(&message)));

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_message_argument() {
		let args = Args::try_parse_from(["sponge256", "2025"]).unwrap();
		let message = read_message(&args, io::empty()).unwrap();

		assert_eq!(message, b"2025");
		assert_eq!(
			hex::encode(hash(&message)),
			"7099b892d11a3203d908e83ce2240852977bdede7051e90027152e0c540f9319",
		);
	}

	#[test]
	fn test_stdin_fallback() {
		let args = Args::try_parse_from(["sponge256"]).unwrap();
		let message = read_message(&args, &b"from stdin"[..]).unwrap();

		assert_eq!(message, b"from stdin");
	}

	#[test]
	fn test_file_argument() {
		let path = std::env::temp_dir().join(format!("sponge256-test-{}", std::process::id()));
		fs::write(&path, b"abc").unwrap();

		let args = Args::try_parse_from(["sponge256", "--file", path.to_str().unwrap()]).unwrap();
		let message = read_message(&args, io::empty()).unwrap();
		fs::remove_file(&path).unwrap();

		assert_eq!(message, b"abc");
	}

	#[test]
	fn test_missing_file_is_an_error() {
		let args = Args::try_parse_from(["sponge256", "-f", "/nonexistent/sponge256/input"]).unwrap();
		let err = read_message(&args, io::empty()).unwrap_err();

		assert!(err.to_string().contains("failed to read"));
	}

	#[test]
	fn test_message_and_file_conflict() {
		assert!(Args::try_parse_from(["sponge256", "abc", "--file", "x"]).is_err());
	}
}
