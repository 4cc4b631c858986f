use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, warn, LevelFilter};
use mojmap_tsrg::{BlankLines, ConvertOptions};

/// Converts a Proguard style mappings file (like the ones Mojang publishes) into a TSRG file.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
	/// Be more verbose, can be given multiple times.
	#[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
	verbose: u8,

	/// Only print errors.
	#[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
	quiet: bool,

	/// Fail on lines that can't be converted, instead of skipping them.
	#[arg(long = "strict")]
	strict: bool,

	/// What an empty line in the input means.
	#[arg(long = "blank-lines", value_enum, default_value_t)]
	blank_lines: BlankLinesArg,

	/// Delete the input file after it was converted successfully.
	#[arg(long = "delete-input")]
	delete_input: bool,

	/// The mappings file to read.
	input: PathBuf,

	/// The TSRG file to write, gets overwritten if it exists.
	output: PathBuf,
}

impl Cli {
	fn level_filter(&self) -> LevelFilter {
		if self.quiet {
			return LevelFilter::Error;
		}
		match self.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	}

	fn options(&self) -> ConvertOptions {
		ConvertOptions {
			strict: self.strict,
			blank_lines: self.blank_lines.into(),
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
enum BlankLinesArg {
	#[default]
	/// The first empty line ends the input.
	Stop,
	/// Empty lines are ignored.
	Skip,
}

impl Display for BlankLinesArg {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			BlankLinesArg::Stop => write!(f, "stop"),
			BlankLinesArg::Skip => write!(f, "skip"),
		}
	}
}

impl From<BlankLinesArg> for BlankLines {
	fn from(value: BlankLinesArg) -> Self {
		match value {
			BlankLinesArg::Stop => BlankLines::StopScanning,
			BlankLinesArg::Skip => BlankLines::Skip,
		}
	}
}

fn setup_logging(level: LevelFilter) -> Result<()> {
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!("[{} {}] {message}", record.level(), record.target()))
		})
		.level(level)
		.chain(std::io::stderr())
		.apply()
		.context("failed to set up logging")
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_logging(cli.level_filter())?;

	info!("converting {:?} into {:?}", cli.input, cli.output);
	let summary = mojmap_tsrg::convert_file(&cli.input, &cli.output, cli.options())?;

	for skipped in &summary.skipped {
		info!("skipped line {}: {:?}", skipped.line_number, skipped.line);
	}
	if !summary.skipped.is_empty() {
		warn!("skipped {} lines that couldn't be recognized", summary.skipped.len());
	}
	info!("wrote {} classes, {} fields and {} methods", summary.classes, summary.fields, summary.methods);

	if cli.delete_input {
		std::fs::remove_file(&cli.input)
			.with_context(|| anyhow!("failed to delete input file {:?}", cli.input))?;
		info!("deleted {:?}", cli.input);
	}

	Ok(())
}
