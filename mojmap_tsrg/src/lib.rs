//! Crate for converting Proguard style mapping files (the format Mojang publishes its obfuscation maps in) into
//! TSRG files.
//!
//! The conversion is done in two passes over the input. The first pass collects all class renames into a
//! [`ClassMappingTable`] (see [`class_table`]), the second one re-reads the input and writes the TSRG lines,
//! encoding method signatures into JVM descriptors with the help of that table (see [`tsrg`] and [`descriptor`]).
//!
//! For converting files, use [`load`] followed by [`convert`], or just [`convert_file`].
//!
//! Lines that don't look like a class, field or method mapping are skipped. By default this happens silently
//! (they still show up in [`ConversionSummary::skipped`]), with [`ConvertOptions::strict`] set the conversion
//! fails instead.

use std::fs::File;
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use log::debug;

mod lines;

pub mod class_table;
pub mod descriptor;
pub mod tsrg;

pub use class_table::ClassMappingTable;
pub use tsrg::{ConversionSummary, SkippedLine};

/// What to do when an empty line is encountered in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlankLines {
	/// The first empty line ends the input. Anything after it is never looked at.
	#[default]
	StopScanning,
	/// Empty lines are skipped, and reading continues with the next line.
	Skip,
}

/// Options shared by both passes of a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
	/// Fail on lines that can't be recognized and on types that can't be encoded, instead of skipping them.
	pub strict: bool,
	pub blank_lines: BlankLines,
}

impl ConvertOptions {
	pub fn strict() -> ConvertOptions {
		ConvertOptions { strict: true, ..ConvertOptions::default() }
	}
}

/// Reads the class names from the mappings file at the given path.
///
/// The file is only open for the duration of this call.
pub fn load(input: impl AsRef<Path>, options: ConvertOptions) -> Result<ClassMappingTable> {
	let input = input.as_ref();

	let file = File::open(input)
		.with_context(|| anyhow!("failed to open mappings file {input:?}"))?;

	let table = class_table::read(file, options)
		.with_context(|| anyhow!("failed to read class names from mappings file {input:?}"))?;

	debug!("read {} class names from {input:?}", table.len());
	Ok(table)
}

/// Converts the mappings file at `input` into a TSRG file at `output`, using the class names from `table`.
///
/// The `table` must be the one [`load`]ed from the same `input`. Any existing content of `output` is replaced.
/// The `input` file is never modified or deleted.
///
/// If this fails, the content of `output` is unspecified and must not be used.
pub fn convert(
	input: impl AsRef<Path>,
	output: impl AsRef<Path>,
	table: &ClassMappingTable,
	options: ConvertOptions,
) -> Result<ConversionSummary> {
	let input = input.as_ref();
	let output = output.as_ref();

	let reader = File::open(input)
		.with_context(|| anyhow!("failed to open mappings file {input:?}"))?;
	let mut writer = File::create(output)
		.with_context(|| anyhow!("failed to create output file {output:?}"))?;

	let summary = tsrg::write(reader, &mut writer, table, options)
		.with_context(|| anyhow!("failed to convert mappings file {input:?} into tsrg file {output:?}"))?;

	debug!("wrote {} classes, {} fields and {} methods to {output:?}", summary.classes, summary.fields, summary.methods);
	Ok(summary)
}

/// Runs [`load`] and then [`convert`] on the same `input`.
///
/// ```no_run
/// use mojmap_tsrg::ConvertOptions;
///
/// let summary = mojmap_tsrg::convert_file("server.txt", "server.tsrg", ConvertOptions::default()).unwrap();
/// println!("skipped {} lines", summary.skipped.len());
/// ```
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>, options: ConvertOptions) -> Result<ConversionSummary> {
	let table = load(&input, options)?;
	convert(input, output, &table, options)
}
