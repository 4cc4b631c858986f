//! The second pass of a conversion: writing the TSRG file.
//!
//! The output has one line per recognized input line, in the same order:
//! ```text
//! renamedClass originalClass
//! 	renamedMethod (paramDescriptors)returnDescriptor methodName
//! 	renamedField fieldName
//! ```
//! Note that the columns of class lines are swapped compared to the input: the renamed name always comes first.

use std::io::{BufWriter, Read, Write};
use anyhow::{bail, Context, Result};
use log::{debug, trace, warn};
use crate::ConvertOptions;
use crate::class_table::ClassMappingTable;
use crate::descriptor::{encode, encode_lenient};
use crate::lines::{on_every_line, ClassRecord, FieldRecord, MappingLine, MethodRecord};

/// Counts of what a conversion wrote, and the lines it couldn't recognize.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionSummary {
	pub classes: usize,
	pub fields: usize,
	pub methods: usize,
	pub skipped: Vec<SkippedLine>,
}

/// A line that didn't match any of the class, field or method line shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
	/// Starts at one.
	pub line_number: usize,
	pub line: String,
}

#[allow(clippy::tabs_in_doc_comments)]
/// Writes the TSRG equivalent of the mappings read from `reader` into `w`.
///
/// The `table` must contain the class names from the same input, see [`crate::class_table::read`].
///
/// ```
/// use mojmap_tsrg::ConvertOptions;
/// let input = "\
/// com.example.Foo -> a:
///     int bar(com.example.Foo) -> b
///     com.example.Foo baz -> c
/// ";
///
/// let table = mojmap_tsrg::class_table::read(input.as_bytes(), ConvertOptions::default()).unwrap();
///
/// let mut buf: Vec<u8> = Vec::new();
/// let summary = mojmap_tsrg::tsrg::write(input.as_bytes(), &mut buf, &table, ConvertOptions::default()).unwrap();
/// let written = String::from_utf8(buf).unwrap();
///
/// let output = "\
/// a com/example/Foo
/// 	b (La;)I bar
/// 	c baz
/// ";
///
/// assert_eq!(written, output);
/// assert_eq!((summary.classes, summary.fields, summary.methods), (1, 1, 1));
/// ```
///
/// There's also the helper method [`write_string`] for converting a `&str` into a `String` directly.
pub fn write(reader: impl Read, w: &mut impl Write, table: &ClassMappingTable, options: ConvertOptions) -> Result<ConversionSummary> {
	// the buffering makes it much faster
	let mut w = BufWriter::new(w);

	let mut summary = ConversionSummary::default();

	on_every_line(reader, options.blank_lines, |line_number, line| {
		match MappingLine::classify(line) {
			MappingLine::Comment => {},
			// `on_every_line` already deals with these
			MappingLine::Blank => {},
			MappingLine::Class(class) => {
				write_class(&mut w, &class)?;
				summary.classes += 1;
			},
			MappingLine::Field(field) => {
				write_field(&mut w, &field)?;
				summary.fields += 1;
			},
			MappingLine::Method(method) => {
				write_method(&mut w, &method, table, options.strict)?;
				summary.methods += 1;
			},
			MappingLine::Unrecognized => {
				trace!("skipping unrecognized line {line_number}: {line:?}");
				summary.skipped.push(SkippedLine { line_number, line: line.to_owned() });
			},
		}
		Ok(())
	})?;

	w.flush().context("failed to flush tsrg output")?;

	if !summary.skipped.is_empty() {
		if options.strict {
			let first = &summary.skipped[0];
			bail!(
				"{} lines could not be recognized as class, field or method mapping, the first one is line {}: {:?}",
				summary.skipped.len(), first.line_number, first.line
			);
		}
		debug!("skipped {} unrecognized lines", summary.skipped.len());
	}

	Ok(summary)
}

/// Converts the mappings in `input` into a `String` in the TSRG format.
///
/// This runs both passes on `input`, so no [`ClassMappingTable`] is needed.
///
/// This method is of most use in test cases, where you also use the `pretty_assertions` crate for viewing string diffs.
pub fn write_string(input: &str, options: ConvertOptions) -> Result<String> {
	let table = crate::class_table::read(input.as_bytes(), options)?;

	let mut vec = Vec::new();
	write(input.as_bytes(), &mut vec, &table, options)?;
	String::from_utf8(vec).context("failed to convert written tsrg to utf8")
}

fn write_class(w: &mut impl Write, class: &ClassRecord) -> Result<()> {
	writeln!(w, "{} {}", class.renamed, class.original)?;
	Ok(())
}

fn write_field(w: &mut impl Write, field: &FieldRecord) -> Result<()> {
	writeln!(w, "\t{} {}", field.renamed, field.name)?;
	Ok(())
}

fn write_method(w: &mut impl Write, method: &MethodRecord, table: &ClassMappingTable, strict: bool) -> Result<()> {
	let descriptor = |type_name: &str| -> Result<String> {
		match encode(type_name, table) {
			Ok(descriptor) => Ok(descriptor),
			Err(e) if strict => Err(e.context(format!("in method {:?}", method.name))),
			Err(e) => {
				warn!("{e:#}, in method {:?}, leaving it out of the descriptor", method.name);
				Ok(encode_lenient(type_name, table))
			},
		}
	};

	let return_descriptor = descriptor(method.return_type)?;
	let param_descriptors = method.param_types.iter()
		.map(|&param| descriptor(param))
		.collect::<Result<String>>()?;

	writeln!(w, "\t{} ({param_descriptors}){return_descriptor} {}", method.renamed, method.name)?;
	Ok(())
}
