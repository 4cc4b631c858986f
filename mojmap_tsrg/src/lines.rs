use std::io::{BufRead, BufReader, Read};
use anyhow::{anyhow, Context, Result};
use log::trace;
use crate::BlankLines;

const COMMENT: char = '#';
const MEMBER_INDENT: char = ' ';
const ARROW: &str = "->";

/// Calls `f` with the line number (starting at one) and the content of every line, until the end of the input,
/// or, depending on `blank_lines`, until the first empty line.
pub(crate) fn on_every_line(
	reader: impl Read,
	blank_lines: BlankLines,
	mut f: impl FnMut(usize, &str) -> Result<()>,
) -> Result<()> {
	for (line_number, line) in BufReader::new(reader).lines().enumerate() {
		let line_number = line_number + 1;
		let line = line.with_context(|| anyhow!("failed to read line {line_number}"))?;

		if line.is_empty() {
			match blank_lines {
				BlankLines::StopScanning => {
					trace!("stopping at empty line {line_number}");
					break;
				},
				BlankLines::Skip => continue,
			}
		}

		f(line_number, &line)
			.with_context(|| anyhow!("in line {line_number}"))?;
	}
	Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClassRecord {
	/// Slash separated, like `com/example/Foo`.
	pub(crate) original: String,
	/// Slash separated.
	pub(crate) renamed: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldRecord<'a> {
	/// Not part of the output, TSRG fields have no type.
	pub(crate) _field_type: &'a str,
	pub(crate) name: &'a str,
	pub(crate) renamed: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MethodRecord<'a> {
	/// Already without the line number range.
	pub(crate) return_type: &'a str,
	pub(crate) name: &'a str,
	pub(crate) param_types: Vec<&'a str>,
	pub(crate) renamed: &'a str,
}

/// A single line of a Proguard mappings file.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MappingLine<'a> {
	Comment,
	Blank,
	Class(ClassRecord),
	Field(FieldRecord<'a>),
	Method(MethodRecord<'a>),
	/// Doesn't have the right number of tokens, or is otherwise malformed.
	Unrecognized,
}

impl<'a> MappingLine<'a> {
	pub(crate) fn classify(line: &'a str) -> MappingLine<'a> {
		if line.is_empty() {
			MappingLine::Blank
		} else if line.trim_start().starts_with(COMMENT) {
			// newer files also carry indented comments with metadata for members
			MappingLine::Comment
		} else if line.starts_with(MEMBER_INDENT) {
			classify_member(line.trim_start()).unwrap_or(MappingLine::Unrecognized)
		} else {
			classify_class(line).map_or(MappingLine::Unrecognized, MappingLine::Class)
		}
	}
}

// trailing spaces don't make an extra empty token
fn tokens(line: &str) -> Vec<&str> {
	line.trim_end_matches(' ').split(' ').collect()
}

fn to_slashes(name: &str) -> String {
	name.replace('.', "/")
}

// original.package.Class -> renamed:
fn classify_class(line: &str) -> Option<ClassRecord> {
	let tokens: Vec<&str> = tokens(line);
	let &[original, ARROW, renamed] = tokens.as_slice() else {
		return None;
	};
	let renamed = renamed.strip_suffix(':')?;

	Some(ClassRecord {
		original: to_slashes(original),
		renamed: to_slashes(renamed),
	})
}

// fieldType fieldName -> renamed
// [startLine:endLine:]returnType methodName(paramType,...) -> renamed
fn classify_member(line: &str) -> Option<MappingLine> {
	let tokens: Vec<&str> = tokens(line);
	let &[t0, t1, ARROW, renamed] = tokens.as_slice() else {
		return None;
	};

	if t1.ends_with(')') {
		let return_type = if t0.contains(':') {
			t0.splitn(3, ':').nth(2)?
		} else {
			t0
		};

		let (name, params) = t1.strip_suffix(')')?.split_once('(')?;
		let param_types = if params.is_empty() {
			Vec::new()
		} else {
			params.split(',').collect()
		};

		Some(MappingLine::Method(MethodRecord { return_type, name, param_types, renamed }))
	} else {
		Some(MappingLine::Field(FieldRecord { _field_type: t0, name: t1, renamed }))
	}
}
