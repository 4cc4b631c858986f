//! The first pass of a conversion: collecting the class names.
//!
//! Member lines reference classes that may only be declared further down in the file, so all class renames
//! need to be known before any method descriptor can be written.

use std::io::Read;
use anyhow::Result;
use indexmap::IndexMap;
use log::{debug, trace};
use crate::ConvertOptions;
use crate::lines::{on_every_line, MappingLine};

/// Maps original class names to renamed class names, both slash separated (like `com/example/Foo`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassMappingTable {
	classes: IndexMap<String, String>,
}

impl ClassMappingTable {
	pub fn new() -> ClassMappingTable {
		ClassMappingTable::default()
	}

	/// Inserts a class rename, returning the renamed name previously stored for `original`, if any.
	pub fn insert(&mut self, original: impl Into<String>, renamed: impl Into<String>) -> Option<String> {
		self.classes.insert(original.into(), renamed.into())
	}

	/// Gets the renamed name of a class, given by its slash separated original name.
	pub fn get(&self, original: &str) -> Option<&str> {
		self.classes.get(original).map(String::as_str)
	}

	/// Like [`ClassMappingTable::get`], but returns the given name itself if it's not in the table.
	pub fn map_or_keep<'a>(&'a self, original: &'a str) -> &'a str {
		self.get(original).unwrap_or(original)
	}

	pub fn len(&self) -> usize {
		self.classes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.classes.is_empty()
	}

	/// Iterates over `(original, renamed)` pairs.
	pub fn iter(&self) -> impl Iterator<Item=(&str, &str)> {
		self.classes.iter().map(|(original, renamed)| (original.as_str(), renamed.as_str()))
	}
}

impl<O: Into<String>, R: Into<String>> FromIterator<(O, R)> for ClassMappingTable {
	fn from_iter<T: IntoIterator<Item=(O, R)>>(iter: T) -> Self {
		let mut table = ClassMappingTable::new();
		for (original, renamed) in iter {
			table.insert(original, renamed);
		}
		table
	}
}

/// Reads all class lines from the given reader into a new table.
///
/// Member lines are ignored. Lines that can't be recognized are skipped, even with [`ConvertOptions::strict`]
/// set, since the second pass reports them anyway. Later class lines overwrite earlier ones for the same
/// original name.
///
/// ```
/// use mojmap_tsrg::ConvertOptions;
/// let input = "\
/// # a comment
/// com.example.Foo -> a:
///     int bar(com.example.Foo) -> b
/// com.example.Bar -> b.c:
/// ";
///
/// let table = mojmap_tsrg::class_table::read(input.as_bytes(), ConvertOptions::default()).unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get("com/example/Foo"), Some("a"));
/// assert_eq!(table.get("com/example/Bar"), Some("b/c"));
/// ```
pub fn read(reader: impl Read, options: ConvertOptions) -> Result<ClassMappingTable> {
	let mut table = ClassMappingTable::new();

	on_every_line(reader, options.blank_lines, |line_number, line| {
		match MappingLine::classify(line) {
			MappingLine::Class(class) => {
				if let Some(previous) = table.insert(class.original.clone(), class.renamed) {
					debug!("class {} was already renamed to {previous}, line {line_number} overwrites that", class.original);
				}
			},
			MappingLine::Unrecognized if !line.starts_with(' ') => {
				trace!("ignoring unrecognized class line {line_number}: {line:?}");
			},
			_ => {},
		}
		Ok(())
	})?;

	Ok(table)
}
