//! Encoding of Java source level type names (like `int[]` or `java.lang.String`) into JVM descriptors
//! (like `[I` or `Ljava/lang/String;`).
//!
//! A type name is first parsed into a [`TypeName`], and then written out as a descriptor. Qualified class
//! names are looked up in a [`ClassMappingTable`], so that the descriptor uses the renamed class names.

use anyhow::{bail, Result};
use crate::class_table::ClassMappingTable;

/// The primitive types of java, including `void`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Primitive {
	/// A `void`. Only valid as a return type.
	Void,
	/// An `int`. In rust, this is a `i32`.
	Int,
	/// A `float`. In rust, this is a `f32`.
	Float,
	/// A `char`.
	Char,
	/// A `byte`. In rust, this is a `i8`.
	Byte,
	/// A `boolean`. In rust, this is a `bool`.
	Boolean,
	/// A `double`. In rust, this is a `f64`.
	Double,
	/// A `long`. In rust, this is a `i64`.
	Long,
	/// A `short`. In rust, this is a `i16`.
	Short,
}

impl Primitive {
	pub fn from_name(name: &str) -> Option<Primitive> {
		Some(match name {
			"void" => Primitive::Void,
			"int" => Primitive::Int,
			"float" => Primitive::Float,
			"char" => Primitive::Char,
			"byte" => Primitive::Byte,
			"boolean" => Primitive::Boolean,
			"double" => Primitive::Double,
			"long" => Primitive::Long,
			"short" => Primitive::Short,
			_ => return None,
		})
	}

	/// The single character descriptor of this type.
	pub fn descriptor(self) -> char {
		match self {
			Primitive::Void => 'V',
			Primitive::Int => 'I',
			Primitive::Float => 'F',
			Primitive::Char => 'C',
			Primitive::Byte => 'B',
			Primitive::Boolean => 'Z',
			Primitive::Double => 'D',
			Primitive::Long => 'J',
			Primitive::Short => 'S',
		}
	}
}

/// A parsed source level type name.
///
/// ```
/// use mojmap_tsrg::descriptor::{Primitive, TypeName};
///
/// assert_eq!(TypeName::parse("int"), TypeName::Primitive(Primitive::Int));
/// assert_eq!(TypeName::parse("java.lang.String"), TypeName::Reference("java.lang.String"));
/// assert_eq!(
///     TypeName::parse("long[][]"),
///     TypeName::Array(Box::new(TypeName::Array(Box::new(TypeName::Primitive(Primitive::Long))))),
/// );
/// assert_eq!(TypeName::parse("Foo"), TypeName::Unqualified("Foo"));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TypeName<'a> {
	/// An array of the inner type, from a trailing `[]`.
	Array(Box<TypeName<'a>>),
	Primitive(Primitive),
	/// A class name containing a package, still dot separated.
	Reference(&'a str),
	/// Anything else, for example a class name without a package.
	///
	/// These have no descriptor, since there's no way of telling if they name a class.
	Unqualified(&'a str),
}

impl<'a> TypeName<'a> {
	pub fn parse(name: &'a str) -> TypeName<'a> {
		if let Some(inner) = name.strip_suffix("[]") {
			TypeName::Array(Box::new(TypeName::parse(inner)))
		} else if name.contains('.') {
			TypeName::Reference(name)
		} else if let Some(primitive) = Primitive::from_name(name) {
			TypeName::Primitive(primitive)
		} else {
			TypeName::Unqualified(name)
		}
	}

	/// The name of the [`TypeName::Unqualified`] at the bottom of this type, if it's one.
	pub fn unqualified_name(&self) -> Option<&'a str> {
		match self {
			TypeName::Array(inner) => inner.unqualified_name(),
			TypeName::Unqualified(name) => Some(*name),
			_ => None,
		}
	}

	/// Writes the descriptor of this type into `out`, writing nothing for [`TypeName::Unqualified`].
	fn write_descriptor(&self, table: &ClassMappingTable, out: &mut String) {
		match self {
			TypeName::Array(inner) => {
				out.push('[');
				inner.write_descriptor(table, out);
			},
			TypeName::Primitive(primitive) => out.push(primitive.descriptor()),
			TypeName::Reference(name) => {
				let name = name.replace('.', "/");
				out.push('L');
				out.push_str(table.map_or_keep(&name));
				out.push(';');
			},
			TypeName::Unqualified(_) => {},
		}
	}

	/// Fails on types that have a [`TypeName::Unqualified`] at the bottom.
	pub fn to_descriptor(&self, table: &ClassMappingTable) -> Result<String> {
		if let Some(name) = self.unqualified_name() {
			bail!("cannot encode type {name:?} as descriptor: it is neither primitive nor has a package");
		}
		let mut out = String::new();
		self.write_descriptor(table, &mut out);
		Ok(out)
	}
}

/// Encodes a source level type name into a descriptor, using the renamed class names from `table`.
///
/// Classes not in the table keep their name. Fails for type names that are neither primitive nor
/// contain a package, see [`encode_lenient`] for a version that doesn't.
///
/// ```
/// use mojmap_tsrg::ClassMappingTable;
///
/// let table: ClassMappingTable = [("com/example/Foo", "a")].into_iter().collect();
///
/// assert_eq!(mojmap_tsrg::descriptor::encode("int[][]", &table).unwrap(), "[[I");
/// assert_eq!(mojmap_tsrg::descriptor::encode("com.example.Foo[]", &table).unwrap(), "[La;");
/// assert_eq!(mojmap_tsrg::descriptor::encode("java.lang.String", &table).unwrap(), "Ljava/lang/String;");
/// assert!(mojmap_tsrg::descriptor::encode("Foo", &table).is_err());
/// ```
pub fn encode(type_name: &str, table: &ClassMappingTable) -> Result<String> {
	TypeName::parse(type_name).to_descriptor(table)
}

/// Like [`encode`], but writes nothing for the parts of the type name that have no descriptor.
///
/// Note that the result may not be a valid descriptor then, for example `Foo[]` gives `[`.
pub fn encode_lenient(type_name: &str, table: &ClassMappingTable) -> String {
	let mut out = String::new();
	TypeName::parse(type_name).write_descriptor(table, &mut out);
	out
}
