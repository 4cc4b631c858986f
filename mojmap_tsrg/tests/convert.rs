use anyhow::Result;
use pretty_assertions::assert_eq;
use mojmap_tsrg::{BlankLines, ConvertOptions, SkippedLine};

#[test]
fn server_mappings() -> Result<()> {
	let input = include_str!("server_input.txt");
	let expected = include_str!("server_output.tsrg");

	let actual = mojmap_tsrg::tsrg::write_string(input, ConvertOptions::default())?;

	assert_eq!(actual, expected, "left: actual, right: expected");

	Ok(())
}

#[test]
fn server_mappings_strict() -> Result<()> {
	let input = include_str!("server_input.txt");
	let expected = include_str!("server_output.tsrg");

	let actual = mojmap_tsrg::tsrg::write_string(input, ConvertOptions::strict())?;

	assert_eq!(actual, expected, "left: actual, right: expected");

	Ok(())
}

#[test]
fn swaps_class_columns() -> Result<()> {
	let input = "A.B.C -> x.y.Z:\n";

	let table = mojmap_tsrg::class_table::read(input.as_bytes(), ConvertOptions::default())?;
	assert_eq!(table.get("A/B/C"), Some("x/y/Z"));

	let actual = mojmap_tsrg::tsrg::write_string(input, ConvertOptions::default())?;
	assert_eq!(actual, "x/y/Z A/B/C\n");

	Ok(())
}

#[test]
fn uses_given_table() -> Result<()> {
	let input = "\
com.example.Foo -> a:
    int bar(com.example.Foo) -> b
    com.example.Foo baz -> c
";
	let table: mojmap_tsrg::ClassMappingTable = [("com/example/Foo", "a")].into_iter().collect();

	let mut buf = Vec::new();
	let summary = mojmap_tsrg::tsrg::write(input.as_bytes(), &mut buf, &table, ConvertOptions::default())?;

	assert_eq!(String::from_utf8(buf)?, "a com/example/Foo\n\tb (La;)I bar\n\tc baz\n");
	assert_eq!(summary.classes, 1);
	assert_eq!(summary.methods, 1);
	assert_eq!(summary.fields, 1);
	assert!(summary.skipped.is_empty());

	Ok(())
}

#[test]
fn empty_parameter_list() -> Result<()> {
	let input = "\
com.example.Foo -> a:
    void run() -> a
    12:14:void <clinit>() -> <clinit>
";

	let actual = mojmap_tsrg::tsrg::write_string(input, ConvertOptions::default())?;

	assert_eq!(actual, "a com/example/Foo\n\ta ()V run\n\t<clinit> ()V <clinit>\n");

	Ok(())
}

#[test]
fn keeps_parameter_order() -> Result<()> {
	let input = "\
com.example.Foo -> a:
com.example.Bar -> b:
    void both(com.example.Bar,int,com.example.Foo[]) -> c
";

	let actual = mojmap_tsrg::tsrg::write_string(input, ConvertOptions::default())?;

	assert_eq!(actual, "a com/example/Foo\nb com/example/Bar\n\tc (Lb;I[La;)V both\n");

	Ok(())
}

#[test]
fn skips_malformed_lines() -> Result<()> {
	let input = "\
com.example.Foo -> a: extra
com.example.Foo ->
com.example.Bar -> b:
    int broken -> a b
    int x -> a
    void m() a
    void n() -> b
";
	let options = ConvertOptions::default();

	let table = mojmap_tsrg::class_table::read(input.as_bytes(), options)?;
	assert_eq!(table.len(), 1);
	assert_eq!(table.get("com/example/Foo"), None);

	let mut buf = Vec::new();
	let summary = mojmap_tsrg::tsrg::write(input.as_bytes(), &mut buf, &table, options)?;

	assert_eq!(String::from_utf8(buf)?, "b com/example/Bar\n\ta x\n\tb ()V n\n");
	assert_eq!(summary.skipped, vec![
		SkippedLine { line_number: 1, line: "com.example.Foo -> a: extra".to_owned() },
		SkippedLine { line_number: 2, line: "com.example.Foo ->".to_owned() },
		SkippedLine { line_number: 4, line: "    int broken -> a b".to_owned() },
		SkippedLine { line_number: 6, line: "    void m() a".to_owned() },
	]);

	Ok(())
}

#[test]
fn strict_fails_on_malformed_lines() {
	let input = "\
com.example.Bar -> b:
    int x -> a
    int broken -> a b
";

	let error = mojmap_tsrg::tsrg::write_string(input, ConvertOptions::strict())
		.expect_err("a malformed line must fail in strict mode");

	let message = format!("{error:#}");
	assert!(message.contains("line 3"), "{message}");
}

#[test]
fn stops_at_first_blank_line() -> Result<()> {
	let input = "\
com.example.Foo -> a:
    void use(com.example.Bar) -> a

com.example.Bar -> b:
    int x -> a
";
	let options = ConvertOptions::default();

	let table = mojmap_tsrg::class_table::read(input.as_bytes(), options)?;
	assert_eq!(table.len(), 1);
	assert_eq!(table.get("com/example/Bar"), None);

	let actual = mojmap_tsrg::tsrg::write_string(input, options)?;
	assert_eq!(actual, "a com/example/Foo\n\ta (Lcom/example/Bar;)V use\n");

	Ok(())
}

#[test]
fn skip_blank_lines() -> Result<()> {
	let input = "\
com.example.Foo -> a:
    void use(com.example.Bar) -> a

com.example.Bar -> b:
    int x -> a
";
	let options = ConvertOptions { blank_lines: BlankLines::Skip, ..ConvertOptions::default() };

	let actual = mojmap_tsrg::tsrg::write_string(input, options)?;
	assert_eq!(actual, "a com/example/Foo\n\ta (Lb;)V use\nb com/example/Bar\n\ta x\n");

	Ok(())
}

#[test]
fn unqualified_types() -> Result<()> {
	let input = "\
com.example.Foo -> a:
    Foo make(int,Foo[]) -> a
";

	// the legacy behaviour: just leave them out
	let actual = mojmap_tsrg::tsrg::write_string(input, ConvertOptions::default())?;
	assert_eq!(actual, "a com/example/Foo\n\ta (I[) make\n");

	let error = mojmap_tsrg::tsrg::write_string(input, ConvertOptions::strict())
		.expect_err("an unqualified type must fail in strict mode");
	let message = format!("{error:#}");
	assert!(message.contains("\"Foo\""), "{message}");
	assert!(message.contains("line 2"), "{message}");

	Ok(())
}

#[test]
fn comments_are_not_written() -> Result<()> {
	let input = "\
# comment
com.example.Foo -> a:
    # {\"id\":\"com.android.tools.r8.synthesized\"}
    int x -> a
#end
";

	let actual = mojmap_tsrg::tsrg::write_string(input, ConvertOptions::strict())?;
	assert_eq!(actual, "a com/example/Foo\n\ta x\n");

	Ok(())
}

#[test]
fn trailing_spaces() -> Result<()> {
	// written with escapes so the trailing spaces stay visible
	let input = "com.example.Foo -> a: \n    int x -> b \n    void m() -> c\n\
		com.example.Bar -> d:\n    void use(com.example.Foo) -> e \n";

	let table = mojmap_tsrg::class_table::read(input.as_bytes(), ConvertOptions::default())?;
	assert_eq!(table.get("com/example/Foo"), Some("a"));

	let actual = mojmap_tsrg::tsrg::write_string(input, ConvertOptions::strict())?;
	assert_eq!(actual, "a com/example/Foo\n\tb x\n\tc ()V m\nd com/example/Bar\n\te (La;)V use\n");

	Ok(())
}

#[test]
fn later_class_lines_overwrite() -> Result<()> {
	let input = "\
com.example.Foo -> a:
com.example.Bar -> b:
com.example.Foo -> c:
";

	let table = mojmap_tsrg::class_table::read(input.as_bytes(), ConvertOptions::default())?;

	let entries: Vec<(&str, &str)> = table.iter().collect();
	assert_eq!(entries, vec![("com/example/Foo", "c"), ("com/example/Bar", "b")]);

	Ok(())
}
