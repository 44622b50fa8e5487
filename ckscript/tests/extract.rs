use std::fs;
use std::path::Path;

use ckscript::{FieldExtractor, FieldSet, ScanError, extract_fields};

fn write(root: &Path, relative: &str, content: impl AsRef<[u8]>) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn scan(source: &str, depth: usize) -> Vec<String> {
    let mut fields = FieldSet::new();
    FieldExtractor::new(depth).scan_source(source, &mut fields);
    fields.into_iter().collect()
}

#[test]
fn trailing_comment_braces_do_not_count() {
    let src = "my_trait = {\n  trait = { }  # comment { }\n  cost = 5\n}\nafter = 1\n";
    assert_eq!(scan(src, 1), vec!["cost", "trait"]);
    // Had the commented `{` counted, `after` would sit at depth 1.
    assert_eq!(scan("x = {\n  a = 1  # {\n}\n  after = 1\n", 1), vec!["a"]);
}

#[test]
fn commented_out_assignment_is_ignored() {
    assert_eq!(scan("x = {\n\t# hidden = yes\n\tshown = yes\n}\n", 1), vec!["shown"]);
}

#[test]
fn top_level_entity_name_is_not_a_field() {
    assert_eq!(scan("foo = {\n\tbar = 5\n}\n", 1), vec!["bar"]);
}

#[test]
fn unindented_lines_never_count() {
    assert_eq!(scan("foo = {\nbar = 5\n}\n", 1), Vec::<String>::new());
}

#[test]
fn numeric_keys_are_excluded() {
    let src = "list = {\n\t50 = { }\n\t100 = {\n\t\tvalue = 1\n\t}\n}\n";
    assert_eq!(scan(src, 1), vec!["value"]);
}

#[test]
fn keys_are_lowercased() {
    let src = "a = {\n\tCulture = 1\n\tculture = 2\n}\n";
    assert_eq!(scan(src, 1), vec!["culture"]);
}

#[test]
fn deeper_fields_are_included_at_lower_target() {
    let src = "religion = {\n\tfamily = rf_pagan\n\tfaiths = {\n\t\tmy_faith = {\n\t\t\tcolor = red\n\t\t}\n\t}\n}\n";
    assert_eq!(scan(src, 1), vec!["color", "faiths", "family", "my_faith"]);
    assert_eq!(scan(src, 2), vec!["color", "faiths", "my_faith"]);
    assert_eq!(scan(src, 3), vec!["color", "my_faith"]);
}

#[test]
fn depth_is_judged_after_the_whole_line() {
    // `a` closes and `b` opens on the same line: the line ends at depth 1.
    let src = "x = {\n\ta = { } b = {\n\t}\n}\n";
    assert_eq!(scan(src, 1), vec!["a"]);
    // A line that closes its block ends at depth 0 and does not count.
    assert_eq!(scan("x = {\n\tlast = 1 }\n", 1), Vec::<String>::new());
}

#[test]
fn byte_order_mark_is_ignored() {
    assert_eq!(scan("\u{feff}x = {\n\tfield = 1\n}\n", 1), vec!["field"]);
}

#[test]
fn malformed_nesting_is_tolerated() {
    // Stray closers push the depth negative for the rest of the file.
    let src = "}\n}\nx = {\n\ta = 1\n}\n";
    assert_eq!(scan(src, 1), Vec::<String>::new());
    // A block left open at the end still contributes.
    assert_eq!(scan("x = {\n\ta = 1\n", 1), vec!["a"]);
}

#[test]
fn recursive_traversal_collects_nested_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", "a = {\n\tfirst = 1\n}\n");
    write(dir.path(), "sub/b.txt", "b = {\n\tsecond = 1\n}\n");
    write(dir.path(), "sub/deeper/c.txt", "c = {\n\tthird = 1\n}\n");
    write(dir.path(), "sub/readme.md", "x = {\n\tignored = 1\n}\n");

    let extraction = extract_fields(dir.path(), 1);
    assert!(extraction.errors.is_empty());
    let fields: Vec<_> = extraction.fields.into_iter().collect();
    assert_eq!(fields, vec!["first", "second", "third"]);
}

#[test]
fn directory_without_script_files_is_empty_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "notes.md", "nothing here");

    let extraction = extract_fields(dir.path(), 1);
    assert!(extraction.fields.is_empty());
    assert!(extraction.errors.is_empty());
}

#[test]
fn missing_directory_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let extraction = extract_fields(&missing, 1);
    assert!(extraction.fields.is_empty());
    assert_eq!(extraction.errors, vec![ScanError::NotFound { path: missing }]);
}

#[test]
fn unreadable_file_does_not_stop_the_scan() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a_bad.txt", [0xff_u8, 0xfe, 0x00, 0x7b, 0x80]);
    write(dir.path(), "b_good.txt", "b = {\n\tgood = yes\n}\n");

    let extraction = extract_fields(dir.path(), 1);
    assert_eq!(extraction.fields.into_iter().collect::<Vec<_>>(), vec!["good"]);
    assert_eq!(extraction.errors.len(), 1);
    match &extraction.errors[0] {
        ScanError::ReadFailure { path, .. } => assert!(path.ends_with("a_bad.txt")),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn file_root_reports_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", "a = {\n\tx = 1\n}\n");
    let file = dir.path().join("a.txt");

    let extraction = extract_fields(&file, 1);
    assert!(extraction.fields.is_empty());
    assert_eq!(extraction.errors, vec![ScanError::NotADirectory { path: file }]);
    assert!(extraction.errors[0].to_string().starts_with("not a directory"));
}

#[cfg(unix)]
#[test]
fn linked_directories_and_files_are_scanned() {
    use std::os::unix::fs::symlink;

    let root = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    write(root.path(), "base.txt", "b = {\n\tbase = 1\n}\n");
    write(outside.path(), "m.txt", "m = {\n\tmodded = yes\n}\n");
    write(outside.path(), "solo.txt", "s = {\n\tlinked_file = yes\n}\n");
    symlink(outside.path(), root.path().join("linked")).unwrap();
    symlink(outside.path().join("solo.txt"), root.path().join("l.txt")).unwrap();

    let extraction = extract_fields(root.path(), 1);
    assert!(extraction.errors.is_empty());
    let fields: Vec<_> = extraction.fields.into_iter().collect();
    assert_eq!(fields, vec!["base", "linked_file", "modded"]);
}

#[cfg(unix)]
#[test]
fn link_cycle_is_reported_not_followed_forever() {
    use std::os::unix::fs::symlink;

    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "sub/a.txt", "a = {\n\tx = 1\n}\n");
    symlink(dir.path(), dir.path().join("sub/back")).unwrap();

    let extraction = extract_fields(dir.path(), 1);
    assert_eq!(extraction.fields.into_iter().collect::<Vec<_>>(), vec!["x"]);
    assert_eq!(extraction.errors.len(), 1);
    assert!(matches!(extraction.errors[0], ScanError::ReadFailure { .. }));
}

#[test]
fn extension_may_be_given_with_a_dot() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", "a = {\n\tx = 1\n}\n");

    let extraction = FieldExtractor::new(1).with_extension(".txt").extract(dir.path());
    assert_eq!(extraction.fields.into_iter().collect::<Vec<_>>(), vec!["x"]);
}

#[test]
fn custom_extension() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.gui", "a = {\n\tsize = 1\n}\n");
    write(dir.path(), "b.txt", "b = {\n\tother = 1\n}\n");

    let extraction = FieldExtractor::new(1).with_extension("gui").extract(dir.path());
    assert_eq!(extraction.fields.into_iter().collect::<Vec<_>>(), vec!["size"]);
}

#[test]
fn repeated_extraction_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", "a = {\n\tz = 1\n\ty = 2\n}\n");

    let first = extract_fields(dir.path(), 1).fields;
    let second = extract_fields(dir.path(), 1).fields;
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "a = {\n\tz = 1\n\ty = 2\n}\n");
}
