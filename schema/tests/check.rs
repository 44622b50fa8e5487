use std::fs;
use std::path::Path;

use ckscript::FieldSet;
use ckscript::template::TemplateKind;
use schema::{ConfigError, Nesting, SchemaConfig, SchemaReport, run_check};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn set(items: &[&str]) -> FieldSet {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn compare_partitions_fields() {
    let report = SchemaReport::compare("trait", &set(&["b", "a", "c"]), &set(&["d", "c", "a"]));
    assert_eq!(report.declared, vec!["a", "b", "c"]);
    assert_eq!(report.observed, vec!["a", "c", "d"]);
    assert_eq!(report.missing, vec!["b"]);
    assert_eq!(report.undeclared, vec!["d"]);
    assert!(!report.is_covered());

    let covered = SchemaReport::compare("x", &set(&["a"]), &set(&["a"]));
    assert!(covered.is_covered());
}

#[test]
fn config_defaults() {
    let config = SchemaConfig::from_toml(
        r#"
[[schema]]
name = "faith"
dir = "common/religion/religions"
nesting = "double"
fields = ["Color", "icon"]
"#,
    )
    .unwrap();
    assert_eq!(config.game_root, Path::new("."));
    assert_eq!(config.extension, "txt");
    let mapping = &config.schemas[0];
    assert_eq!(mapping.name(), "faith");
    assert_eq!(mapping.nesting, Nesting::Double);
    assert_eq!(mapping.depth(), 2);
    assert_eq!(mapping.declared_fields().unwrap(), set(&["color", "icon"]));
}

#[test]
fn fields_fall_back_to_template_kind() {
    let config = SchemaConfig::from_toml("[[schema]]\nname = \"trait\"\ndir = \"common/traits\"\n").unwrap();
    let declared = config.schemas[0].declared_fields().unwrap();
    assert_eq!(declared.len(), TemplateKind::Trait.declared_fields().len());
    assert!(declared.contains("category"));
}

#[test]
fn default_toml_parses() {
    let config = SchemaConfig::from_toml(&SchemaConfig::default_toml()).unwrap();
    let names: Vec<_> = config.schemas.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["building", "decision", "trait", "event"]);
}

#[test]
fn duplicate_schema_points_at_both_names() {
    let text = "[[schema]]\nname = \"trait\"\ndir = \"a\"\n\n[[schema]]\nname = \"trait\"\ndir = \"b\"\n";
    let err = SchemaConfig::from_toml(text).unwrap_err();
    match &err {
        ConfigError::DuplicateSchema { name, span, first } => {
            assert_eq!(name, "trait");
            assert!(text[first.clone()].contains("trait"));
            assert!(text[span.clone()].contains("trait"));
            assert!(span.start > first.start);
        }
        other => panic!("unexpected error: {}", other),
    }
    let diagnostic = err.to_diagnostic(0);
    assert_eq!(diagnostic.labels.len(), 2);
}

#[test]
fn schema_without_fields_is_rejected() {
    let text = "[[schema]]\nname = \"religion\"\ndir = \"common/religion\"\n";
    let err = SchemaConfig::from_toml(text).unwrap_err();
    assert!(matches!(err, ConfigError::NoDeclaredFields { ref name, .. } if name == "religion"));
    assert_eq!(err.to_diagnostic(0).notes.len(), 1);
}

#[test]
fn bad_toml_carries_span() {
    let text = "[[schema]]\nname = \"x\"\ndir = \"a\"\nnesting = \"triple\"\n";
    let err = SchemaConfig::from_toml(text).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
    assert!(err.span().is_some());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = SchemaConfig::from_toml("gameroot = \"x\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
}

#[test]
fn load_resolves_game_root_relative_to_config() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "cfg/check.toml", "game_root = \"../game\"\n");
    let config = SchemaConfig::load(&dir.path().join("cfg/check.toml")).unwrap();
    assert_eq!(config.game_root, dir.path().join("cfg").join("../game"));
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SchemaConfig::load(&dir.path().join("none.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.span().is_none());
}

#[test]
fn check_against_game_files() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "game/common/traits/00_traits.txt",
        "brave = {\n\tcategory = personality\n\tprowess = 2\n\tcustom_thing = yes\n}\n",
    );
    write(
        dir.path(),
        "game/common/religion/religions/00_pagan.txt",
        "pagan_religion = {\n\tfamily = rf_pagan\n\tfaiths = {\n\t\tmy_faith = {\n\t\t\tcolor = { 1 0 0 }\n\t\t}\n\t}\n}\n",
    );
    write(
        dir.path(),
        "check.toml",
        r#"
game_root = "game"

[[schema]]
name = "trait"
dir = "common/traits"
fields = ["category", "prowess", "icon"]

[[schema]]
name = "faith"
dir = "common/religion/religions"
nesting = "double"
fields = ["color", "faiths", "my_faith"]

[[schema]]
name = "decision"
dir = "common/decisions"
"#,
    );

    let config = SchemaConfig::load(&dir.path().join("check.toml")).unwrap();
    let outcome = run_check(&config);

    let reports = &outcome.report.schemas;
    assert_eq!(reports.len(), 3);

    assert_eq!(reports[0].name, "trait");
    assert_eq!(reports[0].observed, vec!["category", "custom_thing", "prowess"]);
    assert_eq!(reports[0].missing, vec!["icon"]);
    assert_eq!(reports[0].undeclared, vec!["custom_thing"]);

    assert_eq!(reports[1].name, "faith");
    assert!(reports[1].is_covered());

    // The decision directory does not exist: reported, not fatal.
    assert_eq!(reports[2].name, "decision");
    assert!(reports[2].observed.is_empty());
    assert_eq!(reports[2].missing.len(), TemplateKind::Decision.declared_fields().len());
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].path().ends_with("common/decisions"));

    assert!(outcome.has_gaps());
    assert_eq!(outcome.report.gaps().count(), 2);
}

#[test]
fn report_serializes_to_toml() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "t/a.txt", "a = {\n\tx = 1\n}\n");
    let text = format!(
        "game_root = {:?}\n[[schema]]\nname = \"thing\"\ndir = \"t\"\nfields = [\"x\", \"y\"]\n",
        dir.path().display().to_string()
    );
    let config = SchemaConfig::from_toml(&text).unwrap();
    let toml_text = run_check(&config).report.to_toml().unwrap();

    let parsed: toml::Value = toml::from_str(&toml_text).unwrap();
    let schema = &parsed["schema"][0];
    assert_eq!(schema["name"].as_str(), Some("thing"));
    assert_eq!(schema["missing"].as_array().unwrap().len(), 1);
    assert_eq!(schema["missing"][0].as_str(), Some("y"));
    assert_eq!(schema["undeclared"].as_array().unwrap().len(), 0);
}
