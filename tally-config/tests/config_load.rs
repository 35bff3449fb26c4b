use std::fs;

use tally_config::{ConfigLoader, ConfigSource, DisplayConfig, TableConfig};
use tally_model::{Collation, IdentityScheme, SortColumn, SortState};
use tempfile::tempdir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::new(dir.path())
        .load_with(no_env)
        .expect("defaults load");

    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config, TableConfig::default());
}

#[test]
fn picks_up_default_toml_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("tally.toml"),
        r#"
[table]
collation = "ordinal"
initial_sort = { column = "total", direction = "descending" }

[display]
show_ids = true
"#,
    )
    .expect("write config");

    let load = ConfigLoader::new(dir.path())
        .load_with(no_env)
        .expect("toml load");

    assert_eq!(load.source, ConfigSource::File(dir.path().join("tally.toml")));
    assert_eq!(load.config.table.collation, Collation::Ordinal);
    assert_eq!(
        load.config.table.initial_sort,
        SortState::descending(SortColumn::Total)
    );
    assert_eq!(load.config.table.identity, IdentityScheme::Derived);
    assert_eq!(
        load.config.display,
        DisplayConfig {
            show_ids: true,
            total_precision: 2
        }
    );
}

#[test]
fn env_path_wins_over_default_file() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("tally.toml"), "[table]\ncollation = \"ordinal\"\n")
        .expect("write default");
    fs::write(
        dir.path().join("custom.json"),
        r#"{"table":{"identity":"disambiguated"}}"#,
    )
    .expect("write custom");

    let load = ConfigLoader::new(dir.path())
        .load_with(|key| {
            (key == "TALLY_CONFIG_PATH").then(|| "custom.json".to_string())
        })
        .expect("env path load");

    assert_eq!(
        load.source,
        ConfigSource::EnvPath(dir.path().join("custom.json"))
    );
    assert_eq!(load.config.table.identity, IdentityScheme::Disambiguated);
    assert_eq!(load.config.table.collation, Collation::Natural);
}

#[test]
fn inline_json_is_used_when_no_path() {
    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::new(dir.path())
        .load_with(|key| {
            (key == "TALLY_CONFIG_JSON")
                .then(|| r#"{"display":{"total_precision":0}}"#.to_string())
        })
        .expect("inline load");

    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.display.total_precision, 0);
}

#[test]
fn blank_variables_are_ignored() {
    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::new(dir.path())
        .load_with(|_| Some("   ".to_string()))
        .expect("blank vars");

    assert_eq!(load.source, ConfigSource::Default);
}

#[test]
fn config_names_parse_like_cli_names() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("mixed.toml");
    fs::write(
        &path,
        r#"
[table]
collation = "Ordinal"
identity = " Disambiguated "
initial_sort = { column = "Total", direction = "desc" }
"#,
    )
    .expect("write config");

    let load = ConfigLoader::new(dir.path())
        .load_explicit(&path)
        .expect("mixed-case names load");

    assert_eq!(load.config.table.collation, Collation::Ordinal);
    assert_eq!(load.config.table.identity, IdentityScheme::Disambiguated);
    assert_eq!(
        load.config.table.initial_sort,
        SortState::descending(SortColumn::Total)
    );
}

#[test]
fn unknown_column_in_config_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        "[table]\ninitial_sort = { column = \"population\", direction = \"ascending\" }\n",
    )
    .expect("write config");

    let err = ConfigLoader::new(dir.path())
        .load_explicit(&path)
        .expect_err("unknown column must fail");

    assert!(err.to_string().contains("invalid table config"));
}

#[test]
fn validation_runs_after_parsing() {
    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::new(dir.path()).load_with(|key| {
        (key == "TALLY_CONFIG_JSON")
            .then(|| r#"{"display":{"total_precision":30}}"#.to_string())
    });

    let err = load.expect_err("precision out of range");
    assert!(err.to_string().contains("total_precision"));
}

#[test]
fn extensionless_files_are_sniffed() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tallyrc");
    fs::write(&path, r#"{"table":{"collation":"ordinal"}}"#).expect("write");

    let config = ConfigLoader::load_from_file(&path).expect("json sniffed");

    assert_eq!(config.table.collation, Collation::Ordinal);
}
