//! Tests for the config module

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::loader::{apply_overrides, parse_with_warnings};
use super::types::*;
use crate::error::HoldrError;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.package, None);
    assert_eq!(config.output_dir, PathBuf::from("build/generated/holdr"));
    assert_eq!(config.res_dirs, vec![PathBuf::from("src/main/res")]);
    assert!(config.default_include);
    assert_eq!(config.widget_package, "android.widget");
    assert_eq!(config.jobs, 0);
    assert!(!config.prune_stale);
    assert!(!config.write_unchanged);
    assert_eq!(config.output.verbosity, Verbosity::Normal);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
package = "com.example.app"
output_dir = "gen"
res_dirs = ["app/res", "lib/res"]
default_include = false
jobs = 4
prune_stale = true

[output]
verbosity = "verbose"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.package.as_deref(), Some("com.example.app"));
    assert_eq!(config.output_dir, PathBuf::from("gen"));
    assert_eq!(config.res_dirs.len(), 2);
    assert!(!config.default_include);
    assert_eq!(config.jobs, 4);
    assert!(config.prune_stale);
    assert_eq!(config.widget_package, "android.widget");
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
}

#[test]
fn test_empty_toml_is_default() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config.output_dir, Config::default().output_dir);
    assert!(config.default_include);
}

#[test]
fn test_verbosity_ordering() {
    assert!(Verbosity::Quiet < Verbosity::Normal);
    assert!(Verbosity::Normal < Verbosity::Verbose);
    assert!(Verbosity::Verbose < Verbosity::Debug);
    assert_eq!(Verbosity::from_name("QUIET"), Verbosity::Quiet);
    assert_eq!(Verbosity::from_name("loud"), Verbosity::Normal);
}

#[test]
fn test_unknown_keys_become_warnings() {
    let toml = r#"
package = "com.example.app"
pakage = "typo"

[output]
verbosty = "quiet"
"#;

    let (config, warnings) = parse_with_warnings(toml, Path::new("holdr.toml")).unwrap();

    assert_eq!(config.package.as_deref(), Some("com.example.app"));
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].key, "pakage");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("package"));
    assert_eq!(warnings[1].key, "verbosty");
    assert_eq!(warnings[1].suggestion.as_deref(), Some("verbosity"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = parse_with_warnings("jobs = \"many\"", Path::new("holdr.toml")).unwrap_err();

    match err {
        HoldrError::Config { file, .. } => assert_eq!(file, PathBuf::from("holdr.toml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_with_warnings_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("holdr.toml");
    fs::write(&path, "package = \"com.example\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.package.as_deref(), Some("com.example"));
    assert!(warnings.is_empty());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();

    let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, HoldrError::Io(_)));
}

#[test]
fn test_env_overrides() {
    let config = apply_overrides(
        Config::default(),
        env(&[
            ("HOLDR_PACKAGE", "com.example.env"),
            ("HOLDR_OUTPUT_DIR", "out"),
            ("HOLDR_DEFAULT_INCLUDE", "false"),
            ("HOLDR_JOBS", "2"),
            ("HOLDR_PRUNE_STALE", "1"),
            ("HOLDR_VERBOSITY", "quiet"),
        ]),
    );

    assert_eq!(config.package.as_deref(), Some("com.example.env"));
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert!(!config.default_include);
    assert_eq!(config.jobs, 2);
    assert!(config.prune_stale);
    assert_eq!(config.output.verbosity, Verbosity::Quiet);
}

#[test]
fn test_env_overrides_ignore_bad_values() {
    let mut base = Config::default();
    base.jobs = 3;

    let config = apply_overrides(base, env(&[("HOLDR_JOBS", "lots"), ("HOLDR_PACKAGE", "  ")]));

    assert_eq!(config.jobs, 3);
    assert_eq!(config.package, None);
}

#[test]
fn test_env_flag_values() {
    for (value, expected) in [("no", false), ("OFF", false), ("0", false), ("yes", true), ("On", true)] {
        let config = apply_overrides(Config::default(), env(&[("HOLDR_PRUNE_STALE", value)]));
        assert_eq!(config.prune_stale, expected, "HOLDR_PRUNE_STALE={value}");
    }
}

#[test]
fn test_env_flag_empty_or_unknown_is_unset() {
    let config = apply_overrides(
        Config::default(),
        env(&[("HOLDR_PRUNE_STALE", ""), ("HOLDR_DEFAULT_INCLUDE", "maybe")]),
    );

    assert!(!config.prune_stale);
    assert!(config.default_include);
}
