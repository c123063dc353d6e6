// tests/config_test.rs
use git_changelog::cli::{CollectArgs, RepoArgs};
use git_changelog::config::{load_config, Config};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_load_from_fixture() {
    let config = load_config(Some(&fixture("gitchangelog.toml")))
        .expect("Failed to load test config");

    assert_eq!(config.repository.path, ".git");
    assert_eq!(config.repository.remote, "upstream");
    assert_eq!(config.repository.owner.as_deref(), Some("acme"));
    assert_eq!(config.collect.tag_format, r"^release-\d+$");
    assert_eq!(config.collect.output, "docs/CHANGES.md");
    assert_eq!(config.collect.header.as_deref(), Some("# Release History"));
    assert!(config.collect.source_links);
    assert!(config.release.draft);
}

#[test]
fn test_cli_flags_override_file() {
    let config = load_config(Some(&fixture("gitchangelog.toml"))).unwrap();
    let args = CollectArgs {
        repo: RepoArgs {
            remote: Some("origin".to_string()),
            ..RepoArgs::default()
        },
        tag_format: Some("^v".to_string()),
        ..CollectArgs::default()
    };

    let collect = args.resolve(&config.collect);
    assert_eq!(collect.tag_format, "^v");
    assert_eq!(collect.header.as_deref(), Some("# Release History"));
    assert!(collect.compare_links);

    let repo = args.repo.resolve(&config.repository);
    assert_eq!(repo.remote, "origin");
    assert_eq!(repo.name.as_deref(), Some("widget"));
}

#[test]
fn test_invalid_file_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[collect\nsource_links = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let err = load_config(Some(&fixture("does-not-exist.toml"))).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.toml"));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("gitchangelog.toml"),
        "[collect]\noutput = \"HISTORY.md\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = config.unwrap();
    assert_eq!(config.collect.output, "HISTORY.md");
    assert_eq!(config.collect.tag_format, Config::default().collect.tag_format);
}
