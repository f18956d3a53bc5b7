//! # Shipped Config Files
//!
//! The sample files under `config/` must load and describe the default page.

use std::path::PathBuf;

use parallax::{ProfileContent, StageConfig, StageError};

fn config_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config").join(name)
}

#[test]
fn test_stage_file_matches_defaults() {
    let config = StageConfig::load(config_path("stage.toml")).unwrap();
    assert_eq!(config, StageConfig::default());
}

#[test]
fn test_content_file_matches_defaults() {
    let content = ProfileContent::load(config_path("content.toml")).unwrap();
    assert_eq!(content, ProfileContent::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = StageConfig::load(config_path("does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, StageError::Io(_)));
}
