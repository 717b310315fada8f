//! `TREEGAMI_*` environment overrides. Kept to a single test: the process
//! environment is shared by every test in a binary.

use std::env;
use std::fs;

use tempfile::TempDir;

use treegami::{Settings, Strategy};

#[test]
fn given_env_vars_when_loading_then_override_file_and_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("treegami.toml");
    fs::write(&path, "strategy = \"iterative\"\nmax_depth = 64\n").unwrap();
    env::set_var("TREEGAMI_STRATEGY", "parallel");
    env::set_var("TREEGAMI_MAX_DEPTH", "4096");

    // Act
    let from_file_and_env = Settings::load(Some(path.as_path()));
    let from_env_only = Settings::load(None);

    // Cleanup
    env::remove_var("TREEGAMI_STRATEGY");
    env::remove_var("TREEGAMI_MAX_DEPTH");

    // Assert
    let settings = from_file_and_env.expect("load settings");
    assert_eq!(settings.strategy, Strategy::Parallel);
    assert_eq!(settings.max_depth, Some(4096));

    let settings = from_env_only.expect("load settings");
    assert_eq!(settings.strategy, Strategy::Parallel);
    assert_eq!(settings.max_depth, Some(4096));

    assert_eq!(Settings::load(None).expect("load defaults"), Settings::default());
}
