//! Integration tests for layered configuration loading

use super::test_utils::with_isolated_env;
use cadence::api::PlanningApi;
use cadence::config::ConfigLoader;
use cadence::generator::TransitionPolicy;
use tempfile::TempDir;

fn write(path: &std::path::Path, contents: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

#[test]
fn test_defaults_without_any_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    let config = with_isolated_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(config.generator.max_retries, 50);
    assert_eq!(config.generator.max_equipment, 3);
    assert_eq!(config.generator.default_equipment, "reformer");
    assert_eq!(config.generator.transition_policy, TransitionPolicy::SubConfiguration);
    assert!(config.catalog.path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    write(
        &test_dir.path().join("cadence").join("config.toml"),
        r#"
[generator]
max_retries = 20
default_equipment = "chair"
"#,
    );
    write(
        &workspace.path().join("config").join("config.toml"),
        r#"
[generator]
max_retries = 5
transition_policy = "equipment_change_counts"
"#,
    );

    let config = with_isolated_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(config.generator.max_retries, 5);
    assert_eq!(config.generator.default_equipment, "chair");
    assert_eq!(
        config.generator.transition_policy,
        TransitionPolicy::EquipmentChangeCounts
    );
}

#[test]
fn test_environment_layers_win() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    write(
        &workspace.path().join("config").join("config.toml"),
        "[generator]\nmax_retries = 5\n",
    );
    write(
        &workspace.path().join("config").join("staging.toml"),
        "[generator]\nmax_retries = 7\n",
    );

    let config = with_isolated_env(&test_dir, || {
        std::env::set_var("CADENCE_ENV", "staging");
        let staged = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(staged.generator.max_retries, 7);

        std::env::set_var("CADENCE__GENERATOR__MAX_RETRIES", "9");
        ConfigLoader::load(workspace.path()).unwrap()
    });
    assert_eq!(config.generator.max_retries, 9);
}

#[test]
fn test_invalid_config_is_rejected_by_api() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let config_file = test_dir.path().join("bad.toml");
    write(
        &config_file,
        r#"
[generator]
max_retries = 0

[logging]
format = "xml"
"#,
    );

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(PlanningApi::from_config(&config, workspace.path()).is_err());
}

#[test]
fn test_configured_catalog_and_store_paths() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write(
        &workspace.path().join("config").join("config.toml"),
        r#"
[catalog]
path = "missing-catalog.json"

[system.storage]
store_path = "data/plans"
"#,
    );

    let config = with_isolated_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(
        config.system.storage.resolved_store_path(workspace.path()),
        workspace.path().join("data/plans")
    );
    // A configured catalog that cannot be read is an error, not a silent fallback.
    assert!(PlanningApi::from_config(&config, workspace.path()).is_err());
}
