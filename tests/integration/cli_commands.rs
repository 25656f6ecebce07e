//! CLI command routing against a temporary workspace

use super::test_utils::with_isolated_env;
use cadence::catalog::Catalog;
use cadence::cli::{CatalogCommands, Commands, PlanCommands, RunContext};
use cadence::error::ApiError;
use tempfile::TempDir;

fn context(test_dir: &TempDir, workspace: &TempDir) -> RunContext {
    with_isolated_env(test_dir, || {
        RunContext::new(workspace.path().to_path_buf(), None).unwrap()
    })
}

fn generate(seed: u64, format: &str, save: Option<&str>) -> Commands {
    Commands::Generate {
        duration: 50,
        level: Some("intermediate".to_string()),
        equipment: vec!["reformer".to_string(), "chair".to_string()],
        max_transitions: None,
        seed: Some(seed),
        format: format.to_string(),
        save: save.map(str::to_string),
        description: "cli".to_string(),
    }
}

#[test]
fn test_generate_json_is_reproducible() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let ctx = context(&test_dir, &workspace);

    let first = ctx.execute(&generate(21, "json", None)).unwrap();
    let second = ctx.execute(&generate(21, "json", None)).unwrap();
    assert_eq!(first, second);

    let value: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(value["plan"]["level"], "intermediate");
    assert_eq!(value["plan"]["blocks"][0]["id"], "footwork");
    assert!(value["report"]["attempts"].as_u64().unwrap() >= 1);
}

#[test]
fn test_generate_text_shows_equipment_path() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let ctx = context(&test_dir, &workspace);

    let output = ctx.execute(&generate(3, "text", None)).unwrap();
    assert!(output.contains("Footwork"));
    assert!(output.contains("Equipment path:"));
}

#[test]
fn test_saved_plan_lifecycle() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let ctx = context(&test_dir, &workspace);

    let output = ctx.execute(&generate(8, "json", Some("Morning"))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let id = value["saved_id"].as_u64().unwrap();

    let list = ctx
        .execute(&Commands::Plan {
            command: PlanCommands::List {
                format: "text".to_string(),
            },
        })
        .unwrap();
    assert!(list.contains("Morning"));

    // A second plan written to disk replaces the saved content.
    let replacement = ctx.execute(&generate(9, "json", None)).unwrap();
    std::fs::write(workspace.path().join("replacement.json"), replacement).unwrap();
    let updated = ctx
        .execute(&Commands::Plan {
            command: PlanCommands::Update {
                id,
                file: "replacement.json".into(),
                name: Some("Morning v2".to_string()),
                description: None,
            },
        })
        .unwrap();
    assert_eq!(updated, format!("Updated plan {}", id));

    let shown = ctx
        .execute(&Commands::Plan {
            command: PlanCommands::Show {
                id,
                format: "json".to_string(),
            },
        })
        .unwrap();
    let shown: serde_json::Value = serde_json::from_str(&shown).unwrap();
    assert_eq!(shown["name"], "Morning v2");
    assert_eq!(shown["description"], "cli");

    let deleted = ctx
        .execute(&Commands::Plan {
            command: PlanCommands::Delete { id, yes: true },
        })
        .unwrap();
    assert!(deleted.starts_with("Deleted plan"));

    let missing = ctx.execute(&Commands::Plan {
        command: PlanCommands::Show {
            id,
            format: "text".to_string(),
        },
    });
    assert!(matches!(missing, Err(ApiError::PlanNotFound(_))));
}

#[test]
fn test_plan_save_from_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let ctx = context(&test_dir, &workspace);

    let output = ctx.execute(&generate(4, "json", None)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    // A bare plan document is accepted as well as full generate output.
    std::fs::write(
        workspace.path().join("bare.json"),
        serde_json::to_string(&value["plan"]).unwrap(),
    )
    .unwrap();

    let saved = ctx
        .execute(&Commands::Plan {
            command: PlanCommands::Save {
                file: "bare.json".into(),
                name: "  From file ".to_string(),
                description: String::new(),
            },
        })
        .unwrap();
    assert!(saved.ends_with("From file"));

    let bad = ctx.execute(&Commands::Plan {
        command: PlanCommands::Save {
            file: "absent.json".into(),
            name: "Nope".to_string(),
            description: String::new(),
        },
    });
    assert!(matches!(bad, Err(ApiError::InvalidRequest(_))));
}

#[test]
fn test_catalog_commands() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let ctx = context(&test_dir, &workspace);

    let blocks = ctx
        .execute(&Commands::Catalog {
            command: CatalogCommands::Blocks {
                format: "json".to_string(),
            },
        })
        .unwrap();
    let blocks: serde_json::Value = serde_json::from_str(&blocks).unwrap();
    assert_eq!(blocks.as_array().unwrap().len(), 10);

    let levels = ctx
        .execute(&Commands::Catalog {
            command: CatalogCommands::Levels {
                format: "text".to_string(),
            },
        })
        .unwrap();
    assert!(levels.contains("Beginner (Level 1)"));

    let items = ctx
        .execute(&Commands::Catalog {
            command: CatalogCommands::Items {
                block: Some("stretch".to_string()),
                equipment: Some("mat".to_string()),
                level: Some("beginner".to_string()),
                format: "json".to_string(),
            },
        })
        .unwrap();
    let items: serde_json::Value = serde_json::from_str(&items).unwrap();
    assert!(items
        .as_array()
        .unwrap()
        .iter()
        .all(|item| item["block"] == "stretch"));

    let unknown_format = ctx.execute(&Commands::Catalog {
        command: CatalogCommands::Equipment {
            format: "yaml".to_string(),
        },
    });
    assert!(unknown_format.is_err());
}

#[test]
fn test_init_writes_config_that_is_picked_up() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let init = Commands::Init {
        catalog: true,
        force: false,
    };

    {
        let ctx = context(&test_dir, &workspace);
        let output = ctx.execute(&init).unwrap();
        assert!(output.contains("config/config.toml"));
        assert!(workspace.path().join("catalog.json").exists());
    }

    // The next run reads the exported catalog through the workspace config.
    let reloaded = context(&test_dir, &workspace);
    assert_eq!(
        reloaded.api().catalog().items().len(),
        Catalog::builtin().items().len()
    );
    assert!(reloaded.execute(&init).unwrap().contains("already exists"));
}
