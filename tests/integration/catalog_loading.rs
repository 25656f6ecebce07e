//! Catalog documents loaded from JSON files

use cadence::api::PlanningApi;
use cadence::catalog::{BlockKind, Catalog, ItemQuery};
use cadence::config::CadenceConfig;
use cadence::error::CatalogError;
use cadence::generator::{seeded, GenerateRequest, Generator};
use tempfile::TempDir;

/// Three blocks, reformer content only; the floor surface has no items.
const STUDIO_CATALOG: &str = r#"
{
  "floor": "mat",
  "equipment": [
    { "id": "reformer", "name": "Reformer" },
    { "id": "mat", "name": "Mat" }
  ],
  "blocks": [
    { "id": "warmup", "name": "Warm Up", "kind": "opening", "typical_minutes": 5.0 },
    { "id": "core", "name": "Core", "kind": "reorderable", "typical_minutes": 10.0 },
    { "id": "cooldown", "name": "Cool Down", "kind": "closing", "typical_minutes": 5.0 }
  ],
  "levels": [
    { "id": "advanced", "name": "Advanced", "rank": 2.0, "max_transitions": 4 },
    { "id": "beginner", "name": "Beginner", "rank": 1.0, "max_transitions": 2 }
  ],
  "items": [
    { "id": "w1", "name": "Parallel Heels", "block": "warmup", "equipment": ["reformer"],
      "level": "beginner", "sub_configuration": "3 red", "duration_seconds": 60 },
    { "id": "w2", "name": "Running", "block": "warmup", "equipment": ["reformer"],
      "level": "beginner", "sub_configuration": "3 red", "duration_seconds": 60 },
    { "id": "c1", "name": "Hundred", "block": "core", "equipment": ["reformer"],
      "level": "beginner", "sub_configuration": "1 red", "duration_seconds": 90,
      "variants": ["Legs tabletop", "Legs extended", "Single leg"] },
    { "id": "c2", "name": "Short Spine", "block": "core", "equipment": ["reformer"],
      "level": "advanced", "sub_configuration": "2 red", "duration_seconds": 90 },
    { "id": "d1", "name": "Mermaid", "block": "cooldown", "equipment": ["reformer"],
      "level": "beginner", "sub_configuration": "1 blue", "duration_seconds": 60 }
  ]
}
"#;

fn write_catalog(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_catalog_file_loads_and_orders_levels() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::from_json_file(&write_catalog(&dir, STUDIO_CATALOG)).unwrap();

    let levels: Vec<&str> = catalog.levels().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(levels, vec!["beginner", "advanced"]);
    assert_eq!(catalog.opening_block().kind, BlockKind::Opening);
    assert_eq!(catalog.closing_block().id, "cooldown");
    assert_eq!(catalog.item("w1").unwrap().reps, 8);
}

#[test]
fn test_level_filter_excludes_harder_items() {
    let catalog = Catalog::from_json_str(STUDIO_CATALOG).unwrap();
    let beginner = catalog.query(&ItemQuery {
        block: Some("core"),
        level: Some("beginner"),
        ..ItemQuery::default()
    });
    assert_eq!(beginner.len(), 1);
    assert_eq!(beginner[0].id, "c1");

    let advanced = catalog.query(&ItemQuery {
        block: Some("core"),
        level: Some("advanced"),
        ..ItemQuery::default()
    });
    assert_eq!(advanced.len(), 2);
}

#[test]
fn test_plan_without_floor_content_uses_one_equipment_type() {
    let catalog = Catalog::from_json_str(STUDIO_CATALOG).unwrap();
    let generator = Generator::with_defaults(&catalog);
    for seed in 0..10 {
        let outcome = generator.generate(
            &GenerateRequest::new(20, "beginner", &["reformer"]),
            &mut seeded(seed),
        );
        let plan = &outcome.plan;
        assert!(!outcome.report.best_effort);
        assert_eq!(plan.distinct_equipment(), vec!["reformer"]);
        assert_eq!(plan.blocks.first().unwrap().id, "warmup");
        assert_eq!(plan.blocks.last().unwrap().id, "cooldown");
        assert!(plan
            .blocks
            .iter()
            .flat_map(|b| b.items.iter())
            .all(|item| item.variants.len() <= 2));
    }
}

#[test]
fn test_invalid_documents_are_rejected() {
    let unknown_block = STUDIO_CATALOG.replace(r#""block": "cooldown""#, r#""block": "spa""#);
    assert!(matches!(
        Catalog::from_json_str(&unknown_block),
        Err(CatalogError::UnknownBlock { .. })
    ));

    let duplicate = STUDIO_CATALOG.replace(r#""id": "w2""#, r#""id": "w1""#);
    assert!(matches!(
        Catalog::from_json_str(&duplicate),
        Err(CatalogError::DuplicateId { .. })
    ));

    let no_closing = STUDIO_CATALOG.replace(r#""kind": "closing""#, r#""kind": "reorderable""#);
    assert!(matches!(
        Catalog::from_json_str(&no_closing),
        Err(CatalogError::FixedBlock("closing"))
    ));

    assert!(matches!(
        Catalog::from_json_str("{ not json"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_missing_catalog_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(Catalog::from_json_file(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_default_equipment_must_exist_in_configured_catalog() {
    let dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let chair_only = STUDIO_CATALOG.replace("reformer", "chair").replace("Reformer", "Chair");

    let mut config = CadenceConfig::default();
    config.catalog.path = Some(write_catalog(&dir, &chair_only));
    assert!(matches!(
        PlanningApi::from_config(&config, workspace.path()),
        Err(cadence::error::ApiError::ConfigError(_))
    ));

    config.generator.default_equipment = "chair".to_string();
    let api = PlanningApi::from_config(&config, workspace.path()).unwrap();
    let outcome = api.generate(&GenerateRequest::new(30, "beginner", &[]), Some(3));
    assert!(outcome.plan.equipment.contains(&"chair".to_string()));
    assert!(outcome.plan.blocks.iter().all(|b| !b.items.is_empty()));
}
