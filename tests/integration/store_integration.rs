//! Saved plan storage through the planning API

use cadence::api::PlanningApi;
use cadence::catalog::Catalog;
use cadence::error::ApiError;
use cadence::generator::{GenerateRequest, GeneratorConfig};
use cadence::store::{PlanStore, SledPlanStore};
use std::sync::Arc;
use tempfile::TempDir;

fn api_at(dir: &TempDir) -> PlanningApi {
    let store = SledPlanStore::new(dir.path().join("store")).unwrap();
    PlanningApi::new(
        Arc::new(Catalog::builtin()),
        GeneratorConfig::default(),
        Arc::new(store),
    )
}

#[test]
fn test_save_list_update_delete_cycle() {
    let dir = TempDir::new().unwrap();
    let api = api_at(&dir);

    let first = api
        .generate(&GenerateRequest::new(50, "intermediate", &["reformer"]), Some(1))
        .plan;
    let second = api
        .generate(&GenerateRequest::new(30, "beginner", &["reformer", "chair"]), Some(2))
        .plan;

    let a = api.save_plan(&first, "Tuesday flow", "steady").unwrap();
    let b = api.save_plan(&second, "Quick class", "").unwrap();
    assert_ne!(a, b);

    let listed: Vec<u64> = api.list_plans().unwrap().iter().map(|s| s.id).collect();
    assert_eq!(listed, vec![b, a]);

    // Replacing the content of `a` moves it to the top and keeps its request fields.
    let replacement = api
        .generate(&GenerateRequest::new(60, "advanced", &["chair"]), Some(3))
        .plan;
    api.update_plan(a, &replacement, Some("Tuesday v2"), None)
        .unwrap();

    let summaries = api.list_plans().unwrap();
    assert_eq!(summaries[0].id, a);
    assert_eq!(summaries[0].name, "Tuesday v2");
    assert_eq!(summaries[0].description, "steady");
    assert_eq!(summaries[0].duration_minutes, 50);
    assert_eq!(summaries[0].level, "intermediate");
    assert_eq!(summaries[0].total_items, replacement.total_items);
    assert!(summaries[0].updated_at > summaries[0].created_at);

    let restored = api.get_plan(a).unwrap();
    assert_eq!(restored.plan.equipment, vec!["reformer"]);
    assert_eq!(restored.plan.blocks.len(), replacement.blocks.len());

    api.delete_plan(b).unwrap();
    assert!(matches!(api.get_plan(b), Err(ApiError::PlanNotFound(id)) if id == b));
    assert_eq!(api.list_plans().unwrap().len(), 1);
}

#[test]
fn test_saved_plans_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    let id = {
        let api = api_at(&dir);
        let plan = api
            .generate(&GenerateRequest::new(45, "advanced", &["reformer", "chair"]), Some(9))
            .plan;
        api.save_plan(&plan, "Persisted", "kept on disk").unwrap()
    };

    let store = SledPlanStore::new(dir.path().join("store")).unwrap();
    let saved = store.get(id).unwrap().expect("plan should survive reopen");
    assert_eq!(saved.name, "Persisted");
    assert_eq!(saved.fingerprint, saved.plan.fingerprint().unwrap());
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_fingerprint_tracks_plan_content() {
    let store = SledPlanStore::temporary().unwrap();
    let api = PlanningApi::new(
        Arc::new(Catalog::builtin()),
        GeneratorConfig::default(),
        Arc::new(SledPlanStore::temporary().unwrap()),
    );
    let plan = api
        .generate(&GenerateRequest::new(50, "beginner", &["reformer"]), Some(4))
        .plan;
    let other = api
        .generate(&GenerateRequest::new(50, "beginner", &["reformer"]), Some(5))
        .plan;

    let id = store.save(&plan, "Fingerprinted", "").unwrap();
    let before = store.get(id).unwrap().unwrap().fingerprint;
    assert_eq!(before.len(), 64);

    store.update(id, &other, None, None).unwrap();
    let after = store.get(id).unwrap().unwrap();
    assert_eq!(after.fingerprint, after.plan.fingerprint().unwrap());
    if other.blocks != plan.blocks {
        assert_ne!(before, after.fingerprint);
    }
}
