//! Property-based tests for plan invariants over arbitrary requests

use cadence::catalog::Catalog;
use cadence::generator::{seeded, GenerateRequest, Generator};
use cadence::plan::Plan;
use proptest::prelude::*;

const LEVELS: &[&str] = &["beginner", "intermediate", "advanced", "advanced_plus"];
const SECONDARY: &[&str] = &["chair", "springboard", "mat", "trx", "bosu", "barrel"];
const EQUIPMENT: &[&str] = &["reformer", "chair", "springboard", "mat", "trx", "bosu", "barrel"];

/// Reformer-primary requests: the reformer has items in every block at every level.
fn request_strategy() -> impl Strategy<Value = GenerateRequest> {
    (
        0u32..150,
        0usize..LEVELS.len(),
        proptest::sample::subsequence(SECONDARY, 0..=2).prop_shuffle(),
        proptest::option::of(0u32..8),
    )
        .prop_map(|(duration, level, extra, cap)| {
            let mut equipment = vec!["reformer".to_string()];
            equipment.extend(extra.iter().map(|e| e.to_string()));
            GenerateRequest {
                duration_minutes: duration,
                level: Some(LEVELS[level].to_string()),
                equipment,
                max_transitions: cap,
            }
        })
}

/// Any preference list, including ones whose primary lacks content in some blocks.
fn any_request_strategy() -> impl Strategy<Value = GenerateRequest> {
    (
        1u32..120,
        0usize..LEVELS.len(),
        proptest::sample::subsequence(EQUIPMENT, 0..=3).prop_shuffle(),
    )
        .prop_map(|(duration, level, equipment)| GenerateRequest {
            duration_minutes: duration,
            level: Some(LEVELS[level].to_string()),
            equipment: equipment.iter().map(|e| e.to_string()).collect(),
            max_transitions: None,
        })
}

fn check_invariants(catalog: &Catalog, plan: &Plan) -> Result<(), TestCaseError> {
    prop_assert_eq!(
        plan.blocks.first().map(|b| b.id.as_str()),
        Some(catalog.opening_block().id.as_str())
    );
    prop_assert_eq!(
        plan.blocks.last().map(|b| b.id.as_str()),
        Some(catalog.closing_block().id.as_str())
    );
    prop_assert!(plan.blocks.iter().all(|b| !b.items.is_empty()));
    prop_assert!(plan.distinct_equipment().len() <= 3);
    prop_assert!(plan.transitions <= plan.max_transitions);
    prop_assert_eq!(
        plan.total_items,
        plan.blocks.iter().map(|b| b.items.len()).sum::<usize>()
    );
    Ok(())
}

#[test]
fn test_generated_plans_hold_invariants() {
    let catalog = Catalog::builtin();
    let generator = Generator::with_defaults(&catalog);
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(request_strategy(), any::<u64>()), |(request, seed)| {
            let outcome = generator.generate(&request, &mut seeded(seed));
            check_invariants(&catalog, &outcome.plan)?;
            prop_assert!(!outcome.report.best_effort);
            prop_assert!(outcome.report.violations.is_empty());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_any_request_yields_a_plan_without_empty_blocks() {
    let catalog = Catalog::builtin();
    let generator = Generator::with_defaults(&catalog);
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any_request_strategy(), any::<u64>()), |(request, seed)| {
            let outcome = generator.generate(&request, &mut seeded(seed));
            let plan = &outcome.plan;
            prop_assert!(plan.blocks.iter().all(|b| !b.items.is_empty()));
            prop_assert!(plan.transitions <= plan.max_transitions);
            prop_assert!(outcome.report.attempts >= 1);
            if outcome.report.best_effort {
                prop_assert_eq!(outcome.report.attempts, 50);
            } else {
                prop_assert!(outcome.report.violations.is_empty());
                prop_assert!(plan.distinct_equipment().len() <= 3);
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_pruning_is_idempotent() {
    let catalog = Catalog::builtin();
    let generator = Generator::with_defaults(&catalog);
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any_request_strategy(), any::<u64>()), |(request, seed)| {
            let mut plan = generator.generate(&request, &mut seeded(seed)).plan;
            plan.prune_empty_blocks();
            let once = plan.clone();
            plan.prune_empty_blocks();
            prop_assert_eq!(once, plan);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_rebuilt_flow_matches_generated_flow() {
    let catalog = Catalog::builtin();
    let generator = Generator::with_defaults(&catalog);
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(request_strategy(), any::<u64>()), |(request, seed)| {
            let plan = generator.generate(&request, &mut seeded(seed)).plan;
            let mut rebuilt = plan.clone();
            rebuilt.equipment_flow.clear();
            rebuilt.rebuild_equipment_flow();
            prop_assert_eq!(rebuilt.equipment_flow, plan.equipment_flow);
            Ok(())
        })
        .unwrap();
}
