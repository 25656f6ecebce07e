//! Retry driver: a pure attempt function plus the bounded retry loop.

use super::allocator::{allocate, VarietyTable};
use super::flow::enforce_flow;
use super::random::RandomSource;
use super::request::ResolvedRequest;
use super::selector::{block_budget, select_block, SelectionState, TransitionPolicy};
use super::sequencer::ordered_blocks;
use super::validator::{validate, ValidationReport, Violation};
use crate::catalog::{Availability, Catalog};
use crate::plan::{Plan, PlanBlock};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Everything one attempt reads. Nothing here is mutated between attempts.
pub struct AttemptContext<'a> {
    pub catalog: &'a Catalog,
    pub request: &'a ResolvedRequest<'a>,
    pub variety: &'a VarietyTable,
    pub policy: TransitionPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Attempts actually run
    pub attempts: u32,
    /// Violations still present in the returned plan
    pub violations: Vec<Violation>,
    /// No attempt passed validation; the least-bad plan was returned pruned
    pub best_effort: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub plan: Plan,
    pub report: GenerationReport,
}

/// Build one candidate plan. All randomness comes from `rng`.
pub fn attempt(ctx: &AttemptContext<'_>, rng: &mut dyn RandomSource) -> Plan {
    let catalog = ctx.catalog;
    let request = ctx.request;
    let level = request.level;
    let preferences = &request.preferences;
    let floor = catalog.floor();

    let availability =
        Availability::compute(catalog, catalog.blocks(), preferences.as_slice(), level);
    let blocks = ordered_blocks(catalog, &availability, preferences);
    let allocation = allocate(&blocks, &availability, preferences, floor, ctx.variety, rng);
    let repair = enforce_flow(&blocks, &allocation.equipment, &availability, floor);

    let total_typical: f64 = blocks.iter().map(|b| b.typical_minutes).sum();
    let mut state = SelectionState::new(ctx.policy, request.max_transitions);
    let mut plan_blocks = Vec::with_capacity(blocks.len());

    for (index, (block, equipment)) in blocks.iter().zip(&repair.equipment).enumerate() {
        let (minutes, budget) =
            block_budget(block, total_typical, request.duration_minutes, level);
        let items = select_block(catalog, block, equipment, level, budget, &mut state, rng);
        plan_blocks.push(PlanBlock {
            id: block.id.clone(),
            name: block.name.clone(),
            order: index + 1,
            allocated_minutes: (minutes * 10.0).round() / 10.0,
            items,
        });
    }

    let transitions = state.transitions();
    let total_items = plan_blocks.iter().map(|b| b.items.len()).sum();
    Plan {
        duration_minutes: request.duration_minutes,
        level: level.id.clone(),
        level_name: level.name.clone(),
        equipment: preferences.as_slice().to_vec(),
        blocks: plan_blocks,
        total_items,
        equipment_flow: state.into_equipment_flow(),
        transitions,
        max_transitions: request.max_transitions,
    }
}

fn evaluate(
    ctx: &AttemptContext<'_>,
    number: u32,
    max_equipment: usize,
    rng: &mut dyn RandomSource,
) -> (Plan, ValidationReport) {
    let plan = attempt(ctx, rng);
    let report = validate(&plan, max_equipment);
    debug!(
        attempt = number,
        violations = report.len(),
        transitions = plan.transitions,
        "Attempt finished"
    );
    (plan, report)
}

fn accepted(plan: Plan, attempts: u32) -> GenerationOutcome {
    info!(
        attempts,
        items = plan.total_items,
        level = %plan.level,
        "Plan generated"
    );
    GenerationOutcome {
        plan,
        report: GenerationReport {
            attempts,
            violations: Vec::new(),
            best_effort: false,
        },
    }
}

/// Run up to `max_retries` attempts (at least one).
///
/// The first valid plan wins. Otherwise the plan with the fewest violations is
/// pruned of empty blocks and returned; earlier attempts win ties.
pub fn run(
    ctx: &AttemptContext<'_>,
    max_retries: u32,
    max_equipment: usize,
    rng: &mut dyn RandomSource,
) -> GenerationOutcome {
    let max_retries = max_retries.max(1);

    let (plan, report) = evaluate(ctx, 1, max_equipment, rng);
    if report.is_valid() {
        return accepted(plan, 1);
    }
    let mut best = (plan, report);

    for number in 2..=max_retries {
        let (plan, report) = evaluate(ctx, number, max_equipment, rng);
        if report.is_valid() {
            return accepted(plan, number);
        }
        if report.len() < best.1.len() {
            best = (plan, report);
        }
    }

    let (mut plan, report) = best;
    plan.prune_empty_blocks();
    let remaining = validate(&plan, max_equipment);
    warn!(
        attempts = max_retries,
        violations = report.len(),
        remaining = remaining.len(),
        "No valid plan found, returning best effort"
    );

    GenerationOutcome {
        plan,
        report: GenerationReport {
            attempts: max_retries,
            violations: remaining.violations,
            best_effort: true,
        },
    }
}
