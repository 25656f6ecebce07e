//! Plan presentation: generated plans, saved plans and plan listings.

use crate::generator::GenerationOutcome;
use crate::plan::Plan;
use crate::store::{SavedPlan, SavedPlanSummary};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

pub fn format_outcome_text(outcome: &GenerationOutcome) -> String {
    let mut out = format_plan_text(&outcome.plan);
    if outcome.report.best_effort {
        out.push_str(&format!(
            "\n\n{} no fully valid plan after {} attempts",
            "Best effort:".yellow().bold(),
            outcome.report.attempts
        ));
        for violation in &outcome.report.violations {
            out.push_str(&format!("\n  - {}", violation));
        }
    }
    out
}

pub fn format_plan_text(plan: &Plan) -> String {
    let mut out = format!(
        "{}\n",
        format!(
            "{}-minute {} plan ({})",
            plan.duration_minutes,
            plan.level_name,
            plan.equipment.join(", ")
        )
        .bold()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Block", "Min", "Exercise", "Equipment", "Setup", "Reps"]);
    for block in &plan.blocks {
        if block.items.is_empty() {
            table.add_row(vec![
                block.order.to_string(),
                block.name.clone(),
                format!("{:.1}", block.allocated_minutes),
                "-".to_string(),
                String::new(),
                String::new(),
                String::new(),
            ]);
            continue;
        }
        for (index, item) in block.items.iter().enumerate() {
            let (order, name, minutes) = if index == 0 {
                (
                    block.order.to_string(),
                    block.name.clone(),
                    format!("{:.1}", block.allocated_minutes),
                )
            } else {
                (String::new(), String::new(), String::new())
            };
            let mut exercise = item.name.clone();
            if !item.variants.is_empty() {
                exercise.push_str(&format!(" ({})", item.variants.join(", ")));
            }
            table.add_row(vec![
                order,
                name,
                minutes,
                exercise,
                item.equipment.clone(),
                item.sub_configuration.clone(),
                item.reps.to_string(),
            ]);
        }
    }
    out.push_str(&format!("{}\n", table));

    out.push_str(&format!(
        "Equipment path: {}\n",
        format_equipment_path(&plan.equipment_flow)
    ));
    out.push_str(&format!(
        "Items: {}  Transitions: {}/{}",
        plan.total_items, plan.transitions, plan.max_transitions
    ));
    let returns = plan.equipment_returns();
    if !returns.is_empty() {
        out.push_str(&format!(
            "\n{} {}",
            "Returns to:".yellow(),
            returns.join(", ")
        ));
    }
    out
}

fn format_equipment_path(flow: &[String]) -> String {
    if flow.is_empty() {
        return "-".to_string();
    }
    flow.iter()
        .map(|e| format!("{}", e.cyan()))
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn format_saved_plan_text(saved: &SavedPlan) -> String {
    let mut out = format!("{} [{}]\n", saved.name.bold(), saved.id);
    if !saved.description.is_empty() {
        out.push_str(&format!("{}\n", saved.description));
    }
    out.push_str(&format!("Fingerprint: {}\n\n", &saved.fingerprint));
    out.push_str(&format_plan_text(&saved.plan));
    out
}

pub fn format_plan_list_text(summaries: &[SavedPlanSummary]) -> String {
    if summaries.is_empty() {
        return "No saved plans.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Name", "Minutes", "Level", "Items", "Transitions", "Updated"]);
    for summary in summaries {
        let updated = summary
            .updated()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            summary.id.to_string(),
            summary.name.clone(),
            summary.duration_minutes.to_string(),
            summary.level.clone(),
            summary.total_items.to_string(),
            summary.transitions.to_string(),
            updated,
        ]);
    }
    table.to_string()
}
