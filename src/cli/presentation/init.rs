//! Init command presentation: summary formatter.

use crate::init::InitResult;
use std::path::{Path, PathBuf};

pub fn format_init_summary(result: &InitResult, workspace_root: &Path) -> String {
    let mut output = format!("Initializing workspace {}\n", workspace_root.display());

    let relative = |path: &PathBuf| {
        path.strip_prefix(workspace_root)
            .unwrap_or(path)
            .display()
            .to_string()
    };
    for path in &result.created {
        output.push_str(&format!("  ✓ {}\n", relative(path)));
    }
    for path in &result.overwritten {
        output.push_str(&format!("  ✓ {} (overwritten)\n", relative(path)));
    }
    for path in &result.skipped {
        output.push_str(&format!(
            "  ⊘ {} (already exists, skipped)\n",
            relative(path)
        ));
    }

    if !result.skipped.is_empty() {
        output.push_str("\nUse --force to overwrite existing files.");
    }
    output.trim_end().to_string()
}
