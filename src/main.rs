use anyhow::Result;
use colored::Colorize;
use viewmodel_patcher::{builtin_rules, PatchResult, Patcher, TARGET_FILE};

fn main() -> Result<()> {
    let patcher = Patcher::new(TARGET_FILE, builtin_rules());

    match patcher.apply()? {
        PatchResult::Patched { .. } => {
            println!("{} ViewModel updated successfully", "✓".green());
        }
        PatchResult::Unchanged { .. } => {
            println!("{} ViewModel already up to date", "⊙".yellow());
        }
    }

    Ok(())
}
