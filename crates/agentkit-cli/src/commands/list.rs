//! List command implementation

use std::path::Path;

use colored::Colorize;

use agentkit_core::{Assembler, KitConfig};
use agentkit_meta::PresetSummary;
use agentkit_source::{DEFAULT_SOURCE, RegistryFetcher};

use crate::error::Result;

/// Run the list command
///
/// Uses `source`, else the configured source, else the default registry.
pub fn run_list(path: &Path, source: Option<&str>) -> Result<()> {
    let configured = match source {
        Some(_) => None,
        None => KitConfig::load(path).ok().map(|c| c.source),
    };
    let source = source
        .map(str::to_string)
        .or(configured)
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    println!("{} Fetching presets from {}...", "=>".blue().bold(), source.cyan());

    let presets = Assembler::new(path).catalog(&source, &RegistryFetcher::from_env())?;

    println!();
    println!("{}", "Available Presets".bold());
    println!();
    for preset in &presets {
        print_preset(preset);
    }
    println!(
        "{} {} presets. Use {} to pick one.",
        "Total:".dimmed(),
        presets.len(),
        "agentkit init -k <preset>".cyan()
    );
    Ok(())
}

fn print_preset(preset: &PresetSummary) {
    println!("  {}", preset.id.cyan());
    println!("    {}", preset.description_or_default().dimmed());
    println!("    {}", format!("Modules: {}", preset.module_count).dimmed());
    println!();
}
