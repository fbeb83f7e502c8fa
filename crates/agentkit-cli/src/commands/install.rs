//! Install command implementation
//!
//! Fetches the configured registry and assembles `.agent`.

use std::path::Path;

use colored::Colorize;

use agentkit_core::{Assembler, InstallReport, KitConfig};
use agentkit_fs::KitPath;
use agentkit_source::RegistryFetcher;

use crate::error::{CliError, Result};
use crate::interactive;

/// Run the install command
pub fn run_install(path: &Path, force: bool) -> Result<()> {
    if !KitConfig::exists(path) {
        return Err(CliError::user(format!(
            "{} not found. Run {} first.",
            KitPath::ConfigFile,
            "agentkit init".cyan()
        )));
    }
    let config = KitConfig::load(path)?;

    let assembler = Assembler::new(path);
    if assembler.destination().exists() && !force {
        let prompt = format!("{} folder exists. Overwrite?", KitPath::AgentDir);
        if !interactive::confirm_overwrite(&prompt, "--force")? {
            interactive::cancelled();
            return Ok(());
        }
    }

    println!(
        "{} Fetching registry from {}...",
        "=>".blue().bold(),
        config.source.cyan()
    );

    let report = assembler.install(&config, &RegistryFetcher::from_env())?;
    print_report(&config, &report);
    Ok(())
}

fn print_report(config: &KitConfig, report: &InstallReport) {
    for module in &report.missing {
        eprintln!("{} Module not found: {}", "warning:".yellow().bold(), module);
    }
    for module in &report.invalid {
        eprintln!("{} Invalid module path in preset: {}", "warning:".yellow().bold(), module);
    }
    for (target, local) in &report.overrides_missing {
        eprintln!(
            "{} Override file not found: {} (for {})",
            "warning:".yellow().bold(),
            local,
            target
        );
    }

    println!(
        "{} Successfully assembled {}/{} modules",
        "OK".green().bold(),
        report.copied.len(),
        report.resolved.len()
    );

    let rule = "----------------------------------------".dimmed();
    println!("{rule}");
    println!("Source:  {}", config.source.cyan());
    println!("Base:    {}", report.preset.cyan());
    println!("Include: {}", list_or_none(&config.include).dimmed());
    println!("Exclude: {}", list_or_none(&config.exclude).dimmed());
    if !report.overrides_applied.is_empty() {
        println!("Overrides: {}", report.overrides_applied.join(", ").dimmed());
    }
    println!("{rule}");
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
