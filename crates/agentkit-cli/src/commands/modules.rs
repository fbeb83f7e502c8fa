//! Module list and override editing
//!
//! Every command here loads agent.config.json, applies one validated
//! mutation, and writes the record back. Nothing is fetched or assembled.

use std::path::Path;

use colored::Colorize;

use agentkit_core::{Category, KitConfig, ModulePath};

use crate::cli::{ModuleAction, ModuleTarget};
use crate::commands::print_install_hint;
use crate::error::Result;

/// Run `add`/`remove` or one of their shorthands
pub fn run_module_edit(path: &Path, action: ModuleAction, target: ModuleTarget<'_>) -> Result<()> {
    let module = match target {
        ModuleTarget::Raw(category, name) => {
            let category: Category = category.parse()?;
            ModulePath::new(category, name)?
        }
        ModuleTarget::Typed(category, name) => ModulePath::new(category, name)?,
    };

    let mut config = KitConfig::load(path)?;
    let (changed, list) = match action {
        ModuleAction::Add => (config.include_module(&module), "include"),
        ModuleAction::Remove => (config.exclude_module(&module), "exclude"),
    };

    if !changed {
        println!(
            "{} {} is already in the {} list.",
            "OK".green().bold(),
            module.to_string().cyan(),
            list
        );
        return Ok(());
    }

    config.save(path)?;
    println!(
        "{} Added {} to {} list.",
        "OK".green().bold(),
        module.to_string().cyan(),
        list
    );
    print_install_hint();
    Ok(())
}

/// Run the override command
pub fn run_override(path: &Path, target: &str, local: &str) -> Result<()> {
    let mut config = KitConfig::load(path)?;

    if !path.join(local).exists() {
        eprintln!(
            "{} {} does not exist yet; it will be skipped until it does.",
            "warning:".yellow().bold(),
            local
        );
    }

    let previous = config.set_override(target, local)?;
    config.save(path)?;

    match previous {
        Some(old) if old != local => println!(
            "{} Override for {} changed from {} to {}.",
            "OK".green().bold(),
            target.cyan(),
            old,
            local.cyan()
        ),
        _ => println!(
            "{} {} will be replaced by {}.",
            "OK".green().bold(),
            target.cyan(),
            local.cyan()
        ),
    }
    print_install_hint();
    Ok(())
}

/// Run the unoverride command
pub fn run_unoverride(path: &Path, target: &str) -> Result<()> {
    let mut config = KitConfig::load(path)?;

    if config.remove_override(target).is_none() {
        println!("{} No override for {}.", "OK".green().bold(), target.cyan());
        return Ok(());
    }

    config.save(path)?;
    println!("{} Removed override for {}.", "OK".green().bold(), target.cyan());
    print_install_hint();
    Ok(())
}
