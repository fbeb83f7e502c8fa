//! Init command implementation
//!
//! Writes a fresh agent.config.json pointing at a preset.

use std::path::Path;

use colored::Colorize;

use agentkit_core::KitConfig;
use agentkit_fs::KitPath;

use crate::error::Result;
use crate::interactive;

/// Run the init command
pub fn run_init(path: &Path, kit: &str, source: &str, yes: bool) -> Result<()> {
    println!("{} Initializing {}...", "=>".blue().bold(), KitPath::ConfigFile.as_str().cyan());

    if KitConfig::exists(path) && !yes {
        let prompt = format!("{} already exists. Overwrite?", KitPath::ConfigFile);
        if !interactive::confirm_overwrite(&prompt, "--yes")? {
            interactive::cancelled();
            return Ok(());
        }
    }

    let config = KitConfig::new(source, kit);
    config.save(path)?;

    println!("{} Created {}", "OK".green().bold(), KitPath::ConfigFile);
    println!("   Base:   {}", config.base.dimmed());
    println!("   Source: {}", config.source.dimmed());
    println!();
    println!("Run {} to assemble the {} folder.", "agentkit install".cyan(), KitPath::AgentDir);
    Ok(())
}
