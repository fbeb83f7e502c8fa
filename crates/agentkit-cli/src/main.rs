//! agentkit CLI
//!
//! Assembles a `.agent` folder from a registry of modules, driven by
//! `agent.config.json`.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    // A second init (tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Modular .agent assembler", "agentkit".green().bold());
            println!();
            println!("Run {} for available commands.", "agentkit --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;

    if let Some((action, target)) = cmd.module_edit() {
        return commands::run_module_edit(&cwd, action, target);
    }

    match cmd {
        Commands::Init { kit, source, yes } => commands::run_init(&cwd, &kit, &source, yes),
        Commands::Install { force } => commands::run_install(&cwd, force),
        Commands::Override { target, local } => commands::run_override(&cwd, &target, &local),
        Commands::Unoverride { target } => commands::run_unoverride(&cwd, &target),
        Commands::List { source } => commands::run_list(&cwd, source.as_deref()),
        // Handled by module_edit above
        Commands::Add { .. }
        | Commands::Remove { .. }
        | Commands::AddSkill { .. }
        | Commands::AddAgent { .. }
        | Commands::AddWorkflow { .. }
        | Commands::AddRule { .. }
        | Commands::AddRoot { .. }
        | Commands::RemoveSkill { .. }
        | Commands::RemoveAgent { .. }
        | Commands::RemoveWorkflow { .. }
        | Commands::RemoveRule { .. }
        | Commands::RemoveRoot { .. } => Ok(()),
    }
}
