//! Command implementations for agentkit-cli

pub mod init;
pub mod install;
pub mod list;
pub mod modules;

pub use init::run_init;
pub use install::run_install;
pub use list::run_list;
pub use modules::{run_module_edit, run_override, run_unoverride};

/// Hint printed after every edit of the configuration record.
pub(crate) fn print_install_hint() {
    use colored::Colorize;
    println!(
        "{}",
        format!("Run {} to apply changes.", "agentkit install".cyan()).dimmed()
    );
}
