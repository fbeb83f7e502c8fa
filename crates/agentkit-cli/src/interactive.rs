//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based confirmation.

use std::io::IsTerminal;

use colored::Colorize;
use dialoguer::Confirm;

use crate::error::Result;

/// Ask a yes/no question, defaulting to no.
///
/// Without a terminal on stdin nothing can be asked, so the answer is no and
/// the user is pointed at the flag that skips the question.
pub fn confirm_overwrite(prompt: &str, skip_flag: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        eprintln!(
            "{} {} (not a terminal; pass {} to overwrite)",
            "warning:".yellow().bold(),
            prompt,
            skip_flag.cyan()
        );
        return Ok(false);
    }

    let answer = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(answer)
}

/// Print the standard cancellation notice.
pub fn cancelled() {
    println!("{}", "Operation cancelled.".yellow());
}
