//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

use agentkit_core::{Category, DEFAULT_PRESET};
use agentkit_source::DEFAULT_SOURCE;

/// agentkit - Assemble a .agent folder from a module registry
#[derive(Parser, Debug)]
#[command(name = "agentkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Initialize a new agent.config.json with a preset
    ///
    /// Examples:
    ///   agentkit init                      # minimal preset from the default registry
    ///   agentkit init -k web-full          # another preset
    ///   agentkit init -s ./my-kit          # local registry
    Init {
        /// Preset kit to use
        #[arg(short, long, default_value = DEFAULT_PRESET)]
        kit: String,

        /// Registry source (local path or remote reference)
        #[arg(short, long, default_value = DEFAULT_SOURCE)]
        source: String,

        /// Overwrite an existing agent.config.json without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Assemble the .agent folder from agent.config.json
    Install {
        /// Overwrite an existing .agent folder without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Add a module (e.g. add skills docker-expert)
    Add {
        /// Module category: agents, skills, workflows, rules or root
        category: String,
        /// Module name within the category
        name: String,
    },

    /// Remove a module (e.g. remove skills tailwind-patterns)
    Remove {
        /// Module category: agents, skills, workflows, rules or root
        category: String,
        /// Module name within the category
        name: String,
    },

    /// Add a skill
    AddSkill { name: String },
    /// Add an agent
    AddAgent { name: String },
    /// Add a workflow
    AddWorkflow { name: String },
    /// Add a rule
    AddRule { name: String },
    /// Add a root file
    AddRoot { name: String },

    /// Remove a skill
    RemoveSkill { name: String },
    /// Remove an agent
    RemoveAgent { name: String },
    /// Remove a workflow
    RemoveWorkflow { name: String },
    /// Remove a rule
    RemoveRule { name: String },
    /// Remove a root file
    RemoveRoot { name: String },

    /// Replace a path in .agent with a local file after assembly
    ///
    /// Example:
    ///   agentkit override rules/clean-code.md ./my-rules.md
    Override {
        /// Path inside .agent to replace
        target: String,
        /// Local file or directory, relative to the working directory
        local: String,
    },

    /// Stop replacing a path in .agent
    Unoverride {
        /// Path inside .agent
        target: String,
    },

    /// List the presets available in a registry
    List {
        /// Registry source (defaults to the configured source, then the default registry)
        #[arg(short, long)]
        source: Option<String>,
    },
}

/// Whether a module command adds to the include list or the exclude list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleAction {
    Add,
    Remove,
}

impl Commands {
    /// Normalize `add`/`remove` and their shorthands to one shape.
    ///
    /// Returns `None` for commands that do not edit the module lists.
    pub fn module_edit(&self) -> Option<(ModuleAction, ModuleTarget<'_>)> {
        use ModuleAction::{Add, Remove};
        let edit = match self {
            Self::Add { category, name } => (Add, ModuleTarget::Raw(category, name)),
            Self::Remove { category, name } => (Remove, ModuleTarget::Raw(category, name)),
            Self::AddSkill { name } => (Add, ModuleTarget::Typed(Category::Skills, name)),
            Self::AddAgent { name } => (Add, ModuleTarget::Typed(Category::Agents, name)),
            Self::AddWorkflow { name } => (Add, ModuleTarget::Typed(Category::Workflows, name)),
            Self::AddRule { name } => (Add, ModuleTarget::Typed(Category::Rules, name)),
            Self::AddRoot { name } => (Add, ModuleTarget::Typed(Category::Root, name)),
            Self::RemoveSkill { name } => (Remove, ModuleTarget::Typed(Category::Skills, name)),
            Self::RemoveAgent { name } => (Remove, ModuleTarget::Typed(Category::Agents, name)),
            Self::RemoveWorkflow { name } => (Remove, ModuleTarget::Typed(Category::Workflows, name)),
            Self::RemoveRule { name } => (Remove, ModuleTarget::Typed(Category::Rules, name)),
            Self::RemoveRoot { name } => (Remove, ModuleTarget::Typed(Category::Root, name)),
            _ => return None,
        };
        Some(edit)
    }
}

/// Category and name as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleTarget<'a> {
    /// `add <category> <name>`: category still unparsed
    Raw(&'a str, &'a str),
    /// Shorthand commands with a fixed category
    Typed(Category, &'a str),
}
