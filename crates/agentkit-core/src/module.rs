//! Category-prefixed module paths

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Top-level module category; decides where a module lands in `.agent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Agents,
    Skills,
    Workflows,
    Rules,
    /// Files placed directly under the destination root
    Root,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Agents,
        Self::Skills,
        Self::Workflows,
        Self::Rules,
        Self::Root,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agents => "agents",
            Self::Skills => "skills",
            Self::Workflows => "workflows",
            Self::Rules => "rules",
            Self::Root => "root",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                Error::invalid_module(
                    s,
                    "category must be one of agents, skills, workflows, rules, root",
                )
            })
    }
}

/// A validated `<category>/<name>` module path.
///
/// `name` may contain further `/` separators (`skills/web/react`), but never
/// `..`, empty segments, or a leading `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModulePath {
    category: Category,
    name: String,
}

impl ModulePath {
    /// Build a module path from its parts.
    pub fn new(category: Category, name: &str) -> Result<Self> {
        let name = name.replace('\\', "/");
        let full = format!("{category}/{name}");
        if name.starts_with('/') {
            return Err(Error::invalid_module(full, "name must be relative"));
        }
        let name = name.trim_end_matches('/');
        if name.is_empty() {
            return Err(Error::invalid_module(full, "name is empty"));
        }
        for segment in name.split('/') {
            match segment {
                "" => return Err(Error::invalid_module(full, "empty path segment")),
                "." | ".." => {
                    return Err(Error::invalid_module(full, "relative segments are not allowed"));
                }
                _ => {}
            }
        }
        Ok(Self {
            category,
            name: name.to_string(),
        })
    }

    /// Parse `<category>/<name>`.
    pub fn parse(raw: &str) -> Result<Self> {
        let (category, name) = raw
            .split_once('/')
            .ok_or_else(|| Error::invalid_module(raw, "expected <category>/<name>"))?;
        let category: Category = category
            .parse()
            .map_err(|_| Error::invalid_module(raw, "unknown category"))?;
        Self::new(category, name)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of this module relative to the destination root.
    ///
    /// `root/NOTES.md` -> `NOTES.md`, `skills/x` -> `skills/x`.
    pub fn destination(&self) -> String {
        match self.category {
            Category::Root => self.name.clone(),
            other => format!("{}/{}", other, self.name),
        }
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.name)
    }
}

impl FromStr for ModulePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
