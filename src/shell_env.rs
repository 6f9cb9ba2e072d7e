// ABOUTME: Shell environment snapshot consumed by terminal command completion
// ABOUTME: Pure data capture of the names a shell session knows about

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A point-in-time capture of the names known to a shell session.
///
/// A shell introspection step fills one in per snapshot request and hands it
/// to the completion engine, which only ever reads it. A changed environment
/// is represented by building a new snapshot, never by mutating an existing
/// one, so snapshots can be shared freely between concurrent readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellEnvironment {
    /// Environment variable names, in discovery order
    #[serde(default)]
    pub envs: Vec<String>,

    /// Shell reserved words, e.g. control-flow keywords
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Commands implemented inside the shell process itself
    #[serde(default)]
    pub builtins: Vec<String>,

    /// Function names defined by the user or the session
    #[serde(default)]
    pub functions: Vec<String>,

    /// External command names, e.g. resolvable through PATH
    #[serde(default)]
    pub commands: Vec<String>,

    /// Alias name to its expansion text
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl ShellEnvironment {
    /// Create an empty snapshot; every category starts with no names.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_envs(mut self, envs: Vec<String>) -> Self {
        self.envs = envs;
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_builtins(mut self, builtins: Vec<String>) -> Self {
        self.builtins = builtins;
        self
    }

    pub fn with_functions(mut self, functions: Vec<String>) -> Self {
        self.functions = functions;
        self
    }

    pub fn with_commands(mut self, commands: Vec<String>) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_aliases(mut self, aliases: HashMap<String, String>) -> Self {
        self.aliases = aliases;
        self
    }

    /// Returns the expansion text for an alias name, if one is defined.
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Returns true when the snapshot carries no names in any category.
    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
            && self.keywords.is_empty()
            && self.builtins.is_empty()
            && self.functions.is_empty()
            && self.commands.is_empty()
            && self.aliases.is_empty()
    }

    /// Total number of names across all six categories.
    ///
    /// Alias names count once; expansions are values, not names.
    pub fn name_count(&self) -> usize {
        self.envs.len()
            + self.keywords.len()
            + self.builtins.len()
            + self.functions.len()
            + self.commands.len()
            + self.aliases.len()
    }
}
