//! Domain value objects: ProjectName, CreationId, CommandLine, CommandOutput.
//!
//! These are pure value types with equality-by-value. Constructors validate;
//! once built, a value is known to be well-formed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::validation::DomainValidator;

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A validated, non-empty project name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        DomainValidator::validate_project_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectName> for String {
    fn from(value: ProjectName) -> Self {
        value.0
    }
}

// ── CreationId ────────────────────────────────────────────────────────────────

/// Correlates the tracing output of one creation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreationId(Uuid);

impl CreationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CreationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CreationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form is enough to tell runs apart in a log file.
        write!(f, "{}", &self.0.simple().to_string()[..8])
    }
}

// ── CommandLine ───────────────────────────────────────────────────────────────

/// A program plus its argument list.
///
/// Built either from an explicit argument list or by splitting a command
/// string on whitespace. The string form has no quoting semantics: `"a b"`
/// becomes two arguments, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split `command` on runs of whitespace into program and arguments.
    pub fn parse(command: &str) -> Result<Self, DomainError> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or(DomainError::EmptyCommand)?;
        Ok(Self::new(program, parts))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl FromStr for CommandLine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── CommandOutput ─────────────────────────────────────────────────────────────

/// Captured result of a process that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// stdout followed by stderr, trimmed; what a user would have seen.
    pub fn combined(&self) -> String {
        let mut out = self.stdout.trim_end().to_owned();
        let err = self.stderr.trim_end();
        if !err.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(err);
        }
        out
    }
}
