//! Values describing one creation run: its inputs, its events, its outcome.

use std::any::Any;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{CreationId, ProjectName};

// ── CreationContext ───────────────────────────────────────────────────────────

/// Immutable inputs of a single creation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationContext {
    id: CreationId,
    project_name: ProjectName,
    target_directory: PathBuf,
}

impl CreationContext {
    pub fn new(
        project_name: impl Into<String>,
        target_directory: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: CreationId::new(),
            project_name: ProjectName::new(project_name)?,
            target_directory: target_directory.into(),
        })
    }

    pub fn id(&self) -> CreationId {
        self.id
    }

    pub fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }
}

// ── CreationEvent ─────────────────────────────────────────────────────────────

/// Lifecycle signal delivered to observers.
///
/// Serializes as `{"event":"git-init"}` / `{"event":"done"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum CreationEvent {
    /// Version control initialization started.
    GitInit,
    /// The workflow reached its success state.
    Done,
}

impl CreationEvent {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GitInit => "git-init",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for CreationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── GitCommitOutcome ──────────────────────────────────────────────────────────

/// What happened to the initial commit. Never escalates to a workflow error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GitCommitOutcome {
    #[default]
    NotAttempted,
    Succeeded,
    FailedNonFatal,
}

impl GitCommitOutcome {
    pub const fn failed(&self) -> bool {
        matches!(self, Self::FailedNonFatal)
    }
}

// ── CreationStage ─────────────────────────────────────────────────────────────

/// The sequential states of the creation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreationStage {
    Resolving,
    Copying,
    VersionControlInit,
    CommitInit,
    Finalizing,
}

impl CreationStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resolving => "resolving",
            Self::Copying => "copying",
            Self::VersionControlInit => "version-control-init",
            Self::CommitInit => "commit-init",
            Self::Finalizing => "finalizing",
        }
    }
}

impl fmt::Display for CreationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ResolvedTemplate ──────────────────────────────────────────────────────────

/// A template available as a local directory.
///
/// The optional lease keeps backing storage (e.g. a temporary clone) alive;
/// dropping the `ResolvedTemplate` releases it.
pub struct ResolvedTemplate {
    root: PathBuf,
    lease: Option<Box<dyn Any + Send>>,
}

impl ResolvedTemplate {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lease: None,
        }
    }

    pub fn with_lease(root: impl Into<PathBuf>, lease: impl Any + Send) -> Self {
        Self {
            root: root.into(),
            lease: Some(Box::new(lease)),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_temporary(&self) -> bool {
        self.lease.is_some()
    }
}

impl fmt::Debug for ResolvedTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedTemplate")
            .field("root", &self.root)
            .field("temporary", &self.is_temporary())
            .finish()
    }
}

// ── CreationReport ────────────────────────────────────────────────────────────

/// Summary returned by a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationReport {
    pub project_name: ProjectName,
    pub target_directory: PathBuf,
    pub files_copied: usize,
    pub git_initialized: bool,
    pub commit: GitCommitOutcome,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
