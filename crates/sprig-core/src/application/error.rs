//! Application layer errors.
//!
//! These errors represent failures in orchestration, not input validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the creation workflow.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template reference is unknown or its source is unreachable.
    #[error("Template '{reference}' could not be resolved: {reason}")]
    TemplateResolution { reference: String, reason: String },

    /// Copying template files into the target directory failed.
    #[error("Failed to copy {from} into {to}: {reason}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    /// `git init` failed even though git was found.
    #[error("Failed to initialize git repository in {path}: {reason}")]
    VersionControlInit { path: PathBuf, reason: String },

    /// An external command exited non-zero or could not be started.
    #[error("Command `{command}` failed{}", exit_suffix(.exit_code))]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        output: String,
    },

    /// Filesystem operation failed outside the copy step.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " to start".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateResolution { reference, .. } => vec![
                format!("Could not resolve template: {}", reference),
                "List known templates: sprig list".into(),
                "Use a git URL, owner/repo shorthand, or ./local/path".into(),
                "Check your network connection for remote templates".into(),
            ],
            Self::CopyFailed { to, .. } => vec![
                format!("Check that you can write to {}", to.display()),
                "Check available disk space".into(),
                "The target directory may be partially populated".into(),
            ],
            Self::VersionControlInit { path, .. } => vec![
                format!("Run `git init` manually in {}", path.display()),
                "Or pass --no-git to skip repository setup".into(),
            ],
            Self::CommandFailed { output, .. } if !output.is_empty() => {
                vec![format!("Command output: {}", output.trim())]
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to write into it anyway".into(),
                "Choose a different project name".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateResolution { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::CopyFailed { .. }
            | Self::VersionControlInit { .. }
            | Self::CommandFailed { .. }
            | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
