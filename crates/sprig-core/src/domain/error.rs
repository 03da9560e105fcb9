// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `SprigError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Template reference cannot be empty")]
    EmptyTemplateReference,

    #[error("Command line cannot be empty")]
    EmptyCommand,

    #[error("Invalid template entry '{name}': {reason}")]
    InvalidTemplateEntry { name: String, reason: String },

    #[error("Duplicate template name: {name}")]
    DuplicateTemplate { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-project, my_app, project123".into(),
            ],
            Self::EmptyTemplateReference => vec![
                "Pass a template with --template <NAME|URL|PATH>".into(),
                "List known templates: sprig list".into(),
            ],
            Self::InvalidTemplateEntry { name, .. } | Self::DuplicateTemplate { name } => vec![
                format!("Check the [templates.{name}] section of your config"),
                "Each template needs exactly one of `repository` or `path`".into(),
            ],
            Self::EmptyCommand => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyCommand => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
