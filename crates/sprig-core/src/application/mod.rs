//! Application layer for Sprig.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Creator, GitLifecycle, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; the workflow state
//! machine lives in `services::creation_service`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    COMMIT_SKIPPED_WARNING, Creator, GitLifecycle, INITIAL_COMMIT_MESSAGE, TemplateInfo,
    TemplateService, should_initialize_version_control,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    ChannelObserver, CreationObserver, NullReporter, ProcessRunner, ProgressReporter,
    ProjectFilesystem, TemplateMaterializer, VersionControlProbe,
};

pub use error::ApplicationError;
