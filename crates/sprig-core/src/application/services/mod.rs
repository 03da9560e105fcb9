//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a project" or "list templates".

pub mod creation_service;
pub mod git_service;
pub mod template_service;

pub use creation_service::{COMMIT_SKIPPED_WARNING, Creator};
pub use git_service::{GitLifecycle, INITIAL_COMMIT_MESSAGE, should_initialize_version_control};
pub use template_service::{TemplateInfo, TemplateService};
