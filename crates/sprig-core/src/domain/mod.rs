//! Core domain layer for Sprig.
//!
//! This module contains pure logic with no I/O. Fetching templates, copying
//! files and running git are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod creation;
pub mod error;
pub mod template;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use creation::{
    CreationContext, CreationEvent, CreationReport, CreationStage, GitCommitOutcome,
    ResolvedTemplate,
};
pub use error::{DomainError, ErrorCategory};
pub use template::{TemplateEntry, TemplateRef, TemplateRegistry, TemplateSource};
pub use value_objects::{CommandLine, CommandOutput, CreationId, ProjectName};

pub use validation::DomainValidator;
