//! Infrastructure adapters for Sprig.
//!
//! This crate implements the ports defined in `sprig-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod filesystem;
pub mod materializer;
pub mod process;
pub mod vcs;

// Re-export commonly used adapters
pub use catalog::{CatalogError, TemplateSpec, builtin_registry, extend_registry, parse_catalog};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use materializer::{GitRemoteMaterializer, LocalDirMaterializer, SourceMaterializer};
pub use process::SystemProcessRunner;
pub use vcs::GitProbe;
