//! Sprig Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprig
//! project creation tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sprig-cli (CLI)              │
//! │   (builds the context, wires adapters)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (Creator, GitLifecycle, TemplateService)│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (Materializer, Filesystem, Probe, Runner)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      sprig-adapters (Infrastructure)    │
//! │ (GitRemoteMaterializer, GitProbe, etc)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sprig_core::prelude::*;
//!
//! # fn wire() -> (Box<dyn TemplateMaterializer>, Box<dyn ProjectFilesystem>, GitLifecycle) { todo!() }
//! let (materializer, filesystem, git) = wire();
//! let context = CreationContext::new("my-app", "/work/my-app").unwrap();
//! let creator = Creator::new(
//!     context,
//!     TemplateRef::new("rust-cli").unwrap(),
//!     materializer,
//!     filesystem,
//!     git,
//! )
//! .subscribe(|event: &CreationEvent| println!("{event}"));
//!
//! let report = creator.create().unwrap();
//! println!("copied {} files", report.files_copied);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Creator, GitLifecycle, TemplateInfo, TemplateService,
        ports::{
            CreationObserver, NullReporter, ProcessRunner, ProgressReporter, ProjectFilesystem,
            TemplateMaterializer, VersionControlProbe,
        },
        should_initialize_version_control,
    };
    pub use crate::domain::{
        CommandLine, CommandOutput, CreationContext, CreationEvent, CreationReport, CreationStage,
        GitCommitOutcome, ProjectName, ResolvedTemplate, TemplateEntry, TemplateRef,
        TemplateRegistry, TemplateSource,
    };
    pub use crate::error::{SprigError, SprigResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
