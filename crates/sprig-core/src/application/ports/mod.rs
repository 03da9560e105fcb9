//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sprig-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProcessRunner`: spawn external commands
//!   - `VersionControlProbe`: is git installed, is a directory already a repo
//!   - `TemplateMaterializer`: template reference → local directory
//!   - `ProjectFilesystem`: recursive copy into the target
//!   - `ProgressReporter`: spinner and banner output
//!   - `CreationObserver`: lifecycle event listeners
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    ChannelObserver, CreationObserver, NullReporter, ProcessRunner, ProgressReporter, ProjectFilesystem,
    TemplateMaterializer, VersionControlProbe,
};

#[cfg(test)]
pub use output::{
    MockProcessRunner, MockProgressReporter, MockProjectFilesystem, MockTemplateMaterializer,
    MockVersionControlProbe,
};
