//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sprig-adapters` crate provides implementations; the CLI provides the
//! reporter and observers.

use std::path::Path;
use std::sync::mpsc::Sender;

use crate::domain::{CommandLine, CommandOutput, CreationEvent, ResolvedTemplate, TemplateRef};
use crate::error::SprigResult;

/// Port for running external programs.
///
/// Implemented by:
/// - `sprig_adapters::process::SystemProcessRunner` (production)
///
/// One call spawns exactly one process. No retries, no timeout.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run `command` with `working_dir` as its current directory.
    ///
    /// A non-zero exit is an `ApplicationError::CommandFailed` carrying the
    /// exit code and captured output.
    fn run(&self, command: &CommandLine, working_dir: &Path) -> SprigResult<CommandOutput>;
}

/// Port for read-only version-control checks.
///
/// Implemented by:
/// - `sprig_adapters::vcs::GitProbe`
#[cfg_attr(test, mockall::automock)]
pub trait VersionControlProbe: Send + Sync {
    /// `true` when the version-control executable is on `PATH`.
    fn has_tool(&self) -> bool;

    /// `true` when `directory`, or one of its ancestors, is already a working tree.
    fn has_repository(&self, directory: &Path) -> bool;
}

/// Port for turning a template reference into a local directory.
///
/// Implemented by:
/// - `sprig_adapters::materializer::SourceMaterializer` (registry + dispatch)
/// - `sprig_adapters::materializer::GitRemoteMaterializer`
/// - `sprig_adapters::materializer::LocalDirMaterializer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateMaterializer: Send + Sync {
    /// Blocking. Fails with `ApplicationError::TemplateResolution`.
    fn materialize(&self, template: &TemplateRef) -> SprigResult<ResolvedTemplate>;
}

/// Port for writing the project onto disk.
///
/// Implemented by:
/// - `sprig_adapters::filesystem::LocalFilesystem` (production)
/// - `sprig_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ProjectFilesystem: Send + Sync {
    /// Recursively copy everything under `from` into `to`.
    ///
    /// `to` is created if absent; existing files are overwritten. Returns the
    /// number of files written.
    fn copy_tree(&self, from: &Path, to: &Path) -> SprigResult<usize>;
}

/// Port for user-facing progress output.
///
/// The CLI renders this as a spinner plus coloured lines. Output failures are
/// the reporter's business; the workflow never fails because of them.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter: Send + Sync {
    /// Start (or update) the in-progress indicator.
    fn step(&self, icon: &str, message: &str);

    /// Stop the in-progress indicator, if any.
    fn finish(&self);

    /// Print a success line.
    fn success(&self, message: &str);

    /// Print a warning line.
    fn warning(&self, message: &str);
}

/// Reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn step(&self, _icon: &str, _message: &str) {}
    fn finish(&self) {}
    fn success(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
}

/// Listener for [`CreationEvent`]s. Fire-and-forget: no acknowledgement.
pub trait CreationObserver: Send + Sync {
    fn on_event(&self, event: &CreationEvent);
}

impl<F> CreationObserver for F
where
    F: Fn(&CreationEvent) + Send + Sync,
{
    fn on_event(&self, event: &CreationEvent) {
        self(event)
    }
}

/// Channel-backed observer. A dropped receiver is ignored.
pub struct ChannelObserver(std::sync::Mutex<Sender<CreationEvent>>);

impl ChannelObserver {
    pub fn new(sender: Sender<CreationEvent>) -> Self {
        Self(std::sync::Mutex::new(sender))
    }
}

impl CreationObserver for ChannelObserver {
    fn on_event(&self, event: &CreationEvent) {
        if let Ok(sender) = self.0.lock() {
            let _ = sender.send(*event);
        }
    }
}
