//! Git lifecycle - decide whether to initialize, then init and commit.
//!
//! Separated from the `Creator` so the init/commit asymmetry is visible in
//! one place: `init` returns an error, `commit_initial` returns an outcome.

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ProcessRunner, VersionControlProbe},
    },
    domain::{CommandLine, GitCommitOutcome},
    error::{SprigError, SprigResult},
};

/// Message of the commit created right after the template is copied.
pub const INITIAL_COMMIT_MESSAGE: &str = "init";

const GIT_INIT: &str = "git init";
const GIT_ADD_ALL: &str = "git add -A";

/// `has_tool() && !has_repository(directory)`.
///
/// The repository check is skipped entirely when the tool is missing. Never
/// errors: git is an enhancement, not a requirement.
pub fn should_initialize_version_control(
    probe: &dyn VersionControlProbe,
    directory: &Path,
) -> bool {
    if !probe.has_tool() {
        debug!("git not found on PATH, skipping repository setup");
        return false;
    }
    if probe.has_repository(directory) {
        debug!(path = %directory.display(), "already inside a git work tree");
        return false;
    }
    true
}

/// Owns the probe and the runner used for the repository steps.
pub struct GitLifecycle {
    probe: Box<dyn VersionControlProbe>,
    runner: Box<dyn ProcessRunner>,
    enabled: bool,
}

impl GitLifecycle {
    pub fn new(probe: Box<dyn VersionControlProbe>, runner: Box<dyn ProcessRunner>) -> Self {
        Self {
            probe,
            runner,
            enabled: true,
        }
    }

    /// Turn repository setup off entirely (`--no-git`).
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The decision rule, gated by [`Self::enabled`].
    pub fn should_initialize(&self, directory: &Path) -> bool {
        self.enabled && should_initialize_version_control(self.probe.as_ref(), directory)
    }

    /// Run `git init`. Failure is workflow-fatal.
    #[instrument(skip_all, fields(path = %directory.display()))]
    pub fn init(&self, directory: &Path) -> SprigResult<()> {
        let command = CommandLine::parse(GIT_INIT)?;
        self.runner
            .run(&command, directory)
            .map(|_| ())
            .map_err(|e| {
                ApplicationError::VersionControlInit {
                    path: directory.to_path_buf(),
                    reason: describe(&e),
                }
                .into()
            })
    }

    /// Stage everything and create the initial commit.
    ///
    /// Either step failing yields [`GitCommitOutcome::FailedNonFatal`]; the
    /// most common cause is a missing `user.name` / `user.email`.
    #[instrument(skip_all, fields(path = %directory.display()))]
    pub fn commit_initial(&self, directory: &Path) -> GitCommitOutcome {
        let steps = [
            CommandLine::parse(GIT_ADD_ALL),
            Ok(CommandLine::new(
                "git",
                ["commit", "-m", INITIAL_COMMIT_MESSAGE],
            )),
        ];

        for step in steps {
            let result = step
                .map_err(SprigError::from)
                .and_then(|command| self.runner.run(&command, directory));
            if let Err(e) = result {
                warn!(error = %e, "initial commit skipped");
                return GitCommitOutcome::FailedNonFatal;
            }
        }
        GitCommitOutcome::Succeeded
    }
}

fn describe(err: &SprigError) -> String {
    match err {
        SprigError::Application(ApplicationError::CommandFailed { output, .. })
            if !output.trim().is_empty() =>
        {
            format!("{err}: {}", output.trim())
        }
        other => other.to_string(),
    }
}
