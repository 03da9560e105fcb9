//! Read-only git checks.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use sprig_core::application::ports::VersionControlProbe;

/// Probes for the `git` executable and for an enclosing work tree.
#[derive(Debug, Clone)]
pub struct GitProbe {
    program: String,
}

impl GitProbe {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Probe a differently named executable (tests, wrappers).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Full path of the executable, if found on `PATH`.
    pub fn executable(&self) -> Option<PathBuf> {
        which::which(&self.program).ok()
    }
}

impl Default for GitProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControlProbe for GitProbe {
    fn has_tool(&self) -> bool {
        let found = self.executable();
        trace!(program = %self.program, ?found, "tool lookup");
        found.is_some()
    }

    fn has_repository(&self, directory: &Path) -> bool {
        // rev-parse walks up through ancestors the same way every git
        // command does, so nested targets are detected too.
        let output = Command::new(&self.program)
            .args(["rev-parse", "--is-inside-work-tree"])
            .current_dir(directory)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        let inside = match output {
            Ok(out) => out.status.success() && String::from_utf8_lossy(&out.stdout).trim() == "true",
            Err(e) => {
                debug!(error = %e, "git rev-parse could not run");
                false
            }
        };
        debug!(path = %directory.display(), inside, "repository check");
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_available() -> bool {
        GitProbe::new().has_tool()
    }

    #[test]
    fn missing_program_is_not_a_tool() {
        let probe = GitProbe::with_program("definitely-not-git-xyz");
        assert!(!probe.has_tool());
        assert!(!probe.has_repository(&std::env::temp_dir()));
    }

    #[test]
    fn detects_fresh_repository_and_its_subdirectories() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let status = Command::new("git")
            .arg("init")
            .current_dir(dir.path())
            .stdout(Stdio::null())
            .status()
            .unwrap();
        assert!(status.success());

        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let probe = GitProbe::new();
        assert!(probe.has_repository(dir.path()));
        assert!(probe.has_repository(&nested));
    }
}
