//! Remote git templates, fetched with a shallow clone.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use sprig_core::{
    application::{
        ApplicationError,
        ports::{ProcessRunner, TemplateMaterializer},
    },
    domain::{CommandLine, ResolvedTemplate, TemplateRef, TemplateSource},
    error::{SprigError, SprigResult},
};

use crate::process::SystemProcessRunner;

/// Clones a repository into a temporary directory.
///
/// The returned [`ResolvedTemplate`] owns the directory; it is deleted when
/// the template is dropped. The clone's `.git` directory is removed so it
/// never ends up in the generated project.
#[derive(Clone)]
pub struct GitRemoteMaterializer {
    runner: Arc<dyn ProcessRunner>,
}

impl GitRemoteMaterializer {
    pub fn new() -> Self {
        Self::with_runner(Arc::new(SystemProcessRunner::new()))
    }

    pub fn with_runner(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    #[instrument(skip(self), fields(branch = branch.unwrap_or("<default>")))]
    pub fn materialize_url(
        &self,
        reference: &str,
        url: &str,
        branch: Option<&str>,
    ) -> SprigResult<ResolvedTemplate> {
        let resolution_error = |reason: String| ApplicationError::TemplateResolution {
            reference: reference.to_owned(),
            reason,
        };

        let workspace = tempfile::Builder::new()
            .prefix("sprig-template-")
            .tempdir()
            .map_err(|e| resolution_error(format!("could not create temporary directory: {e}")))?;
        let checkout = workspace.path().join("template");

        let mut args = vec!["clone".to_owned(), "--depth".into(), "1".into()];
        if let Some(branch) = branch {
            args.push("--branch".into());
            args.push(branch.to_owned());
        }
        // Nothing after `--` is read as an option.
        args.push("--".into());
        args.push(url.to_owned());
        args.push(checkout.to_string_lossy().into_owned());

        info!(url, "fetching remote template");
        self.runner
            .run(&CommandLine::new("git", args), workspace.path())
            .map_err(|e| resolution_error(format!("git clone failed: {}", failure_detail(&e))))?;

        let git_dir = checkout.join(".git");
        if git_dir.exists() {
            std::fs::remove_dir_all(&git_dir).map_err(|e| {
                resolution_error(format!("could not strip {}: {e}", git_dir.display()))
            })?;
        }
        debug!(path = %checkout.display(), "template checked out");

        Ok(ResolvedTemplate::with_lease(checkout, workspace))
    }
}

impl TemplateMaterializer for GitRemoteMaterializer {
    fn materialize(&self, template: &TemplateRef) -> SprigResult<ResolvedTemplate> {
        match TemplateSource::parse(template.as_str()) {
            Some(TemplateSource::Git { url, branch }) => {
                self.materialize_url(template.as_str(), &url, branch.as_deref())
            }
            _ => Err(ApplicationError::TemplateResolution {
                reference: template.to_string(),
                reason: "not a git repository reference".into(),
            }
            .into()),
        }
    }
}

/// What git printed, when it printed anything; the error message otherwise.
fn failure_detail(error: &SprigError) -> String {
    match error {
        SprigError::Application(ApplicationError::CommandFailed { output, .. })
            if !output.trim().is_empty() =>
        {
            output.trim().to_owned()
        }
        other => other.to_string(),
    }
}

impl Default for GitRemoteMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GitRemoteMaterializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitRemoteMaterializer").finish_non_exhaustive()
    }
}
