//! Templates that already live on the local disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use sprig_core::{
    application::{ApplicationError, ports::TemplateMaterializer},
    domain::{ResolvedTemplate, TemplateRef, TemplateSource},
    error::SprigResult,
};

/// Serves a directory in place. Nothing is copied and nothing is cleaned up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirMaterializer;

impl LocalDirMaterializer {
    pub fn new() -> Self {
        Self
    }

    /// Check `path` and hand it back as a template root.
    pub fn materialize_path(&self, reference: &str, path: &Path) -> SprigResult<ResolvedTemplate> {
        let path = expand_home(path);
        debug!(path = %path.display(), "using local template");

        if !path.exists() {
            return Err(ApplicationError::TemplateResolution {
                reference: reference.to_owned(),
                reason: format!("{} does not exist", path.display()),
            }
            .into());
        }
        if !path.is_dir() {
            return Err(ApplicationError::TemplateResolution {
                reference: reference.to_owned(),
                reason: format!("{} is not a directory", path.display()),
            }
            .into());
        }
        Ok(ResolvedTemplate::new(path))
    }
}

impl TemplateMaterializer for LocalDirMaterializer {
    fn materialize(&self, template: &TemplateRef) -> SprigResult<ResolvedTemplate> {
        // Anything that does not parse as a path is still tried as one.
        let path = match TemplateSource::parse(template.as_str()) {
            Some(TemplateSource::Local { path }) => path,
            _ => PathBuf::from(template.as_str()),
        };
        self.materialize_path(template.as_str(), &path)
    }
}

/// Expand a leading `~` to the home directory. Other paths pass through.
pub(crate) fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
