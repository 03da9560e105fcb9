//! Registry-aware materializer used by the CLI.

use tracing::{debug, instrument};

use sprig_core::{
    application::{ApplicationError, ports::TemplateMaterializer},
    domain::{ResolvedTemplate, TemplateRef, TemplateRegistry, TemplateSource},
    error::SprigResult,
};

use super::{GitRemoteMaterializer, LocalDirMaterializer};

/// Resolves a reference through a [`TemplateRegistry`] and fetches it with
/// the matching backend.
#[derive(Debug, Clone)]
pub struct SourceMaterializer {
    registry: TemplateRegistry,
    git: GitRemoteMaterializer,
    local: LocalDirMaterializer,
}

impl SourceMaterializer {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self::with_backends(registry, GitRemoteMaterializer::new(), LocalDirMaterializer::new())
    }

    pub fn with_backends(
        registry: TemplateRegistry,
        git: GitRemoteMaterializer,
        local: LocalDirMaterializer,
    ) -> Self {
        Self {
            registry,
            git,
            local,
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }
}

impl TemplateMaterializer for SourceMaterializer {
    #[instrument(skip_all, fields(template = %template))]
    fn materialize(&self, template: &TemplateRef) -> SprigResult<ResolvedTemplate> {
        let source = self.registry.resolve(template).ok_or_else(|| {
            ApplicationError::TemplateResolution {
                reference: template.to_string(),
                reason: "not a known template name, git URL, owner/repo shorthand, or path"
                    .into(),
            }
        })?;
        debug!(%source, "resolved template source");

        match source {
            TemplateSource::Git { url, branch } => {
                self.git
                    .materialize_url(template.as_str(), &url, branch.as_deref())
            }
            TemplateSource::Local { path } => self.local.materialize_path(template.as_str(), &path),
        }
    }
}
