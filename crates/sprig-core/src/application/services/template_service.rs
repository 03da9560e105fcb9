//! Template Service - registry queries for display.
//!
//! Separated from the `Creator` for single responsibility: listing and
//! describing templates never fetches anything.

use serde::Serialize;

use crate::{
    application::ApplicationError,
    domain::{TemplateRef, TemplateRegistry, TemplateSource},
    error::SprigResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
    pub kind: &'static str,
    pub location: String,
}

impl TemplateInfo {
    fn from_source(name: &str, description: &str, source: &TemplateSource) -> Self {
        let kind = match source {
            TemplateSource::Git { .. } => "git",
            TemplateSource::Local { .. } => "local",
        };
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            kind,
            location: source.to_string(),
        }
    }
}

/// Service for template lookups.
pub struct TemplateService {
    registry: TemplateRegistry,
}

impl TemplateService {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// List all named templates, ordered by name.
    pub fn list(&self) -> Vec<TemplateInfo> {
        self.registry
            .entries()
            .map(|e| TemplateInfo::from_source(&e.name, &e.description, &e.source))
            .collect()
    }

    /// Describe where a reference would be fetched from, without fetching.
    pub fn describe(&self, reference: &TemplateRef) -> SprigResult<TemplateInfo> {
        let source = self.registry.resolve(reference).ok_or_else(|| {
            ApplicationError::TemplateResolution {
                reference: reference.to_string(),
                reason: "not a known template name, git URL, owner/repo, or path".into(),
            }
        })?;
        let description = self
            .registry
            .get(reference.as_str())
            .map(|e| e.description.as_str())
            .unwrap_or_default();
        Ok(TemplateInfo::from_source(
            reference.as_str(),
            description,
            &source,
        ))
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TemplateEntry;

    fn service() -> TemplateService {
        let mut registry = TemplateRegistry::new();
        registry
            .register(
                TemplateEntry::new("vue", "Vue SPA", TemplateSource::git("https://x/vue.git"))
                    .unwrap(),
            )
            .unwrap();
        registry
            .register(TemplateEntry::new("local", "", TemplateSource::local("/srv/tpl")).unwrap())
            .unwrap();
        TemplateService::new(registry)
    }

    #[test]
    fn list_is_sorted_by_name() {
        let names: Vec<_> = service().list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["local", "vue"]);
    }

    #[test]
    fn describe_named_template() {
        let info = service().describe(&TemplateRef::new("vue").unwrap()).unwrap();
        assert_eq!(info.kind, "git");
        assert_eq!(info.description, "Vue SPA");
    }

    #[test]
    fn describe_shorthand() {
        let info = service()
            .describe(&TemplateRef::new("owner/repo").unwrap())
            .unwrap();
        assert_eq!(info.location, "https://github.com/owner/repo.git");
    }

    #[test]
    fn describe_unknown_is_resolution_error() {
        assert!(service()
            .describe(&TemplateRef::new("nothing").unwrap())
            .is_err());
    }
}
