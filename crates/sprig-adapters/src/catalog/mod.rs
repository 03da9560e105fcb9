//! Template catalogs: the built-in list and user-defined entries.
//!
//! Both use the same shape, so a config file can add a template or shadow a
//! built-in one by name:
//!
//! ```toml
//! [templates.my-starter]
//! description = "Company starter"
//! repository = "git@example.com:web/starter.git"
//! branch = "stable"
//!
//! [templates.scratch]
//! path = "~/templates/scratch"
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use sprig_core::{
    domain::{DomainError, TemplateEntry, TemplateRegistry, TemplateSource},
    error::SprigError,
};

const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

/// One `[templates.<name>]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    templates: BTreeMap<String, TemplateSpec>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Template '{name}' must set exactly one of `repository` or `path`")]
    AmbiguousSource { name: String },

    #[error(transparent)]
    Entry(#[from] DomainError),
}

impl From<CatalogError> for SprigError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Entry(e) => SprigError::Domain(e),
            other => SprigError::Configuration {
                message: other.to_string(),
            },
        }
    }
}

impl TemplateSpec {
    /// Build a registry entry named `name`.
    pub fn to_entry(&self, name: &str) -> Result<TemplateEntry, CatalogError> {
        let source = match (&self.repository, &self.path) {
            (Some(url), None) => TemplateSource::Git {
                url: url.clone(),
                branch: self.branch.clone(),
            },
            (None, Some(path)) => TemplateSource::local(path.clone()),
            _ => {
                return Err(CatalogError::AmbiguousSource {
                    name: name.to_owned(),
                });
            }
        };
        Ok(TemplateEntry::new(name, self.description.clone(), source)?)
    }
}

/// Parse a catalog document into a registry.
pub fn parse_catalog(document: &str) -> Result<TemplateRegistry, CatalogError> {
    let file: CatalogFile = toml::from_str(document)?;
    let mut registry = TemplateRegistry::new();
    extend_registry(&mut registry, &file.templates)?;
    Ok(registry)
}

/// Add `specs` to `registry`, replacing entries that share a name.
pub fn extend_registry(
    registry: &mut TemplateRegistry,
    specs: &BTreeMap<String, TemplateSpec>,
) -> Result<(), CatalogError> {
    for (name, spec) in specs {
        registry.upsert(spec.to_entry(name)?);
    }
    Ok(())
}

/// The templates that ship with sprig.
pub fn builtin_registry() -> Result<TemplateRegistry, SprigError> {
    let registry = parse_catalog(BUILTIN_CATALOG)?;
    debug!(count = registry.len(), "loaded built-in catalog");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let registry = builtin_registry().unwrap();
        assert!(!registry.is_empty());
        assert!(registry.get("vue").is_some());
        for entry in registry.entries() {
            assert!(!entry.description.is_empty(), "{} has no description", entry.name);
        }
    }

    #[test]
    fn repository_and_path_forms() {
        let registry = parse_catalog(
            r#"
            [templates.remote]
            repository = "https://example.com/r.git"
            branch = "dev"

            [templates.local]
            path = "/srv/templates/local"
            description = "on disk"
            "#,
        )
        .unwrap();

        assert_eq!(
            registry.get("remote").unwrap().source,
            TemplateSource::Git {
                url: "https://example.com/r.git".into(),
                branch: Some("dev".into()),
            }
        );
        assert_eq!(
            registry.get("local").unwrap().source,
            TemplateSource::local("/srv/templates/local")
        );
    }

    #[test]
    fn both_sources_is_rejected() {
        let err = parse_catalog(
            r#"
            [templates.confused]
            repository = "https://example.com/r.git"
            path = "./r"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::AmbiguousSource { .. }));
    }

    #[test]
    fn user_entries_shadow_builtins() {
        let mut registry = builtin_registry().unwrap();
        let mut specs = BTreeMap::new();
        specs.insert(
            "vue".to_owned(),
            TemplateSpec {
                path: Some("/tmp/my-vue".into()),
                ..Default::default()
            },
        );
        extend_registry(&mut registry, &specs).unwrap();
        assert_eq!(
            registry.get("vue").unwrap().source,
            TemplateSource::local("/tmp/my-vue")
        );
    }

    #[test]
    fn malformed_document_maps_to_configuration_error() {
        let err: SprigError = parse_catalog("templates = 3").unwrap_err().into();
        assert!(matches!(err, SprigError::Configuration { .. }));
    }
}
