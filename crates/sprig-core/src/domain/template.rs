//! Template references, sources, and the registry that maps one to the other.
//!
//! A [`TemplateRef`] is what the user typed. The [`TemplateRegistry`] turns it
//! into a [`TemplateSource`] without touching the network or the disk;
//! fetching is a port concern.
//!
//! # Resolution order
//!
//! 1. Exact registry name (`vue`, `rust-cli`, ...)
//! 2. Git URL: `https://…`, `http://…`, `ssh://…`, `git@…`, or anything ending
//!    in `.git`. An optional `#branch` suffix selects a branch.
//! 3. GitHub shorthand: `github:owner/repo` or bare `owner/repo`
//! 4. Path-like: `./…`, `../…`, `/…`, `~/…`, `file:…`, or a Windows drive path

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::validation::DomainValidator;

// ── TemplateRef ───────────────────────────────────────────────────────────────

/// Opaque template identifier as supplied by the user or config.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateRef(String);

impl TemplateRef {
    pub fn new(reference: impl Into<String>) -> Result<Self, DomainError> {
        let reference = reference.into().trim().to_owned();
        if reference.is_empty() {
            return Err(DomainError::EmptyTemplateReference);
        }
        Ok(Self(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── TemplateSource ────────────────────────────────────────────────────────────

/// Where template files come from before they are materialized locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TemplateSource {
    Git {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        branch: Option<String>,
    },
    Local {
        path: PathBuf,
    },
}

impl TemplateSource {
    pub fn git(url: impl Into<String>) -> Self {
        Self::Git {
            url: url.into(),
            branch: None,
        }
    }

    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local { path: path.into() }
    }

    /// Interpret a free-form reference that is not a registry name.
    ///
    /// Returns `None` when the reference matches none of the known shapes.
    pub fn parse(reference: &str) -> Option<Self> {
        let reference = reference.trim();

        if let Some(path) = reference.strip_prefix("file:") {
            return Some(Self::local(path));
        }
        if looks_like_path(reference) {
            return Some(Self::local(reference));
        }

        let (location, branch) = match reference.split_once('#') {
            Some((loc, b)) if !b.is_empty() => (loc, Some(b.to_owned())),
            Some((loc, _)) => (loc, None),
            None => (reference, None),
        };

        if looks_like_git_url(location) {
            return Some(Self::Git {
                url: location.to_owned(),
                branch,
            });
        }

        let shorthand = location.strip_prefix("github:").unwrap_or(location);
        if is_owner_repo(shorthand) {
            return Some(Self::Git {
                url: format!("https://github.com/{shorthand}.git"),
                branch,
            });
        }

        None
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Git { url, branch: None } => f.write_str(url),
            Self::Git {
                url,
                branch: Some(branch),
            } => write!(f, "{url}#{branch}"),
            Self::Local { path } => write!(f, "{}", path.display()),
        }
    }
}

fn looks_like_path(s: &str) -> bool {
    s.starts_with("./")
        || s.starts_with("../")
        || s.starts_with('/')
        || s.starts_with('~')
        || s.starts_with(".\\")
        || s.starts_with("..\\")
        || (s.len() >= 2 && s.as_bytes()[1] == b':' && s.as_bytes()[0].is_ascii_alphabetic())
}

fn looks_like_git_url(s: &str) -> bool {
    ["https://", "http://", "ssh://", "git://", "git@"]
        .iter()
        .any(|prefix| s.starts_with(prefix))
        || s.ends_with(".git")
}

fn is_owner_repo(s: &str) -> bool {
    let Some((owner, repo)) = s.split_once('/') else {
        return false;
    };
    let segment_ok = |seg: &str| {
        !seg.is_empty()
            && !seg.starts_with('.')
            && seg
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    segment_ok(owner) && segment_ok(repo)
}

// ── TemplateEntry / TemplateRegistry ──────────────────────────────────────────

/// A named template known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub source: TemplateSource,
}

impl TemplateEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: TemplateSource,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        DomainValidator::validate_template_name(&name)?;
        Ok(Self {
            name,
            description: description.into(),
            source,
        })
    }
}

/// Name → template lookup table.
///
/// Ordered by name so listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    entries: BTreeMap<String, TemplateEntry>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; a second entry with the same name is an error.
    pub fn register(&mut self, entry: TemplateEntry) -> Result<(), DomainError> {
        if self.entries.contains_key(&entry.name) {
            return Err(DomainError::DuplicateTemplate { name: entry.name });
        }
        self.entries.insert(entry.name.clone(), entry);
        Ok(())
    }

    /// Add or replace an entry. User config uses this to shadow built-ins.
    pub fn upsert(&mut self, entry: TemplateEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&TemplateEntry> {
        self.entries.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.values()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a reference to a source. Registry names win over every other
    /// interpretation.
    pub fn resolve(&self, reference: &TemplateRef) -> Option<TemplateSource> {
        self.get(reference.as_str())
            .map(|entry| entry.source.clone())
            .or_else(|| TemplateSource::parse(reference.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TemplateRegistry {
        let mut reg = TemplateRegistry::new();
        reg.register(
            TemplateEntry::new(
                "vue",
                "Vue starter",
                TemplateSource::git("https://example.com/vue.git"),
            )
            .unwrap(),
        )
        .unwrap();
        reg
    }

    fn tref(s: &str) -> TemplateRef {
        TemplateRef::new(s).unwrap()
    }

    #[test]
    fn registry_name_wins() {
        assert_eq!(
            registry().resolve(&tref("vue")),
            Some(TemplateSource::git("https://example.com/vue.git"))
        );
    }

    #[test]
    fn git_url_with_branch() {
        assert_eq!(
            TemplateSource::parse("https://host/a/b.git#dev"),
            Some(TemplateSource::Git {
                url: "https://host/a/b.git".into(),
                branch: Some("dev".into()),
            })
        );
    }

    #[test]
    fn scp_style_url_is_git() {
        assert_eq!(
            TemplateSource::parse("git@github.com:owner/repo.git"),
            Some(TemplateSource::git("git@github.com:owner/repo.git"))
        );
    }

    #[test]
    fn github_shorthand_expands() {
        let expected = Some(TemplateSource::git("https://github.com/owner/repo.git"));
        assert_eq!(TemplateSource::parse("owner/repo"), expected);
        assert_eq!(TemplateSource::parse("github:owner/repo"), expected);
    }

    #[test]
    fn path_like_references_are_local() {
        assert_eq!(
            TemplateSource::parse("./templates/base"),
            Some(TemplateSource::local("./templates/base"))
        );
        assert_eq!(
            TemplateSource::parse("file:/srv/tpl"),
            Some(TemplateSource::local("/srv/tpl"))
        );
        assert_eq!(
            TemplateSource::parse("C:\\templates"),
            Some(TemplateSource::local("C:\\templates"))
        );
    }

    #[test]
    fn unknown_bare_word_does_not_resolve() {
        assert_eq!(registry().resolve(&tref("no-such-template")), None);
        assert_eq!(TemplateSource::parse("a/b/c"), None);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut reg = registry();
        let again = TemplateEntry::new("vue", "", TemplateSource::local("/x")).unwrap();
        assert!(matches!(
            reg.register(again.clone()),
            Err(DomainError::DuplicateTemplate { .. })
        ));
        reg.upsert(again);
        assert_eq!(reg.resolve(&tref("vue")), Some(TemplateSource::local("/x")));
    }

    #[test]
    fn empty_reference_rejected() {
        assert_eq!(
            TemplateRef::new("  "),
            Err(DomainError::EmptyTemplateReference)
        );
    }
}
