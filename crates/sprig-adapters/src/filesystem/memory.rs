//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sprig_core::{
    application::{ApplicationError, ports::ProjectFilesystem},
    error::SprigResult,
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying state, so a test can keep a handle after
/// boxing one into a `Creator`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn seed(&self, path: impl AsRef<Path>, content: &str) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dirs(parent);
            }
            inner.files.insert(path.to_path_buf(), content.to_owned());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files under `root`, sorted.
    pub fn list_files(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        inner
            .files
            .keys()
            .filter(|p| p.starts_with(root.as_ref()))
            .cloned()
            .collect()
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let Ok(inner) = self.inner.read() else {
            return false;
        };
        let path = path.as_ref();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

impl MemoryFilesystemInner {
    fn add_dirs(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl ProjectFilesystem for MemoryFilesystem {
    fn copy_tree(&self, from: &Path, to: &Path) -> SprigResult<usize> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "memory filesystem lock poisoned".into(),
            })?;

        if !inner.directories.contains(from) {
            return Err(ApplicationError::CopyFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                reason: "source directory does not exist".into(),
            }
            .into());
        }

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(from).ok().map(|rel| to.join(rel)))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(from).ok().map(|rel| (to.join(rel), c.clone())))
            .collect();

        inner.add_dirs(to);
        for dir in dirs {
            inner.add_dirs(&dir);
        }
        let count = files.len();
        for (path, content) in files {
            inner.files.insert(path, content);
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_tree_mirrors_source() {
        let fs = MemoryFilesystem::new();
        fs.seed("/tpl/README.md", "hi").seed("/tpl/src/main.rs", "fn main() {}");

        let n = fs.copy_tree(Path::new("/tpl"), Path::new("/out/app")).unwrap();

        assert_eq!(n, 2);
        assert_eq!(fs.read_file("/out/app/src/main.rs").as_deref(), Some("fn main() {}"));
        assert!(fs.exists("/out/app/src"));
        assert_eq!(fs.list_files("/out").len(), 2);
    }

    #[test]
    fn copy_tree_overwrites() {
        let fs = MemoryFilesystem::new();
        fs.seed("/tpl/a.txt", "new").seed("/out/a.txt", "old");
        fs.copy_tree(Path::new("/tpl"), Path::new("/out")).unwrap();
        assert_eq!(fs.read_file("/out/a.txt").as_deref(), Some("new"));
    }

    #[test]
    fn missing_source_fails_without_writing() {
        let fs = MemoryFilesystem::new();
        assert!(fs.copy_tree(Path::new("/nope"), Path::new("/out")).is_err());
        assert!(!fs.exists("/out"));
    }
}
