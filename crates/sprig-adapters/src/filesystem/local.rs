//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;

use sprig_core::{
    application::{ApplicationError, ports::ProjectFilesystem},
    error::{SprigError, SprigResult},
};

const VCS_DIR: &str = ".git";

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFilesystem for LocalFilesystem {
    fn copy_tree(&self, from: &Path, to: &Path) -> SprigResult<usize> {
        let source = from
            .canonicalize()
            .map_err(|e| copy_error(from, to, e, "resolve template"))?;
        std::fs::create_dir_all(to).map_err(|e| copy_error(from, to, e, "create target"))?;
        let target = to
            .canonicalize()
            .map_err(|e| copy_error(from, to, e, "resolve target"))?;
        if target == source {
            let e = io::Error::new(
                io::ErrorKind::InvalidInput,
                "target directory is the template itself",
            );
            return Err(copy_error(from, to, e, "copy template"));
        }

        let mut files = 0;
        // Symlinks are copied as the files they point at; no cycle detection.
        // A template's own history never travels with it, and a target that
        // lives inside the template is never walked.
        let walker = WalkDir::new(&source)
            .min_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.file_name() != VCS_DIR && e.path() != target);
        for entry in walker {
            let entry = entry.map_err(|e| copy_error(from, to, e.into(), "walk template"))?;
            let relative = entry
                .path()
                .strip_prefix(&source)
                .map_err(|e| copy_error(from, to, io::Error::other(e), "resolve path"))?;
            let dest = to.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest)
                    .map_err(|e| copy_error(entry.path(), &dest, e, "create directory"))?;
            } else {
                if let Some(parent) = dest.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| copy_error(entry.path(), &dest, e, "create directory"))?;
                }
                std::fs::copy(entry.path(), &dest)
                    .map_err(|e| copy_error(entry.path(), &dest, e, "copy file"))?;
                trace!(file = %relative.display(), "copied");
                files += 1;
            }
        }
        Ok(files)
    }
}

fn copy_error(from: &Path, to: &Path, e: io::Error, operation: &str) -> SprigError {
    ApplicationError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn template() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/bin")).unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("src/bin/cli.js"), "#!/usr/bin/env node").unwrap();
        dir
    }

    #[test]
    fn copies_nested_tree_into_new_target() {
        let tpl = template();
        let out = tempfile::tempdir().unwrap();
        let target = out.path().join("deep/my-app");

        let n = LocalFilesystem::new().copy_tree(tpl.path(), &target).unwrap();

        assert_eq!(n, 2);
        assert!(target.join("package.json").is_file());
        assert!(target.join("src/bin/cli.js").is_file());
        assert!(target.join("empty").is_dir());
    }

    #[test]
    fn overwrites_existing_files() {
        let tpl = template();
        let target = tempfile::tempdir().unwrap();
        fs::write(target.path().join("package.json"), "stale").unwrap();

        LocalFilesystem::new()
            .copy_tree(tpl.path(), target.path())
            .unwrap();

        assert_eq!(
            fs::read_to_string(target.path().join("package.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn skips_template_history() {
        let tpl = template();
        fs::create_dir_all(tpl.path().join(".git/objects")).unwrap();
        fs::write(tpl.path().join(".git/HEAD"), "ref: refs/heads/main").unwrap();
        fs::write(tpl.path().join(".gitignore"), "node_modules\n").unwrap();
        let target = tempfile::tempdir().unwrap();

        let n = LocalFilesystem::new()
            .copy_tree(tpl.path(), target.path())
            .unwrap();

        assert_eq!(n, 3);
        assert!(!target.path().join(".git").exists());
        assert!(target.path().join(".gitignore").is_file());
    }

    #[test]
    fn target_inside_template_is_not_copied_into_itself() {
        let tpl = template();
        let target = tpl.path().join("my-app");

        let n = LocalFilesystem::new().copy_tree(tpl.path(), &target).unwrap();

        assert_eq!(n, 2);
        assert!(target.join("src/bin/cli.js").is_file());
        assert!(!target.join("my-app").exists());
    }

    #[test]
    fn existing_target_inside_template_is_skipped() {
        let tpl = template();
        let target = tpl.path().join("out");
        fs::create_dir_all(target.join("old")).unwrap();
        fs::write(target.join("old/leftover.txt"), "x").unwrap();

        let n = LocalFilesystem::new().copy_tree(tpl.path(), &target).unwrap();

        assert_eq!(n, 2);
        assert!(!target.join("out").exists());
        assert!(target.join("old/leftover.txt").is_file());
    }

    #[test]
    fn template_as_its_own_target_is_refused() {
        let tpl = template();

        let err = LocalFilesystem::new()
            .copy_tree(tpl.path(), tpl.path())
            .unwrap_err();

        assert!(matches!(
            err,
            SprigError::Application(ApplicationError::CopyFailed { .. })
        ));
        assert_eq!(
            fs::read_to_string(tpl.path().join("package.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn missing_source_is_copy_error() {
        let target = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .copy_tree(Path::new("/definitely/not/here"), target.path())
            .unwrap_err();
        assert!(matches!(
            err,
            SprigError::Application(ApplicationError::CopyFailed { .. })
        ));
    }
}
