//! Directory walking with substring exclusion.
//!
//! Any entry whose path contains one of the excluded substrings is skipped
//! outright. This is a blunt filter: `src/binary.go` is dropped just like
//! everything under `bin/`.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

/// Substrings excluded by [`ExcludeFilter::with_defaults`].
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", "obj", "bin", "nuget"];

/// Configuration for path exclusion.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    /// Substrings that exclude a path when found anywhere in it
    pub substrings: Vec<String>,
}

impl ExcludeFilter {
    /// Create an empty filter (nothing is excluded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter holding [`DEFAULT_EXCLUDES`].
    pub fn with_defaults() -> Self {
        DEFAULT_EXCLUDES
            .iter()
            .copied()
            .fold(Self::new(), |filter, s| filter.exclude(s))
    }

    /// Add an excluded substring.
    pub fn exclude(mut self, substring: impl Into<String>) -> Self {
        self.substrings.push(substring.into());
        self
    }

    /// Check if a path contains any excluded substring.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.substrings.iter().any(|s| path_str.contains(s.as_str()))
    }
}

/// One step of a [`Walk`].
#[derive(Debug)]
pub enum WalkItem {
    /// A non-directory entry that passed the filter
    File(PathBuf),
    /// An entry the walker could not access
    AccessError {
        path: PathBuf,
        error: walkdir::Error,
    },
}

/// Iterator over the files under a root, created by [`walk`].
///
/// Symlinks below the root are not followed. Such a symlink is yielded as a
/// file, so a link to a directory later fails to read rather than being
/// descended into. A root that is a symlink to a directory is walked like the
/// directory itself.
pub struct Walk {
    root: PathBuf,
    inner: walkdir::IntoIter,
    filter: ExcludeFilter,
}

impl Iterator for Walk {
    type Item = WalkItem;

    fn next(&mut self) -> Option<WalkItem> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(error) => {
                    let path = error
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(WalkItem::AccessError { path, error });
                }
            };

            // walkdir follows a symlinked root but still reports it as a link.
            let is_dir =
                entry.file_type().is_dir() || (entry.depth() == 0 && entry.path().is_dir());

            if self.filter.is_excluded(entry.path()) {
                trace!(path = %entry.path().display(), "excluded");
                if is_dir {
                    self.inner.skip_current_dir();
                }
                continue;
            }

            if !is_dir {
                return Some(WalkItem::File(entry.into_path()));
            }
        }
    }
}

/// Walk the tree under `root`, yielding every file not excluded by `filter`.
///
/// Excluded directories are pruned: nothing beneath them is visited, so an
/// unreadable entry inside an excluded directory produces no access error.
/// Access errors elsewhere are yielded in place and the walk carries on with
/// the remaining entries.
pub fn walk(root: impl AsRef<Path>, filter: &ExcludeFilter) -> Walk {
    let root = root.as_ref().to_path_buf();
    debug!(root = %root.display(), "walking");
    Walk {
        inner: WalkDir::new(&root).follow_links(false).into_iter(),
        root,
        filter: filter.clone(),
    }
}

/// Format a path for output, dropping leading `.` components.
///
/// Walking `.` yields `./a.go`; this renders it as `a.go`.
pub fn display_path(path: &Path) -> String {
    let trimmed: PathBuf = path
        .components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .collect();

    if trimmed.as_os_str().is_empty() {
        path.display().to_string()
    } else {
        trimmed.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A temp dir whose own path does not trip the default excludes.
    fn fixture_dir() -> TempDir {
        let filter = ExcludeFilter::with_defaults();
        for _ in 0..16 {
            let dir = tempfile::Builder::new().prefix("dl").tempdir().unwrap();
            if !filter.is_excluded(dir.path()) {
                return dir;
            }
        }
        panic!(
            "temp dir {} contains an excluded substring; set TMPDIR elsewhere",
            std::env::temp_dir().display()
        );
    }

    fn create_test_files(dir: &Path) {
        fs::create_dir_all(dir.join("src/util")).unwrap();
        fs::create_dir_all(dir.join("node_modules/left-pad")).unwrap();
        fs::create_dir_all(dir.join("bin/Debug")).unwrap();
        fs::create_dir_all(dir.join("empty")).unwrap();

        fs::write(dir.join("main.go"), "package main").unwrap();
        fs::write(dir.join("src/lib.go"), "package src").unwrap();
        fs::write(dir.join("src/util/strings.go"), "package util").unwrap();
        fs::write(dir.join("src/binary.go"), "package src").unwrap();
        fs::write(dir.join("node_modules/left-pad/index.js"), "//").unwrap();
        fs::write(dir.join("bin/Debug/app.dll"), "").unwrap();
    }

    fn files(dir: &Path, filter: &ExcludeFilter) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = walk(dir, filter)
            .filter_map(|item| match item {
                WalkItem::File(path) => Some(path),
                WalkItem::AccessError { .. } => None,
            })
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_default_excludes() {
        let filter = ExcludeFilter::with_defaults();

        assert!(filter.is_excluded(Path::new("web/node_modules/x/index.js")));
        assert!(filter.is_excluded(Path::new("proj/obj/Debug/a.cs")));
        assert!(filter.is_excluded(Path::new("proj/bin/a.exe")));
        assert!(filter.is_excluded(Path::new("packages/nuget.config")));
        assert!(!filter.is_excluded(Path::new("src/main.go")));
    }

    #[test]
    fn test_substring_matches_file_names() {
        let filter = ExcludeFilter::with_defaults();

        assert!(filter.is_excluded(Path::new("src/binary.go")));
        assert!(filter.is_excluded(Path::new("src/object.go")));
        assert!(filter.is_excluded(Path::new("robin.txt")));
    }

    #[test]
    fn test_default_excludes_are_all_present() {
        let filter = ExcludeFilter::with_defaults();

        assert_eq!(filter.substrings, DEFAULT_EXCLUDES);
    }

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let filter = ExcludeFilter::new();

        assert!(!filter.is_excluded(Path::new("node_modules/index.js")));
    }

    #[test]
    fn test_custom_exclude() {
        let filter = ExcludeFilter::new().exclude("vendor");

        assert!(filter.is_excluded(Path::new("vendor/lib.go")));
        assert!(!filter.is_excluded(Path::new("bin/lib.go")));
    }

    #[test]
    fn test_walk_skips_directories_and_excluded() {
        let temp = fixture_dir();
        create_test_files(temp.path());

        let found = files(temp.path(), &ExcludeFilter::with_defaults());

        assert_eq!(
            found,
            vec![
                temp.path().join("main.go"),
                temp.path().join("src/lib.go"),
                temp.path().join("src/util/strings.go"),
            ]
        );
    }

    #[test]
    fn test_walk_without_filter_finds_everything() {
        let temp = fixture_dir();
        create_test_files(temp.path());

        let found = files(temp.path(), &ExcludeFilter::new());

        assert_eq!(found.len(), 6);
        assert!(found.iter().any(|p| p.ends_with("node_modules/left-pad/index.js")));
        assert!(found.iter().any(|p| p.ends_with("bin/Debug/app.dll")));
    }

    #[test]
    fn test_walk_empty_directory() {
        let temp = fixture_dir();

        assert_eq!(walk(temp.path(), &ExcludeFilter::with_defaults()).count(), 0);
    }

    #[test]
    fn test_walk_excluded_root() {
        let temp = fixture_dir();
        let root = temp.path().join("obj");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("a.go"), "func a() {}").unwrap();

        assert_eq!(walk(&root, &ExcludeFilter::with_defaults()).count(), 0);
    }

    #[test]
    fn test_walk_single_file_root() {
        let temp = fixture_dir();
        let file = temp.path().join("one.go");
        fs::write(&file, "func one() {}").unwrap();

        let found = files(&file, &ExcludeFilter::with_defaults());

        assert_eq!(found, vec![file]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_symlinked_root_is_a_directory() {
        let temp = fixture_dir();
        let target = temp.path().join("real");
        create_test_files(&target);
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let found = files(&link, &ExcludeFilter::with_defaults());

        assert_eq!(
            found,
            vec![
                link.join("main.go"),
                link.join("src/lib.go"),
                link.join("src/util/strings.go"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_nested_symlink_to_directory_is_a_file() {
        let temp = fixture_dir();
        fs::create_dir_all(temp.path().join("real")).unwrap();
        fs::write(temp.path().join("real/a.go"), "func a() {}").unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("alias")).unwrap();

        let found = files(temp.path(), &ExcludeFilter::with_defaults());

        assert_eq!(
            found,
            vec![temp.path().join("alias"), temp.path().join("real/a.go")]
        );
    }

    #[test]
    fn test_walk_nonexistent_root() {
        let temp = fixture_dir();
        let missing = temp.path().join("missing");

        let items: Vec<WalkItem> = walk(&missing, &ExcludeFilter::with_defaults()).collect();

        assert_eq!(items.len(), 1);
        match &items[0] {
            WalkItem::AccessError { path, .. } => assert_eq!(path, &missing),
            other => panic!("Expected AccessError, got {other:?}"),
        }
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path(Path::new("./a.go")), "a.go");
        assert_eq!(display_path(Path::new("./src/a.go")), "src/a.go");
        assert_eq!(display_path(Path::new("src/a.go")), "src/a.go");
        assert_eq!(display_path(Path::new("/tmp/a.go")), "/tmp/a.go");
        assert_eq!(display_path(Path::new(".")), ".");
    }
}
