//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use strata_core::{
    application::{ApplicationError, ports::DirEntry, ports::Filesystem},
    error::StrataResult,
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying tree, so a test can hand one clone to a
/// service and inspect the other. Listings are sorted by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    undeletable: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory and all of its parents.
    pub fn create_dir_all(&self, path: impl AsRef<Path>) -> &Self {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.insert_dir_all(path.as_ref());
        self
    }

    /// Write a file, creating its parent directories.
    pub fn write_file(&self, path: impl AsRef<Path>, content: &str) -> &Self {
        let path = path.as_ref();
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(parent) = path.parent() {
            inner.insert_dir_all(parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        self
    }

    /// Make `read_dir` on exactly this path fail with permission denied.
    pub fn deny_read(&self, path: impl AsRef<Path>) -> &Self {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.unreadable.insert(path.as_ref().to_path_buf());
        self
    }

    /// Make `remove_all` on exactly this path fail with permission denied.
    pub fn deny_remove(&self, path: impl AsRef<Path>) -> &Self {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.undeletable.insert(path.as_ref().to_path_buf());
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.files.get(path.as_ref()).cloned()
    }

    /// Whether `path` is a known directory.
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.directories.contains(path.as_ref())
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *inner = MemoryFilesystemInner::default();
    }
}

impl MemoryFilesystemInner {
    fn insert_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_dir(&self, path: &Path) -> StrataResult<Vec<DirEntry>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::AdapterFailure {
            reason: "memory filesystem lock poisoned".into(),
        })?;

        if inner.unreadable.contains(path) {
            return Err(ApplicationError::directory_read(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            )
            .into());
        }
        if !inner.directories.contains(path) {
            let kind = if inner.files.contains_key(path) {
                io::Error::other("not a directory")
            } else {
                io::Error::new(io::ErrorKind::NotFound, "no such file or directory")
            };
            return Err(ApplicationError::directory_read(path, kind).into());
        }

        let child_name = |child: &Path| {
            (child.parent() == Some(path))
                .then(|| child.file_name())
                .flatten()
                .map(|name| name.to_string_lossy().into_owned())
        };

        let mut entries: Vec<DirEntry> = inner
            .directories
            .iter()
            .filter_map(|dir| child_name(dir).map(DirEntry::dir))
            .chain(
                inner
                    .files
                    .keys()
                    .filter_map(|file| child_name(file).map(DirEntry::file)),
            )
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }

    fn remove_all(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::AdapterFailure {
            reason: "memory filesystem lock poisoned".into(),
        })?;

        if inner.undeletable.contains(path) {
            return Err(ApplicationError::remove_failed(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            )
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_direct_children_sorted() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all("/root/b/deep")
            .create_dir_all("/root/a")
            .write_file("/root/c.txt", "x");

        assert_eq!(
            fs.read_dir(Path::new("/root")).unwrap(),
            vec![
                DirEntry::dir("a"),
                DirEntry::dir("b"),
                DirEntry::file("c.txt"),
            ]
        );
    }

    #[test]
    fn read_dir_of_missing_or_denied_path_fails() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all("/root/locked").deny_read("/root/locked");

        assert!(fs.read_dir(Path::new("/missing")).is_err());
        assert!(fs.read_dir(Path::new("/root/locked")).is_err());
        assert!(fs.read_dir(Path::new("/root")).is_ok());
    }

    #[test]
    fn remove_all_drops_the_subtree_only() {
        let fs = MemoryFilesystem::new();
        fs.write_file("/root/nested/dir/file", "x")
            .write_file("/root/nested/keep", "y");

        fs.remove_all(Path::new("/root/nested/dir")).unwrap();
        fs.remove_all(Path::new("/root/never-existed")).unwrap();

        assert!(!fs.exists(Path::new("/root/nested/dir")));
        assert!(!fs.exists(Path::new("/root/nested/dir/file")));
        assert_eq!(fs.read_file("/root/nested/keep").as_deref(), Some("y"));
    }

    #[test]
    fn denied_remove_fails_and_keeps_the_path() {
        let fs = MemoryFilesystem::new();
        fs.write_file("/root/a.planfile", "x")
            .deny_remove("/root/a.planfile");

        assert!(fs.remove_all(Path::new("/root/a.planfile")).is_err());
        assert!(fs.exists(Path::new("/root/a.planfile")));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.write_file("/x/y", "z");
        assert_eq!(other.list_files(), vec![PathBuf::from("/x/y")]);

        other.clear();
        assert!(!fs.is_dir("/x"));
    }
}
