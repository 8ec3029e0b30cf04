//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use strata_core::{
    application::{ApplicationError, ports::DirEntry, ports::Filesystem},
    error::StrataResult,
};

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

impl Filesystem for LocalFilesystem {
    fn read_dir(&self, path: &Path) -> StrataResult<Vec<DirEntry>> {
        let read_error = |e| ApplicationError::directory_read(path, e);

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            // `DirEntry::file_type` does not follow symlinks.
            let file_type = entry.file_type().map_err(read_error)?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }

    fn remove_all(&self, path: &Path) -> StrataResult<()> {
        let metadata = match std::fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(ApplicationError::remove_failed(path, e).into()),
        };

        let result = if metadata.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApplicationError::remove_failed(path, e).into()),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn read_dir_reports_entry_kinds() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("vpc")).unwrap();
        fs::write(temp.path().join("README.md"), "docs").unwrap();

        let mut entries = LocalFilesystem::new().read_dir(temp.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![DirEntry::file("README.md"), DirEntry::dir("vpc")]
        );
    }

    #[test]
    fn read_dir_on_missing_path_names_it() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = LocalFilesystem::new().read_dir(&missing).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn remove_all_handles_files_trees_and_missing_paths() {
        let temp = TempDir::new().unwrap();
        let tree = temp.path().join(".terraform/providers");
        fs::create_dir_all(&tree).unwrap();
        fs::write(tree.join("lock"), "x").unwrap();
        let file = temp.path().join("a.planfile");
        fs::write(&file, "plan").unwrap();

        let fs_adapter = LocalFilesystem::new();
        fs_adapter.remove_all(&temp.path().join(".terraform")).unwrap();
        fs_adapter.remove_all(&file).unwrap();
        fs_adapter.remove_all(&temp.path().join("never-existed")).unwrap();

        assert!(!temp.path().join(".terraform").exists());
        assert!(!file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_not_reported_as_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();

        let entries = LocalFilesystem::new().read_dir(temp.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert!(!link.is_dir);
    }

    #[cfg(unix)]
    #[test]
    fn removing_a_symlink_keeps_its_target() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real");
        fs::create_dir(&real).unwrap();
        fs::write(real.join("keep.txt"), "x").unwrap();
        std::os::unix::fs::symlink(&real, temp.path().join("link")).unwrap();

        LocalFilesystem::new()
            .remove_all(&temp.path().join("link"))
            .unwrap();

        assert!(real.join("keep.txt").exists());
    }
}
