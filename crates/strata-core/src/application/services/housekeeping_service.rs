//! Housekeeping Service - bounded traversal and pruning of component trees.
//!
//! Components live either flat (`components/terraform/<component>`) or one
//! level deep (`components/terraform/<group>/<component>`). Both operations
//! here look at exactly two levels so they cover both layouts without ever
//! descending into tool caches such as `.terraform/`.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::ports::{Diagnostics, Filesystem},
    domain::join_path,
    error::{StrataError, StrataResult},
};

/// Service for listing and pruning the working-directory tree.
pub struct HousekeepingService {
    filesystem: Box<dyn Filesystem>,
    diagnostics: Box<dyn Diagnostics>,
}

impl HousekeepingService {
    /// Create a new housekeeping service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, diagnostics: Box<dyn Diagnostics>) -> Self {
        Self {
            filesystem,
            diagnostics,
        }
    }

    /// Check if a path exists on the underlying filesystem.
    pub fn exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path)
    }

    /// Find directories under `root` whose name starts with `prefix`.
    ///
    /// Level 1 entries are returned as their bare name, level 2 entries as
    /// `<level1>/<level2>`. Every level 1 directory is descended into whether
    /// or not it matched. An empty `prefix` matches everything.
    ///
    /// # Errors
    ///
    /// Fails only when `root` itself cannot be listed. An unreadable level 1
    /// directory is reported through [`Diagnostics::warn`] and skipped.
    #[instrument(skip_all, fields(root = %root.display(), prefix = %prefix))]
    pub fn find_folders_with_prefix(&self, root: &Path, prefix: &str) -> StrataResult<Vec<PathBuf>> {
        let mut folders = Vec::new();

        for dir in self.filesystem.read_dir(root)? {
            if !dir.is_dir {
                continue;
            }

            if matches_prefix(&dir.name, prefix) {
                folders.push(PathBuf::from(&dir.name));
            }

            let level2_path = join_path(root, &dir.name);
            let level2 = match self.filesystem.read_dir(&level2_path) {
                Ok(entries) => entries,
                Err(e) => {
                    self.diagnostics.warn(&format!(
                        "Error reading subdirectory {}: {}",
                        level2_path.display(),
                        root_cause(&e)
                    ));
                    continue;
                }
            };

            folders.extend(
                level2
                    .into_iter()
                    .filter(|sub| sub.is_dir && matches_prefix(&sub.name, prefix))
                    .map(|sub| Path::new(&dir.name).join(sub.name)),
            );
        }

        debug!(found = folders.len(), "Folder search finished");
        Ok(folders)
    }

    /// Delete `items` from `base_path` and from each immediate subdirectory of it.
    ///
    /// The first pass removes `base_path/<item>` for every item; only after it
    /// finishes is `base_path` listed and `base_path/<dir>/<item>` removed for
    /// every child directory. Items are always appended below the directory
    /// being cleaned, so `foo/bar` targets a nested path and `/foo` is
    /// treated as `foo` rather than as an absolute path. Missing items are
    /// not an error.
    ///
    /// # Errors
    ///
    /// Fails only when `base_path` cannot be listed for the second pass.
    /// Work already done is kept.
    #[instrument(skip_all, fields(base_path = %base_path.display(), items = items.len()))]
    pub fn delete_recursive<S: AsRef<str>>(&self, base_path: &Path, items: &[S]) -> StrataResult<()> {
        for item in items {
            let item = item.as_ref();
            let full_path = join_path(base_path, item);

            if let Err(e) = self.filesystem.remove_all(&full_path) {
                self.diagnostics.warn(&format!(
                    "Error deleting {}: {}",
                    full_path.display(),
                    root_cause(&e)
                ));
                continue;
            }
            self.diagnostics.info(&format!("Deleted {item}"));
        }

        let entries = self.filesystem.read_dir(base_path)?;

        for entry in entries.iter().filter(|entry| entry.is_dir) {
            let sub_dir = join_path(base_path, &entry.name);

            for item in items {
                let item = item.as_ref();
                // Level 1 warnings carry only the item name.
                if let Err(e) = self.filesystem.remove_all(&join_path(&sub_dir, item)) {
                    self.diagnostics
                        .warn(&format!("Error deleting {item}: {}", root_cause(&e)));
                }
            }
        }

        Ok(())
    }
}

fn matches_prefix(name: &str, prefix: &str) -> bool {
    prefix.is_empty() || name.starts_with(prefix)
}

/// The underlying cause of an adapter error, without the path the adapter
/// already prepended.
fn root_cause(err: &StrataError) -> String {
    std::error::Error::source(err)
        .map(ToString::to_string)
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use std::io;

    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{DirEntry, MockDiagnostics, MockFilesystem},
    };

    fn denied(path: &Path) -> StrataError {
        ApplicationError::remove_failed(
            path,
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        )
        .into()
    }

    fn unreadable(path: &Path) -> StrataError {
        ApplicationError::directory_read(
            path,
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        )
        .into()
    }

    fn quiet_diagnostics() -> MockDiagnostics {
        let mut diagnostics = MockDiagnostics::new();
        diagnostics.expect_warn().never();
        diagnostics.expect_info().return_const(());
        diagnostics
    }

    #[test]
    fn find_emits_matching_level1_and_level2_dirs() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/root")))
            .returning(|_| {
                Ok(vec![
                    DirEntry::dir("tf-a"),
                    DirEntry::dir("tf-b"),
                    DirEntry::dir("other"),
                    DirEntry::file("tf-file"),
                ])
            });
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/root/tf-a")))
            .returning(|_| Ok(vec![]));
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/root/tf-b")))
            .returning(|_| Ok(vec![DirEntry::dir("sub1"), DirEntry::dir("sub-tf-c")]));
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/root/other")))
            .returning(|_| Ok(vec![DirEntry::dir("tf-d"), DirEntry::file("tf-notes")]));

        let service = HousekeepingService::new(Box::new(fs), Box::new(quiet_diagnostics()));
        let found = service
            .find_folders_with_prefix(Path::new("/root"), "tf-")
            .unwrap();

        assert_eq!(
            found,
            vec![
                PathBuf::from("tf-a"),
                PathBuf::from("tf-b"),
                PathBuf::from("other/tf-d"),
            ]
        );
    }

    #[test]
    fn find_with_empty_prefix_matches_everything() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/c")))
            .returning(|_| Ok(vec![DirEntry::dir("vpc"), DirEntry::dir("networking")]));
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/c/vpc")))
            .returning(|_| Ok(vec![DirEntry::dir(".terraform")]));
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/c/networking")))
            .returning(|_| Ok(vec![DirEntry::dir("dns")]));

        let service = HousekeepingService::new(Box::new(fs), Box::new(quiet_diagnostics()));
        let found = service.find_folders_with_prefix(Path::new("/c"), "").unwrap();

        assert_eq!(
            found,
            vec![
                PathBuf::from("vpc"),
                PathBuf::from("vpc/.terraform"),
                PathBuf::from("networking"),
                PathBuf::from("networking/dns"),
            ]
        );
        assert!(found.iter().all(|p| p.components().count() <= 2));
    }

    #[test]
    fn find_fails_when_root_is_unreadable() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_dir().returning(|p| Err(unreadable(p)));

        let service = HousekeepingService::new(Box::new(fs), Box::new(quiet_diagnostics()));
        let err = service
            .find_folders_with_prefix(Path::new("/missing"), "")
            .unwrap_err();

        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn find_warns_and_continues_on_unreadable_subdirectory() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/root")))
            .returning(|_| Ok(vec![DirEntry::dir("locked"), DirEntry::dir("open")]));
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/root/locked")))
            .returning(|p| Err(unreadable(p)));
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/root/open")))
            .returning(|_| Ok(vec![DirEntry::dir("vpc")]));

        let mut diagnostics = MockDiagnostics::new();
        diagnostics
            .expect_warn()
            .withf(|msg| msg.contains("/root/locked") && msg.contains("permission denied"))
            .times(1)
            .return_const(());

        let service = HousekeepingService::new(Box::new(fs), Box::new(diagnostics));
        let found = service
            .find_folders_with_prefix(Path::new("/root"), "")
            .unwrap();

        assert_eq!(
            found,
            vec![
                PathBuf::from("locked"),
                PathBuf::from("open"),
                PathBuf::from("open/vpc"),
            ]
        );
    }

    #[test]
    fn delete_finishes_level0_before_listing_base() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();

        fs.expect_remove_all()
            .with(eq(PathBuf::from("/base/a.planfile")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_remove_all()
            .with(eq(PathBuf::from("/base/.terraform")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/base")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![DirEntry::dir("group"), DirEntry::file("README.md")]));
        fs.expect_remove_all()
            .with(eq(PathBuf::from("/base/group/a.planfile")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_remove_all()
            .with(eq(PathBuf::from("/base/group/.terraform")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut diagnostics = MockDiagnostics::new();
        diagnostics.expect_warn().never();
        diagnostics
            .expect_info()
            .withf(|msg| msg.starts_with("Deleted "))
            .times(2)
            .return_const(());

        let service = HousekeepingService::new(Box::new(fs), Box::new(diagnostics));
        service
            .delete_recursive(Path::new("/base"), &["a.planfile", ".terraform"])
            .unwrap();
    }

    #[test]
    fn delete_warning_shapes_differ_between_levels() {
        let mut fs = MockFilesystem::new();
        fs.expect_remove_all().returning(|p| Err(denied(p)));
        fs.expect_read_dir()
            .returning(|_| Ok(vec![DirEntry::dir("group")]));

        let mut diagnostics = MockDiagnostics::new();
        diagnostics.expect_info().never();
        diagnostics
            .expect_warn()
            .with(eq("Error deleting /base/x: permission denied"))
            .times(1)
            .return_const(());
        diagnostics
            .expect_warn()
            .with(eq("Error deleting x: permission denied"))
            .times(1)
            .return_const(());

        let service = HousekeepingService::new(Box::new(fs), Box::new(diagnostics));
        service.delete_recursive(Path::new("/base"), &["x"]).unwrap();
    }

    #[test]
    fn delete_fails_when_base_cannot_be_listed() {
        let mut fs = MockFilesystem::new();
        fs.expect_remove_all().times(1).returning(|_| Ok(()));
        fs.expect_read_dir().returning(|p| Err(unreadable(p)));

        let service = HousekeepingService::new(Box::new(fs), Box::new(quiet_diagnostics()));
        let err = service
            .delete_recursive(Path::new("/does-not-exist"), &["x"])
            .unwrap_err();

        assert!(err.to_string().contains("/does-not-exist"));
    }

    #[test]
    fn delete_passes_nested_items_through_join() {
        let mut fs = MockFilesystem::new();
        fs.expect_remove_all()
            .with(eq(PathBuf::from("/base/nested/dir")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_read_dir().returning(|_| Ok(vec![]));

        let service = HousekeepingService::new(Box::new(fs), Box::new(quiet_diagnostics()));
        service
            .delete_recursive(Path::new("/base"), &["nested/dir"])
            .unwrap();
    }

    #[test]
    fn delete_keeps_absolute_items_below_the_base() {
        let mut fs = MockFilesystem::new();
        fs.expect_remove_all()
            .with(eq(PathBuf::from("/base/abs/dir")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_read_dir()
            .with(eq(PathBuf::from("/base")))
            .returning(|_| Ok(vec![DirEntry::dir("group")]));
        fs.expect_remove_all()
            .with(eq(PathBuf::from("/base/group/abs/dir")))
            .times(1)
            .returning(|_| Ok(()));

        let service = HousekeepingService::new(Box::new(fs), Box::new(quiet_diagnostics()));
        service
            .delete_recursive(Path::new("/base"), &["/abs/dir"])
            .unwrap();
    }
}
