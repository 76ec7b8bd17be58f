//! # Directory Entity
//!
//! File: lib/src/entity/directory.rs
//!
//! A `Directory` is a `File` whose kind tag is `EntityKind::Directory`. It
//! dereferences to `File`, so every path query and mutation is available on
//! it; `create` makes a directory, `open` fails with `IsDirectory`.
//!
//! Unlike `File`, the constructors accept the `"a/b/"` idiom by dropping one
//! trailing separator before validation.
//!
use super::{EntityKind, File};
use crate::error::{FdlError, Operation, Result};
use crate::list::ImmutableList;
use crate::path::{self, Target};
use crate::platform;
use std::fmt;
use std::ops::Deref;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Directory {
    file: File,
}

impl Directory {
    /// Builds a `Directory` from a single path. The empty string names the
    /// working directory.
    pub fn new(path: &str) -> Result<Directory> {
        let trimmed = path::trim_directory_separator(path, Target::current());
        Ok(Directory {
            file: File::from_raw(trimmed, EntityKind::Directory)?,
        })
    }

    pub fn with_root(root: &str, path: &str) -> Result<Directory> {
        let trimmed = path::trim_directory_separator(path, Target::current());
        let joined = path::join(root, trimmed)?;
        Ok(Directory {
            file: File::from_parts(joined, EntityKind::Directory),
        })
    }

    pub fn relative_to(root: &File, path: &str) -> Result<Directory> {
        Self::with_root(root.full_path().as_str(), path)
    }

    pub fn from_native_path(native: &str) -> Result<Directory> {
        Self::new(native)
    }

    /// Resolves `relative` against this directory. The result is not checked
    /// against the disk.
    pub fn open_file(&self, relative: &str) -> Result<File> {
        File::relative_to(&self.file, relative)
    }

    /// Like `open_file`, for a subdirectory.
    pub fn open_directory(&self, relative: &str) -> Result<Directory> {
        Directory::relative_to(&self.file, relative)
    }

    /// Snapshot of the direct children, sorted by name. Subdirectories come
    /// back tagged as directories. Later filesystem changes do not affect the
    /// returned list.
    ///
    /// # Errors
    ///
    /// - `FileMissing` if the directory does not exist.
    /// - `FileFail` if the path is not a directory or cannot be read.
    pub fn contained_files(&self) -> Result<ImmutableList<File>> {
        let entries = platform::list_dir(self.file.full_path())?;
        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let child = path::join(self.file.full_path().as_str(), &entry.name).map_err(|e| {
                FdlError::fail(
                    Operation::List,
                    self.file.full_path().as_str(),
                    format!("child '{}' has no valid path: {}", entry.name, e),
                )
            })?;
            let kind = if entry.is_dir {
                EntityKind::Directory
            } else {
                EntityKind::File
            };
            children.push(File::from_parts(child, kind));
        }
        debug!("'{}' contains {} entries", self.file, children.len());
        Ok(children.into())
    }

    /// Removes the directory and everything below it.
    ///
    /// # Errors
    ///
    /// `FileMissing` if the directory does not exist.
    pub fn delete_recursive(&self) -> Result<bool> {
        if !platform::checked_entry_exists(self.file.full_path(), Operation::Delete)? {
            return Err(FdlError::missing(Operation::Delete, self.file.full_path().as_str()));
        }
        platform::delete_entry(self.file.full_path(), true)
    }

    pub fn as_file(&self) -> &File {
        &self.file
    }

    pub fn into_file(self) -> File {
        self.file
    }
}

impl Deref for Directory {
    type Target = File;

    fn deref(&self) -> &File {
        &self.file
    }
}

impl From<Directory> for File {
    fn from(directory: Directory) -> File {
        directory.file
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file, f)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    fn dir_at(path: &std::path::Path) -> Directory {
        Directory::from_native_path(path.to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_trailing_separator_is_stripped() {
        let dir = Directory::new("a/b/").unwrap();
        assert_eq!(dir.full_path().as_str(), "a/b");
        assert!(dir.is_directory());
        assert_eq!(dir.extension(), None);
        assert_eq!(dir.file_name(), "b");
    }

    #[test]
    fn test_directory_has_no_extension() {
        let dir = Directory::new("release.v2").unwrap();
        assert_eq!(dir.extension(), None);
        assert_eq!(dir.full_name(), "release.v2");
        assert_eq!(dir.file_name(), "release.v2");
    }

    #[test]
    fn test_open_file_resolves_relative() {
        let dir = Directory::new("assets").unwrap();
        let file = dir.open_file("img/logo.png").unwrap();
        assert_eq!(file.full_path().as_str(), "assets/img/logo.png");
        assert!(!file.is_directory());
        assert_eq!(dir.open_file("/abs").unwrap_err().kind(), ErrorKind::BadPath);
    }

    #[test]
    fn test_open_on_directory_fails() {
        let temp = tempdir().unwrap();
        let dir = dir_at(temp.path());
        let err = dir.open().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IsDirectory);
    }

    #[test]
    fn test_entities_sort_by_path_then_kind() {
        let mut dirs = vec![
            Directory::new("b").unwrap(),
            Directory::new("a/c").unwrap(),
            Directory::new("a").unwrap(),
        ];
        dirs.sort();
        let paths: Vec<&str> = dirs.iter().map(|d| d.full_path().as_str()).collect();
        assert_eq!(paths, vec!["a", "a/c", "b"]);

        let as_dir = Directory::new("same").unwrap().into_file();
        let as_file = File::new("same").unwrap();
        let set: std::collections::BTreeSet<File> = [as_dir.clone(), as_file.clone()].into();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![as_file, as_dir]);
        assert!(EntityKind::File < EntityKind::Directory);
    }

    #[test]
    fn test_create_directory_entity() {
        let temp = tempdir().unwrap();
        let dir = dir_at(temp.path()).open_directory("x/y/z").unwrap();
        assert_eq!(dir.create(false).unwrap_err().kind(), ErrorKind::FileMissing);
        assert!(dir.create(true).unwrap());
        assert!(temp.path().join("x/y/z").is_dir());
        assert!(dir.is_directory_on_disk());
    }

    #[test]
    fn test_contained_files_snapshot() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a.bin"), "a").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let dir = dir_at(temp.path());
        let files = dir.contained_files().unwrap();
        assert_eq!(files.len(), 3);
        let names: Vec<&str> = files.iter().map(|f| f.full_name()).collect();
        assert_eq!(names, vec!["a.bin", "b.txt", "sub"]);
        assert!(files[2].is_directory());
        assert!(!files[0].is_directory());

        fs::write(temp.path().join("c.txt"), "c").unwrap();
        assert_eq!(files.len(), 3);
        assert_eq!(dir.contained_files().unwrap().len(), 4);
    }

    #[test]
    fn test_contained_files_missing_directory() {
        let temp = tempdir().unwrap();
        let dir = dir_at(&temp.path().join("nope"));
        assert_eq!(dir.contained_files().unwrap_err().kind(), ErrorKind::FileMissing);
    }

    #[test]
    fn test_delete_recursive() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("tree/leaf")).unwrap();
        let tree = dir_at(&temp.path().join("tree"));
        assert!(!tree.delete().unwrap());
        assert!(tree.delete_recursive().unwrap());
        assert!(!tree.exists());
    }
}
