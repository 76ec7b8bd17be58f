//! # File Entity
//!
//! File: lib/src/entity/file.rs
//!
//! **DISCLAIMER:** This library is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! `File` is the base entity: a canonical path plus a kind tag, immutable
//! after construction. Constructors are the only place a path is validated,
//! so every `File` value holds a syntactically valid path. Whether anything
//! exists at that path is a separate question answered by `exists`.
//!
//! ## Operations
//!
//! | group | methods | failure channel |
//! | --- | --- | --- |
//! | construction | `new`, `with_root`, `relative_to`, `from_native_path` | `BadPath` |
//! | path queries | `full_path`, `extension`, `file_name`, `full_name`, `root_path`, `to_native_path` | none |
//! | disk queries | `exists`, `is_directory_on_disk` | none (false on error) |
//! | | `size` | `FileMissing`, `SizeFailure` |
//! | mutations | `create`, `delete`, `move_to` | precondition errors, then `Ok(bool)` |
//! | streams | `open`, `open_binary`, `open_with` | `IsDirectory`, `FileMissing`, `FileFail` |
//!
use super::{EntityKind, TextExtensions};
use crate::error::{FdlError, Operation, Result};
use crate::path::{self, CanonicalPath, Target};
use crate::platform;
use crate::stream::{FileManager, FileStream, OsStreamHandler, StreamHandler};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A validated filesystem location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File {
    path: CanonicalPath,
    kind: EntityKind,
}

impl File {
    /// Builds a `File` from a single path, absolute or relative to the working
    /// directory. The empty string names the working directory itself.
    ///
    /// # Errors
    ///
    /// `BadPath` if the path does not validate for the current target, for
    /// instance because it ends in a separator.
    pub fn new(path: &str) -> Result<File> {
        Self::from_raw(path, EntityKind::File)
    }

    /// Builds a `File` at `path` relative to the `root` string.
    pub fn with_root(root: &str, path: &str) -> Result<File> {
        Ok(File {
            path: path::join(root, path)?,
            kind: EntityKind::File,
        })
    }

    /// Builds a `File` at `path` relative to another entity. The root is only
    /// read here; the new `File` keeps no link to it.
    pub fn relative_to(root: &File, path: &str) -> Result<File> {
        Self::with_root(root.path.as_str(), path)
    }

    /// Builds a `File` from a path in the platform's native form.
    pub fn from_native_path(native: &str) -> Result<File> {
        Self::from_raw(native, EntityKind::File)
    }

    pub(crate) fn from_raw(raw: &str, kind: EntityKind) -> Result<File> {
        let target = Target::current();
        let normalized = path::normalize_for(raw, target);
        path::check_for(&normalized, target).map_err(|reason| FdlError::bad_path(raw, reason))?;
        debug!("Constructed {} entity '{}'", kind, normalized);
        Ok(File {
            path: CanonicalPath::from_validated(normalized),
            kind,
        })
    }

    pub(crate) fn from_parts(path: CanonicalPath, kind: EntityKind) -> File {
        File { path, kind }
    }

    /// The canonical path, set once at construction.
    pub fn full_path(&self) -> &CanonicalPath {
        &self.path
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Text after the last `.` of the final segment. Always `None` for
    /// directories; see `crate::path` for the dotfile rule.
    pub fn extension(&self) -> Option<&str> {
        if self.is_directory() {
            return None;
        }
        path::extension(self.path.as_str())
    }

    /// Final segment without extension.
    pub fn file_name(&self) -> &str {
        if self.is_directory() {
            return self.full_name();
        }
        path::file_name(self.path.as_str())
    }

    /// Final segment with extension.
    pub fn full_name(&self) -> &str {
        path::full_name(self.path.as_str())
    }

    /// All segments but the last.
    pub fn root_path(&self) -> &str {
        path::root_path(self.path.as_str())
    }

    pub fn to_native_path(&self) -> String {
        path::to_native_path(self.path.as_str())
    }

    /// The static kind tag. No filesystem access.
    pub fn is_directory(&self) -> bool {
        self.kind == EntityKind::Directory
    }

    /// Asks the filesystem whether a directory currently exists at this path.
    pub fn is_directory_on_disk(&self) -> bool {
        platform::is_dir(&self.path)
    }

    /// Extension-based guess using the default text extensions.
    pub fn is_binary(&self) -> bool {
        self.is_binary_with(&TextExtensions::default())
    }

    /// True unless the extension is one of `text`. A file without extension
    /// counts as binary. Content is never read.
    pub fn is_binary_with(&self, text: &TextExtensions) -> bool {
        match self.extension() {
            Some(ext) => !text.contains(ext),
            None => true,
        }
    }

    /// Never fails; any query error reads as "does not exist".
    pub fn exists(&self) -> bool {
        platform::exists(&self.path)
    }

    /// Byte length of the entry.
    ///
    /// # Errors
    ///
    /// - `FileMissing` if nothing exists at the path.
    /// - `SizeFailure` if the entry exists but its size cannot be read.
    /// - `Unsupported` on targets without a platform implementation.
    pub fn size(&self) -> Result<u64> {
        platform::size(&self.path)
    }

    /// Creates the entry: an empty file, or a directory for directory-tagged
    /// entities. Missing ancestors are created when `recursive` is true.
    ///
    /// Returns `Ok(true)` when the entry was created or already existed, and
    /// `Ok(false)` when the OS refused.
    ///
    /// # Errors
    ///
    /// `FileMissing` when `recursive` is false and the parent directory does
    /// not exist.
    pub fn create(&self, recursive: bool) -> Result<bool> {
        if !recursive {
            let parent = self.parent_path();
            if let Some(parent) = parent {
                if !platform::checked_exists(&parent, Operation::Create)? {
                    debug!("Parent '{}' of '{}' is missing", parent, self.path);
                    return Err(FdlError::missing(Operation::Create, self.path.as_str()));
                }
            }
        }
        platform::create_entry(&self.path, self.kind, recursive)
    }

    /// Removes the entry. Directories are only removed when empty. A symlink
    /// is removed itself, even when it dangles.
    ///
    /// # Errors
    ///
    /// `FileMissing` if nothing exists at the path.
    pub fn delete(&self) -> Result<bool> {
        if !platform::checked_entry_exists(&self.path, Operation::Delete)? {
            return Err(FdlError::missing(Operation::Delete, self.path.as_str()));
        }
        platform::delete_entry(&self.path, false)
    }

    /// Moves the entry to `destination`, creating the destination's parent
    /// chain first when `recursive_create` is true. An existing destination
    /// is never overwritten (`Ok(false)`).
    ///
    /// `self` keeps naming the old location afterwards.
    ///
    /// # Errors
    ///
    /// - `FileMissing` if the source does not exist, or if `recursive_create`
    ///   is false and the destination's root does not exist.
    /// - `FileFail` if the destination's parent chain cannot be created, or
    ///   its parent exists but is not a directory.
    pub fn move_to(&self, destination: &File, recursive_create: bool) -> Result<bool> {
        if !platform::checked_entry_exists(&self.path, Operation::Move)? {
            return Err(FdlError::missing(Operation::Move, self.path.as_str()));
        }

        if let Some(parent) = destination.parent_path() {
            if !platform::checked_exists(&parent, Operation::Move)? {
                if !recursive_create {
                    return Err(FdlError::missing(Operation::Move, destination.path.as_str()));
                }
                let created = File::from_parts(parent.clone(), EntityKind::Directory).create(true)?;
                if !created {
                    return Err(FdlError::fail(
                        Operation::Move,
                        destination.path.as_str(),
                        format!("could not create destination directory '{}'", parent),
                    ));
                }
            } else if !platform::is_dir(&parent) {
                return Err(FdlError::fail(
                    Operation::Move,
                    destination.path.as_str(),
                    format!("destination parent '{}' is not a directory", parent),
                ));
            }
        }

        platform::move_entry(&self.path, &destination.path)
    }

    /// Opens a stream on this file, inferring binary treatment from the
    /// extension.
    pub fn open(&self) -> Result<FileStream> {
        self.open_binary(self.is_binary())
    }

    /// Opens a stream with explicit binary treatment, using the plain OS
    /// handler.
    ///
    /// # Errors
    ///
    /// - `IsDirectory` for directory-tagged entities, checked before any
    ///   handle is acquired.
    /// - `FileMissing` if the file does not exist.
    /// - `FileFail` if the OS refuses to open it.
    pub fn open_binary(&self, binary: bool) -> Result<FileStream> {
        self.open_stream(binary, Arc::new(OsStreamHandler))
    }

    /// Opens a stream through the first handler in `manager` that accepts
    /// this file, using the manager's text extensions for binary inference.
    pub fn open_with(&self, manager: &FileManager) -> Result<FileStream> {
        let binary = self.is_binary_with(manager.text_extensions());
        self.open_stream(binary, manager.handler_for(self))
    }

    fn open_stream(&self, binary: bool, handler: Arc<dyn StreamHandler>) -> Result<FileStream> {
        let mut stream = FileStream::with_handler(self, binary, handler)?;
        if !platform::checked_exists(&self.path, Operation::Open)? {
            return Err(FdlError::missing(Operation::Open, self.path.as_str()));
        }
        if let Err(e) = stream.try_open() {
            warn!("Could not open stream on '{}': {}", self.path, e);
            return Err(e);
        }
        Ok(stream)
    }

    /// Canonical parent, or `None` when the parent is the working directory.
    fn parent_path(&self) -> Option<CanonicalPath> {
        let root = self.root_path();
        if root.is_empty() || root == self.path.as_str() {
            return None;
        }
        path::convert(root)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}
