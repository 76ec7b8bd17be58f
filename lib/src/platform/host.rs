//! # Host Platform (Unix / Windows)
//!
//! File: lib/src/platform/host.rs
//!
//! `std::fs` implementation of the platform layer. Canonical paths are turned
//! into native `PathBuf`s with `CanonicalPath::to_std_path` right before each
//! call.
//!
use super::ListedEntry;
use crate::entity::EntityKind;
use crate::error::{FdlError, Operation, Result};
use crate::path::CanonicalPath;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub(crate) fn exists(path: &CanonicalPath) -> bool {
    let native = path.to_std_path();
    let found = fs::metadata(&native).is_ok();
    debug!("exists({:?}) = {}", native, found);
    found
}

/// Existence check for operations that must not mistake "unsupported" for
/// "absent". Always `Ok` on this platform.
pub(crate) fn checked_exists(path: &CanonicalPath, _operation: Operation) -> Result<bool> {
    Ok(exists(path))
}

/// Like `checked_exists`, but does not follow a final symlink, so a dangling
/// link still counts as present. Used by operations that act on the entry
/// itself (delete, move).
pub(crate) fn checked_entry_exists(path: &CanonicalPath, _operation: Operation) -> Result<bool> {
    let native = path.to_std_path();
    let found = fs::symlink_metadata(&native).is_ok();
    debug!("entry_exists({:?}) = {}", native, found);
    Ok(found)
}

pub(crate) fn is_dir(path: &CanonicalPath) -> bool {
    fs::metadata(path.to_std_path())
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

pub(crate) fn size(path: &CanonicalPath) -> Result<u64> {
    let native = path.to_std_path();
    match fs::metadata(&native) {
        Ok(meta) => {
            debug!("size({:?}) = {}", native, meta.len());
            Ok(meta.len())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(FdlError::missing(Operation::Size, path.as_str()))
        }
        Err(e) => Err(FdlError::SizeFailure {
            operation: Operation::Size,
            path: path.as_str().to_string(),
            reason: e.to_string(),
        }),
    }
}

pub(crate) fn create_entry(path: &CanonicalPath, kind: EntityKind, recursive: bool) -> Result<bool> {
    let native = path.to_std_path();

    // Existing entry: success when it is of the requested kind.
    if let Ok(meta) = fs::metadata(&native) {
        let matches = meta.is_dir() == (kind == EntityKind::Directory);
        if matches {
            debug!("{:?} already exists, nothing to create", native);
        } else {
            warn!(
                "Cannot create {:?} as a {}: an entry of the other kind is in the way",
                native, kind
            );
        }
        return Ok(matches);
    }

    if recursive {
        if let Some(parent) = native.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create parent directories {:?}: {}", parent, e);
                return Ok(false);
            }
        }
    }

    let result = match kind {
        EntityKind::Directory => fs::create_dir(&native),
        EntityKind::File => fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&native)
            .map(|_| ()),
    };

    match result {
        Ok(()) => {
            info!("Created {} {:?}", kind, native);
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(true),
        Err(e) => {
            warn!("Failed to create {} {:?}: {}", kind, native, e);
            Ok(false)
        }
    }
}

pub(crate) fn delete_entry(path: &CanonicalPath, recursive: bool) -> Result<bool> {
    let native = path.to_std_path();
    // symlink_metadata so a link is removed rather than its target.
    let meta = match fs::symlink_metadata(&native) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FdlError::missing(Operation::Delete, path.as_str()));
        }
        Err(e) => {
            warn!("Failed to stat {:?} for deletion: {}", native, e);
            return Ok(false);
        }
    };

    let result = if meta.is_dir() {
        if recursive {
            fs::remove_dir_all(&native)
        } else {
            fs::remove_dir(&native)
        }
    } else {
        fs::remove_file(&native)
    };

    match result {
        Ok(()) => {
            info!("Deleted {:?}", native);
            Ok(true)
        }
        Err(e) => {
            warn!("Failed to delete {:?}: {}", native, e);
            Ok(false)
        }
    }
}

pub(crate) fn move_entry(from: &CanonicalPath, to: &CanonicalPath) -> Result<bool> {
    let source = from.to_std_path();
    let target = to.to_std_path();

    if fs::symlink_metadata(&target).is_ok() {
        warn!("Refusing to move {:?}: destination {:?} already exists", source, target);
        return Ok(false);
    }

    match fs::rename(&source, &target) {
        Ok(()) => {
            info!("Moved {:?} to {:?}", source, target);
            Ok(true)
        }
        Err(e) => {
            debug!("rename {:?} -> {:?} failed ({}), falling back to copy and delete", source, target, e);
            Ok(copy_then_delete(&source, &target))
        }
    }
}

/// Moves with `fs_extra` when a plain rename is not possible.
fn copy_then_delete(source: &Path, target: &Path) -> bool {
    let result = if source.is_dir() {
        let mut options = fs_extra::dir::CopyOptions::new();
        // `target` does not exist yet, so copy_inside makes it the new directory.
        options.copy_inside = true;
        fs_extra::dir::move_dir(source, target, &options)
    } else {
        let options = fs_extra::file::CopyOptions::new();
        fs_extra::file::move_file(source, target, &options)
    };

    match result {
        Ok(_) => {
            info!("Moved {:?} to {:?} by copying", source, target);
            true
        }
        Err(e) => {
            warn!("Failed to move {:?} to {:?}: {}", source, target, e);
            false
        }
    }
}

/// Opens `path` for reading and writing, or read-only when writing is denied.
pub(crate) fn open_handle(path: &CanonicalPath) -> Result<fs::File> {
    let native = path.to_std_path();
    let opened = fs::OpenOptions::new().read(true).write(true).open(&native);
    let handle = match opened {
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            debug!("{:?} is not writable, opening read-only", native);
            fs::File::open(&native)
        }
        other => other,
    };
    handle
        .map(|file| {
            debug!("Opened handle for {:?}", native);
            file
        })
        .map_err(|e| FdlError::from_io(Operation::Open, path.as_str(), e))
}

pub(crate) fn list_dir(path: &CanonicalPath) -> Result<Vec<ListedEntry>> {
    let native = path.to_std_path();
    match fs::metadata(&native) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(FdlError::fail(Operation::List, path.as_str(), "not a directory"));
        }
        Err(e) => return Err(FdlError::from_io(Operation::List, path.as_str(), e)),
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(&native)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| FdlError::from_io(Operation::List, path.as_str(), io::Error::from(e)))?;
        let Some(name) = entry.file_name().to_str() else {
            warn!("Entry {:?} in {:?} is not valid UTF-8", entry.file_name(), native);
            return Err(FdlError::fail(
                Operation::List,
                path.as_str(),
                format!("entry {:?} has a name that is not valid UTF-8", entry.file_name()),
            ));
        };
        // Symlinks are reported by what they point to.
        let is_dir = entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir());
        entries.push(ListedEntry {
            name: name.to_string(),
            is_dir,
        });
    }
    debug!("Listed {} entries in {:?}", entries.len(), native);
    Ok(entries)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::path;
    use tempfile::tempdir;

    fn canonical(p: &Path) -> CanonicalPath {
        path::from_native_path(p.to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_create_entry_is_idempotent() {
        let dir = tempdir().unwrap();
        let file = canonical(&dir.path().join("f.txt"));
        assert!(create_entry(&file, EntityKind::File, false).unwrap());
        assert!(create_entry(&file, EntityKind::File, false).unwrap());
        assert!(exists(&file));
        assert!(!is_dir(&file));
    }

    #[test]
    fn test_create_entry_kind_mismatch_is_false() {
        let dir = tempdir().unwrap();
        let file = canonical(&dir.path().join("taken"));
        fs::write(dir.path().join("taken"), "x").unwrap();
        assert!(!create_entry(&file, EntityKind::Directory, true).unwrap());
    }

    #[test]
    fn test_delete_entry_missing() {
        let dir = tempdir().unwrap();
        let gone = canonical(&dir.path().join("gone"));
        assert_eq!(delete_entry(&gone, false).unwrap_err().kind(), ErrorKind::FileMissing);
    }

    #[test]
    fn test_delete_non_empty_dir_needs_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("d/e")).unwrap();
        let d = canonical(&dir.path().join("d"));
        assert!(!delete_entry(&d, false).unwrap());
        assert!(delete_entry(&d, true).unwrap());
        assert!(!exists(&d));
    }

    #[test]
    fn test_move_entry_refuses_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), "a").unwrap();
        fs::write(dir.path().join("b"), "b").unwrap();
        let a = canonical(&dir.path().join("a"));
        let b = canonical(&dir.path().join("b"));
        assert!(!move_entry(&a, &b).unwrap());
        assert_eq!(fs::read_to_string(dir.path().join("b")).unwrap(), "b");
    }

    #[test]
    fn test_copy_then_delete_moves_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/inner")).unwrap();
        fs::write(dir.path().join("src/inner/x.txt"), "x").unwrap();
        assert!(copy_then_delete(&dir.path().join("src"), &dir.path().join("dst")));
        assert!(dir.path().join("dst/inner/x.txt").is_file());
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_list_dir_sorted_with_kinds() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        let listed = list_dir(&canonical(dir.path())).unwrap();
        assert_eq!(
            listed,
            vec![
                ListedEntry { name: "a".into(), is_dir: true },
                ListedEntry { name: "b.txt".into(), is_dir: false },
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_list_dir_fails_on_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ok.txt"), "").unwrap();
        // Not every filesystem accepts raw bytes in names.
        if fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff")), "").is_err() {
            return;
        }
        let err = list_dir(&canonical(dir.path())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileFail);
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[cfg(unix)]
    #[test]
    fn test_entry_exists_sees_dangling_symlink() {
        let dir = tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("link")).unwrap();
        let link = canonical(&dir.path().join("link"));
        assert!(!exists(&link));
        assert!(checked_entry_exists(&link, Operation::Delete).unwrap());
        assert!(delete_entry(&link, false).unwrap());
        assert!(!checked_entry_exists(&link, Operation::Delete).unwrap());
    }

    #[test]
    fn test_list_dir_on_file_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), "").unwrap();
        let err = list_dir(&canonical(&dir.path().join("f"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileFail);
    }
}
