//! # Unsupported Platform
//!
//! File: lib/src/platform/unsupported.rs
//!
//! Stand-in for targets without a platform implementation. Every operation
//! reports `FdlError::Unsupported`; `exists` and `is_dir` answer false.
//!
use super::{ListedEntry, PLATFORM_NAME};
use crate::entity::EntityKind;
use crate::error::{FdlError, Operation, Result};
use crate::path::CanonicalPath;
use std::fs;
use tracing::warn;

fn unsupported(operation: Operation, path: &CanonicalPath) -> FdlError {
    warn!("{} is not supported on {} yet", operation, PLATFORM_NAME);
    FdlError::Unsupported {
        operation,
        path: path.as_str().to_string(),
        platform: PLATFORM_NAME,
    }
}

pub(crate) fn exists(_path: &CanonicalPath) -> bool {
    false
}

pub(crate) fn checked_exists(path: &CanonicalPath, operation: Operation) -> Result<bool> {
    Err(unsupported(operation, path))
}

pub(crate) fn checked_entry_exists(path: &CanonicalPath, operation: Operation) -> Result<bool> {
    Err(unsupported(operation, path))
}

pub(crate) fn is_dir(_path: &CanonicalPath) -> bool {
    false
}

pub(crate) fn size(path: &CanonicalPath) -> Result<u64> {
    Err(unsupported(Operation::Size, path))
}

pub(crate) fn create_entry(path: &CanonicalPath, _kind: EntityKind, _recursive: bool) -> Result<bool> {
    Err(unsupported(Operation::Create, path))
}

pub(crate) fn delete_entry(path: &CanonicalPath, _recursive: bool) -> Result<bool> {
    Err(unsupported(Operation::Delete, path))
}

pub(crate) fn move_entry(from: &CanonicalPath, _to: &CanonicalPath) -> Result<bool> {
    Err(unsupported(Operation::Move, from))
}

pub(crate) fn open_handle(path: &CanonicalPath) -> Result<fs::File> {
    Err(unsupported(Operation::Open, path))
}

pub(crate) fn list_dir(path: &CanonicalPath) -> Result<Vec<ListedEntry>> {
    Err(unsupported(Operation::List, path))
}
