//! # FDL Error Types
//!
//! File: lib/src/error.rs
//!
//! **DISCLAIMER:** This library is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module defines the single error type returned by every fallible
//! operation in the library. Each variant corresponds to one failure *kind*
//! and carries the path and the [`Operation`] that failed, so an error that
//! reaches the user always says what was being done and to which entity.
//!
//! ## Architecture
//!
//! - `FdlError`: the error enum, derived with `thiserror`.
//! - `ErrorKind`: a field-less tag for each variant, for callers that only
//!   want to branch on the kind (`err.kind() == ErrorKind::FileMissing`).
//! - `Operation`: names the entity or stream operation that failed.
//! - `Result<T>`: alias for `std::result::Result<T, FdlError>`.
//!
//! `Unsupported` is separate from `FileFail`: it means the
//! current target has no platform implementation, not that the filesystem
//! refused the request.
//!
//! ## Examples
//!
//! ```rust
//! use fdl::{ErrorKind, File};
//!
//! let file = File::new("does/not/exist.txt")?;
//! match file.size() {
//!     Ok(size) => println!("{} bytes", size),
//!     Err(e) if e.kind() == ErrorKind::FileMissing => println!("not there yet"),
//!     Err(e) => return Err(e),
//! }
//! # Ok::<(), fdl::FdlError>(())
//! ```
//!
use std::fmt;
use std::io;
use thiserror::Error;

/// The entity or stream operation during which an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Construct,
    ConvertPath,
    Size,
    Create,
    Delete,
    Move,
    Open,
    List,
    Read,
    Write,
    SeekRead,
    SeekWrite,
    TellRead,
    TellWrite,
    Flush,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Construct => "construct",
            Operation::ConvertPath => "convert path",
            Operation::Size => "size",
            Operation::Create => "create",
            Operation::Delete => "delete",
            Operation::Move => "move",
            Operation::Open => "open",
            Operation::List => "list",
            Operation::Read => "read",
            Operation::Write => "write",
            Operation::SeekRead => "seek read",
            Operation::SeekWrite => "seek write",
            Operation::TellRead => "tell read",
            Operation::TellWrite => "tell write",
            Operation::Flush => "flush",
        };
        f.write_str(name)
    }
}

/// Field-less discriminant of [`FdlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadPath,
    FileMissing,
    FileFail,
    SizeFailure,
    EndOfStream,
    IsDirectory,
    Unsupported,
}

/// Error type for every fallible FDL operation.
#[derive(Error, Debug)]
pub enum FdlError {
    #[error("Bad path '{path}': {reason}")]
    BadPath { path: String, reason: String },

    #[error("Cannot {operation} '{path}': file does not exist")]
    FileMissing { operation: Operation, path: String },

    #[error("Failed to {operation} '{path}': {reason}")]
    FileFail {
        operation: Operation,
        path: String,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("Failed to {operation} '{path}': size or position unavailable ({reason})")]
    SizeFailure {
        operation: Operation,
        path: String,
        reason: String,
    },

    #[error("Cannot {operation} '{path}': position {position} is beyond end of stream ({length} bytes)")]
    EndOfStream {
        operation: Operation,
        path: String,
        position: u64,
        length: u64,
    },

    #[error("Cannot {operation} '{path}': path is a directory")]
    IsDirectory { operation: Operation, path: String },

    #[error("Cannot {operation} '{path}': not supported on platform '{platform}' yet")]
    Unsupported {
        operation: Operation,
        path: String,
        platform: &'static str,
    },
}

impl FdlError {
    /// Returns the kind tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FdlError::BadPath { .. } => ErrorKind::BadPath,
            FdlError::FileMissing { .. } => ErrorKind::FileMissing,
            FdlError::FileFail { .. } => ErrorKind::FileFail,
            FdlError::SizeFailure { .. } => ErrorKind::SizeFailure,
            FdlError::EndOfStream { .. } => ErrorKind::EndOfStream,
            FdlError::IsDirectory { .. } => ErrorKind::IsDirectory,
            FdlError::Unsupported { .. } => ErrorKind::Unsupported,
        }
    }

    /// The path the failing operation was applied to.
    pub fn path(&self) -> &str {
        match self {
            FdlError::BadPath { path, .. }
            | FdlError::FileMissing { path, .. }
            | FdlError::FileFail { path, .. }
            | FdlError::SizeFailure { path, .. }
            | FdlError::EndOfStream { path, .. }
            | FdlError::IsDirectory { path, .. }
            | FdlError::Unsupported { path, .. } => path,
        }
    }

    /// The failing operation. Path construction failures report `Construct`.
    pub fn operation(&self) -> Operation {
        match self {
            FdlError::BadPath { .. } => Operation::Construct,
            FdlError::FileMissing { operation, .. }
            | FdlError::FileFail { operation, .. }
            | FdlError::SizeFailure { operation, .. }
            | FdlError::EndOfStream { operation, .. }
            | FdlError::IsDirectory { operation, .. }
            | FdlError::Unsupported { operation, .. } => *operation,
        }
    }

    pub(crate) fn bad_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        FdlError::BadPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(operation: Operation, path: impl Into<String>) -> Self {
        FdlError::FileMissing {
            operation,
            path: path.into(),
        }
    }

    pub(crate) fn fail(operation: Operation, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FdlError::FileFail {
            operation,
            path: path.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Maps an `io::Error` from the platform layer. `NotFound` becomes
    /// `FileMissing`; anything else is `FileFail` with the error kept as source.
    pub(crate) fn from_io(operation: Operation, path: impl Into<String>, err: io::Error) -> Self {
        let path = path.into();
        if err.kind() == io::ErrorKind::NotFound {
            return FdlError::FileMissing { operation, path };
        }
        FdlError::FileFail {
            operation,
            path,
            reason: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, FdlError>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display_names_operation_and_path() {
        let missing = FdlError::missing(Operation::Size, "a/b/c.txt");
        assert_eq!(
            missing.to_string(),
            "Cannot size 'a/b/c.txt': file does not exist"
        );

        let eos = FdlError::EndOfStream {
            operation: Operation::SeekRead,
            path: "log.txt".into(),
            position: 20,
            length: 10,
        };
        assert_eq!(
            eos.to_string(),
            "Cannot seek read 'log.txt': position 20 is beyond end of stream (10 bytes)"
        );
    }

    #[test]
    fn test_unsupported_says_so() {
        let err = FdlError::Unsupported {
            operation: Operation::Create,
            path: "x".into(),
            platform: "wasm32",
        };
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        assert!(err.to_string().contains("not supported on platform 'wasm32'"));
    }

    #[test]
    fn test_from_io_maps_not_found_to_missing() {
        let err = FdlError::from_io(
            Operation::Open,
            "gone.bin",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.kind(), ErrorKind::FileMissing);
        assert_eq!(err.path(), "gone.bin");
        assert_eq!(err.operation(), Operation::Open);
    }

    #[test]
    fn test_from_io_keeps_source_for_other_errors() {
        let err = FdlError::from_io(
            Operation::Delete,
            "locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), ErrorKind::FileFail);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_bad_path_reports_construct() {
        let err = FdlError::bad_path("a/", "ends with a separator");
        assert_eq!(err.operation(), Operation::Construct);
        assert_eq!(err.to_string(), "Bad path 'a/': ends with a separator");
    }
}
