//! # FDL Path Model (`path`)
//!
//! File: lib/src/path/mod.rs
//!
//! **DISCLAIMER:** This library is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Pure functions that turn raw path fragments into the library's canonical
//! form and answer structural questions about canonical paths. Nothing in
//! this module touches the filesystem.
//!
//! The canonical form:
//! - uses `/` as the only separator (Windows `\` is rewritten on the way in),
//! - never contains runs of separators,
//! - never ends in a separator, except when the whole path is a filesystem
//!   root (`/`, or `C:/` on Windows),
//! - is empty when it denotes the current working directory.
//!
//! ## Architecture
//!
//! - **`resolve`**: `validate`, `normalize`, `convert`, `join` (building paths).
//! - **`parts`**: `extension`, `file_name`, `full_name`, `root_path` and the
//!   native conversions (taking paths apart).
//!
//! Every rule that differs between operating systems takes a [`Target`], so the
//! Windows rules can be exercised from a Unix test run. The unsuffixed functions
//! use [`Target::current`].
//!
//! ## Examples
//!
//! ```rust
//! use fdl::path::{self, Target};
//!
//! let p = path::join_for("a/b", "c.txt", Target::Posix)?;
//! assert_eq!(p.as_str(), "a/b/c.txt");
//! assert_eq!(path::extension(p.as_str()), Some("txt"));
//! assert_eq!(path::file_name(p.as_str()), "c");
//! assert_eq!(path::root_path_for(p.as_str(), Target::Posix), "a/b");
//! assert_eq!(path::to_native_path_for(p.as_str(), Target::Windows), "a\\b\\c.txt");
//! # Ok::<(), fdl::FdlError>(())
//! ```
//!
use std::fmt;
use std::path::PathBuf;

mod parts;
mod resolve;

pub use parts::{
    extension, file_name, from_native_path, from_native_path_for, full_name, root_path,
    root_path_for, to_native_path, to_native_path_for,
};
pub use resolve::{
    check_for, convert, convert_for, join, join_for, normalize, normalize_for,
    trim_directory_separator, validate, validate_for,
};

/// The separator used by canonical paths on every target.
pub const SEPARATOR: char = '/';

/// The operating-system family whose path rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Posix,
    Windows,
}

impl Target {
    /// The target this library was compiled for.
    pub const fn current() -> Target {
        if cfg!(windows) {
            Target::Windows
        } else {
            Target::Posix
        }
    }

    /// Separator used by native paths of this target.
    pub const fn native_separator(self) -> char {
        match self {
            Target::Posix => '/',
            Target::Windows => '\\',
        }
    }

    /// Whether `c` separates segments in a raw (not yet normalized) path.
    pub(crate) fn is_separator(self, c: char) -> bool {
        c == SEPARATOR || (self == Target::Windows && c == '\\')
    }
}

/// A validated path in canonical form.
///
/// Only this module can build one, so holding a `CanonicalPath` means the
/// string passed [`validate_for`] for the target it was converted with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    pub(crate) fn from_validated(path: String) -> Self {
        CanonicalPath(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty path, i.e. the current working directory.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Native form as a `PathBuf` for handing to `std::fs`. The empty path
    /// becomes `.`.
    pub fn to_std_path(&self) -> PathBuf {
        if self.0.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(to_native_path(&self.0))
        }
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true if `path` is a bare filesystem root for `target`.
pub(crate) fn is_root(path: &str, target: Target) -> bool {
    path == "/" || (target == Target::Windows && path.len() == 3 && has_drive_prefix(path) && path.ends_with('/'))
}

/// `X:` at the start of the path.
pub(crate) fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
