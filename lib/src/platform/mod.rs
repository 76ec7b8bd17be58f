//! # FDL Platform Layer (`platform`)
//!
//! File: lib/src/platform/mod.rs
//!
//! **DISCLAIMER:** This library is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! The only module that performs I/O. Entities and streams call into the
//! functions re-exported here; which implementation they reach is decided at
//! compile time:
//!
//! - **`host`**: Unix and Windows, built on `std::fs`, with `walkdir` for
//!   listings and `fs_extra` as the fallback for moves that `rename` refuses
//!   (e.g. across devices).
//! - **`unsupported`**: every other target. Each call returns
//!   `FdlError::Unsupported` naming the target, so callers can tell "not
//!   ported yet" apart from a real filesystem failure.
//!
//! Both implementations expose the same set of functions:
//!
//! | function | contract |
//! | --- | --- |
//! | `exists` | never fails, false on any error |
//! | `checked_exists` | existence check that still surfaces `Unsupported` |
//! | `checked_entry_exists` | same, without following a final symlink |
//! | `size` | `FileMissing` if absent, `SizeFailure` if stat fails otherwise |
//! | `create_entry` | `Ok(true)` when created or already present, `Ok(false)` on OS failure |
//! | `delete_entry` | `FileMissing` if absent, else `Ok(bool)` |
//! | `move_entry` | `Ok(bool)`; refuses to overwrite an existing destination |
//! | `open_handle` | read/write handle, falling back to read-only |
//! | `list_dir` | direct children sorted by name; `FileFail` on a non UTF-8 name |
//!
//! Path conversion is not part of this layer: it is pure and lives in
//! `crate::path`.
//!

#[cfg(any(unix, windows))]
mod host;
#[cfg(any(unix, windows))]
pub(crate) use host::*;

#[cfg(not(any(unix, windows)))]
mod unsupported;
#[cfg(not(any(unix, windows)))]
pub(crate) use unsupported::*;

/// Name of the operating system the library was built for.
pub const PLATFORM_NAME: &str = std::env::consts::OS;

/// One direct child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListedEntry {
    pub name: String,
    pub is_dir: bool,
}
