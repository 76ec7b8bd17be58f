//! # FDL
//!
//! File: lib/src/lib.rs
//!
//! **DISCLAIMER:** This library is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! FDL is a small filesystem abstraction with three pieces:
//!
//! - `File` and `Directory`: immutable path entities with one canonical,
//!   `/`-separated form on every platform, plus operations to query, create,
//!   delete and move what they name.
//! - `FileStream`: a byte stream over a file with independent read and write
//!   cursors.
//! - `FileManager`: a registry of `StreamHandler`s so files such as `.gz`
//!   archives can be served through something other than a plain OS handle.
//!
//! ## Architecture
//!
//! - `path`: canonical path validation, normalization and decomposition.
//! - `entity`: `File`, `Directory` and the text extension set.
//! - `stream`: `FileStream`, handlers and the registry.
//! - `list`: `ImmutableList`, the snapshot type returned by directory listing.
//! - `platform`: the OS collaborator, chosen at compile time. Targets other
//!   than Unix and Windows get an implementation that returns `Unsupported`.
//! - `error`: `FdlError` and the crate `Result` alias.
//!
//! Logging goes through `tracing`; the library never installs a subscriber.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use fdl::{Directory, FileManager};
//!
//! # fn main() -> fdl::Result<()> {
//! let dir = Directory::new("build/")?;
//! dir.create(true)?;
//! let log = dir.open_file("run.log.gz")?;
//! log.create(false)?;
//!
//! let manager = FileManager::with_builtin_handlers();
//! let mut stream = manager.open(&log)?;
//! stream.write(b"started\n")?;
//! stream.close();
//!
//! for entry in dir.contained_files()?.iter() {
//!     println!("{} ({})", entry.full_name(), entry.kind());
//! }
//! # Ok(())
//! # }
//! ```
//!
pub mod entity;
pub mod error;
pub mod list;
pub mod path;
mod platform;
pub mod stream;

pub use entity::{Directory, EntityKind, File, TextExtensions, DEFAULT_TEXT_EXTENSIONS};
pub use error::{ErrorKind, FdlError, Operation, Result};
pub use list::ImmutableList;
pub use path::{CanonicalPath, Target, SEPARATOR};
pub use platform::PLATFORM_NAME;
pub use stream::{
    FileManager, FileStream, GzipStreamHandler, OsStreamHandler, StreamBackend, StreamHandler,
};
