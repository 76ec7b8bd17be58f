//! # FDL File Entities (`entity`)
//!
//! File: lib/src/entity/mod.rs
//!
//! **DISCLAIMER:** This library is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! An entity is a validated, in-memory filesystem location. It holds no OS
//! resource: every query or mutation acquires and releases whatever it needs
//! through `crate::platform`, except `open`, which hands the acquired handle
//! to a `FileStream`.
//!
//! ## Architecture
//!
//! - **`File`** (`file.rs`): the base entity. Owns a `CanonicalPath` and a
//!   kind tag; provides the path queries, size/existence queries and the
//!   create / delete / move / open operations.
//! - **`Directory`** (`directory.rs`): a `File` tagged as a directory, with
//!   child resolution and listing. Dereferences to `File` for everything else.
//! - **`TextExtensions`** (`text.rs`): the extension set behind `is_binary`.
//!
//! ## Examples
//!
//! ```rust
//! use fdl::{Directory, File};
//!
//! let file = File::new("a/b/c.txt")?;
//! assert_eq!(file.file_name(), "c");
//! assert_eq!(file.extension(), Some("txt"));
//! assert_eq!(file.full_name(), "c.txt");
//! assert_eq!(file.root_path(), "a/b");
//!
//! let docs = Directory::new("docs/")?;
//! let readme = docs.open_file("README.md")?;
//! assert_eq!(readme.full_path().as_str(), "docs/README.md");
//! # Ok::<(), fdl::FdlError>(())
//! ```
//!
use std::fmt;

mod directory;
mod file;
mod text;

pub use directory::Directory;
pub use file::File;
pub use text::{TextExtensions, DEFAULT_TEXT_EXTENSIONS};

/// Static tag telling whether an entity names a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum EntityKind {
    #[default]
    File,
    Directory,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::File => f.write_str("file"),
            EntityKind::Directory => f.write_str("directory"),
        }
    }
}
