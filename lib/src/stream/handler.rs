//! # Stream Handlers
//!
//! File: lib/src/stream/handler.rs
//!
//! **DISCLAIMER:** This library is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! A `StreamHandler` decides whether it can serve a file (`can_handle`) and
//! produces the backend a `FileStream` reads from and writes to. Handlers are
//! registered with a `FileManager` and looked up by first match when a file
//! is opened through it.
//!
//! A backend is anything seekable that can be read and written. `FileStream`
//! repositions it before every read or write, which is how the stream keeps
//! separate read and write cursors over a single handle.
//!
use crate::entity::File;
use crate::error::Result;
use crate::platform;
use std::fs;
use std::io::{self, Read, Seek, Write};
use tracing::debug;

/// The handle a `FileStream` owns while it is open.
pub trait StreamBackend: Read + Write + Seek + Send {
    /// Pushes buffered writes down to storage. Called by `FileStream::flush`
    /// and before the backend is dropped on close.
    fn sync(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl StreamBackend for fs::File {}

/// Produces stream backends for the files it accepts.
pub trait StreamHandler: Send + Sync {
    /// Short name used in logs and by the CLI.
    fn name(&self) -> &'static str;

    /// Whether this handler wants to serve `file`.
    fn can_handle(&self, file: &File) -> bool;

    /// Acquires a backend for `file`. `binary` is the treatment decided when
    /// the stream was built.
    fn open(&self, file: &File, binary: bool) -> Result<Box<dyn StreamBackend>>;
}

/// Plain OS file handle. Accepts every file; used as the registry fallback.
///
/// Text and binary streams are handled identically at the byte level: no
/// newline translation is applied on any platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsStreamHandler;

impl StreamHandler for OsStreamHandler {
    fn name(&self) -> &'static str {
        "os"
    }

    fn can_handle(&self, _file: &File) -> bool {
        true
    }

    fn open(&self, file: &File, binary: bool) -> Result<Box<dyn StreamBackend>> {
        let handle = platform::open_handle(file.full_path())?;
        debug!(
            "OS handle opened for '{}' ({})",
            file,
            if binary { "binary" } else { "text" }
        );
        Ok(Box::new(handle))
    }
}
