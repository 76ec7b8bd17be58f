//! # File Streams
//!
//! File: lib/src/stream/mod.rs
//!
//! **DISCLAIMER:** This library is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! A `FileStream` is a read/write byte stream over one file. It keeps two
//! independent cursors, one for reading and one for writing, over a single
//! backend handle: before every read or write the handle is repositioned to
//! the matching cursor. Writing never moves the read cursor and vice versa.
//!
//! ## Architecture
//!
//! - `FileStream` owns the entity it was built from, the binary flag, the
//!   handler that produces its backend, and the backend while open.
//! - `handler` defines the `StreamHandler` / `StreamBackend` seam and the
//!   plain OS handler.
//! - `gzip` serves `.gz` files as their decompressed content.
//! - `manager` holds the handler registry (`FileManager`) used by
//!   `File::open_with`.
//!
//! ## Lifecycle
//!
//! A stream is built closed, then opened. `open` on an already open stream is
//! a no-op that reports success. `close` is idempotent and is also run when the
//! stream is dropped. Opening resets both cursors to 0.
//!
//! Text mode is carried for handlers to inspect; neither built-in handler
//! translates bytes, so text and binary streams read the same data.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use fdl::File;
//!
//! # fn main() -> fdl::Result<()> {
//! let file = File::new("notes.txt")?;
//! file.create(true)?;
//! let mut stream = file.open()?;
//! stream.write(b"hello")?;
//! let mut buf = [0u8; 5];
//! stream.read(&mut buf)?;
//! assert_eq!(&buf, b"hello");
//! # Ok(())
//! # }
//! ```
//!
pub mod gzip;
pub mod handler;
pub mod manager;

pub use gzip::GzipStreamHandler;
pub use handler::{OsStreamHandler, StreamBackend, StreamHandler};
pub use manager::FileManager;

use crate::entity::File;
use crate::error::{FdlError, Operation, Result};
use std::fmt;
use std::io::{Read, Seek, SeekFrom, Write};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct FileStream {
    file: File,
    binary: bool,
    handler: Arc<dyn StreamHandler>,
    backend: Option<Box<dyn StreamBackend>>,
    read_pos: u64,
    write_pos: u64,
}

impl FileStream {
    /// Builds a closed stream over `file`, inferring binary treatment from its
    /// extension.
    ///
    /// # Errors
    ///
    /// `IsDirectory` if `file` is tagged as a directory.
    pub fn new(file: &File) -> Result<FileStream> {
        Self::with_mode(file, file.is_binary())
    }

    /// Builds a closed stream with explicit binary treatment.
    pub fn with_mode(file: &File, binary: bool) -> Result<FileStream> {
        Self::with_handler(file, binary, Arc::new(OsStreamHandler))
    }

    /// Builds a closed stream whose backend will come from `handler`.
    pub fn with_handler(
        file: &File,
        binary: bool,
        handler: Arc<dyn StreamHandler>,
    ) -> Result<FileStream> {
        if file.is_directory() {
            return Err(FdlError::IsDirectory {
                operation: Operation::Open,
                path: file.full_path().as_str().to_string(),
            });
        }
        Ok(FileStream {
            file: file.clone(),
            binary,
            handler,
            backend: None,
            read_pos: 0,
            write_pos: 0,
        })
    }

    /// Acquires the backend. Returns `true` when the stream is open afterwards,
    /// including when it already was.
    pub fn open(&mut self) -> bool {
        match self.try_open() {
            Ok(()) => true,
            Err(e) => {
                warn!("Stream open failed: {}", e);
                false
            }
        }
    }

    pub(crate) fn try_open(&mut self) -> Result<()> {
        if self.backend.is_some() {
            return Ok(());
        }
        let backend = self.handler.open(&self.file, self.binary)?;
        self.backend = Some(backend);
        self.read_pos = 0;
        self.write_pos = 0;
        debug!(
            "Opened {} stream on '{}' via '{}'",
            if self.binary { "binary" } else { "text" },
            self.file,
            self.handler.name()
        );
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.backend.is_some()
    }

    pub fn is_binary(&self) -> bool {
        self.binary
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn handler_name(&self) -> &'static str {
        self.handler.name()
    }

    /// Writes all of `data` at the write cursor and advances it.
    pub fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.write_sized(data, None)
    }

    /// Writes the first `len` bytes of `data` (all of it when `None`). A `len`
    /// larger than `data` fails without writing anything.
    pub fn write_sized(&mut self, data: &[u8], len: Option<usize>) -> Result<usize> {
        let count = len.unwrap_or(data.len());
        if count > data.len() {
            return Err(FdlError::fail(
                Operation::Write,
                self.file.full_path().as_str(),
                format!("asked to write {} bytes from a {}-byte buffer", count, data.len()),
            ));
        }
        let path = self.path_string();
        let pos = self.write_pos;
        let backend = self.backend_mut(Operation::Write)?;
        backend
            .seek(SeekFrom::Start(pos))
            .and_then(|_| backend.write_all(&data[..count]))
            .map_err(|e| FdlError::from_io(Operation::Write, path, e))?;
        self.write_pos += count as u64;
        Ok(count)
    }

    /// Reads up to `buf.len()` bytes at the read cursor and advances it.
    /// Returns 0 at end of stream.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let path = self.path_string();
        let pos = self.read_pos;
        let backend = self.backend_mut(Operation::Read)?;
        backend
            .seek(SeekFrom::Start(pos))
            .map_err(|e| FdlError::from_io(Operation::Read, path.clone(), e))?;
        let mut filled = 0;
        while filled < buf.len() {
            match backend.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(FdlError::from_io(Operation::Read, path, e)),
            }
        }
        self.read_pos += filled as u64;
        Ok(filled)
    }

    /// Reads from the read cursor to the end of the stream.
    pub fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut chunk = [0u8; 8192];
        loop {
            let n = self.read(&mut chunk)?;
            if n == 0 {
                return Ok(out);
            }
            out.extend_from_slice(&chunk[..n]);
        }
    }

    /// Moves the read cursor to `pos`. Positions past the current length fail
    /// with `EndOfStream` and leave the cursor where it was.
    pub fn seek_read(&mut self, pos: u64) -> Result<()> {
        self.check_seek(Operation::SeekRead, pos)?;
        self.read_pos = pos;
        Ok(())
    }

    /// Moves the write cursor to `pos`, with the same bounds as `seek_read`.
    pub fn seek_write(&mut self, pos: u64) -> Result<()> {
        self.check_seek(Operation::SeekWrite, pos)?;
        self.write_pos = pos;
        Ok(())
    }

    pub fn tell_read(&self) -> Result<u64> {
        self.tell(Operation::TellRead, self.read_pos)
    }

    pub fn tell_write(&self) -> Result<u64> {
        self.tell(Operation::TellWrite, self.write_pos)
    }

    /// Current length of the stream content.
    pub fn len(&mut self) -> Result<u64> {
        let path = self.path_string();
        let backend = self.backend_mut(Operation::Size)?;
        backend.seek(SeekFrom::End(0)).map_err(|e| FdlError::SizeFailure {
            operation: Operation::Size,
            path,
            reason: e.to_string(),
        })
    }

    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Pushes pending writes to storage. Returns `false` if the stream is
    /// closed or the backend reports an error.
    pub fn flush(&mut self) -> bool {
        let Some(backend) = self.backend.as_mut() else {
            return false;
        };
        match backend.sync() {
            Ok(()) => true,
            Err(e) => {
                warn!("Flush of '{}' failed: {}", self.file, e);
                false
            }
        }
    }

    /// Flushes and releases the backend. Closing a closed stream does nothing.
    pub fn close(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            if let Err(e) = backend.sync() {
                warn!("Flush on close of '{}' failed: {}", self.file, e);
            }
            debug!("Closed stream on '{}'", self.file);
        }
    }

    fn tell(&self, operation: Operation, pos: u64) -> Result<u64> {
        if self.backend.is_none() {
            return Err(FdlError::SizeFailure {
                operation,
                path: self.path_string(),
                reason: "stream is not open".to_string(),
            });
        }
        Ok(pos)
    }

    fn check_seek(&mut self, operation: Operation, pos: u64) -> Result<()> {
        let path = self.path_string();
        let backend = self.backend_mut(operation)?;
        let length = backend
            .seek(SeekFrom::End(0))
            .map_err(|e| FdlError::from_io(operation, path.clone(), e))?;
        if pos > length {
            return Err(FdlError::EndOfStream {
                operation,
                path,
                position: pos,
                length,
            });
        }
        Ok(())
    }

    fn backend_mut(&mut self, operation: Operation) -> Result<&mut Box<dyn StreamBackend>> {
        match self.backend.as_mut() {
            Some(backend) => Ok(backend),
            None => Err(FdlError::fail(
                operation,
                self.file.full_path().as_str(),
                "stream is not open",
            )),
        }
    }

    fn path_string(&self) -> String {
        self.file.full_path().as_str().to_string()
    }
}

impl fmt::Debug for FileStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStream")
            .field("file", &self.file)
            .field("binary", &self.binary)
            .field("handler", &self.handler.name())
            .field("open", &self.is_open())
            .field("read_pos", &self.read_pos)
            .field("write_pos", &self.write_pos)
            .finish()
    }
}

impl Drop for FileStream {
    fn drop(&mut self) {
        self.close();
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Directory;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    fn created(dir: &std::path::Path, name: &str) -> File {
        let path = dir.join(name);
        let file = File::from_native_path(path.to_str().unwrap()).unwrap();
        assert!(file.create(false).unwrap());
        file
    }

    #[test]
    fn test_independent_cursors() {
        let dir = tempdir().unwrap();
        let file = created(dir.path(), "data.bin");
        let mut stream = file.open().unwrap();

        assert_eq!(stream.write(b"abcdef").unwrap(), 6);
        assert_eq!(stream.tell_write().unwrap(), 6);
        assert_eq!(stream.tell_read().unwrap(), 0);

        let mut buf = [0u8; 3];
        assert_eq!(stream.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"abc");
        assert_eq!(stream.tell_read().unwrap(), 3);
        assert_eq!(stream.tell_write().unwrap(), 6);

        stream.write(b"gh").unwrap();
        assert_eq!(stream.read_to_end().unwrap(), b"defgh");
    }

    #[test]
    fn test_read_at_end_returns_zero() {
        let dir = tempdir().unwrap();
        let file = created(dir.path(), "empty.bin");
        let mut stream = file.open().unwrap();
        let mut buf = [0u8; 4];
        assert_eq!(stream.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_seek_past_end_fails_and_keeps_cursor() {
        let dir = tempdir().unwrap();
        let file = created(dir.path(), "short.bin");
        let mut stream = file.open().unwrap();
        stream.write(b"1234").unwrap();

        stream.seek_read(4).unwrap();
        let err = stream.seek_read(5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EndOfStream);
        assert_eq!(stream.tell_read().unwrap(), 4);

        assert_eq!(stream.seek_write(9).unwrap_err().kind(), ErrorKind::EndOfStream);
        stream.seek_write(1).unwrap();
        stream.write(b"X").unwrap();
        stream.seek_read(0).unwrap();
        assert_eq!(stream.read_to_end().unwrap(), b"1X34");
    }

    #[test]
    fn test_write_sized() {
        let dir = tempdir().unwrap();
        let file = created(dir.path(), "part.bin");
        let mut stream = file.open().unwrap();
        assert_eq!(stream.write_sized(b"abcdef", Some(2)).unwrap(), 2);
        assert_eq!(
            stream.write_sized(b"ab", Some(3)).unwrap_err().kind(),
            ErrorKind::FileFail
        );
        assert_eq!(stream.len().unwrap(), 2);
    }

    #[test]
    fn test_closed_stream_operations() {
        let dir = tempdir().unwrap();
        let file = created(dir.path(), "c.bin");
        let mut stream = FileStream::new(&file).unwrap();
        assert!(!stream.is_open());
        assert_eq!(stream.tell_read().unwrap_err().kind(), ErrorKind::SizeFailure);
        assert_eq!(stream.tell_write().unwrap_err().kind(), ErrorKind::SizeFailure);
        assert_eq!(stream.write(b"x").unwrap_err().kind(), ErrorKind::FileFail);
        assert_eq!(stream.read(&mut [0u8; 1]).unwrap_err().kind(), ErrorKind::FileFail);
        assert!(!stream.flush());
        stream.close();
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let dir = tempdir().unwrap();
        let file = created(dir.path(), "r.bin");
        let mut stream = file.open().unwrap();
        stream.write(b"xyz").unwrap();
        assert!(stream.open());
        assert_eq!(stream.tell_write().unwrap(), 3);

        stream.close();
        stream.close();
        assert!(stream.open());
        assert_eq!(stream.tell_write().unwrap(), 0);
        assert_eq!(stream.read_to_end().unwrap(), b"xyz");
    }

    #[test]
    fn test_drop_closes_and_persists() {
        let dir = tempdir().unwrap();
        let file = created(dir.path(), "d.bin");
        {
            let mut stream = file.open().unwrap();
            stream.write(&[7u8; 10]).unwrap();
        }
        assert_eq!(file.size().unwrap(), 10);
        assert_eq!(fs::read(dir.path().join("d.bin")).unwrap(), vec![7u8; 10]);
    }

    #[test]
    fn test_directory_stream_rejected() {
        let dir = tempdir().unwrap();
        let directory = Directory::from_native_path(dir.path().to_str().unwrap()).unwrap();
        let err = FileStream::new(&directory).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IsDirectory);
    }

    #[test]
    fn test_mode_inferred_from_extension() {
        let dir = tempdir().unwrap();
        let text = created(dir.path(), "readme.md");
        let blob = created(dir.path(), "image.png");
        assert!(!text.open().unwrap().is_binary());
        assert!(blob.open().unwrap().is_binary());
        assert!(text.open_binary(true).unwrap().is_binary());
    }
}
