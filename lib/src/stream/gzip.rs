//! # Gzip Stream Handler
//!
//! File: lib/src/stream/gzip.rs
//!
//! Serves `.gz` files as their decompressed content. Every member of the
//! file is inflated into memory when the stream opens (concatenated members
//! read as one stream, like `gzip -d`); reads, writes and seeks work
//! on that buffer, and `sync` (flush or close) deflates the buffer back over
//! the file through the same OS handle as a single member. An empty file is an empty stream.
//!
use super::handler::{StreamBackend, StreamHandler};
use crate::entity::File;
use crate::error::{FdlError, Operation, Result};
use crate::platform;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct GzipStreamHandler;

impl StreamHandler for GzipStreamHandler {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn can_handle(&self, file: &File) -> bool {
        file.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    }

    fn open(&self, file: &File, _binary: bool) -> Result<Box<dyn StreamBackend>> {
        let mut handle = platform::open_handle(file.full_path())?;
        let mut compressed = Vec::new();
        handle
            .read_to_end(&mut compressed)
            .map_err(|e| FdlError::from_io(Operation::Open, file.full_path().as_str(), e))?;

        let mut content = Vec::new();
        if !compressed.is_empty() {
            MultiGzDecoder::new(&compressed[..])
                .read_to_end(&mut content)
                .map_err(|e| FdlError::from_io(Operation::Open, file.full_path().as_str(), e))?;
        }
        debug!(
            "Inflated '{}': {} -> {} bytes",
            file,
            compressed.len(),
            content.len()
        );

        Ok(Box::new(GzipBackend {
            handle,
            buffer: Cursor::new(content),
            dirty: false,
        }))
    }
}

/// In-memory view of a gzip file, written back on `sync`.
struct GzipBackend {
    handle: fs::File,
    buffer: Cursor<Vec<u8>>,
    dirty: bool,
}

impl Read for GzipBackend {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.buffer.read(buf)
    }
}

impl Write for GzipBackend {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.dirty = true;
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for GzipBackend {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.buffer.seek(pos)
    }
}

impl StreamBackend for GzipBackend {
    fn sync(&mut self) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.handle.set_len(0)?;
        self.handle.seek(SeekFrom::Start(0))?;
        let mut encoder = GzEncoder::new(&mut self.handle, Compression::default());
        encoder.write_all(self.buffer.get_ref())?;
        encoder.finish()?;
        self.handle.flush()?;
        self.dirty = false;
        info!("Wrote back {} uncompressed bytes", self.buffer.get_ref().len());
        Ok(())
    }
}
