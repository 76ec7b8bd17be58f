//! # File Manager
//!
//! File: lib/src/stream/manager.rs
//!
//! Registry of stream handlers consulted by `File::open_with`. Handlers are
//! tried in registration order and the first whose `can_handle` accepts the
//! file wins; the OS handler serves everything nobody else claims. The
//! manager also carries the text extension set used to infer binary
//! treatment for files opened through it.
//!
use super::gzip::GzipStreamHandler;
use super::handler::{OsStreamHandler, StreamHandler};
use crate::entity::{File, TextExtensions};
use crate::error::Result;
use crate::stream::FileStream;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct FileManager {
    handlers: Vec<Arc<dyn StreamHandler>>,
    fallback: Arc<dyn StreamHandler>,
    text_extensions: TextExtensions,
}

impl FileManager {
    /// A manager with no registered handlers and the default text extensions.
    pub fn new() -> Self {
        FileManager {
            handlers: Vec::new(),
            fallback: Arc::new(OsStreamHandler),
            text_extensions: TextExtensions::default(),
        }
    }

    /// A manager with the gzip handler registered.
    pub fn with_builtin_handlers() -> Self {
        let mut manager = FileManager::new();
        manager.register(GzipStreamHandler);
        manager
    }

    pub fn with_text_extensions(mut self, text_extensions: TextExtensions) -> Self {
        self.text_extensions = text_extensions;
        self
    }

    /// Adds `handler` after the ones already registered, ahead of the OS
    /// fallback.
    pub fn register<H: StreamHandler + 'static>(&mut self, handler: H) {
        debug!("Registered stream handler '{}'", handler.name());
        self.handlers.push(Arc::new(handler));
    }

    pub fn handler_for(&self, file: &File) -> Arc<dyn StreamHandler> {
        self.handlers
            .iter()
            .find(|h| h.can_handle(file))
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.fallback))
    }

    pub fn text_extensions(&self) -> &TextExtensions {
        &self.text_extensions
    }

    /// Names of the registered handlers in lookup order, fallback last.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|h| h.name())
            .collect()
    }

    pub fn open(&self, file: &File) -> Result<FileStream> {
        file.open_with(self)
    }
}

impl Default for FileManager {
    fn default() -> Self {
        FileManager::new()
    }
}

impl fmt::Debug for FileManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileManager")
            .field("handlers", &self.handler_names())
            .field("text_extensions", &self.text_extensions)
            .finish()
    }
}
