//! # Text Extension Set
//!
//! File: lib/src/entity/text.rs
//!
//! The set of extensions treated as text by `File::is_binary_with`. Matching
//! is ASCII case-insensitive. The file's content is never inspected.
//!
use std::collections::BTreeSet;

/// Extensions treated as text unless configured otherwise.
pub const DEFAULT_TEXT_EXTENSIONS: &[&str] = &[
    "txt", "text", "md", "markdown", "rst", "log", "csv", "tsv", "json", "toml", "yaml", "yml",
    "xml", "html", "htm", "css", "ini", "cfg", "conf", "c", "h", "cc", "cpp", "hpp", "rs", "py",
    "js", "ts", "sh", "bat", "tex", "svg",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextExtensions {
    extensions: BTreeSet<String>,
}

impl TextExtensions {
    /// Builds a set from `extensions`; a leading `.` on an entry is ignored.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = TextExtensions::empty();
        for ext in extensions {
            set.insert(ext.as_ref());
        }
        set
    }

    /// A set that treats every file as binary.
    pub fn empty() -> Self {
        TextExtensions {
            extensions: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, extension: &str) {
        let ext = extension.strip_prefix('.').unwrap_or(extension);
        self.extensions.insert(ext.to_ascii_lowercase());
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl Default for TextExtensions {
    fn default() -> Self {
        TextExtensions::new(DEFAULT_TEXT_EXTENSIONS)
    }
}
