//! # Path Decomposition
//!
//! File: lib/src/path/parts.rs
//!
//! Structural queries over canonical paths, and conversion to and from the
//! native separator.
//!
//! Extension rule: the extension is whatever follows the LAST `.` of the final
//! segment. A final segment whose only `.` is its first character (`.bashrc`)
//! is a dotfile and has no extension; `.` and `..` have none either; a
//! trailing dot (`archive.`) gives the empty extension.
//!
use super::{convert_for, has_drive_prefix, CanonicalPath, Target, SEPARATOR};

/// Final segment of `path`, extension included.
pub fn full_name(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Splits a segment into stem and extension.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    if name == "." || name == ".." {
        return (name, None);
    }
    match name.rfind('.') {
        None | Some(0) => (name, None),
        Some(index) => (&name[..index], Some(&name[index + 1..])),
    }
}

/// Substring after the last `.` of the final segment, if any.
pub fn extension(path: &str) -> Option<&str> {
    split_extension(full_name(path)).1
}

/// Final segment without its extension.
pub fn file_name(path: &str) -> &str {
    split_extension(full_name(path)).0
}

/// Everything before the final separator.
///
/// A single relative segment has the empty root (the working directory);
/// children of a filesystem root keep the root, separator included.
pub fn root_path_for(path: &str, target: Target) -> &str {
    match path.rfind(SEPARATOR) {
        None => "",
        Some(0) => &path[..1],
        Some(index) => {
            let head = &path[..index];
            if target == Target::Windows && head.len() == 2 && has_drive_prefix(head) {
                &path[..=index]
            } else {
                head
            }
        }
    }
}

pub fn root_path(path: &str) -> &str {
    root_path_for(path, Target::current())
}

/// Canonical path in the native form of `target`.
pub fn to_native_path_for(path: &str, target: Target) -> String {
    match target {
        Target::Posix => path.to_string(),
        Target::Windows => path.replace(SEPARATOR, "\\"),
    }
}

pub fn to_native_path(path: &str) -> String {
    to_native_path_for(path, Target::current())
}

/// Native path back to canonical form. `None` if it does not validate.
pub fn from_native_path_for(raw: &str, target: Target) -> Option<CanonicalPath> {
    convert_for(raw, target)
}

pub fn from_native_path(raw: &str) -> Option<CanonicalPath> {
    from_native_path_for(raw, Target::current())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{join_for, normalize_for};

    #[test]
    fn test_decomposes_nested_file() {
        let p = "a/b/c.txt";
        assert_eq!(file_name(p), "c");
        assert_eq!(extension(p), Some("txt"));
        assert_eq!(full_name(p), "c.txt");
        assert_eq!(root_path_for(p, Target::Posix), "a/b");
    }

    #[test]
    fn test_extension_uses_last_dot() {
        assert_eq!(extension("backup.tar.gz"), Some("gz"));
        assert_eq!(file_name("backup.tar.gz"), "backup.tar");
        // Dots in directory names do not count.
        assert_eq!(extension("v1.2/readme"), None);
    }

    #[test]
    fn test_dotfiles_have_no_extension() {
        assert_eq!(extension("home/.bashrc"), None);
        assert_eq!(file_name("home/.bashrc"), ".bashrc");
        assert_eq!(extension(".config.toml"), Some("toml"));
        assert_eq!(file_name(".config.toml"), ".config");
        assert_eq!(extension(".."), None);
        assert_eq!(extension("a/."), None);
    }

    #[test]
    fn test_trailing_dot_is_empty_extension() {
        assert_eq!(extension("archive."), Some(""));
        assert_eq!(file_name("archive."), "archive");
    }

    #[test]
    fn test_root_path_edges() {
        assert_eq!(root_path_for("c.txt", Target::Posix), "");
        assert_eq!(root_path_for("/c.txt", Target::Posix), "/");
        assert_eq!(root_path_for("/", Target::Posix), "/");
        assert_eq!(root_path_for("C:/x.txt", Target::Windows), "C:/");
        assert_eq!(root_path_for("C:/d/x.txt", Target::Windows), "C:/d");
        assert_eq!(root_path_for("", Target::Posix), "");
    }

    #[test]
    fn test_root_of_join_is_normalized_root() {
        let cases = [("a/b", "c"), ("a//b", "c.txt"), ("/", "x"), ("", "y"), ("/usr/lib", "z.so")];
        for (root, segment) in cases {
            let joined = join_for(root, segment, Target::Posix).unwrap();
            assert!(!joined.is_empty());
            assert_eq!(
                root_path_for(joined.as_str(), Target::Posix),
                normalize_for(root, Target::Posix)
            );
            assert_eq!(full_name(joined.as_str()), segment);
        }
    }

    #[test]
    fn test_native_round_trip() {
        let posix = ["a/b/c.txt", "/usr/bin", "", "/", "dir with space/x"];
        let windows = ["a/b/c.txt", "C:/Users/me", "C:/", "", "//server/share/f"];
        for (target, paths) in [(Target::Posix, &posix), (Target::Windows, &windows)] {
            for p in paths.iter() {
                let native = to_native_path_for(p, target);
                let back = from_native_path_for(&native, target).unwrap();
                assert_eq!(back.as_str(), *p, "target = {:?}", target);
            }
        }
    }

    #[test]
    fn test_windows_native_form() {
        assert_eq!(to_native_path_for("a/b/c", Target::Windows), "a\\b\\c");
        assert_eq!(to_native_path_for("a/b/c", Target::Posix), "a/b/c");
    }
}
