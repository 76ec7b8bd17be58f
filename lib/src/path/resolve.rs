//! # Path Construction
//!
//! File: lib/src/path/resolve.rs
//!
//! Validation, normalization and joining of raw path fragments.
//!
use super::{has_drive_prefix, is_root, CanonicalPath, Target, SEPARATOR};
use crate::error::{FdlError, Result};
use std::borrow::Cow;

/// Characters Windows refuses anywhere in a path. `:` is handled separately
/// because it is legal in a drive designator.
const WINDOWS_RESERVED: &[char] = &['<', '>', '"', '|', '?', '*'];

/// Checks `path` against the rules of `target`, returning the reason it is
/// rejected.
///
/// The empty path is valid (it names the working directory). A path ending in
/// a separator is rejected unless it is a bare root.
pub fn check_for(path: &str, target: Target) -> std::result::Result<(), &'static str> {
    if path.is_empty() {
        return Ok(());
    }
    if path.contains('\0') {
        return Err("contains a NUL character");
    }
    if path.ends_with(|c| target.is_separator(c)) && !is_root(&normalize_for(path, target), target) {
        return Err("ends with a path separator");
    }
    if target == Target::Windows {
        for (index, c) in path.char_indices() {
            if c.is_control() {
                return Err("contains a control character");
            }
            if WINDOWS_RESERVED.contains(&c) {
                return Err("contains a character reserved on Windows");
            }
            if c == ':' && !(index == 1 && is_drive_designator(path, target)) {
                return Err("contains ':' outside a drive designator");
            }
        }
    }
    Ok(())
}

/// `X:` followed by the end of the path or a separator. Drive-relative forms
/// such as `C:name` are not accepted.
fn is_drive_designator(path: &str, target: Target) -> bool {
    has_drive_prefix(path) && path[2..].chars().next().map_or(true, |c| target.is_separator(c))
}

/// Whether `path` is acceptable for `target`.
pub fn validate_for(path: &str, target: Target) -> bool {
    check_for(path, target).is_ok()
}

/// Whether `path` is acceptable for the current target.
pub fn validate(path: &str) -> bool {
    validate_for(path, Target::current())
}

/// Rewrites platform separators to `/` and collapses separator runs.
///
/// On Windows a leading `//` (UNC prefix) survives. Idempotent.
pub fn normalize_for(path: &str, target: Target) -> String {
    let unified: Cow<'_, str> = match target {
        Target::Windows => Cow::Owned(path.replace('\\', "/")),
        Target::Posix => Cow::Borrowed(path),
    };

    let (prefix, rest) = match target {
        Target::Windows if unified.starts_with("//") => ("//", &unified[2..]),
        _ => ("", &unified[..]),
    };

    let mut out = String::with_capacity(unified.len());
    out.push_str(prefix);
    let mut previous_was_separator = !prefix.is_empty();
    for c in rest.chars() {
        if c == SEPARATOR {
            if previous_was_separator {
                continue;
            }
            previous_was_separator = true;
        } else {
            previous_was_separator = false;
        }
        out.push(c);
    }
    out
}

pub fn normalize(path: &str) -> String {
    normalize_for(path, Target::current())
}

/// Normalizes then validates. `None` means the path cannot be represented.
pub fn convert_for(raw: &str, target: Target) -> Option<CanonicalPath> {
    let normalized = normalize_for(raw, target);
    validate_for(&normalized, target).then(|| CanonicalPath::from_validated(normalized))
}

pub fn convert(raw: &str) -> Option<CanonicalPath> {
    convert_for(raw, Target::current())
}

/// Joins `root` and `relative` with exactly one separator.
///
/// An empty `root` yields `relative`, an empty `relative` yields `root`.
///
/// # Errors
///
/// `BadPath` if `relative` is absolute, or if the joined result does not
/// validate for `target`.
pub fn join_for(root: &str, relative: &str, target: Target) -> Result<CanonicalPath> {
    let root_n = normalize_for(root, target);
    let relative_n = normalize_for(relative, target);
    if relative_n.starts_with(SEPARATOR) || (target == Target::Windows && has_drive_prefix(&relative_n)) {
        return Err(FdlError::bad_path(relative, "relative segment is an absolute path"));
    }

    let joined = if relative_n.is_empty() {
        root_n
    } else if root_n.is_empty() {
        relative_n
    } else if is_root(&root_n, target) {
        format!("{}{}", root_n, relative_n)
    } else {
        let trimmed = root_n.strip_suffix(SEPARATOR).unwrap_or(&root_n);
        format!("{}{}{}", trimmed, SEPARATOR, relative_n)
    };

    match check_for(&joined, target) {
        Ok(()) => Ok(CanonicalPath::from_validated(joined)),
        Err(reason) => Err(FdlError::bad_path(joined, reason)),
    }
}

pub fn join(root: &str, relative: &str) -> Result<CanonicalPath> {
    join_for(root, relative, Target::current())
}

/// Drops one trailing separator so `"a/b/"` can name a directory. Bare roots
/// are returned unchanged.
pub fn trim_directory_separator(raw: &str, target: Target) -> &str {
    if is_root(&normalize_for(raw, target), target) {
        return raw;
    }
    match raw.chars().last() {
        Some(c) if target.is_separator(c) => &raw[..raw.len() - c.len_utf8()],
        _ => raw,
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_validate_rejects_trailing_separator() {
        assert!(!validate_for("a/b/", Target::Posix));
        assert!(!validate_for("a\\b\\", Target::Windows));
        assert!(validate_for("a/b", Target::Posix));
        assert!(validate_for("", Target::Posix));
    }

    #[test]
    fn test_validate_accepts_bare_roots() {
        assert!(validate_for("/", Target::Posix));
        assert!(validate_for("C:/", Target::Windows));
        assert!(validate_for("C:\\", Target::Windows));
    }

    #[test]
    fn test_validate_rejects_nul_everywhere() {
        assert!(!validate_for("a\0b", Target::Posix));
        assert!(!validate_for("a\0b", Target::Windows));
    }

    #[test]
    fn test_windows_reserved_characters() {
        assert_eq!(
            check_for("a/b?.txt", Target::Windows),
            Err("contains a character reserved on Windows")
        );
        assert_eq!(
            check_for("a:b", Target::Windows),
            Err("contains ':' outside a drive designator")
        );
        assert_eq!(
            check_for("C:name.txt", Target::Windows),
            Err("contains ':' outside a drive designator")
        );
        assert!(validate_for("C:/Users/me", Target::Windows));
        assert!(validate_for("C:\\Users\\me", Target::Windows));
        assert!(validate_for("C:", Target::Windows));
        // Legal on POSIX.
        assert!(validate_for("a/b?.txt", Target::Posix));
        assert!(validate_for("a:b", Target::Posix));
    }

    #[test]
    fn test_normalize_collapses_and_rewrites() {
        assert_eq!(normalize_for("a//b///c", Target::Posix), "a/b/c");
        assert_eq!(normalize_for("a\\b\\c", Target::Windows), "a/b/c");
        // Backslash is an ordinary character on POSIX.
        assert_eq!(normalize_for("a\\b", Target::Posix), "a\\b");
        assert_eq!(normalize_for("\\\\server\\share", Target::Windows), "//server/share");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["a//b", "/x//y/", "", "C:\\\\dir\\\\f.txt", "//srv///a"] {
            for target in [Target::Posix, Target::Windows] {
                let once = normalize_for(raw, target);
                assert_eq!(normalize_for(&once, target), once, "raw = {:?}", raw);
            }
        }
    }

    #[test]
    fn test_convert_returns_none_for_unrepresentable() {
        assert!(convert_for("a/b/", Target::Posix).is_none());
        assert!(convert_for("a//", Target::Posix).is_none());
        assert_eq!(convert_for("a//b", Target::Posix).unwrap().as_str(), "a/b");
    }

    #[test]
    fn test_join_places_one_separator() {
        assert_eq!(join_for("a/b", "c.txt", Target::Posix).unwrap().as_str(), "a/b/c.txt");
        assert_eq!(join_for("a/b/", "c.txt", Target::Posix).unwrap().as_str(), "a/b/c.txt");
        assert_eq!(join_for("/", "etc", Target::Posix).unwrap().as_str(), "/etc");
        assert_eq!(join_for("C:\\", "dir", Target::Windows).unwrap().as_str(), "C:/dir");
    }

    #[test]
    fn test_join_with_empty_fragments() {
        assert_eq!(join_for("", "x", Target::Posix).unwrap().as_str(), "x");
        assert_eq!(join_for("x", "", Target::Posix).unwrap().as_str(), "x");
        assert_eq!(join_for("", "", Target::Posix).unwrap().as_str(), "");
    }

    #[test]
    fn test_join_rejects_absolute_relative_segment() {
        let err = join_for("a", "/etc", Target::Posix).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadPath);
        assert_eq!(err.path(), "/etc");
        let err = join_for("a", "D:/x", Target::Windows).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadPath);
    }

    #[test]
    fn test_join_rejects_trailing_separator_result() {
        let err = join_for("a", "b/", Target::Posix).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadPath);
        assert!(err.to_string().contains("ends with a path separator"));

        let err = join_for("a/", "b/", Target::Posix).unwrap_err();
        assert_eq!(err.path(), "a/b/");
    }

    #[test]
    fn test_trim_directory_separator() {
        assert_eq!(trim_directory_separator("a/b/", Target::Posix), "a/b");
        assert_eq!(trim_directory_separator("a\\b\\", Target::Windows), "a\\b");
        assert_eq!(trim_directory_separator("/", Target::Posix), "/");
        assert_eq!(trim_directory_separator("C:/", Target::Windows), "C:/");
        // Only one separator is dropped.
        assert_eq!(trim_directory_separator("a//", Target::Posix), "a/");
    }
}
