//! # Tbx Path Helpers (`common::fs::paths`)
//!
//! File: tbx/src/common/fs/paths.rs
//!
//! ## Overview
//!
//! Short string-level path helpers: `abspath`, `basename`, `dirname` and
//! `expand`. `basename` and `dirname` work on `/`-separated text so that
//! trailing slashes, repeated slashes and the empty path behave the same way
//! on every platform.
//!
//! ```rust
//! use tbx::common::fs::paths::{basename_segments, dirname_segments};
//!
//! assert_eq!(basename_segments("/a/b/c/d", 2), "c/d");
//! assert_eq!(dirname_segments("/a/b/c/d", 2), "/a/b");
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Returns `path` made absolute against the current directory.
///
/// `.` and `..` components are resolved lexically; symlinks are not followed
/// and the path does not need to exist.
pub fn abspath(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .context("Failed to determine current directory")?
            .join(path)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to remove the root, so "/.." stays "/".
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// The last component of `path`. Same as `basename_segments(path, 1)`.
pub fn basename(path: &str) -> String {
    basename_segments(path, 1)
}

/// The last `segments` non-empty components of `path`, joined with `/`.
///
/// Empty components are dropped first, so `"/"` and `""` give `""`.
/// Asking for more segments than there are returns all of them.
pub fn basename_segments(path: &str, segments: usize) -> String {
    let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
    if segments == 0 {
        return String::new();
    }
    let start = parts.len().saturating_sub(segments);
    parts[start..].join("/")
}

/// Everything before the last component. Same as `dirname_segments(path, 1)`.
pub fn dirname(path: &str) -> String {
    dirname_segments(path, 1)
}

/// Strips `segments` trailing components from `path`.
///
/// Each step drops everything after the final `/`, then trailing slashes,
/// unless only slashes remain: `"/a/b"` → `"/a"`, `"foo"` → `""`,
/// `"/"` → `"/"`, `"////"` → `"////"`.
pub fn dirname_segments(path: &str, segments: usize) -> String {
    let mut current = path;
    for _ in 0..segments {
        current = dirname_once(current);
    }
    current.to_string()
}

fn dirname_once(path: &str) -> &str {
    let head = match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "",
    };
    if !head.is_empty() && head.bytes().any(|b| b != b'/') {
        head.trim_end_matches('/')
    } else {
        head
    }
}

/// Expands `$VAR` and `${VAR}` references, then replaces every `~` with
/// `$HOME` (or nothing, if `HOME` is unset).
///
/// Unknown variables are left as written. `~` is replaced anywhere in the
/// string, including inside expanded values.
pub fn expand(path: &str) -> String {
    let vars = shellexpand::env_with_context_no_errors(path, |name| env::var(name).ok());
    let home = env::var("HOME").unwrap_or_default();
    vars.replace('~', &home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::system::dir::chdir;
    use crate::common::system::env::envset;
    use crate::test_support::process_lock;
    use tempfile::tempdir;

    #[test]
    fn test_abspath() -> Result<()> {
        let _lock = process_lock();
        let tmp = tempdir()?;
        let root = tmp.path().canonicalize()?;
        std::fs::write(root.join("testfile"), "This is the test file")?;
        let found = chdir(&root, || abspath("./testfile"))??;
        assert_eq!(found, root.join("testfile"));
        Ok(())
    }

    #[test]
    fn test_abspath_lexical() -> Result<()> {
        assert_eq!(abspath("/a/b/../c/./d")?, PathBuf::from("/a/c/d"));
        assert_eq!(abspath("/..")?, PathBuf::from("/"));
        Ok(())
    }

    #[test]
    fn test_basename() {
        let cases = [
            ("/a/b/c/d", 1, "d"),
            ("", 1, ""),
            ("foo", 1, "foo"),
            (".", 1, "."),
            ("/", 1, ""),
            ("////", 1, ""),
            ("/a/b/c/d", 2, "c/d"),
            ("", 3, ""),
            ("foo", 4, "foo"),
            (".", 0, ""),
            ("/", 3, ""),
            ("////", 2, ""),
            ("/a/b/c/d", 3, "b/c/d"),
            ("", 5, ""),
            ("foo", 0, ""),
            (".", 7, "."),
        ];
        for (path, segments, expected) in cases {
            assert_eq!(
                basename_segments(path, segments),
                expected,
                "basename_segments({:?}, {})",
                path,
                segments
            );
        }
        assert_eq!(basename("/a/b/c/d"), "d");
    }

    #[test]
    fn test_dirname() {
        let cases = [
            ("/a/b/c/d", 1, "/a/b/c"),
            ("", 1, ""),
            ("foo", 1, ""),
            (".", 1, ""),
            ("/", 1, "/"),
            ("////", 1, "////"),
            ("/a/b/c/d", 2, "/a/b"),
            ("", 3, ""),
            ("foo", 4, ""),
            (".", 0, "."),
            ("/", 3, "/"),
            ("////", 2, "////"),
            ("/a/b/c/d", 3, "/a"),
            ("", 5, ""),
            ("foo", 0, "foo"),
            (".", 7, ""),
            ("a/b//", 1, "a/b"),
            ("//a", 1, "//"),
        ];
        for (path, segments, expected) in cases {
            assert_eq!(
                dirname_segments(path, segments),
                expected,
                "dirname_segments({:?}, {})",
                path,
                segments
            );
        }
        assert_eq!(dirname("/a/b/c/d/e"), "/a/b/c/d");
    }

    #[test]
    fn test_expand() {
        let _lock = process_lock();
        let cases = [
            ("$FOO", "my home dir = /home/dir"),
            ("do nothing", "do nothing"),
            ("$HOME", "/home/dir"),
            ("~", "/home/dir"),
            ("EVAR", "EVAR"),
            ("EVAR/~", "EVAR//home/dir"),
            ("$EVAR", "value"),
            ("~/$EVAR", "/home/dir/value"),
            ("${EVAR}s", "values"),
            ("$TBX_SURELY_UNDEFINED/x", "$TBX_SURELY_UNDEFINED/x"),
        ];
        envset(
            [
                ("HOME", Some("/home/dir")),
                ("FOO", Some("my home dir = ~")),
                ("EVAR", Some("value")),
            ],
            || {
                for (input, expected) in cases {
                    assert_eq!(expand(input), expected, "expand({:?})", input);
                }
            },
        )
        .unwrap();
    }
}
