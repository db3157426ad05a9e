//! Path Helpers
//!
//! Lexical path handling shared by the loader and the generator. Paths
//! are never resolved against the filesystem here, so symlinks are kept
//! as written and missing directories are fine.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{BatchError, Result};

/// Removes `.` segments and folds `..` into the preceding segment.
///
/// A `..` that would climb above the root is dropped; one at the start
/// of a relative path is kept.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

/// Returns the absolute, cleaned form of `path`.
///
/// Relative paths are anchored at the current working directory.
pub fn absolute_clean(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean_path(path));
    }

    let cwd = env::current_dir().map_err(|e| BatchError::io(path, e))?;
    Ok(clean_path(&cwd.join(path)))
}

/// Joins `parts` under `root` and cleans the result.
///
/// A part with a leading `/` is still placed under `root`.
pub fn join_clean<I, P>(root: &str, parts: I) -> PathBuf
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut joined = PathBuf::from(root);
    for part in parts {
        for component in part.as_ref().components() {
            match component {
                Component::RootDir | Component::Prefix(_) => {}
                other => joined.push(other.as_os_str()),
            }
        }
    }
    clean_path(&joined)
}
