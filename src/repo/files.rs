use crate::{errors::{AppError, AppResult}, security::ensure_contained};
use glob::Pattern;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Reads a text file under `root`.
///
/// Containment is checked first, so an escaping path reports `AccessDenied`
/// whether or not its target exists.
pub fn read_text(path: &Path, root: &Path) -> AppResult<String> {
    let resolved = ensure_contained(path, root)?;
    let meta = match fs::metadata(&resolved) {
        Ok(m) => m,
        // A path running through a regular file does not exist either.
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Err(AppError::NotFound(format!("File not found: {}", path.display())))
        }
        Err(e) => return Err(e.into()),
    };
    if !meta.is_file() {
        return Err(AppError::NotAFile(path.display().to_string()));
    }
    Ok(fs::read_to_string(&resolved)?)
}

/// Recursively lists regular files below `directory` whose file name matches
/// `pattern` at any depth, as sorted relative paths. A missing directory
/// lists as empty.
pub fn list_files(directory: &Path, pattern: &str) -> AppResult<Vec<String>> {
    let pattern = Pattern::new(pattern)
        .map_err(|e| AppError::InvalidParams(format!("bad pattern '{pattern}': {e}")))?;
    if !directory.is_dir() {
        return Ok(Vec::new());
    }
    let mut files: Vec<String> = WalkDir::new(directory)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| pattern.matches(&entry.file_name().to_string_lossy()))
        .filter_map(|entry| entry.path().strip_prefix(directory).ok().map(relative_string))
        .collect();
    files.sort();
    Ok(files)
}

/// Best-effort substring test.
///
/// Unreadable or non-UTF-8 files count as "not found": a search must never
/// fail the caller's request because one file could not be read.
pub fn contains(file: &Path, query: &str, case_sensitive: bool) -> bool {
    let Ok(content) = fs::read_to_string(file) else { return false };
    if case_sensitive {
        content.contains(query)
    } else {
        content.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Names of the regular files directly inside `directory`, in directory order.
pub fn member_names(directory: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(directory) else { return Vec::new() };
    entries
        .filter_map(Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect()
}

/// Non-hidden subdirectories directly inside `directory`, sorted by name.
pub fn visible_subdirs(directory: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(directory) else { return Vec::new() };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    names
}

pub fn relative_string(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
