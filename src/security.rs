use crate::errors::AppError;
use axum::http::HeaderMap;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Resolves `candidate` and checks it sits at or below `root`.
///
/// Symlinks are resolved before comparing, so a link inside the root that
/// points elsewhere is rejected. Paths that do not exist yet are resolved
/// through their deepest existing ancestor, which keeps a missing
/// `../../etc/x` an access error rather than a not-found.
pub fn ensure_contained(candidate: &Path, root: &Path) -> Result<PathBuf, AppError> {
    let denied = || AppError::AccessDenied(candidate.display().to_string());
    let canon_root = dunce::canonicalize(root).map_err(|_| denied())?;
    let joined = if candidate.is_absolute() { candidate.to_path_buf() } else { root.join(candidate) };
    let resolved = resolve_lenient(&joined).map_err(|_| denied())?;
    if resolved.starts_with(&canon_root) {
        Ok(resolved)
    } else {
        Err(denied())
    }
}

fn resolve_lenient(path: &Path) -> std::io::Result<PathBuf> {
    let mut existing = path.to_path_buf();
    let mut rest: Vec<Option<OsString>> = Vec::new();
    loop {
        match dunce::canonicalize(&existing) {
            Ok(mut out) => {
                for seg in rest.into_iter().rev() {
                    match seg {
                        Some(name) => out.push(name),
                        None => {
                            out.pop();
                        }
                    }
                }
                return Ok(out);
            }
            Err(e) => {
                // None marks a `..` still to be applied once the prefix is known.
                match existing.components().next_back() {
                    Some(Component::Normal(name)) => rest.push(Some(name.to_os_string())),
                    Some(Component::ParentDir) => rest.push(None),
                    Some(Component::CurDir) => {}
                    _ => return Err(e),
                }
                if !existing.pop() {
                    return Err(e);
                }
            }
        }
    }
}

pub fn content_length_ok(headers: &HeaderMap, max_kb: usize) -> Result<(), AppError> {
    if let Some(len) = headers
        .get(axum::http::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<usize>().ok())
    {
        if len > max_kb * 1024 {
            return Err(AppError::RequestTooLarge);
        }
    }
    Ok(())
}
