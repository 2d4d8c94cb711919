//! URI-addressed, read-only views of the repository.
//!
//! | URI                                         | Content                     |
//! |---------------------------------------------|-----------------------------|
//! | `preferences://catalog`                     | template/guide summary JSON |
//! | `preferences://devcontainer/{name}/list`    | template file listing JSON  |
//! | `preferences://devcontainer/{name}/{file}`  | one aliased template file   |
//! | `preferences://guide/{name}`                | one aliased guide           |
//! | `preferences://files/{filepath*}`           | any file inside the root    |

use super::types::{ResourceContents, ResourceInfo};
use crate::{
    errors::{AppError, AppResult},
    repo::{Guide, Repository, TemplateFile, TEMPLATES_DIR},
};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

pub const SCHEME: &str = "preferences://";

const MIME_JSON: &str = "application/json";
const MIME_TEXT: &str = "text/plain";

pub const RESOURCE_TEMPLATES: [ResourceInfo; 5] = [
    ResourceInfo {
        uri_template: "preferences://catalog",
        name: "catalog",
        mime_type: MIME_JSON,
        description: "Lists available devcontainer templates, guides and the repository path.",
    },
    ResourceInfo {
        uri_template: "preferences://devcontainer/{name}/{file}",
        name: "devcontainer_file",
        mime_type: MIME_TEXT,
        description: "A devcontainer template file: config, dockerfile, compose or caddyfile.",
    },
    ResourceInfo {
        uri_template: "preferences://devcontainer/{name}/list",
        name: "devcontainer_list",
        mime_type: MIME_JSON,
        description: "All files in a devcontainer template.",
    },
    ResourceInfo {
        uri_template: "preferences://guide/{name}",
        name: "guide",
        mime_type: MIME_TEXT,
        description: "Guide documentation: claude, readme or style.",
    },
    ResourceInfo {
        uri_template: "preferences://files/{filepath*}",
        name: "file",
        mime_type: MIME_TEXT,
        description: "Any file inside the preferences repository.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum ResourceUri<'a> {
    Catalog,
    TemplateList(&'a str),
    TemplateFile { name: &'a str, file: &'a str },
    Guide(&'a str),
    File(&'a str),
}

fn parse(uri: &str) -> AppResult<ResourceUri<'_>> {
    let unknown = || AppError::InvalidParams(format!("unknown resource '{uri}'"));
    let rest = uri.strip_prefix(SCHEME).ok_or_else(unknown)?;
    if rest == "catalog" {
        return Ok(ResourceUri::Catalog);
    }
    if let Some(filepath) = rest.strip_prefix("files/") {
        if filepath.is_empty() {
            return Err(unknown());
        }
        return Ok(ResourceUri::File(filepath));
    }
    if let Some(name) = rest.strip_prefix("guide/") {
        if name.is_empty() || name.contains('/') {
            return Err(unknown());
        }
        return Ok(ResourceUri::Guide(name));
    }
    if let Some(tail) = rest.strip_prefix("devcontainer/") {
        return match tail.split_once('/') {
            Some((name, "list")) if !name.is_empty() => Ok(ResourceUri::TemplateList(name)),
            Some((name, file)) if !name.is_empty() && !file.is_empty() && !file.contains('/') => {
                Ok(ResourceUri::TemplateFile { name, file })
            }
            _ => Err(unknown()),
        };
    }
    Err(unknown())
}

#[derive(Debug, Clone)]
pub struct ResourceReader {
    repo: Arc<Repository>,
}

impl ResourceReader {
    pub fn new(repo: Arc<Repository>) -> Self { Self { repo } }

    pub fn read(&self, uri: &str) -> AppResult<ResourceContents> {
        let (mime_type, text) = match parse(uri)? {
            ResourceUri::Catalog => (MIME_JSON, self.catalog().to_string()),
            ResourceUri::TemplateList(name) => (MIME_JSON, self.template_list(name)?.to_string()),
            ResourceUri::TemplateFile { name, file } => (MIME_TEXT, self.template_file(name, file)?),
            ResourceUri::Guide(name) => (MIME_TEXT, self.guide(name)?),
            ResourceUri::File(filepath) => (MIME_TEXT, self.file(filepath)?),
        };
        Ok(ResourceContents { uri: uri.to_string(), mime_type, text })
    }

    fn catalog(&self) -> serde_json::Value {
        let guides: Vec<&str> = Guide::ALL.iter().map(|g| g.file_name()).collect();
        json!({
            "devcontainers": self.repo.template_names(),
            "guides": guides,
            "repository": self.repo.root().display().to_string(),
        })
    }

    fn template_list(&self, name: &str) -> AppResult<serde_json::Value> {
        if !self.repo.template_dir(name)?.exists() {
            return Err(AppError::NotFound(format!("Devcontainer '{name}' not found")));
        }
        let files = self.repo.template_files(name)?;
        Ok(json!({ "devcontainer": name, "count": files.len(), "files": files }))
    }

    fn template_file(&self, name: &str, file: &str) -> AppResult<String> {
        let file = TemplateFile::parse(file)?;
        let rel = Path::new(TEMPLATES_DIR).join(name).join(file.file_name());
        self.repo.read_text(&rel).map_err(|e| match e {
            AppError::NotFound(_) => {
                AppError::NotFound(format!("File '{}' not found in devcontainer '{name}'", file.file_name()))
            }
            other => other,
        })
    }

    fn guide(&self, name: &str) -> AppResult<String> {
        let guide = Guide::parse(name)?;
        self.repo.read_text(Path::new(guide.file_name())).map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound(format!("Guide '{name}' not found")),
            other => other,
        })
    }

    fn file(&self, filepath: &str) -> AppResult<String> {
        self.repo.read_text(Path::new(filepath)).map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound(format!("File '{filepath}' not found")),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_wins_over_file_alias() {
        assert_eq!(parse("preferences://devcontainer/alpha/list").unwrap(), ResourceUri::TemplateList("alpha"));
        assert_eq!(
            parse("preferences://devcontainer/alpha/config").unwrap(),
            ResourceUri::TemplateFile { name: "alpha", file: "config" }
        );
    }

    #[test]
    fn wildcard_keeps_nested_segments() {
        assert_eq!(parse("preferences://files/a/b/../c.txt").unwrap(), ResourceUri::File("a/b/../c.txt"));
    }

    #[test]
    fn unknown_uris_rejected() {
        for uri in ["http://catalog", "preferences://", "preferences://guide/", "preferences://devcontainer/x"] {
            assert_eq!(parse(uri).unwrap_err().code(), "InvalidParams", "{uri}");
        }
    }
}
