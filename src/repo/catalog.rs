use super::{files, Guide, Repository};
use crate::{errors::AppResult, security::ensure_contained};
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::collections::BTreeSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    All,
    Template,
    Guide,
}

impl SearchCategory {
    /// `None` for an unrecognised category, which searches nothing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(SearchCategory::All),
            "template" | "devcontainer" => Some(SearchCategory::Template),
            "guide" => Some(SearchCategory::Guide),
            _ => None,
        }
    }

    fn templates(self) -> bool { matches!(self, SearchCategory::All | SearchCategory::Template) }
    fn guides(self) -> bool { matches!(self, SearchCategory::All | SearchCategory::Guide) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Template,
    Guide,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    #[serde(rename = "type")]
    pub kind: MatchKind,
    pub name: String,
    pub file: Option<String>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub name: String,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub name1: String,
    pub name2: String,
    pub files1: Vec<String>,
    pub files2: Vec<String>,
    pub common_files: Vec<String>,
    pub unique_to_1: Vec<String>,
    pub unique_to_2: Vec<String>,
}

impl Repository {
    pub fn template_names(&self) -> Vec<String> {
        self.templates_root().map(|base| files::visible_subdirs(&base)).unwrap_or_default()
    }

    pub fn list_all(&self) -> Vec<TemplateEntry> {
        let Some(base) = self.templates_root() else { return Vec::new() };
        files::visible_subdirs(&base)
            .into_iter()
            .map(|name| {
                let mut files = files::member_names(&base.join(&name));
                files.sort();
                TemplateEntry { name, files }
            })
            .collect()
    }

    /// Recursive listing of one template. Missing templates list as empty.
    pub fn template_files(&self, name: &str) -> AppResult<Vec<String>> {
        files::list_files(&self.template_dir(name)?, "*")
    }

    /// Diffs the top-level file names of two templates. A missing side is
    /// treated as an empty template.
    pub fn compare(&self, name1: &str, name2: &str) -> AppResult<Comparison> {
        let files1 = files::member_names(&self.template_dir(name1)?);
        let files2 = files::member_names(&self.template_dir(name2)?);
        let set1: BTreeSet<&str> = files1.iter().map(String::as_str).collect();
        let set2: BTreeSet<&str> = files2.iter().map(String::as_str).collect();
        // BTreeSet iteration is already ordered.
        let common_files: Vec<String> = set1.intersection(&set2).map(|s| s.to_string()).collect();
        let unique_to_1: Vec<String> = set1.difference(&set2).map(|s| s.to_string()).collect();
        let unique_to_2: Vec<String> = set2.difference(&set1).map(|s| s.to_string()).collect();
        Ok(Comparison {
            name1: name1.to_string(),
            name2: name2.to_string(),
            files1,
            files2,
            common_files,
            unique_to_1,
            unique_to_2,
        })
    }

    /// Case-insensitive search over template files, then guides.
    pub fn search(&self, query: &str, category: SearchCategory) -> Vec<SearchMatch> {
        let mut results = Vec::new();
        if let Some(base) = self.templates_root().filter(|_| category.templates()) {
            for name in files::visible_subdirs(&base) {
                let walker = WalkDir::new(base.join(&name)).follow_links(false).sort_by_file_name();
                for entry in walker.into_iter().filter_map(Result::ok) {
                    if !entry.file_type().is_file() || !files::contains(entry.path(), query, false) {
                        continue;
                    }
                    let Ok(rel) = entry.path().strip_prefix(self.root()) else { continue };
                    results.push(SearchMatch {
                        kind: MatchKind::Template,
                        name: name.clone(),
                        file: Some(entry.file_name().to_string_lossy().into_owned()),
                        path: files::relative_string(rel),
                    });
                }
            }
        }
        if category.guides() {
            for guide in Guide::ALL {
                // Guides may be symlinks; only search those that stay inside the root.
                let Ok(path) = ensure_contained(&self.guide_path(guide), self.root()) else {
                    continue;
                };
                if path.is_file() && files::contains(&path, query, false) {
                    results.push(SearchMatch {
                        kind: MatchKind::Guide,
                        name: guide.file_name().to_string(),
                        file: None,
                        path: guide.file_name().to_string(),
                    });
                }
            }
        }
        tracing::debug!(query, matches = results.len(), "search complete");
        results
    }

    /// The canonical templates directory, if it exists inside the root.
    fn templates_root(&self) -> Option<PathBuf> {
        ensure_contained(&self.templates_dir(), self.root()).ok().filter(|p| p.is_dir())
    }
}
