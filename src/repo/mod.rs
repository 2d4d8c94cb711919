pub mod alias;
pub mod catalog;
pub mod files;

use crate::{errors::AppResult, security::ensure_contained};
use std::path::{Path, PathBuf};

pub use alias::{Guide, TemplateFile};

/// Where devcontainer templates live, relative to the repository root.
pub const TEMPLATES_DIR: &str = "templates/devcontainers";

/// The read-only preferences repository every operation is confined to.
#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
}

impl Repository {
    /// `root` is expected to be canonical already (see `config::canonical_root`).
    pub fn new(root: PathBuf) -> Self { Self { root } }

    pub fn root(&self) -> &Path { &self.root }

    pub fn templates_dir(&self) -> PathBuf { self.root.join(TEMPLATES_DIR) }

    /// Directory of the template called `name`, which need not exist.
    /// Names that climb out of the repository are refused.
    pub fn template_dir(&self, name: &str) -> AppResult<PathBuf> {
        ensure_contained(&self.templates_dir().join(name), &self.root)
    }

    pub fn guide_path(&self, guide: Guide) -> PathBuf { self.root.join(guide.file_name()) }

    pub fn read_text(&self, rel: &Path) -> AppResult<String> { files::read_text(rel, &self.root) }
}
