use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const REPO_PATH_ENV: &str = "REPO_PATH";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub root: Root,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub limits: Limits,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Root { pub root_dir: Option<PathBuf> }

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_base_path")]
    pub base_path: String,
}
fn default_bind_addr() -> String { "localhost".to_string() }
fn default_port() -> u16 { 8000 }
fn default_base_path() -> String { "/mcp".to_string() }

impl Default for Server {
    fn default() -> Self {
        Self { bind_addr: default_bind_addr(), port: default_port(), base_path: default_base_path() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Limits {
    #[serde(default = "default_max_request_kb")]
    pub max_request_kb: usize,
}
fn default_max_request_kb() -> usize { 64 }

impl Default for Limits {
    fn default() -> Self { Self { max_request_kb: default_max_request_kb() } }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Ok(toml::from_str(&raw)?)
        }
    }

    /// Loads `path` when given, otherwise starts from defaults, then applies
    /// the `REPO_PATH` override.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        if let Some(repo) = std::env::var_os(REPO_PATH_ENV).filter(|v| !v.is_empty()) {
            cfg.root.root_dir = Some(PathBuf::from(repo));
        }
        Ok(cfg)
    }

    /// The configured root, or the parent of the directory holding the binary.
    pub fn repo_root(&self) -> anyhow::Result<PathBuf> {
        let raw = match &self.root.root_dir {
            Some(dir) => dir.clone(),
            None => {
                let exe = std::env::current_exe()?;
                exe.parent()
                    .and_then(Path::parent)
                    .map(Path::to_path_buf)
                    .ok_or_else(|| anyhow::anyhow!("cannot derive repository root from {}", exe.display()))?
            }
        };
        canonical_root(&raw)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let root = self.repo_root()?;
        if !root.is_dir() {
            anyhow::bail!("root_dir does not exist or is not a directory: {}", root.display());
        }
        if self.server.base_path.is_empty() || !self.server.base_path.starts_with('/') {
            anyhow::bail!("base_path must start with '/'");
        }
        if self.limits.max_request_kb == 0 { anyhow::bail!("max_request_kb must be > 0"); }
        Ok(())
    }
}

pub fn canonical_root(root: &Path) -> anyhow::Result<PathBuf> {
    let c = dunce::canonicalize(root)?;
    Ok(c)
}
