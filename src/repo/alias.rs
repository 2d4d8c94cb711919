use crate::errors::{AppError, AppResult};

/// Files a devcontainer template may expose by short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFile {
    Config,
    Dockerfile,
    Compose,
    Caddyfile,
}

impl TemplateFile {
    pub const ALL: [TemplateFile; 4] =
        [TemplateFile::Config, TemplateFile::Dockerfile, TemplateFile::Compose, TemplateFile::Caddyfile];

    pub fn alias(self) -> &'static str {
        match self {
            TemplateFile::Config => "config",
            TemplateFile::Dockerfile => "dockerfile",
            TemplateFile::Compose => "compose",
            TemplateFile::Caddyfile => "caddyfile",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            TemplateFile::Config => "devcontainer.json",
            TemplateFile::Dockerfile => "Dockerfile",
            TemplateFile::Compose => "docker-compose.yml",
            TemplateFile::Caddyfile => "Caddyfile",
        }
    }

    pub fn parse(alias: &str) -> AppResult<Self> {
        Self::ALL.into_iter().find(|f| f.alias() == alias).ok_or_else(|| AppError::InvalidAlias {
            kind: "file type",
            given: alias.to_string(),
            valid: Self::ALL.iter().map(|f| f.alias()).collect(),
        })
    }
}

/// Top-level documentation files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guide {
    Claude,
    Readme,
    Style,
}

impl Guide {
    pub const ALL: [Guide; 3] = [Guide::Claude, Guide::Readme, Guide::Style];

    pub fn alias(self) -> &'static str {
        match self {
            Guide::Claude => "claude",
            Guide::Readme => "readme",
            Guide::Style => "style",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Guide::Claude => "CLAUDE.md",
            Guide::Readme => "README.md",
            Guide::Style => "STYLE.md",
        }
    }

    pub fn parse(alias: &str) -> AppResult<Self> {
        Self::ALL.into_iter().find(|g| g.alias() == alias).ok_or_else(|| AppError::InvalidAlias {
            kind: "guide",
            given: alias.to_string(),
            valid: Self::ALL.iter().map(|g| g.alias()).collect(),
        })
    }
}
