use super::types::{PromptInfo, PromptMessage};
use crate::{
    errors::{AppError, AppResult},
    repo::{Guide, Repository},
};
use std::path::Path;
use std::sync::Arc;

pub const STYLE_FALLBACK: &str =
    "Style guidelines not found. Use sensible defaults: 120 char lines, complete sentences in comments.";
pub const GUIDE_FALLBACK: &str = "Repository guide not found.";
pub const NO_TEMPLATES: &str = "No devcontainer templates found.";

pub const PROMPTS: [PromptInfo; 3] = [
    PromptInfo {
        name: "coding_style_guidelines",
        description: "Provides coding style guidelines that should be followed for all code",
        tags: &["style", "guidelines", "formatting"],
    },
    PromptInfo {
        name: "devcontainer_preferences",
        description: "Information about available devcontainer templates and configuration preferences",
        tags: &["devcontainer", "docker", "development"],
    },
    PromptInfo {
        name: "repository_guide",
        description: "General project guidance and how to use this preferences repository",
        tags: &["guide", "documentation", "preferences"],
    },
];

#[derive(Debug, Clone)]
pub struct PromptSet {
    repo: Arc<Repository>,
}

impl PromptSet {
    pub fn new(repo: Arc<Repository>) -> Self { Self { repo } }

    pub fn get(&self, name: &str) -> AppResult<PromptMessage> {
        let info = PROMPTS
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AppError::InvalidParams(format!("unknown prompt '{name}'")))?;
        let text = match info.name {
            "coding_style_guidelines" => self.style_guidelines()?,
            "devcontainer_preferences" => self.devcontainer_preferences(),
            _ => self.repository_guide()?,
        };
        Ok(PromptMessage { name: info.name, text })
    }

    fn style_guidelines(&self) -> AppResult<String> {
        Ok(match self.guide_or_missing(Guide::Style)? {
            Some(style) => format!(
                "You must follow these coding style guidelines for all code you write:\n\n{style}\n\n\
                 IMPORTANT: Apply these guidelines automatically to all code without being prompted."
            ),
            None => STYLE_FALLBACK.to_string(),
        })
    }

    fn devcontainer_preferences(&self) -> String {
        let names = self.repo.template_names();
        if names.is_empty() {
            return NO_TEMPLATES.to_string();
        }
        let list = names.iter().map(|n| format!("- {n}")).collect::<Vec<_>>().join("\n");
        format!(
            "Available devcontainer templates:\n\n{list}\n\n\
             These templates represent the user's preferred development environment configurations.\n\
             When setting up a new project or configuring a devcontainer, consider using one of these\n\
             as a starting point.\n\n\
             To access a specific template's configuration files, use the MCP tools:\n\
             - list_devcontainer_files(name) to see all files in a template.\n\
             - Use resources like preferences://devcontainer/{{name}}/config for specific files.\n"
        )
    }

    fn repository_guide(&self) -> AppResult<String> {
        Ok(match self.guide_or_missing(Guide::Claude)? {
            Some(guide) => format!(
                "Repository Usage Guide:\n\n{guide}\n\n\
                 This repository serves as a reference for preferred patterns and configurations.\n\
                 When working on other projects, consult these preferences to understand the user's\n\
                 preferred approaches to common development tasks."
            ),
            None => GUIDE_FALLBACK.to_string(),
        })
    }

    // Only a missing guide falls back; access or decoding failures still surface.
    fn guide_or_missing(&self, guide: Guide) -> AppResult<Option<String>> {
        match self.repo.read_text(Path::new(guide.file_name())) {
            Ok(text) => Ok(Some(text)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
