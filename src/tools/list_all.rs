use crate::{errors::AppError, mcp::registry::Tool, repo::Repository};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub struct ListAllPreferencesTool { repo: Arc<Repository> }

impl ListAllPreferencesTool { pub fn new(repo: Arc<Repository>) -> Self { Self { repo } } }

#[async_trait]
impl Tool for ListAllPreferencesTool {
    fn name(&self) -> &'static str { "list_all_preferences" }
    fn description(&self) -> &'static str { "Lists every devcontainer template with its top-level files." }
    fn capabilities(&self) -> serde_json::Value {
        json!({"input": {"type":"object","properties": {}}, "output": {"type":"object","properties": {"devcontainers":{"type":"array","items":{"type":"object","properties":{"name":{"type":"string"},"files":{"type":"array","items":{"type":"string"}}}}}}}})
    }
    async fn call(&self, _params: serde_json::Value) -> Result<serde_json::Value, AppError> {
        Ok(json!({ "devcontainers": self.repo.list_all() }))
    }
}
