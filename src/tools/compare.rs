use crate::{
    errors::AppError,
    mcp::registry::{parse_params, Tool},
    repo::Repository,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub struct CompareDevcontainersTool { repo: Arc<Repository> }

impl CompareDevcontainersTool { pub fn new(repo: Arc<Repository>) -> Self { Self { repo } } }

#[derive(Debug, Deserialize)]
struct Params { name1: String, name2: String }

#[async_trait]
impl Tool for CompareDevcontainersTool {
    fn name(&self) -> &'static str { "compare_devcontainers" }
    fn description(&self) -> &'static str {
        "Compares the top-level files of two devcontainer templates: common files and files unique to each."
    }
    fn capabilities(&self) -> serde_json::Value {
        let names = json!({"type":"array","items":{"type":"string"}});
        json!({"input": {"type":"object","required":["name1","name2"],"properties": {"name1": {"type":"string"},"name2":{"type":"string"}}}, "output": {"type":"object","properties": {"name1":{"type":"string"},"name2":{"type":"string"},"files1":names,"files2":names,"common_files":names,"unique_to_1":names,"unique_to_2":names}}})
    }
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, AppError> {
        let p: Params = parse_params(params)?;
        let cmp = self.repo.compare(&p.name1, &p.name2)?;
        serde_json::to_value(cmp).map_err(|e| AppError::Internal(e.to_string()))
    }
}
