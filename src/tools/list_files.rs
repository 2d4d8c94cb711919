use crate::{
    errors::AppError,
    mcp::registry::{parse_params, Tool},
    repo::Repository,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub struct ListDevcontainerFilesTool { repo: Arc<Repository> }

impl ListDevcontainerFilesTool { pub fn new(repo: Arc<Repository>) -> Self { Self { repo } } }

#[derive(Debug, Deserialize)]
struct Params { name: String }

#[async_trait]
impl Tool for ListDevcontainerFilesTool {
    fn name(&self) -> &'static str { "list_devcontainer_files" }
    fn description(&self) -> &'static str { "Lists all files in a devcontainer template, recursively and sorted." }
    fn capabilities(&self) -> serde_json::Value {
        json!({"input": {"type":"object","required":["name"],"properties": {"name": {"type":"string"}}}, "output": {"type":"array","items":{"type":"string"}}})
    }
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, AppError> {
        let p: Params = parse_params(params)?;
        Ok(json!(self.repo.template_files(&p.name)?))
    }
}
