use crate::{
    errors::AppError,
    mcp::registry::{parse_params, Tool},
    repo::{catalog::SearchCategory, Repository},
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

pub struct SearchPreferencesTool { repo: Arc<Repository> }

impl SearchPreferencesTool { pub fn new(repo: Arc<Repository>) -> Self { Self { repo } } }

#[derive(Debug, Deserialize)]
struct Params {
    query: String,
    #[serde(default = "default_category")]
    category: String,
}
fn default_category() -> String { "all".to_string() }

#[async_trait]
impl Tool for SearchPreferencesTool {
    fn name(&self) -> &'static str { "search_preferences" }
    fn description(&self) -> &'static str {
        "Searches template and guide files for a case-insensitive query. category: all, template or guide."
    }
    fn capabilities(&self) -> serde_json::Value {
        json!({"input": {"type":"object","required":["query"],"properties": {"query": {"type":"string"},"category":{"type":"string","enum":["all","template","guide"],"default":"all"}}}, "output": {"type":"array","items":{"type":"object","properties": {"type":{"type":"string"},"name":{"type":"string"},"file":{"type":"string"},"path":{"type":"string"}}}}})
    }
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, AppError> {
        let p: Params = parse_params(params)?;
        let Some(category) = SearchCategory::parse(&p.category) else {
            tracing::debug!(category = %p.category, "unknown search category");
            return Ok(json!([]));
        };
        let matches = self.repo.search(&p.query, category);
        serde_json::to_value(matches).map_err(|e| AppError::Internal(e.to_string()))
    }
}
