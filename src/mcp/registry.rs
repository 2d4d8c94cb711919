use crate::{errors::AppError, repo::Repository};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

pub type DynTool = Arc<dyn Tool + Send + Sync + 'static>;

#[derive(Clone)]
pub struct ToolRegistry {
    tools: Vec<(String, DynTool)>,
}

impl ToolRegistry {
    pub fn new(repo: &Arc<Repository>) -> Self {
        use crate::tools::{
            compare::CompareDevcontainersTool, list_all::ListAllPreferencesTool,
            list_files::ListDevcontainerFilesTool, search::SearchPreferencesTool,
        };
        let mut tools: Vec<DynTool> = vec![
            Arc::new(SearchPreferencesTool::new(repo.clone())),
            Arc::new(ListDevcontainerFilesTool::new(repo.clone())),
            Arc::new(CompareDevcontainersTool::new(repo.clone())),
            Arc::new(ListAllPreferencesTool::new(repo.clone())),
        ];
        tools.sort_by_key(|t| t.name());
        Self { tools: tools.into_iter().map(|t| (t.name().to_string(), t)).collect() }
    }

    pub fn get(&self, name: &str) -> Option<DynTool> { self.tools.iter().find(|(n, _)| n == name).map(|(_, t)| t.clone()) }
    pub fn list_names(&self) -> Vec<String> { self.tools.iter().map(|(n, _)| n.clone()).collect() }
    pub fn iter(&self) -> impl Iterator<Item = &DynTool> { self.tools.iter().map(|(_, t)| t) }
}

#[derive(Debug, Deserialize)]
pub struct CallRequest {
    pub id: String,
    pub tool: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

#[async_trait]
pub trait Tool {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn capabilities(&self) -> serde_json::Value;
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, AppError>;
}

/// Deserializes tool params, treating a missing/null body as `{}`.
pub fn parse_params<T: serde::de::DeserializeOwned>(params: serde_json::Value) -> Result<T, AppError> {
    let params = if params.is_null() { serde_json::json!({}) } else { params };
    serde_json::from_value(params).map_err(|e| AppError::InvalidParams(e.to_string()))
}
