pub mod prompts;
pub mod registry;
pub mod resources;
pub mod types;

use crate::{
    errors::{AppError, AppResult},
    repo::Repository,
};
use prompts::{PromptSet, PROMPTS};
use registry::ToolRegistry;
use resources::{ResourceReader, RESOURCE_TEMPLATES};
use std::{sync::Arc, time::Instant};
use types::{Capabilities, CallResponse, Envelope, ToolInfo};

/// Routes tool calls, resource reads and prompt requests to their handlers.
/// Shared by the HTTP and stdio transports.
#[derive(Clone)]
pub struct Dispatcher {
    repo: Arc<Repository>,
    registry: Arc<ToolRegistry>,
    resources: ResourceReader,
    prompts: PromptSet,
}

impl Dispatcher {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self {
            registry: Arc::new(ToolRegistry::new(&repo)),
            resources: ResourceReader::new(repo.clone()),
            prompts: PromptSet::new(repo.clone()),
            repo,
        }
    }

    pub fn repo(&self) -> &Repository { &self.repo }

    pub fn registry(&self) -> &ToolRegistry { &self.registry }

    pub fn capabilities(&self) -> Capabilities {
        let tools = self
            .registry
            .iter()
            .map(|t| {
                let caps = t.capabilities();
                ToolInfo {
                    name: t.name().to_string(),
                    description: t.description(),
                    input_schema: caps["input"].clone(),
                    output_schema: caps["output"].clone(),
                }
            })
            .collect();
        Capabilities {
            server: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            tools,
            resources: RESOURCE_TEMPLATES.to_vec(),
            prompts: PROMPTS.to_vec(),
        }
    }

    pub async fn call_tool(&self, name: &str, params: serde_json::Value) -> AppResult<serde_json::Value> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| AppError::InvalidParams(format!("unknown tool '{name}'")))?;
        tool.call(params).await
    }

    pub fn read_resource(&self, uri: &str) -> AppResult<types::ResourceContents> { self.resources.read(uri) }

    pub fn get_prompt(&self, name: &str) -> AppResult<types::PromptMessage> { self.prompts.get(name) }

    /// Runs one request and emits its audit event.
    pub async fn dispatch(&self, request_id: &str, env: Envelope) -> AppResult<serde_json::Value> {
        let started = Instant::now();
        let (kind, target) = match &env {
            Envelope::Capabilities { .. } => ("capabilities", String::new()),
            Envelope::Call { tool, .. } => ("tool", tool.clone()),
            Envelope::Read { uri, .. } => ("resource", uri.clone()),
            Envelope::Prompt { name, .. } => ("prompt", name.clone()),
        };
        let outcome = match env {
            Envelope::Capabilities { .. } => to_value(self.capabilities()),
            Envelope::Call { tool, params, .. } => self.call_tool(&tool, params).await,
            Envelope::Read { uri, .. } => self.read_resource(&uri).and_then(to_value),
            Envelope::Prompt { name, .. } => self.get_prompt(&name).and_then(to_value),
        };
        let (decision, code) = match &outcome {
            Ok(_) => ("allow", "OK"),
            Err(e) => ("error", e.code()),
        };
        audit(request_id, kind, &target, decision, code, started.elapsed().as_millis() as u64);
        outcome
    }

    pub async fn respond(&self, env: Envelope) -> CallResponse {
        let request_id = uuid::Uuid::new_v4().to_string();
        let id = env.id().to_string();
        match self.dispatch(&request_id, env).await {
            Ok(result) => CallResponse::ok(id, result),
            Err(e) => CallResponse::err(id, &e),
        }
    }
}

fn to_value<T: serde::Serialize>(v: T) -> AppResult<serde_json::Value> {
    serde_json::to_value(v).map_err(|e| AppError::Internal(e.to_string()))
}

fn audit(request_id: &str, kind: &str, target: &str, decision: &str, code: &str, duration_ms: u64) {
    tracing::info!(
        request_id = request_id,
        kind = kind,
        target = target,
        decision = decision,
        code = code,
        duration_ms = duration_ms,
        "audit"
    );
}
