use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Capabilities {
    pub server: &'static str,
    pub version: &'static str,
    pub tools: Vec<ToolInfo>,
    pub resources: Vec<ResourceInfo>,
    pub prompts: Vec<PromptInfo>,
}

#[derive(Debug, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
    pub output_schema: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceInfo {
    pub uri_template: &'static str,
    pub name: &'static str,
    pub mime_type: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceContents {
    pub uri: String,
    pub mime_type: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub name: &'static str,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadRequest {
    pub id: String,
    pub uri: String,
}

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorObj {
    pub code: String,
    pub message: String,
}

/// One newline-delimited request on the stdio transport.
#[derive(Debug, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Envelope {
    Capabilities {
        id: String,
    },
    Call {
        id: String,
        tool: String,
        #[serde(default)]
        params: serde_json::Value,
    },
    Read {
        id: String,
        uri: String,
    },
    Prompt {
        id: String,
        name: String,
    },
}

impl Envelope {
    pub fn id(&self) -> &str {
        match self {
            Envelope::Capabilities { id }
            | Envelope::Call { id, .. }
            | Envelope::Read { id, .. }
            | Envelope::Prompt { id, .. } => id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CallResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")] pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")] pub error: Option<ErrorObj>,
}

impl CallResponse {
    pub fn ok(id: String, result: serde_json::Value) -> Self { Self { id, result: Some(result), error: None } }

    pub fn err(id: String, e: &crate::errors::AppError) -> Self {
        Self { id, result: None, error: Some(ErrorObj { code: e.code().to_string(), message: e.to_string() }) }
    }
}
