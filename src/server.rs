use crate::{
    config::Config,
    errors::into_response,
    mcp::{
        registry::CallRequest,
        types::{CallResponse, Envelope, PromptRequest, ReadRequest},
        Dispatcher,
    },
    security,
};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub dispatcher: Dispatcher,
}

pub async fn serve(cfg: Config, dispatcher: Dispatcher) -> anyhow::Result<()> {
    let addr = format!("{}:{}", cfg.server.bind_addr, cfg.server.port);
    let shared = AppState { cfg: Arc::new(cfg), dispatcher };
    let app = build_router(shared);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "http transport listening");
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(shared: AppState) -> Router {
    let base = shared.cfg.server.base_path.trim_end_matches('/').to_string();
    use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
    let limit_bytes = shared.cfg.limits.max_request_kb * 1024;
    Router::new()
        .route("/healthz", get(health))
        .route(&format!("{base}/capabilities"), get(capabilities))
        .route(&format!("{base}/call"), post(call))
        .route(&format!("{base}/resources/read"), post(read_resource))
        .route(&format!("{base}/prompts/get"), post(get_prompt))
        .layer(RequestBodyLimitLayer::new(limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let root = state.dispatcher.repo().root().display().to_string();
    (StatusCode::OK, Json(json!({"status":"ok", "repository": root})))
}

async fn capabilities(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.dispatcher.capabilities())).into_response()
}

async fn call(State(state): State<AppState>, headers: HeaderMap, Json(req): Json<CallRequest>) -> Response {
    run(&state, &headers, Envelope::Call { id: req.id, tool: req.tool, params: req.params }).await
}

async fn read_resource(State(state): State<AppState>, headers: HeaderMap, Json(req): Json<ReadRequest>) -> Response {
    run(&state, &headers, Envelope::Read { id: req.id, uri: req.uri }).await
}

async fn get_prompt(State(state): State<AppState>, headers: HeaderMap, Json(req): Json<PromptRequest>) -> Response {
    run(&state, &headers, Envelope::Prompt { id: req.id, name: req.name }).await
}

async fn run(state: &AppState, headers: &HeaderMap, env: Envelope) -> Response {
    if let Err(e) = security::content_length_ok(headers, state.cfg.limits.max_request_kb) {
        return into_response(e).into_response();
    }
    let request_id = uuid::Uuid::new_v4().to_string();
    let id = env.id().to_string();
    match state.dispatcher.dispatch(&request_id, env).await {
        Ok(result) => (StatusCode::OK, Json(CallResponse::ok(id, result))).into_response(),
        Err(e) => (e.status(), Json(CallResponse::err(id, &e))).into_response(),
    }
}
