use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use chef_core::DEFAULT_SESSION_ID;
use chef_llm::{classify_error, LlmError, UpstreamErrorKind};
use chef_session::{build_prompt, ClearOutcome};
use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub const AVAILABLE_ENDPOINTS: &[&str] = &["/", "/chat", "/clear", "/history", "/health"];

/// Reply shown when the upstream quota is used up.
pub const QUOTA_APOLOGY: &str = "ChefBot has reached its daily cooking limit, Please try again tomorrow.";

pub fn info_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
}

pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/clear", post(clear))
        .route("/history", get(history))
}

async fn home() -> Json<Value> {
    Json(json!({
        "status": "running",
        "message": "ChefBot server is running",
        "version": crate::VERSION,
        "features": ["conversation_memory", "session_management"],
    }))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "api_configured": state.api_configured(),
        "active_sessions": state.store.session_count(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "endpoints": {
            "chat": "/chat (POST)",
            "clear": "/clear (POST)",
            "history": "/history (GET)",
            "health": "/health (GET)",
            "home": "/ (GET)",
        },
    }))
}

/// Parse a request body leniently: anything but a JSON object reads as `{}`.
fn parse_payload(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn session_id_of(payload: &Map<String, Value>) -> String {
    payload
        .get("session_id")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_SESSION_ID)
        .to_string()
}

async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ApiError> {
    let payload = parse_payload(&body?);
    let user_input = payload
        .get("user_input")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();
    if user_input.is_empty() {
        return Err(ApiError::no_input());
    }
    let session_id = session_id_of(&payload);

    // Held until the exchange is stored, so one session's requests run one at a time.
    let _guard = state.locks.acquire(&session_id).await;

    let history = state.store.get(&session_id);
    let prompt = build_prompt(&history, user_input);
    tracing::debug!(session_id = %session_id, history_turns = history.len(), prompt_chars = prompt.len(), "calling upstream");

    match state.generator.generate(&prompt).await {
        Ok(text) => {
            let report = state.sanitizer.run(&text);
            tracing::debug!(session_id = %session_id, rules = ?report.rules_applied, "reply sanitized");
            state.store.append(&session_id, user_input, &report.output);
            Ok(Json(json!({
                "response": report.output,
                "session_id": session_id,
            })))
        }
        Err(LlmError::EmptyResponse) => {
            tracing::warn!(session_id = %session_id, model = state.generator.model(), "upstream returned no text");
            Err(ApiError::empty_response())
        }
        Err(err) => {
            let message = err.to_string();
            match classify_error(&message) {
                UpstreamErrorKind::Quota => {
                    tracing::warn!(session_id = %session_id, error = %message, "upstream quota exceeded");
                    Ok(Json(json!({
                        "error": "Quota exceeded",
                        "response": QUOTA_APOLOGY,
                    })))
                }
                UpstreamErrorKind::Generic => {
                    tracing::error!(session_id = %session_id, error = %message, "generation failed");
                    Ok(Json(json!({
                        "error": "Failed to generate response",
                        "response": format!("Sorry, I encountered an error: {message}. Please try again."),
                    })))
                }
            }
        }
    }
}

async fn clear(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ApiError> {
    let session_id = session_id_of(&parse_payload(&body?));
    let message = match state.store.clear(&session_id) {
        ClearOutcome::Cleared => {
            tracing::info!(session_id = %session_id, "conversation cleared");
            "Conversation history cleared"
        }
        ClearOutcome::NotFound => "No conversation found for this session",
    };
    Ok(Json(json!({
        "message": message,
        "session_id": session_id,
    })))
}

/// First `session_id` in the query string. Repeated or unparsable
/// parameters never reject the request.
fn query_session_id(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> String {
    query
        .ok()
        .and_then(|Query(pairs)| pairs.into_iter().find(|(key, _)| key == "session_id"))
        .map(|(_, value)| value)
        .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string())
}

async fn history(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Value> {
    let session_id = query_session_id(query);
    let history = state.store.get(&session_id);
    Json(json!({
        "session_id": session_id,
        "message_count": history.len(),
        "history": history,
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
