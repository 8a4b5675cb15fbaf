//! HTTP routes and handlers for the relay.
//!
//! Four routes: root info page, callback forwarding, session registration,
//! and health. Every failure mode converts to a complete HTTP response at the
//! handler boundary; the caller never sees a raw connection drop.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{RawQuery, State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::RelayError;
use crate::forwarder::CallbackForwarder;
use crate::pages;
use crate::registry::{self, SessionRegistry};

/// Shared state for HTTP handlers.
pub struct HttpState {
    pub config: Config,
    pub forwarder: CallbackForwarder,
    pub registry: SessionRegistry,
}

/// Create the relay router.
///
/// # Errors
///
/// Returns error if the outbound HTTP client cannot be initialized.
pub fn create_router(config: Config) -> anyhow::Result<Router> {
    let forwarder = CallbackForwarder::new(&config)?;
    let state = Arc::new(HttpState { config, forwarder, registry: SessionRegistry::new() });

    Ok(Router::new()
        .route("/", get(handle_root))
        .route("/oauth/callback", get(handle_callback))
        .route("/oauth/register", post(handle_register))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Parse a raw query string into its ordered list of pairs.
///
/// Duplicate keys are preserved: every pair is forwarded verbatim, and where
/// a single value is needed the first occurrence wins.
fn parse_query_pairs(raw: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(raw.as_bytes()).into_owned().collect()
}

/// First value for a key, if present.
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// How the destination port was chosen, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PortSource {
    QueryParam,
    Registry,
    Default,
}

/// Resolve the destination port for a callback.
///
/// Order: a valid `callback_port` query param, then the registry entry for
/// the `state` session id, then the configured default container port.
async fn resolve_port(state: &HttpState, pairs: &[(String, String)]) -> (u16, PortSource) {
    if let Some(raw) = first_value(pairs, "callback_port") {
        if let Some(port) = registry::parse_port(raw) {
            return (port, PortSource::QueryParam);
        }
        tracing::warn!(callback_port = raw, "Ignoring invalid callback_port query param");
    }

    if let Some(session_id) = first_value(pairs, "state") {
        if let Some(port) = state.registry.lookup(session_id).await {
            return (port, PortSource::Registry);
        }
    }

    tracing::warn!("No callback_port resolved, using default container port");
    (state.config.container_port, PortSource::Default)
}

/// `GET /oauth/callback`
///
/// Relay an OAuth callback to the downstream service and render the result.
async fn handle_callback(
    State(state): State<Arc<HttpState>>,
    RawQuery(raw_query): RawQuery,
) -> Response {
    let query_pairs = parse_query_pairs(raw_query.as_deref().unwrap_or(""));

    tracing::info!(params = query_pairs.len(), "Received OAuth callback");

    let session_label = first_value(&query_pairs, "state").unwrap_or("unknown").to_string();
    let (port, source) = resolve_port(&state, &query_pairs).await;

    tracing::info!(
        target = %state.forwarder.target_url(port),
        source = ?source,
        session = %session_label,
        "Forwarding OAuth callback"
    );

    match state.forwarder.forward(port, &query_pairs).await {
        // A completed exchange is success regardless of the downstream
        // status code; the status is logged only.
        Ok(outcome) => {
            tracing::info!(status = outcome.status, "Container response");
            (StatusCode::OK, Html(pages::render_success_page(&session_label))).into_response()
        }
        Err(err @ RelayError::Upstream(_)) => {
            tracing::error!(error = %err, "Failed to forward to container");
            (err.status(), Html(pages::render_error_page(&err.to_string()))).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Error handling OAuth callback");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::render_error_page(&err.to_string())))
                .into_response()
        }
    }
}

/// `POST /oauth/register`
///
/// Register a callback port for a session.
async fn handle_register(
    State(state): State<Arc<HttpState>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    let Ok(Json(data)) = body else {
        return validation_response("Invalid JSON body");
    };

    let session_id = match data.get("session_id").and_then(|v| v.as_str()) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return validation_response("Missing session_id or callback_port"),
    };

    let port = match data.get("callback_port") {
        None | Some(serde_json::Value::Null) => {
            return validation_response("Missing session_id or callback_port");
        }
        Some(value) => match extract_port(value) {
            Some(port) => port,
            None => return validation_response("callback_port must be an integer in 1-65535"),
        },
    };

    state.registry.upsert(session_id.clone(), port).await;

    tracing::info!(session = %session_id, port, "Registered callback for session");

    let callback_url = format!(
        "{}?state={}&callback_port={}",
        state.config.callback_base_url(),
        session_id,
        port
    );

    Json(serde_json::json!({
        "status": "registered",
        "session_id": session_id,
        "callback_url": callback_url
    }))
    .into_response()
}

/// Extract a port from a JSON value that may be an integer or numeric string.
fn extract_port(value: &serde_json::Value) -> Option<u16> {
    match value {
        serde_json::Value::Number(n) => {
            let n = n.as_u64()?;
            u16::try_from(n).ok().filter(|&p| p > 0)
        }
        serde_json::Value::String(s) => registry::parse_port(s),
        _ => None,
    }
}

fn validation_response(message: &str) -> Response {
    let err = RelayError::validation("register", message);
    (err.status(), Json(serde_json::json!({ "error": message }))).into_response()
}

/// `GET /health`
///
/// Health check; performs no downstream I/O.
async fn handle_health(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let active_sessions = state.registry.count().await;
    Json(serde_json::json!({
        "status": "healthy",
        "service": "oauth-relay",
        "container_host": state.config.container_host,
        "container_port": state.config.container_port,
        "active_sessions": active_sessions
    }))
}

/// `GET /`
///
/// Static instructional page.
async fn handle_root(State(state): State<Arc<HttpState>>) -> Html<String> {
    Html(pages::render_root_page(state.config.listen_port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_pairs_preserves_duplicates_in_order() {
        let pairs = parse_query_pairs("a=1&b=2&a=3");
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_pairs_decodes_percent_encoding() {
        let pairs = parse_query_pairs("state=abc%20def&code=x%2Fy");
        assert_eq!(first_value(&pairs, "state"), Some("abc def"));
        assert_eq!(first_value(&pairs, "code"), Some("x/y"));
    }

    #[test]
    fn test_first_value_picks_first_occurrence() {
        let pairs = parse_query_pairs("callback_port=9001&callback_port=9002");
        assert_eq!(first_value(&pairs, "callback_port"), Some("9001"));
        assert_eq!(first_value(&pairs, "missing"), None);
    }

    #[test]
    fn test_extract_port_integer_and_string() {
        assert_eq!(extract_port(&serde_json::json!(9001)), Some(9001));
        assert_eq!(extract_port(&serde_json::json!("9001")), Some(9001));
        assert_eq!(extract_port(&serde_json::json!(0)), None);
        assert_eq!(extract_port(&serde_json::json!(70000)), None);
        assert_eq!(extract_port(&serde_json::json!("abc")), None);
        assert_eq!(extract_port(&serde_json::json!(-1)), None);
        assert_eq!(extract_port(&serde_json::json!([9001])), None);
    }
}
