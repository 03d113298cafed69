//! Axum route handlers for the PYRO detector gateway.
//!
//! Every endpoint decodes its input, validates it, and relays a single
//! JSON-RPC call through the [`DetectorInvoker`] seam. Success bodies are
//! the detector's resolved result map, verbatim.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{Map, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::GatewayError;
use pyro_bridge::DetectorInvoker;

// ── Shared state ─────────────────────────────────────────────────────────────

type Bridge = Arc<dyn DetectorInvoker>;

// ── Detector RPC method names ─────────────────────────────────────────────────

mod method {
    pub const LIST_DETONATORS: &str = "pyro_list_detonators";
    pub const EXECUTE_DETONATOR: &str = "pyro_execute_detonator";
    pub const CREATE_CASE: &str = "pyro_create_case";
    pub const LIST_AGENTS: &str = "pyro_list_agents";
    pub const EXECUTE_PQL: &str = "pyro_execute_pql";
    pub const HEALTH: &str = "pyro_health";
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given detector bridge.
pub fn create_router(bridge: Bridge) -> Router {
    Router::new()
        .route("/api/v2/pyro-detector/detonators", get(list_detonators))
        .route(
            "/api/v2/pyro-detector/detonators/{detonator_id}/execute",
            post(execute_detonator),
        )
        .route("/api/v2/pyro-detector/cases", post(create_case))
        .route("/api/v2/pyro-detector/agents", get(list_agents))
        .route("/api/v2/pyro-detector/pql", post(execute_pql))
        .route("/api/v2/pyro-detector/health", get(health))
        .with_state(bridge)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /api/v2/pyro-detector/detonators` — list available detonators.
///
/// # Errors
/// Returns [`GatewayError::Bridge`] if the detector call fails.
pub async fn list_detonators(
    State(bridge): State<Bridge>,
) -> Result<impl IntoResponse, GatewayError> {
    let result = bridge
        .invoke(method::LIST_DETONATORS, Map::new())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to list detonators");
            GatewayError::bridge("list detonators", e)
        })?;
    Ok(Json(Value::Object(result)))
}

/// `POST /api/v2/pyro-detector/detonators/:detonator_id/execute` — execute a
/// detonator.
///
/// The JSON body is optional; when present it must be an object, and the
/// path's `detonator_id` is merged into it before the call.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for an empty `detonator_id` or
/// an undecodable body, [`GatewayError::Bridge`] if the detector call fails.
pub async fn execute_detonator(
    State(bridge): State<Bridge>,
    Path(detonator_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    if detonator_id.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "detonator_id is required".to_owned(),
        ));
    }

    let mut params = decode_optional_object(&body)?;
    params.insert("detonator_id".to_owned(), Value::String(detonator_id.clone()));

    let result = bridge
        .invoke(method::EXECUTE_DETONATOR, params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, %detonator_id, "failed to execute detonator");
            GatewayError::bridge("execute detonator", e)
        })?;
    Ok(Json(Value::Object(result)))
}

/// `POST /api/v2/pyro-detector/cases` — create an investigation case.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the body is not a JSON
/// object, [`GatewayError::Bridge`] if the detector call fails.
pub async fn create_case(
    State(bridge): State<Bridge>,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    let params = decode_object(&body)?;

    let result = bridge
        .invoke(method::CREATE_CASE, params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to create case");
            GatewayError::bridge("create case", e)
        })?;
    Ok((StatusCode::CREATED, Json(Value::Object(result))))
}

/// `GET /api/v2/pyro-detector/agents` — list Fire Marshal agents.
///
/// # Errors
/// Returns [`GatewayError::Bridge`] if the detector call fails.
pub async fn list_agents(State(bridge): State<Bridge>) -> Result<impl IntoResponse, GatewayError> {
    let result = bridge
        .invoke(method::LIST_AGENTS, Map::new())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to list agents");
            GatewayError::bridge("list agents", e)
        })?;
    Ok(Json(Value::Object(result)))
}

/// `POST /api/v2/pyro-detector/pql` — execute a PQL query.
///
/// The body must be a JSON object with a non-empty string `query`; the raw
/// query text is forwarded untouched.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for a bad body or missing
/// query, [`GatewayError::Bridge`] if the detector call fails.
pub async fn execute_pql(
    State(bridge): State<Bridge>,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    let params = decode_object(&body)?;

    match params.get("query") {
        Some(Value::String(query)) if !query.is_empty() => {}
        _ => {
            return Err(GatewayError::InvalidRequest(
                "query parameter is required".to_owned(),
            ))
        }
    }

    let result = bridge
        .invoke(method::EXECUTE_PQL, params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to execute PQL query");
            GatewayError::bridge("execute PQL query", e)
        })?;
    Ok(Json(Value::Object(result)))
}

/// `GET /api/v2/pyro-detector/health` — detector liveness probe.
///
/// # Errors
/// Returns [`GatewayError::Bridge`] if the detector call fails.
pub async fn health(State(bridge): State<Bridge>) -> Result<impl IntoResponse, GatewayError> {
    let result = bridge
        .invoke(method::HEALTH, Map::new())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to get health status");
            GatewayError::bridge("get health status", e)
        })?;
    Ok(Json(Value::Object(result)))
}

// ── Body decoding helpers ─────────────────────────────────────────────────────

/// Decode a required JSON object body. Decode failure is a client error and
/// is reported before any detector process is spawned.
fn decode_object(body: &Bytes) -> Result<Map<String, Value>, GatewayError> {
    serde_json::from_slice(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid request body: {e}")))
}

/// Decode an optional JSON object body; an absent body is an empty params map.
fn decode_optional_object(body: &Bytes) -> Result<Map<String, Value>, GatewayError> {
    if body.is_empty() {
        Ok(Map::new())
    } else {
        decode_object(body)
    }
}
