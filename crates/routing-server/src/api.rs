//! Webhook and presence endpoints
//!
//! Provider webhooks arrive form-encoded with the provider's field names;
//! everything the agent clients and operators call speaks JSON.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
};
use callhub_routing_core::{
    CallSid, InboundCall, PingOutcome, ProviderCallStatus, PurgeReport, RoutingDecision,
    RoutingError, RoutingService, RoutingSnapshot,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::Result;

/// Shared handler state
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<RoutingService>,
}

/// Inbound-call webhook body
#[derive(Debug, Deserialize)]
pub struct VoiceWebhook {
    #[serde(rename = "CallSid")]
    pub call_sid: String,
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
}

/// Call-status webhook body
#[derive(Debug, Deserialize)]
pub struct StatusWebhook {
    #[serde(rename = "CallSid")]
    pub call_sid: String,
    #[serde(rename = "CallStatus")]
    pub call_status: String,
}

#[derive(Debug, Deserialize)]
pub struct PresencePing {
    pub identity: String,
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct OfflineResponse {
    pub parked: Vec<CallSid>,
}

pub fn create_router(service: Arc<RoutingService>) -> Router {
    create_router_with_state(ApiState { service })
}

pub fn create_router_with_state(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/state", get(snapshot))
        .route("/voice/inbound", post(voice_inbound))
        .route("/voice/status", post(voice_status))
        .route("/presence", post(presence_ping))
        .route("/presence/:identity", delete(presence_offline))
        .route("/calls/:sid/hold", post(hold_call))
        .route("/calls/:sid/transfer", post(transfer_call))
        .route("/admin/purge", post(purge))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn snapshot(State(state): State<ApiState>) -> Json<RoutingSnapshot> {
    Json(state.service.snapshot())
}

async fn voice_inbound(
    State(state): State<ApiState>,
    Form(hook): Form<VoiceWebhook>,
) -> Result<Json<RoutingDecision>> {
    require("CallSid", &hook.call_sid)?;
    require("To", &hook.to)?;
    let decision = state
        .service
        .route_inbound(InboundCall {
            call_sid: hook.call_sid.into(),
            from: hook.from,
            to: hook.to,
            company_id: None,
        })
        .await?;
    Ok(Json(decision))
}

async fn voice_status(
    State(state): State<ApiState>,
    Form(hook): Form<StatusWebhook>,
) -> Result<StatusCode> {
    require("CallSid", &hook.call_sid)?;
    let status: ProviderCallStatus = hook.call_status.parse()?;
    debug!("status webhook {} -> {:?}", hook.call_sid, status);
    state.service.call_status(&hook.call_sid, status).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn presence_ping(
    State(state): State<ApiState>,
    Json(ping): Json<PresencePing>,
) -> Result<Json<PingOutcome>> {
    require("identity", &ping.identity)?;
    let outcome = state.service.presence_ping(&ping.identity).await?;
    Ok(Json(outcome))
}

async fn presence_offline(
    State(state): State<ApiState>,
    Path(identity): Path<String>,
) -> Json<OfflineResponse> {
    let parked = state.service.agent_offline(&identity).await;
    Json(OfflineResponse { parked })
}

async fn hold_call(State(state): State<ApiState>, Path(sid): Path<String>) -> Result<StatusCode> {
    state.service.hold(&sid).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn transfer_call(
    State(state): State<ApiState>,
    Path(sid): Path<String>,
    Json(request): Json<TransferRequest>,
) -> Result<StatusCode> {
    require("target", &request.target)?;
    state.service.transfer(&sid, &request.target).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn purge(State(state): State<ApiState>) -> Json<PurgeReport> {
    Json(state.service.purge())
}

fn require(field: &str, value: &str) -> std::result::Result<(), RoutingError> {
    if value.trim().is_empty() {
        return Err(RoutingError::invalid_input(format!("{} is required", field)));
    }
    Ok(())
}
