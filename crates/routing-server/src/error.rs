//! Error type for the routing server and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use callhub_routing_core::RoutingError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl From<::config::ConfigError> for ServerError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl ServerError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status a handler should answer with
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Routing(RoutingError::CallNotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::Routing(RoutingError::AgentUnavailable(_)) => StatusCode::CONFLICT,
            ServerError::Routing(RoutingError::QueueFull { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Routing(RoutingError::Telephony(_)) => StatusCode::BAD_GATEWAY,
            ServerError::Routing(RoutingError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!("request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
