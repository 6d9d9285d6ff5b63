use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The upstream service could not be reached or dropped the connection
    #[error("{service} no disponible: {detail}")]
    Upstream { service: &'static str, detail: String },

    #[error("error interno: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn upstream(service: &'static str, error: impl std::fmt::Display) -> Self {
        GatewayError::Upstream {
            service,
            detail: error.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the operator; upstream details stay in the log
    pub fn public_message(&self) -> String {
        match self {
            GatewayError::Upstream { service, .. } => {
                format!("No se pudo contactar al {}.", service)
            }
            GatewayError::Internal(_) => "Error interno del gateway.".to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (self.status(), Json(json!({ "message": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway_with_message() {
        let response =
            GatewayError::upstream("servidor de reportes", "connection refused").into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["message"], "No se pudo contactar al servidor de reportes.");
    }

    #[test]
    fn test_internal_error_status() {
        let error = GatewayError::Internal("bad header".into());
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "error interno: bad header");
    }
}
