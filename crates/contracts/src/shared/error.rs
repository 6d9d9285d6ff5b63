use thiserror::Error;

/// Errors produced by a call to the business or reporting backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx answer. `message` is whatever the server put in its JSON body
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("sin detalle"))]
    Server { status: u16, message: Option<String> },

    /// 404, treated as an empty result rather than a failure
    #[error("Not found")]
    NotFound,

    /// The body could not be decoded into the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-2xx status
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        if status == 404 {
            return ApiError::NotFound;
        }
        let message = message.filter(|m| !m.trim().is_empty());
        ApiError::Server { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    /// Message for a notification: the server text when it sent one, the fallback otherwise
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Body shape the backend uses for error and acknowledgement payloads
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extracts `message` from a raw response body, if it is JSON and has one
    pub fn message_from(text: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(text)
            .ok()
            .and_then(|body| body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_404_to_not_found() {
        assert_eq!(ApiError::from_status(404, Some("x".into())), ApiError::NotFound);
        assert!(ApiError::from_status(404, None).is_not_found());
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::from_status(409, Some("Clave duplicada".into()));
        assert_eq!(err.user_message("Error al guardar"), "Clave duplicada");

        let blank = ApiError::from_status(500, Some("   ".into()));
        assert_eq!(blank.user_message("Error al guardar"), "Error al guardar");

        let network = ApiError::Network("offline".into());
        assert_eq!(network.user_message("Error al guardar"), "Error al guardar");
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            ErrorBody::message_from(r#"{"success":false,"message":"Lote bloqueado"}"#),
            Some("Lote bloqueado".to_string())
        );
        assert_eq!(ErrorBody::message_from("<html>"), None);
        assert_eq!(ErrorBody::message_from("{}"), None);
    }
}
