//! Forwarding of `/api/*` and `/reportes/*` to the upstream services.
//!
//! The mount prefix is stripped and the rest of the path plus the query string are
//! appended to the configured upstream base URL. Status and body come back unchanged.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;

use crate::shared::error::GatewayError;
use crate::AppState;

pub const API_MOUNT: &str = "/api";
pub const REPORTES_MOUNT: &str = "/reportes";

/// Upstream URL for a request received under `mount`
pub fn upstream_url(base: &str, mount: &str, uri: &Uri) -> String {
    let path = uri.path().strip_prefix(mount).unwrap_or(uri.path());
    let mut url = format!("{}{}", base.trim_end_matches('/'), path);
    if let Some(query) = uri.query().filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

async fn forward(
    state: &AppState,
    service: &'static str,
    url: String,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let mut request = state.client.request(method.clone(), &url);
    for name in [CONTENT_TYPE, ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request
        .send()
        .await
        .map_err(|e| GatewayError::upstream(service, e))?;
    let status = upstream.status();
    tracing::debug!("{} {} -> {}", method, url, status);

    let mut response = Response::builder().status(status);
    for name in [CONTENT_TYPE, CONTENT_DISPOSITION] {
        if let Some(value) = upstream.headers().get(&name) {
            response = response.header(name, value.clone());
        }
    }
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| GatewayError::upstream(service, e))?;

    response
        .body(Body::from(bytes))
        .map_err(|e| GatewayError::Internal(e.to_string()))
}

/// `ANY /api/*` -> business backend
pub async fn proxy_api(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let url = upstream_url(&state.config.upstream.api_url, API_MOUNT, &uri);
    forward(&state, "servidor de datos", url, method, headers, body).await
}

/// `ANY /reportes/*` -> reporting service
pub async fn proxy_reportes(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let url = upstream_url(&state.config.upstream.reportes_url, REPORTES_MOUNT, &uri);
    forward(&state, "servidor de reportes", url, method, headers, body).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn test_upstream_url_strips_mount() {
        assert_eq!(
            upstream_url("http://localhost:5000/api", API_MOUNT, &uri("/api/colores/athletic")),
            "http://localhost:5000/api/colores/athletic"
        );
        assert_eq!(
            upstream_url("http://localhost:5000/api/", API_MOUNT, &uri("/api/paquetes/7")),
            "http://localhost:5000/api/paquetes/7"
        );
    }

    #[test]
    fn test_upstream_url_keeps_query() {
        assert_eq!(
            upstream_url(
                "http://localhost:8080/reportes-api",
                REPORTES_MOUNT,
                &uri("/reportes/inyeccion/avance-semana?anio=2024&semana=9")
            ),
            "http://localhost:8080/reportes-api/inyeccion/avance-semana?anio=2024&semana=9"
        );
        assert_eq!(
            upstream_url("http://x", REPORTES_MOUNT, &uri("/reportes/inyeccion/inventario-proceso?")),
            "http://x/inyeccion/inventario-proceso"
        );
    }
}
