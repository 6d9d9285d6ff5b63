//! API utilities for frontend-gateway communication
//!
//! The gateway listens on port 3000 of the host serving the console. It mounts the
//! business backend under `/api` and the reporting service under `/reportes`; paths
//! passed to the helpers below are the backend-relative ones from `contracts`.

use contracts::shared::api::ApiResponse;
use contracts::shared::error::{ApiError, ErrorBody};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

const API_MOUNT: &str = "/api";
const REPORTES_MOUNT: &str = "/reportes";

/// Base URL of the gateway, e.g. "http://localhost:3000".
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full URL of a gateway path (e.g. "/api/client-config")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn mounted(base: &str, mount: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}{}", base, mount, path)
    } else {
        format!("{}{}/{}", base, mount, path)
    }
}

/// URL of a business backend path
pub fn backend_url(path: &str) -> String {
    mounted(&api_base(), API_MOUNT, path)
}

/// URL of a reporting service path
pub fn reportes_url(path: &str) -> String {
    mounted(&api_base(), REPORTES_MOUNT, path)
}

/// Encodes a user-typed value used as a path segment
pub fn segment(value: &str) -> String {
    urlencoding::encode(value.trim()).into_owned()
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    log::warn!("{} {} -> {}", response.url(), status, text);
    Err(ApiError::from_status(status, ErrorBody::message_from(&text)))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_text(response: Response) -> Result<String, ApiError> {
    let response = check(response).await?;
    response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Mutations may answer with an empty body; that counts as a plain success
async fn read_ack(response: Response) -> Result<ApiResponse, ApiError> {
    let response = check(response).await?;
    let text = response.text().await.unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(ApiResponse {
            success: true,
            message: String::new(),
        });
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&backend_url(path))
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<ApiResponse, ApiError> {
    let response = Request::post(&backend_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    read_ack(response).await
}

/// POST whose answer is data rather than an acknowledgement
pub async fn post_json_for<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&backend_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<ApiResponse, ApiError> {
    let response = Request::put(&backend_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    read_ack(response).await
}

/// Raw body of a successful POST, for callers that decode it themselves
pub async fn post_json_body<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    let response = Request::post(&backend_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    read_text(response).await
}

/// Raw body of a successful PUT
pub async fn put_json_body<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    let response = Request::put(&backend_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    read_text(response).await
}

pub async fn delete(path: &str) -> Result<ApiResponse, ApiError> {
    let response = Request::delete(&backend_url(path))
        .send()
        .await
        .map_err(network)?;
    read_ack(response).await
}

/// Downloads a PDF produced by the reporting service
pub async fn get_pdf(path_and_query: &str) -> Result<web_sys::Blob, ApiError> {
    let response = Request::get(&reportes_url(path_and_query))
        .send()
        .await
        .map_err(network)?;
    let response = check(response).await?;
    let bytes = response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    pdf_blob(&bytes).map_err(|e| ApiError::Decode(format!("{:?}", e)))
}

fn pdf_blob(bytes: &[u8]) -> Result<web_sys::Blob, JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mounted_paths() {
        assert_eq!(
            mounted("http://localhost:3000", API_MOUNT, "/colores/athletic"),
            "http://localhost:3000/api/colores/athletic"
        );
        assert_eq!(
            mounted("http://localhost:3000", REPORTES_MOUNT, "inyeccion/avance-dia?dia=2025-01-03"),
            "http://localhost:3000/reportes/inyeccion/avance-dia?dia=2025-01-03"
        );
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment(" 1520 "), "1520");
        assert_eq!(segment("a/b"), "a%2Fb");
    }
}
