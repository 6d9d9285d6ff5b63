use axum::extract::State;
use axum::Json;
use contracts::shared::config::ClientConfig;

use crate::AppState;

/// `GET /api/client-config`: the `[client]` section of config.toml
pub async fn get_client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.config.client.clone())
}
