//! Client configuration served by the gateway (`GET /api/client-config`)

use super::api_utils::api_url;
use contracts::shared::config::ClientConfig;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct AppConfig {
    config: RwSignal<ClientConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            config: RwSignal::new(ClientConfig::default()),
        }
    }

    /// Replaces the defaults with the gateway's `[client]` section. Failures keep the defaults.
    pub fn load(&self) {
        let config = self.config;
        spawn_local(async move {
            match fetch_client_config().await {
                Ok(loaded) => {
                    log::debug!("client config: empresa={}", loaded.empresa);
                    config.set(loaded.normalized());
                }
                Err(e) => log::warn!("client config not available, using defaults: {}", e),
            }
        });
    }

    pub fn empresa(&self) -> String {
        self.config.with(|c| c.empresa.clone())
    }

    pub fn empresa_untracked(&self) -> String {
        self.config.with_untracked(|c| c.empresa.clone())
    }

    pub fn page_size_options(&self) -> Vec<usize> {
        self.config.with(|c| c.page_size_options.clone())
    }

    pub fn default_page_size(&self) -> usize {
        self.config.with_untracked(|c| c.default_page_size)
    }
}

async fn fetch_client_config() -> Result<ClientConfig, String> {
    let response = Request::get(&api_url("/api/client-config"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<ClientConfig>().await.map_err(|e| e.to_string())
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}
