use contracts::shared::config::ClientConfig;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Services the gateway forwards to
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Business REST backend, mounted under `/api`
    pub api_url: String,
    /// PDF reporting service, mounted under `/reportes`
    pub reportes_url: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[upstream]
api_url = "http://localhost:5000/api"
reportes_url = "http://localhost:8080/reportes-api"

[client]
empresa = "athletic"
page_size_options = [10, 20, 25, 50]
default_page_size = 10
"#;

/// Parses a config file; the client section is normalized
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    config.client = config.client.normalized();
    Ok(config)
}

/// Directory of the running executable, if it can be determined
pub fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(|dir| dir.to_path_buf()))
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(dir) = exe_dir() {
        let config_path = dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.upstream.api_url, "http://localhost:5000/api");
        assert_eq!(config.upstream.reportes_url, "http://localhost:8080/reportes-api");
        assert_eq!(config.client.empresa, "athletic");
        assert_eq!(config.client.default_page_size, 10);
    }

    #[test]
    fn test_optional_sections_fall_back() {
        let config = parse_config(
            r#"
            [upstream]
            api_url = "http://erp:5000/api"
            reportes_url = "http://erp:8080/reportes-api"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.client, ClientConfig::default());
    }

    #[test]
    fn test_client_section_is_normalized() {
        let config = parse_config(
            r#"
            [upstream]
            api_url = "a"
            reportes_url = "b"

            [client]
            empresa = "uptown"
            page_size_options = [50, 0, 20]
            default_page_size = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.client.empresa, "uptown");
        assert_eq!(config.client.page_size_options, vec![20, 50]);
        assert_eq!(config.client.default_page_size, 20);
    }

    #[test]
    fn test_missing_upstream_is_an_error() {
        assert!(parse_config("[server]\nport = 8000\n").is_err());
    }
}
