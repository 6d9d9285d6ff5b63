use serde::{Deserialize, Serialize};

use crate::shared::list::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Settings the console receives from the gateway (`[client]` section of config.toml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Tenant discriminator appended to every catalog path
    pub empresa: String,

    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,

    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

fn default_page_size_options() -> Vec<usize> {
    PAGE_SIZE_OPTIONS.to_vec()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            empresa: "athletic".to_string(),
            page_size_options: default_page_size_options(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Drops zero sizes, sorts the options and makes sure the default is one of them
    pub fn normalized(mut self) -> Self {
        self.page_size_options.retain(|size| *size > 0);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        if self.page_size_options.is_empty() {
            self.page_size_options = default_page_size_options();
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            self.default_page_size = self.page_size_options[0];
        }
        if self.empresa.trim().is_empty() {
            self.empresa = ClientConfig::default().empresa;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sizes_use_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"empresa":"uptown"}"#).unwrap();
        assert_eq!(config.empresa, "uptown");
        assert_eq!(config.page_size_options, vec![10, 20, 25, 50]);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_normalized_repairs_bad_values() {
        let config = ClientConfig {
            empresa: " ".to_string(),
            page_size_options: vec![50, 0, 20, 20],
            default_page_size: 15,
        }
        .normalized();
        assert_eq!(config.empresa, "athletic");
        assert_eq!(config.page_size_options, vec![20, 50]);
        assert_eq!(config.default_page_size, 20);
    }
}
