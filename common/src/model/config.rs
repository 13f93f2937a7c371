use serde::{Deserialize, Serialize};

/// Base URL used when neither the host nor the build provides one.
pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";

/// Runtime configuration the host publishes at `/panel-config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Root of the management API, e.g. `http://localhost:5001/api`.
    pub api_base: String,
}

impl PanelConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Joins `path` (with or without a leading slash) onto the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed_before_joining() {
        let config = PanelConfig::new(" https://panel.example/api// ");
        assert_eq!(config.api_base, "https://panel.example/api");
        assert_eq!(config.endpoint("/clients"), "https://panel.example/api/clients");
        assert_eq!(config.endpoint("data/extract"), "https://panel.example/api/data/extract");
    }
}
