//! Host settings, read from the environment.
//!
//! | variable             | default                      |
//! |----------------------|------------------------------|
//! | `PANEL_HOST`         | `127.0.0.1`                  |
//! | `PANEL_PORT`         | `8080`                       |
//! | `PANEL_API_BASE`     | `http://localhost:5001/api`  |
//! | `PANEL_OPEN_BROWSER` | `true`                       |

use common::model::config::{PanelConfig, DEFAULT_API_BASE};
use log::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    pub host: String,
    pub port: u16,
    pub api_base: String,
    pub open_browser: bool,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            api_base: DEFAULT_API_BASE.to_string(),
            open_browser: true,
        }
    }
}

impl HostSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset or blank keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = get("PANEL_HOST") {
            settings.host = v;
        }
        if let Some(v) = get("PANEL_PORT") {
            match v.parse() {
                Ok(port) => settings.port = port,
                Err(_) => warn!("ignoring invalid PANEL_PORT {:?}, using {}", v, settings.port),
            }
        }
        if let Some(v) = get("PANEL_API_BASE") {
            settings.api_base = v;
        }
        if let Some(v) = get("PANEL_OPEN_BROWSER") {
            settings.open_browser = !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off");
        }
        settings
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Document published at `/panel-config.json`.
    pub fn panel_config(&self) -> PanelConfig {
        PanelConfig::new(&self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(HostSettings::from_lookup(lookup(&[])), HostSettings::default());
    }

    #[test]
    fn environment_overrides_each_field() {
        let settings = HostSettings::from_lookup(lookup(&[
            ("PANEL_HOST", "0.0.0.0"),
            ("PANEL_PORT", "9000"),
            ("PANEL_API_BASE", "https://egauge-api.example/api/"),
            ("PANEL_OPEN_BROWSER", "off"),
        ]));

        assert_eq!(settings.url(), "http://0.0.0.0:9000");
        assert!(!settings.open_browser);
        assert_eq!(settings.panel_config().api_base, "https://egauge-api.example/api");
    }

    #[test]
    fn invalid_port_keeps_default() {
        let settings = HostSettings::from_lookup(lookup(&[("PANEL_PORT", "eighty")]));
        assert_eq!(settings.port, 8080);
    }
}
