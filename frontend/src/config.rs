//! Runtime configuration of the panel.
//!
//! The host publishes `/panel-config.json`. When it is missing or unreadable
//! (e.g. the panel is served by `trunk serve`), the build-time
//! `PANEL_API_BASE` or the default API address is used instead.

use gloo_net::http::Request;

use common::model::config::{PanelConfig, DEFAULT_API_BASE};

const CONFIG_PATH: &str = "/panel-config.json";

pub fn fallback() -> PanelConfig {
    PanelConfig::new(option_env!("PANEL_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

/// Fetches the host configuration, falling back to [`fallback`] on any error.
pub async fn load() -> PanelConfig {
    match Request::get(CONFIG_PATH).send().await {
        Ok(resp) if resp.ok() => match resp.json::<PanelConfig>().await {
            Ok(config) => {
                log::info!("management API at {}", config.api_base);
                PanelConfig::new(&config.api_base)
            }
            Err(err) => {
                log::warn!("unreadable {}: {}", CONFIG_PATH, err);
                fallback()
            }
        },
        Ok(resp) => {
            log::warn!("{} answered {}, using defaults", CONFIG_PATH, resp.status());
            fallback()
        }
        Err(err) => {
            log::warn!("could not fetch {}: {}", CONFIG_PATH, err);
            fallback()
        }
    }
}
