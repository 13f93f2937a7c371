//! HTTP surface of the host.
//!
//! - `panel_config`: `GET /panel-config.json`, the runtime configuration the
//!   panel reads on first render.
//! - `assets`: the embedded panel build, with an `index.html` fallback for
//!   every other path.

pub mod assets;
pub mod panel_config;
