//! Wire model shared by the panel (wasm) and its static host.
//!
//! Everything here mirrors the JSON contract of the eGauge management API
//! or the host's `/panel-config.json` document.

pub mod model;
pub mod requests;
