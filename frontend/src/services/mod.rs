//! Core of the panel: everything that sequences requests and owns transient
//! UI state, independent of rendering.
//!
//! - `api`: `PanelApi` trait and its `gloo-net` implementation.
//! - `registry`: list/add/update/delete of registered clients.
//! - `extraction`: extraction dialog state machine and submission.
//! - `notifications`: self-expiring notification queue.
//! - `records`: paging state of the stored-rows dialog.
//! - `controller`: `PanelState` plus the command/outcome cycle.

pub mod api;
pub mod controller;
pub mod errors;
pub mod extraction;
pub mod notifications;
pub mod records;
pub mod registry;

#[cfg(test)]
pub mod testing;
