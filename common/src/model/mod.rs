pub mod client;
pub mod config;
pub mod envelope;
pub mod extraction;
pub mod records;
