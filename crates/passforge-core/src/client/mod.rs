//! Passforge Client

#[allow(clippy::module_inception)]
mod client;
pub mod client_settings;

pub use client::Client;
pub use client_settings::ClientSettings;
