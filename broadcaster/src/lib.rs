//! Signed client for the Mekari/Qontak WhatsApp broadcast API.

pub mod broadcast;
pub mod client;
pub mod config;
pub mod error;
pub mod http_client;
pub mod signer;
