pub mod client;

pub use client::{ApiClient, FilePayload};
pub use datadesk_api;
