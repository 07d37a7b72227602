pub mod api_client;

#[cfg(test)]
pub mod fake_api;

pub use api_client::{ApiClient, DealsApi};
