pub mod client;
pub mod error;
pub mod models;
pub mod technitium;

pub use client::DnsApiClient;
pub use error::ApiError;
pub use technitium::TechnitiumClient;
