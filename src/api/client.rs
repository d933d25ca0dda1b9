use super::{error::Result, models::*};
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient {
    /// Log in and hold a token until `end_session`. No-op while a session is open.
    async fn start_session(&mut self) -> Result<()>;

    /// Release the token server-side. No-op without a session.
    async fn end_session(&mut self) -> Result<()>;

    async fn list_zones(&self) -> Result<Vec<Zone>>;

    async fn list_records(&self, zone: &str) -> Result<Vec<DnsRecord>>;

    /// Add an A record `subdomain.zone` pointing at `ip`.
    async fn add_record(&self, zone: &str, subdomain: &str, ip: &str) -> Result<()>;
}
