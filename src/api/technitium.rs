use std::net::Ipv4Addr;
use std::time::Duration;

use super::{
    client::DnsApiClient,
    error::{ApiError, Result},
    models::*,
};
use async_trait::async_trait;
use log::debug;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

pub const DEFAULT_PORT: u16 = 5380;

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Syntactic check for the address of an A record.
pub fn parse_ipv4(ip: &str) -> Result<Ipv4Addr> {
    ip.parse()
        .map_err(|_| ApiError::InvalidIp(ip.to_string()))
}

/// Client for the Technitium DNS Server HTTP API.
///
/// Every request is a POST with its parameters in the query string. Calls
/// other than login and logout need a token obtained by `start_session`.
pub struct TechnitiumClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    // Consumed by the first login attempt.
    password: Option<String>,
    token: Option<String>,
}

impl std::fmt::Debug for TechnitiumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TechnitiumClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .field("session", &self.token.is_some())
            .finish()
    }
}

#[async_trait]
impl DnsApiClient for TechnitiumClient {
    async fn start_session(&mut self) -> Result<()> {
        if self.token.is_some() {
            return Ok(());
        }

        let password = self.password.take().ok_or(ApiError::CredentialsConsumed)?;
        let json = self
            .post(
                "/api/user/login",
                &[
                    ("user", self.username.as_str()),
                    ("pass", password.as_str()),
                    ("includeInfo", "false"),
                ],
            )
            .await?;

        let login: LoginResponse = Self::extract(json, "")?;
        self.token = Some(login.token);
        debug!("Session started for user {}", self.username);
        Ok(())
    }

    async fn end_session(&mut self) -> Result<()> {
        let Some(token) = self.token.take() else {
            return Ok(());
        };

        self.post("/api/user/logout", &[("token", token.as_str())])
            .await?;
        debug!("Session ended for user {}", self.username);
        Ok(())
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let json = self.authed_post("/api/zones/list", &[]).await?;
        let response: ZonesResponse = Self::extract(json, "/response")?;
        Ok(response.zones)
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<DnsRecord>> {
        let json = self
            .authed_post(
                "/api/zones/records/get",
                &[("domain", zone), ("listZone", "true")],
            )
            .await?;
        let response: RecordsResponse = Self::extract(json, "/response")?;
        Ok(response.records)
    }

    async fn add_record(&self, zone: &str, subdomain: &str, ip: &str) -> Result<()> {
        let ip = parse_ipv4(ip)?;

        let domain = DnsRecord::fqdn(subdomain, zone);
        let ip = ip.to_string();
        self.authed_post(
            "/api/zones/records/add",
            &[
                ("domain", domain.as_str()),
                ("zone", zone),
                ("type", "A"),
                ("ipAddress", ip.as_str()),
            ],
        )
        .await?;

        Ok(())
    }
}

impl TechnitiumClient {
    pub fn new(host: &str, port: u16, credentials: Credentials) -> Result<Self> {
        Self::with_base_url(format!("http://{}:{}", host, port), credentials)
    }

    pub fn with_base_url(base_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: credentials.username,
            password: Some(credentials.password),
            token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_session(&self) -> bool {
        self.token.is_some()
    }

    async fn authed_post(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        let token = self.token.as_deref().ok_or(ApiError::NoSession)?;

        let mut query = Vec::with_capacity(params.len() + 1);
        query.push(("token", token));
        query.extend_from_slice(params);

        self.post(endpoint, &query).await
    }

    async fn post(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        debug!("POST {}{}", self.base_url, endpoint);
        let response = self
            .client
            .post(format!("{}{}", self.base_url, endpoint))
            .query(params)
            .send()
            .await?;

        Self::validate_response(response).await
    }

    async fn validate_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("{}. Response: {}", e, text)))?;
        let api_status = ApiStatus::deserialize(&json)
            .map_err(|e| ApiError::Decode(format!("{}. Response: {}", e, text)))?;

        if api_status.status != "ok" {
            return Err(ApiError::Server {
                status: api_status.status,
                message: api_status.error_message.unwrap_or(text),
            });
        }

        Ok(json)
    }

    // `pointer` is a JSON pointer; "" selects the whole document.
    fn extract<T: DeserializeOwned>(mut json: Value, pointer: &str) -> Result<T> {
        let value = json
            .pointer_mut(pointer)
            .map(Value::take)
            .ok_or_else(|| ApiError::Decode(format!("missing field '{}'", pointer)))?;

        serde_json::from_value(value)
            .map_err(|e| ApiError::Decode(format!("field '{}': {}", pointer, e)))
    }
}
