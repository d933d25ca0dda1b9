use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::models::Credentials;

/// Connection parameters from one source (file, environment or flags).
/// Every field is optional so sources can be layered.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: Option<String>,

    #[validate(range(min = 1, message = "Port must be greater than 0"))]
    pub port: Option<u16>,

    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: Option<String>,

    #[serde(skip_serializing)]
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: Option<String>,
}

/// Fully resolved parameters for one session.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub credentials: Credentials,
}
