pub mod models;

use std::{fs::File, io::Read, path::Path};

use anyhow::{bail, Context, Result};
use validator::Validate;

use crate::api::{models::Credentials, technitium::DEFAULT_PORT};
pub use models::{ConnectionConfig, ConnectionSettings};

pub fn load_config(config_file: &Path) -> Result<ConnectionConfig> {
    let mut file = File::open(config_file)
        .with_context(|| format!("Failed to open config file: {}", config_file.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;

    let config: ConnectionConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", config_file.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", config_file.display()))?;

    Ok(config)
}

impl ConnectionConfig {
    /// Layer `overrides` on top of `self`; fields set in `overrides` win.
    pub fn merge(self, overrides: ConnectionConfig) -> ConnectionConfig {
        ConnectionConfig {
            host: overrides.host.or(self.host),
            port: overrides.port.or(self.port),
            username: overrides.username.or(self.username),
            password: overrides.password.or(self.password),
        }
    }

    /// Check that every required option is present and build the settings.
    /// The port falls back to the server's default management port.
    pub fn into_settings(self) -> Result<ConnectionSettings> {
        let host = required(self.host, "--host")?;
        let username = required(self.username, "--username")?;
        let password = required(self.password, "--password")?;
        let port = self.port.unwrap_or(DEFAULT_PORT);
        if port == 0 {
            bail!("The option '--port' must be greater than 0.");
        }

        Ok(ConnectionSettings {
            host,
            port,
            credentials: Credentials { username, password },
        })
    }
}

fn required(value: Option<String>, option: &str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => bail!("The option '{}' is undefined.", option),
    }
}
