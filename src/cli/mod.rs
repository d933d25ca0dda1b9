//! Command-line definitions for the Technitium DNS Server CLI.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::{load_config, ConnectionConfig, ConnectionSettings};

/// Manage a Technitium DNS Server through its HTTP API
#[derive(Parser, Debug)]
#[command(name = "technitium")]
#[command(version, about = "Technitium DNS Server CLI", long_about = None)]
pub struct Cli {
    /// The Technitium DNS Server host
    #[arg(long, env = "TECHNITIUM_HOST", global = true)]
    pub host: Option<String>,

    /// The Technitium DNS Server username
    #[arg(long, env = "TECHNITIUM_USERNAME", global = true)]
    pub username: Option<String>,

    /// The Technitium DNS Server password
    #[arg(long, env = "TECHNITIUM_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// The port to connect to [default: 5380]
    #[arg(long, env = "TECHNITIUM_PORT", global = true)]
    pub port: Option<u16>,

    /// YAML file with connection defaults; flags and environment override it
    #[arg(short, long, env = "TECHNITIUM_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Operate on zones
    Zone {
        #[command(subcommand)]
        action: ZoneCommands,
    },

    /// Operate on records
    Record {
        #[command(subcommand)]
        action: RecordCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ZoneCommands {
    /// List all zones
    List,
}

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Add an A record to a zone
    Add(AddRecordArgs),

    /// List the records of a zone
    List {
        /// The zone to list
        zone: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AddRecordArgs {
    /// The zone to add to
    pub zone: String,

    /// The subdomain to add
    pub subdomain: String,

    /// The ip the record points to
    pub ip: String,

    /// Run every check but do not create the record
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Merge the config file (if any) with flags and environment, then
    /// check that every required option is set.
    pub fn connection_settings(&self) -> Result<ConnectionSettings> {
        let file = match &self.config {
            Some(path) => load_config(path)?,
            None => ConnectionConfig::default(),
        };

        file.merge(ConnectionConfig {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
        })
        .into_settings()
    }
}
