//! Command-line client for the Technitium DNS Server HTTP management API.

pub mod api;
pub mod cli;
pub mod config;

#[cfg(test)]
mod tests;
