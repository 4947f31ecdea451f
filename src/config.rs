use std::env;

use crate::services::maps_client::maps_service::{MapsServiceConfig, DEFAULT_MAPS_HOST};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "Missing required setting {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub maps: MapsServiceConfig,
    pub auth_key: Option<String>,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any `name -> value` source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Ok(AppConfig {
            maps: MapsServiceConfig {
                api_key: get("GOOGLE_MAPS_API_KEY")
                    .ok_or(ConfigError::Missing("GOOGLE_MAPS_API_KEY"))?,
                host: get("GOOGLE_MAPS_HOST").unwrap_or_else(|| DEFAULT_MAPS_HOST.to_string()),
            },
            auth_key: get("AUTH_KEY"),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
