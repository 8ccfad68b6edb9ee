use std::{env, fmt::Display, str::FromStr};

use axum::http::HeaderValue;
use thiserror::Error;
use tracing::{info, warn};

pub const PORT: &str = "RUST_PORT";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const ALLOWED_ORIGIN: &str = "ALLOWED_ORIGIN";

const DEFAULT_PORT: &str = "5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    Redis { url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub storage: StorageKind,
    pub allowed_origin: Option<HeaderValue>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves every setting through `lookup`, once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = try_load(&lookup, PORT, DEFAULT_PORT)?;

        let storage = match optional(&lookup, DATABASE_URL) {
            Some(url) => {
                info!("{DATABASE_URL} set, using Redis storage");
                StorageKind::Redis { url }
            }
            None => {
                warn!("{DATABASE_URL} not set, subscribers will only live in memory");
                StorageKind::Memory
            }
        };

        let allowed_origin = optional(&lookup, ALLOWED_ORIGIN)
            .map(|origin| {
                HeaderValue::from_str(&origin).map_err(|e| ConfigError::Invalid {
                    key: ALLOWED_ORIGIN,
                    value: origin.clone(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            port,
            storage,
            allowed_origin,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            storage: StorageKind::Memory,
            allowed_origin: None,
        }
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = optional(lookup, key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");

        ConfigError::Invalid {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}
