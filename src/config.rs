// src/config.rs

use crate::store::DataSource;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is invalid: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_source: DataSource,
    pub web_host: String,
    pub web_port: u16,
    pub max_workers: usize,
    pub assets_dir: PathBuf,
    pub static_dir: PathBuf,
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: DataSource::File(PathBuf::from("data/properties.json")),
            web_host: "127.0.0.1".to_string(),
            web_port: 3000,
            max_workers: 8,
            assets_dir: PathBuf::from("assets/img"),
            static_dir: PathBuf::from("static"),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            data_source: env::var("DATA_SOURCE")
                .map(|v| DataSource::parse(&v))
                .unwrap_or(defaults.data_source),
            web_host: env::var("WEB_HOST").unwrap_or(defaults.web_host),
            web_port: parsed_env("WEB_PORT")?.unwrap_or(defaults.web_port),
            max_workers: parsed_env("MAX_WORKERS")?.unwrap_or(defaults.max_workers),
            assets_dir: env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            fetch_timeout: parsed_env("FETCH_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let value = format!("{}:{}", self.web_host, self.web_port);
        value.parse().map_err(|_| ConfigError::Invalid {
            key: "WEB_HOST",
            value,
        })
    }
}

fn parsed_env<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(None),
    }
}
