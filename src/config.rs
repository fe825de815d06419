use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use snafu::ResultExt;

use crate::content::{Catalogue, ContentError};
use crate::error::{ApplicationError, ConfigLoadSnafu};

/// Settings read from the environment (and `.env`).
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(rename = "host_address", default = "default_host")]
    pub host: SocketAddr,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// JSON catalogue to serve instead of the built-in content
    #[serde(default)]
    pub content_path: Option<PathBuf>,
}

fn default_host() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Config {
    pub fn from_env() -> Result<Config, ApplicationError> {
        envy::from_env::<Config>().context(ConfigLoadSnafu)
    }

    pub fn catalogue(&self) -> Result<Catalogue, ContentError> {
        match &self.content_path {
            Some(path) => Catalogue::load(path),
            None => Catalogue::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, envy::Error> {
        envy::from_iter(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();

        assert_eq!(config.host, default_host());
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.content_path, None);
        assert!(config.catalogue().is_ok());
    }

    #[test]
    fn reads_environment() {
        let config = config(&[
            ("HOST_ADDRESS", "0.0.0.0:8080"),
            ("LOG_DIR", "/var/log/spotlight"),
            ("CONTENT_PATH", "content.json"),
        ])
        .unwrap();

        assert_eq!(config.host, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/spotlight"));
        assert_eq!(config.content_path, Some(PathBuf::from("content.json")));
    }

    #[test]
    fn rejects_bad_address() {
        assert!(config(&[("HOST_ADDRESS", "not-an-address")]).is_err());
    }
}
