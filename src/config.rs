use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Storage file used when `STUDENTS_FILE` is unset
pub const DEFAULT_STUDENTS_FILE: &str = "Students.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid HOST value: {0}")]
    InvalidHost(String),
}

/// Service configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub students_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            students_file: PathBuf::from(DEFAULT_STUDENTS_FILE),
        }
    }
}

impl Config {
    /// Builds the configuration from `HOST`, `PORT` and `STUDENTS_FILE`
    ///
    /// Unset variables fall back to their defaults; set but unparsable
    /// values are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let students_file = lookup("STUDENTS_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.students_file);

        Ok(Self {
            host,
            port,
            students_file,
        })
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
