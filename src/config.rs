use std::{
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5002;

/// Built-in CORS allow-list.
///
/// Not strictly hardcoded: a non-empty `CORS_ALLOWED_ORIGINS` replaces it
/// at startup, so one binary covers every deployment's origin set.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:4200",
    "http://127.0.0.1:5174",
    "http://localhost:5002",
    "http://MediSu-MediS-5XPY2MhrDivI-109634141.us-east-1.elb.amazonaws.com",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("invalid CORS origin {0:?}")]
    InvalidOrigin(String),
    #[error("cannot locate the running executable: {0}")]
    ExecutablePath(#[source] std::io::Error),
    #[error("executable {} has no parent directory", .0.display())]
    NoInstallDir(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Reads `PORT` and `CORS_ALLOWED_ORIGINS`, after loading a `.env` file if one exists.
    /// The data directory is `data/` next to the running executable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let exe = std::env::current_exe().map_err(ConfigError::ExecutablePath)?;

        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("CORS_ALLOWED_ORIGINS").ok().as_deref(),
            data_dir_for(&exe)?,
        )
    }

    fn from_vars(
        port: Option<&str>,
        origins: Option<&str>,
        data_dir: PathBuf,
    ) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            _ => DEFAULT_PORT,
        };

        let mut allowed_origins: Vec<String> = origins
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        if allowed_origins.is_empty() {
            allowed_origins = DEFAULT_ALLOWED_ORIGINS.into_iter().map(String::from).collect();
        }

        Ok(Self {
            port,
            data_dir,
            allowed_origins,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Allow-list as header values, ready for the CORS layer.
    pub fn origin_header_values(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
            })
            .collect()
    }
}

/// `data/` in the directory holding `exe`.
pub fn data_dir_for(exe: &Path) -> Result<PathBuf, ConfigError> {
    match exe.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.join("data")),
        _ => Err(ConfigError::NoInstallDir(exe.to_path_buf())),
    }
}
