// ABOUTME: Server configuration read from the environment and command-line flags
// ABOUTME: Validates port, bind address, project scope, and assistant settings before startup

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use archstudio_ai::{ChatSettings, DEFAULT_MODEL, OPENAI_API_URL};
use archstudio_core::{database_file, ProjectScope};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid project id '{0}': must be a positive integer")]
    InvalidProjectId(String),
}

/// Values given on the command line; each one wins over the environment
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub host: Option<IpAddr>,
    pub database: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: IpAddr,
    pub database_path: PathBuf,
    pub project: ProjectScope,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub chat_model: String,
    pub personas_file: Option<PathBuf>,
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match non_empty_var("PORT") {
            Some(raw) => validate_port(raw.parse::<u16>()?)?,
            None => DEFAULT_PORT,
        };

        let host = match non_empty_var("HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };

        let database_path = non_empty_var("ARCHSTUDIO_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(database_file);

        let project = match non_empty_var("ARCHSTUDIO_PROJECT_ID") {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .and_then(|id| ProjectScope::new(id).ok())
                .ok_or(ConfigError::InvalidProjectId(raw))?,
            None => ProjectScope::default(),
        };

        Ok(Config {
            port,
            host,
            database_path,
            project,
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_base_url: non_empty_var("OPENAI_BASE_URL")
                .unwrap_or_else(|| OPENAI_API_URL.to_string()),
            chat_model: non_empty_var("CHAT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            personas_file: non_empty_var("PERSONAS_FILE").map(PathBuf::from),
        })
    }

    /// Apply command-line flags on top of the environment
    pub fn with_overrides(mut self, overrides: CliOverrides) -> Result<Self, ConfigError> {
        if let Some(port) = overrides.port {
            self.port = validate_port(port)?;
        }
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(database) = overrides.database {
            self.database_path = database;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn chat_settings(&self) -> ChatSettings {
        ChatSettings {
            base_url: self.openai_base_url.clone(),
            model: self.chat_model.clone(),
            ..ChatSettings::default()
        }
    }
}

fn validate_port(port: u16) -> Result<u16, ConfigError> {
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(port)
}
