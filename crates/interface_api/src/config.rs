//! Service configuration
//!
//! Both binaries share one configuration shape. Values are layered:
//! built-in defaults, then an optional `config/<service>.toml`, then
//! environment variables with the service prefix (`QUOTING_` or `POLICY_`),
//! e.g. `POLICY_QUOTING_SERVICE_URL=http://quoting:8081/quotations`.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

use core_kernel::{CoreError, Timezone};
use domain_policy::QuotingClientConfig;
use infra_db::DatabaseConfig;

/// Which of the two services is being configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Quoting,
    Policy,
}

impl ServiceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Quoting => "quoting-service",
            ServiceKind::Policy => "policy-service",
        }
    }

    pub fn env_prefix(&self) -> &'static str {
        match self {
            ServiceKind::Quoting => "QUOTING",
            ServiceKind::Policy => "POLICY",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Quoting => 8081,
            ServiceKind::Policy => 8080,
        }
    }

    fn config_file(&self) -> &'static str {
        match self {
            ServiceKind::Quoting => "config/quoting",
            ServiceKind::Policy => "config/policy",
        }
    }
}

/// Where a service keeps its records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Postgres,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Configuration of a single service process
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level, used when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
    pub storage: StorageBackend,
    /// PostgreSQL connection string; required when `storage = "postgres"`
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Business timezone in which "today" is evaluated
    pub timezone: Timezone,
    /// Quotation collection URL of the quoting service (policy service only)
    pub quoting_service_url: String,
    pub quoting_service_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: ServiceKind::Policy.default_port(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            storage: StorageBackend::Memory,
            database_url: None,
            database_max_connections: 10,
            timezone: Timezone::default(),
            quoting_service_url: "http://localhost:8081/quotations".to_string(),
            quoting_service_timeout_secs: 10,
        }
    }
}

impl ServiceConfig {
    /// Defaults for the given service
    pub fn for_service(kind: ServiceKind) -> Self {
        Self {
            port: kind.default_port(),
            ..Self::default()
        }
    }

    /// Loads configuration from the optional file and the environment
    pub fn load(kind: ServiceKind) -> Result<Self, ConfigError> {
        Self::load_with(
            kind,
            Environment::with_prefix(kind.env_prefix()).try_parsing(true),
        )
    }

    /// Loads configuration with an explicit environment source
    pub fn load_with<S>(kind: ServiceKind, environment: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("port", i64::from(kind.default_port()))?
            .add_source(File::with_name(kind.config_file()).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Rejects settings that cannot start a service
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage == StorageBackend::Postgres && self.database_url.is_none() {
            return Err(CoreError::configuration(
                "database_url is required when storage = \"postgres\"",
            ));
        }
        if self.quoting_service_timeout_secs == 0 {
            return Err(CoreError::configuration(
                "quoting_service_timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn quoting_client_config(&self) -> QuotingClientConfig {
        QuotingClientConfig::new(self.quoting_service_url.clone())
            .with_timeout(Duration::from_secs(self.quoting_service_timeout_secs))
    }

    /// Pool settings, or `None` when no database URL is configured
    pub fn database_config(&self) -> Option<DatabaseConfig> {
        self.database_url
            .as_ref()
            .map(|url| DatabaseConfig::new(url.clone()).max_connections(self.database_max_connections))
    }
}
