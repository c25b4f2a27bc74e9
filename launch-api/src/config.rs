//! Configuration management for the launch API
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! the deployment's legacy variable names (`R2_ACCESS_KEY_ID`, `RPC_URL`,
//! ...), then `LAUNCH__SECTION__KEY` variables. Everything is validated
//! once at startup.

use crate::core::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "LAUNCH";

/// Legacy variable name -> config path
const LEGACY_ENV: &[(&str, &str)] = &[
    ("R2_ACCESS_KEY_ID", "storage.access_key_id"),
    ("R2_SECRET_ACCESS_KEY", "storage.secret_access_key"),
    ("R2_ACCOUNT_ID", "storage.account_id"),
    ("R2_BUCKET", "storage.bucket"),
    ("RPC_URL", "chain.rpc_url"),
    ("POOL_CONFIG_KEY", "chain.pool_config_key"),
];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct LaunchConfig {
    #[validate]
    pub api: ApiConfig,
    #[validate]
    pub storage: StorageConfig,
    #[validate]
    pub chain: ChainConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    pub bind_address: String,
    pub enable_cors: bool,
    #[validate(range(min = 5, max = 300))]
    pub request_timeout_secs: u64,
    #[validate(range(min = 1, max = 100))]
    pub max_request_size_mb: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StorageConfig {
    #[validate(length(min = 1, message = "R2 account id is required"))]
    pub account_id: String,
    #[validate(length(min = 1, message = "R2 bucket is required"))]
    pub bucket: String,
    #[validate(length(min = 1, message = "R2 access key id is required"))]
    pub access_key_id: String,
    #[validate(length(min = 1, message = "R2 secret access key is required"))]
    pub secret_access_key: String,
    pub region: String,
    /// Private S3 endpoint, defaults to the account's R2 endpoint
    #[validate(url)]
    pub endpoint: Option<String>,
    /// Public base for object URLs, defaults to the bucket's r2.dev domain
    #[validate(url)]
    pub public_base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChainConfig {
    #[validate(url)]
    pub rpc_url: String,
    pub commitment: String,
    #[validate(custom = "validate_pubkey")]
    pub pool_config_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: String,
    pub structured_logging: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            enable_cors: true,
            request_timeout_secs: 30,
            max_request_size_mb: 10,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            bucket: String::new(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            region: "auto".to_string(),
            endpoint: None,
            public_base_url: None,
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            commitment: "confirmed".to_string(),
            pool_config_key: String::new(),
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            structured_logging: false,
        }
    }
}

impl StorageConfig {
    /// Private S3-compatible endpoint used for writes
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}.r2.cloudflarestorage.com", self.account_id),
        }
    }

    /// Public base that object keys are appended to
    pub fn public_base_url(&self) -> String {
        match &self.public_base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}.r2.dev", self.bucket),
        }
    }
}

impl LaunchConfig {
    /// Load configuration from an optional file and the process environment
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(path, &env)
    }

    /// Load configuration from an optional file and an explicit environment
    pub fn load_from(path: Option<&Path>, env: &HashMap<String, String>) -> ConfigResult<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&LaunchConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        for (var, key) in LEGACY_ENV {
            if let Some(value) = env.get(*var).filter(|v| !v.is_empty()) {
                builder = builder.set_override(*key, value.as_str())?;
            }
        }

        let structured: HashMap<String, String> = env
            .iter()
            .filter(|(k, _)| k.starts_with(ENV_PREFIX))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(Some(structured)),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.check()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn check(&self) -> ConfigResult<()> {
        self.validate()?;
        if self.api.bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "bind_address is not a socket address: {}",
                self.api.bind_address
            )));
        }
        Ok(())
    }

    /// Parsed pool configuration key
    pub fn pool_config_key(&self) -> ConfigResult<Pubkey> {
        Pubkey::from_str(&self.chain.pool_config_key)
            .map_err(|e| ConfigError::Invalid(format!("pool_config_key: {}", e)))
    }
}

fn validate_pubkey(value: &str) -> Result<(), ValidationError> {
    Pubkey::from_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_pubkey"))
}
