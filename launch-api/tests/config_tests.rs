//! Configuration loading tests

use anyhow::Result;
use launch_api::config::LaunchConfig;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

const CONFIG_TOML: &str = r#"
[api]
bind_address = "0.0.0.0:8080"
enable_cors = false
request_timeout_secs = 15
max_request_size_mb = 4

[storage]
account_id = "acct"
bucket = "launch-assets"
access_key_id = "key"
secret_access_key = "secret"
region = "auto"
public_base_url = "https://cdn.example.com"

[chain]
rpc_url = "http://localhost:8899"
commitment = "processed"
pool_config_key = "11111111111111111111111111111111"

[monitoring]
log_level = "debug"
structured_logging = true
"#;

fn write_config(contents: &str) -> Result<(TempDir, std::path::PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("launch.toml");
    fs::write(&path, contents)?;
    Ok((temp_dir, path))
}

#[test]
fn test_load_from_file() -> Result<()> {
    let (_dir, path) = write_config(CONFIG_TOML)?;

    let config = LaunchConfig::load_from(Some(&path), &HashMap::new())?;

    assert_eq!(config.api.bind_address, "0.0.0.0:8080");
    assert!(!config.api.enable_cors);
    assert_eq!(config.api.max_request_size_mb, 4);
    assert_eq!(config.storage.public_base_url(), "https://cdn.example.com");
    assert_eq!(config.chain.commitment, "processed");
    assert!(config.monitoring.structured_logging);

    Ok(())
}

#[test]
fn test_environment_overrides_file() -> Result<()> {
    let (_dir, path) = write_config(CONFIG_TOML)?;
    let env: HashMap<String, String> = [
        ("RPC_URL", "https://api.mainnet-beta.solana.com"),
        ("LAUNCH__MONITORING__LOG_LEVEL", "warn"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let config = LaunchConfig::load_from(Some(&path), &env)?;

    assert_eq!(config.chain.rpc_url, "https://api.mainnet-beta.solana.com");
    assert_eq!(config.monitoring.log_level, "warn");
    assert_eq!(config.storage.bucket, "launch-assets");

    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    assert!(LaunchConfig::load_from(Some(&path), &HashMap::new()).is_err());
}

#[test]
fn test_partial_file_keeps_defaults() -> Result<()> {
    let (_dir, path) = write_config(
        r#"
[storage]
account_id = "acct"
bucket = "b"
access_key_id = "key"
secret_access_key = "secret"

[chain]
pool_config_key = "11111111111111111111111111111111"
"#,
    )?;

    let config = LaunchConfig::load_from(Some(&path), &HashMap::new())?;

    assert_eq!(config.api.bind_address, "127.0.0.1:3000");
    assert_eq!(config.storage.region, "auto");
    assert_eq!(config.chain.rpc_url, "https://api.devnet.solana.com");
    assert_eq!(config.storage.public_base_url(), "https://b.r2.dev");

    Ok(())
}

#[test]
fn test_empty_secret_rejected() -> Result<()> {
    let (_dir, path) = write_config(&CONFIG_TOML.replace("\"secret\"", "\"\""))?;

    assert!(LaunchConfig::load_from(Some(&path), &HashMap::new()).is_err());

    Ok(())
}
