use crate::storage::DEFAULT_STORE_FILE;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_FILE: &str = "passkeep";
const ENV_PREFIX: &str = "PASSKEEP";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub store_path: PathBuf,
}

/// Defaults, then `passkeep.{toml,json,yaml,..}` if present, then `PASSKEEP_*` env vars.
pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    load_config_from(CONFIG_FILE)
}

fn load_config_from(file_base: &str) -> Result<AppConfig, config::ConfigError> {
    Config::builder()
        .set_default("store_path", DEFAULT_STORE_FILE)?
        .add_source(File::with_name(file_base).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()?
        .try_deserialize()
}
