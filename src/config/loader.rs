use crate::config::defaults::ENV_PREFIX;
use crate::config::settings::Config;
use crate::error::ConfigError;
use crate::Result;
use config::{Config as ConfigBuilder, Environment, File};
use std::path::Path;

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

/// 从文件加载配置，环境变量可覆盖文件中的值
pub fn load_from_file(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        return Err(ConfigError::NotFound(path.to_string()).into());
    }

    let config = ConfigBuilder::builder()
        .add_source(File::with_name(path))
        .add_source(environment())
        .build()
        .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| ConfigError::Invalid(e.to_string()).into())
}

/// 从环境变量加载配置
pub fn load_from_env() -> Result<Config> {
    let config = ConfigBuilder::builder()
        .add_source(environment())
        .build()
        .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| ConfigError::Invalid(e.to_string()).into())
}
