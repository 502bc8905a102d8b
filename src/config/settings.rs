use crate::config::defaults::*;
use crate::storage::ArtifactFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 主配置结构
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub registry: RegistryConfig,
    pub pusher: PusherConfig,
    pub prediction: PredictionConfig,
    pub logging: LoggingConfig,
}

/// 模型注册表配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// 注册表根目录
    pub root: PathBuf,
    /// 产物编码格式
    pub format: ArtifactFormat,
}

/// 模型推送配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PusherConfig {
    /// 不带版本号的推送目录
    pub pusher_model_dir: PathBuf,
}

/// 批量预测配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// 预测结果输出目录
    pub output_dir: PathBuf,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_MODEL_REGISTRY),
            format: ArtifactFormat::default(),
        }
    }
}

impl Default for PusherConfig {
    fn default() -> Self {
        Self {
            pusher_model_dir: PathBuf::from(DEFAULT_PUSHER_MODEL_DIR),
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_PREDICTION_DIR),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: DEFAULT_LOG_FORMAT.to_string(),
            output: vec![DEFAULT_LOG_OUTPUT.to_string()],
        }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &str) -> crate::Result<Self> {
        crate::config::loader::load_from_file(path)
    }

    /// 从环境变量加载配置
    pub fn from_env() -> crate::Result<Self> {
        crate::config::loader::load_from_env()
    }

    /// 渲染为 TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::error::ConfigError::Invalid(e.to_string()).into())
    }
}
