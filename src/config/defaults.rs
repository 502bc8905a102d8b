// 默认配置常量

pub const DEFAULT_MODEL_REGISTRY: &str = "saved_models";

pub const DEFAULT_PUSHER_MODEL_DIR: &str = "artifact/model_pusher/saved_models";

pub const DEFAULT_PREDICTION_DIR: &str = "prediction";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FORMAT: &str = "compact";
pub const DEFAULT_LOG_OUTPUT: &str = "stdout";

/// 环境变量前缀，例如 `SENSORFORGE_REGISTRY__ROOT`
pub const ENV_PREFIX: &str = "SENSORFORGE";
