use crate::models::types::ArtifactKind;
use thiserror::Error;

/// SensorForge 错误类型
#[derive(Debug, Error)]
pub enum SensorForgeError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// 模型注册表错误
///
/// 文件系统错误原样透传，不做包装。
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{0} is not available")]
    NotAvailable(ArtifactKind),

    #[error("Version {0} is the largest representable version, cannot allocate the next one")]
    VersionOverflow(u64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// 对象存储错误（序列化产物的读写）
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read artifact file: {0}")]
    ReadFailed(String),

    #[error("Failed to write artifact file: {0}")]
    WriteFailed(String),

    #[error("Invalid artifact file: {0}")]
    InvalidFile(String),
}

/// 输入数据错误
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid value {value:?} in column {column} at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Invalid input file: {0}")]
    InvalidInput(String),

    #[error("Failed to write output: {0}")]
    WriteFailed(String),
}

/// 模型对象错误
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Feature count mismatch: expected {expected}, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },

    #[error("Unknown encoded label: {0}")]
    UnknownLabel(usize),

    #[error("Unknown class label: {0}")]
    UnknownClass(String),

    #[error("Model has no fitted state: {0}")]
    Empty(String),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadFailed(String),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SensorForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_available_names_kind() {
        let err = RegistryError::NotAvailable(ArtifactKind::TargetEncoder);
        assert_eq!(err.to_string(), "Target encoder is not available");

        let err: SensorForgeError = RegistryError::NotAvailable(ArtifactKind::Model).into();
        assert_eq!(err.to_string(), "Registry error: Model is not available");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = RegistryError::from(io);
        assert_eq!(err.to_string(), "denied");
        assert!(matches!(err, RegistryError::Io(ref e) if e.kind() == std::io::ErrorKind::PermissionDenied));
    }
}
