//! 产物序列化
//!
//! 把内存中的对象保存为不透明的二进制块，或从文件读回。注册表从不检查块内容。

use crate::error::StorageError;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 产物编码格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// bincode 二进制编码
    #[default]
    Bincode,
    /// JSON 文本编码，便于人工检查
    Json,
}

impl ArtifactFormat {
    /// 序列化对象
    pub fn encode<T: Serialize>(self, obj: &T) -> Result<Vec<u8>> {
        let bytes = match self {
            ArtifactFormat::Bincode => bincode::serialize(obj)
                .map_err(|e| StorageError::InvalidFile(format!("bincode encode failed: {}", e)))?,
            ArtifactFormat::Json => serde_json::to_vec_pretty(obj)
                .map_err(|e| StorageError::InvalidFile(format!("json encode failed: {}", e)))?,
        };
        Ok(bytes)
    }

    /// 反序列化对象
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T> {
        let obj = match self {
            ArtifactFormat::Bincode => bincode::deserialize(bytes)
                .map_err(|e| StorageError::InvalidFile(format!("bincode decode failed: {}", e)))?,
            ArtifactFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| StorageError::InvalidFile(format!("json decode failed: {}", e)))?,
        };
        Ok(obj)
    }

    /// 保存对象到文件，必要时创建父目录
    pub fn save_object<T: Serialize>(self, path: &Path, obj: &T) -> Result<()> {
        let bytes = self.encode(obj)?;
        save_bytes(path, &bytes)
    }

    /// 从文件读取对象
    pub fn load_object<T: DeserializeOwned>(self, path: &Path) -> Result<T> {
        let bytes = load_bytes(path)?;
        self.decode(&bytes).map_err(|e| {
            tracing::debug!("Failed to decode {}: {}", path.display(), e);
            e
        })
    }
}

impl std::str::FromStr for ArtifactFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bincode" => Ok(ArtifactFormat::Bincode),
            "json" => Ok(ArtifactFormat::Json),
            other => Err(format!("unknown artifact format: {}", other)),
        }
    }
}

/// 读取原始字节
pub fn load_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)
        .map_err(|e| StorageError::ReadFailed(format!("{}: {}", path.display(), e)))?;
    Ok(bytes)
}

/// 写入原始字节，必要时创建父目录
pub fn save_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", parent.display(), e)))?;
    }
    std::fs::write(path, bytes)
        .map_err(|e| StorageError::WriteFailed(format!("{}: {}", path.display(), e)))?;
    Ok(())
}
