//! 产物类型定义
//!
//! 定义注册表中三类耦合产物（特征转换器、模型、标签编码器）及其固定文件名。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 特征转换器文件名
pub const TRANSFORMER_OBJECT_FILE_NAME: &str = "transformer.pkl";
/// 模型文件名
pub const MODEL_FILE_NAME: &str = "model.pkl";
/// 标签编码器文件名
pub const TARGET_ENCODER_OBJECT_FILE_NAME: &str = "target_encoder.pkl";

/// 产物类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// 特征转换器
    Transformer,
    /// 训练好的分类模型
    Model,
    /// 标签编码器
    TargetEncoder,
}

impl ArtifactKind {
    /// 全部产物类型，按推送顺序排列
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Transformer,
        ArtifactKind::Model,
        ArtifactKind::TargetEncoder,
    ];

    /// 版本目录内的固定文件名
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Transformer => TRANSFORMER_OBJECT_FILE_NAME,
            ArtifactKind::Model => MODEL_FILE_NAME,
            ArtifactKind::TargetEncoder => TARGET_ENCODER_OBJECT_FILE_NAME,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Transformer => "Transformer",
            ArtifactKind::Model => "Model",
            ArtifactKind::TargetEncoder => "Target encoder",
        };
        f.write_str(name)
    }
}

/// 同一版本目录下的产物路径三元组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// 版本号
    pub version: u64,
    /// 特征转换器路径
    pub transformer: PathBuf,
    /// 模型路径
    pub model: PathBuf,
    /// 标签编码器路径
    pub target_encoder: PathBuf,
}

impl ArtifactPaths {
    /// 在目录 `dir` 下构造三元组
    pub fn in_dir(version: u64, dir: &Path) -> Self {
        Self {
            version,
            transformer: dir.join(TRANSFORMER_OBJECT_FILE_NAME),
            model: dir.join(MODEL_FILE_NAME),
            target_encoder: dir.join(TARGET_ENCODER_OBJECT_FILE_NAME),
        }
    }

    /// 按产物类型取路径
    pub fn get(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Transformer => &self.transformer,
            ArtifactKind::Model => &self.model,
            ArtifactKind::TargetEncoder => &self.target_encoder,
        }
    }

    /// 三个产物共同所在的目录
    pub fn dir(&self) -> Option<&Path> {
        self.model.parent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(ArtifactKind::Transformer.file_name(), "transformer.pkl");
        assert_eq!(ArtifactKind::Model.file_name(), "model.pkl");
        assert_eq!(ArtifactKind::TargetEncoder.file_name(), "target_encoder.pkl");
    }

    #[test]
    fn test_paths_share_dir() {
        let paths = ArtifactPaths::in_dir(3, Path::new("saved_models/3"));
        for kind in ArtifactKind::ALL {
            assert_eq!(paths.get(kind).parent(), Some(Path::new("saved_models/3")));
        }
        assert_eq!(paths.dir(), Some(Path::new("saved_models/3")));
    }
}
