//! 模型推送
//!
//! 将训练阶段产出的三类产物同时写入两个位置：
//! 1. 固定的推送目录（不带版本号，始终是“当前”产物）
//! 2. 注册表中新分配的版本目录
//!
//! 顺序固定为先推送目录、后版本目录。

use crate::config::settings::PusherConfig;
use crate::models::types::{ArtifactKind, ArtifactPaths};
use crate::storage::codec::{load_bytes, save_bytes};
use crate::storage::{ModelResolver, VersionStore};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 训练阶段产出的产物位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainedArtifacts {
    /// 特征转换器
    pub transformer_path: PathBuf,
    /// 模型
    pub model_path: PathBuf,
    /// 标签编码器
    pub target_encoder_path: PathBuf,
}

impl TrainedArtifacts {
    fn source(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Transformer => &self.transformer_path,
            ArtifactKind::Model => &self.model_path,
            ArtifactKind::TargetEncoder => &self.target_encoder_path,
        }
    }
}

/// 推送结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PusherArtifact {
    /// 推送目录
    pub pusher_model_dir: PathBuf,
    /// 注册表根目录
    pub saved_model_dir: PathBuf,
    /// 新版本的产物路径
    pub saved: ArtifactPaths,
}

/// 模型推送器
pub struct ModelPusher<S> {
    config: PusherConfig,
    resolver: ModelResolver<S>,
}

impl<S: VersionStore> ModelPusher<S> {
    /// 创建模型推送器
    pub fn new(config: PusherConfig, resolver: ModelResolver<S>) -> Self {
        tracing::info!("{} Model Pusher {}", ">>".repeat(20), "<<".repeat(20));
        Self { config, resolver }
    }

    /// 推送目录中某产物的路径
    pub fn pusher_path(&self, kind: ArtifactKind) -> PathBuf {
        self.config.pusher_model_dir.join(kind.file_name())
    }

    /// 执行推送
    ///
    /// 产物按不透明字节块复制，不解码内容。
    pub fn push(&self, trained: &TrainedArtifacts) -> Result<PusherArtifact> {
        tracing::info!("Loading transformer, model and target encoder");
        let mut blobs = Vec::with_capacity(ArtifactKind::ALL.len());
        for kind in ArtifactKind::ALL {
            blobs.push((kind, load_bytes(trained.source(kind))?));
        }

        tracing::info!(
            "Saving artifacts into pusher directory {}",
            self.config.pusher_model_dir.display()
        );
        for (kind, bytes) in &blobs {
            save_bytes(&self.pusher_path(*kind), bytes)?;
        }

        tracing::info!("Saving artifacts into registry with incremental numbering");
        // 三个路径来自同一次版本分配
        let saved = self.resolver.new_save_paths()?;
        for (kind, bytes) in &blobs {
            save_bytes(saved.get(*kind), bytes)?;
        }

        tracing::info!(
            "Artifacts saved to version {} at {}",
            saved.version,
            saved.dir().unwrap_or(self.resolver.root()).display()
        );

        let artifact = PusherArtifact {
            pusher_model_dir: self.config.pusher_model_dir.clone(),
            saved_model_dir: self.resolver.root().to_path_buf(),
            saved,
        };
        tracing::debug!("Model pusher artifact: {:?}", artifact);
        Ok(artifact)
    }
}
