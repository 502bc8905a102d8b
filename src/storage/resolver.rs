//! 模型版本解析器
//!
//! 管理注册表根目录下单调递增编号的版本目录，并为三类耦合产物
//! （特征转换器、模型、标签编码器）解析“最新”读取路径和新的保存路径。
//!
//! 解析器不缓存任何状态，每次调用都重新读取目录列表。

use crate::error::RegistryError;
use crate::models::types::{ArtifactKind, ArtifactPaths};
use crate::storage::store::{FileSystemStore, VersionStore};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, RegistryError>;

/// 将条目名称解析为版本号
///
/// 只接受非负十进制整数（`u64`），其余名称（`abc`、`3.5`、`-1`）返回 `None`。
/// 超出 `u64` 范围的数字名称同样视为无效版本。
pub fn parse_version(name: &str) -> Option<u64> {
    name.parse::<u64>().ok()
}

/// 模型版本解析器
#[derive(Debug, Clone)]
pub struct ModelResolver<S = FileSystemStore> {
    store: S,
}

impl ModelResolver<FileSystemStore> {
    /// 打开（必要时创建）位于 `model_registry` 的注册表
    pub fn new(model_registry: impl AsRef<Path>) -> Result<Self> {
        let store = FileSystemStore::new(model_registry);
        store.ensure_base_path()?;
        Ok(Self { store })
    }
}

impl<S: VersionStore> ModelResolver<S> {
    /// 使用自定义存储创建解析器
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// 注册表根目录
    pub fn root(&self) -> &Path {
        self.store.root()
    }

    /// 底层存储
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 所有有效版本，升序
    pub fn list_versions(&self) -> Result<Vec<u64>> {
        let mut versions: Vec<u64> = self
            .store
            .list_entries()?
            .iter()
            .filter_map(|name| parse_version(name))
            .collect();
        versions.sort_unstable();
        versions.dedup();
        Ok(versions)
    }

    /// 最新版本号
    pub fn latest_version(&self) -> Result<Option<u64>> {
        Ok(self.latest_entry()?.map(|(version, _)| version))
    }

    /// 最新版本目录；没有任何有效版本时返回 `None`
    ///
    /// 不检查目录内容。
    pub fn latest_version_dir(&self) -> Result<Option<PathBuf>> {
        Ok(self
            .latest_entry()?
            .map(|(_, name)| self.store.root().join(name)))
    }

    /// 最大版本及其实际目录名
    ///
    /// `5` 与 `05` 同时存在时优先规范写法。
    fn latest_entry(&self) -> Result<Option<(u64, String)>> {
        let latest = self
            .store
            .list_entries()?
            .into_iter()
            .filter_map(|name| parse_version(&name).map(|version| (version, name)))
            .max_by_key(|(version, name)| (*version, *name == version.to_string()));
        Ok(latest)
    }

    /// 某类产物的最新路径
    ///
    /// 注册表为空时返回 [`RegistryError::NotAvailable`]。不检查文件是否存在，
    /// 文件缺失会在调用方打开文件时暴露。
    pub fn latest_path(&self, kind: ArtifactKind) -> Result<PathBuf> {
        let latest_dir = self
            .latest_version_dir()?
            .ok_or(RegistryError::NotAvailable(kind))?;
        Ok(latest_dir.join(kind.file_name()))
    }

    /// 最新模型路径
    pub fn latest_model_path(&self) -> Result<PathBuf> {
        self.latest_path(ArtifactKind::Model)
    }

    /// 最新特征转换器路径
    pub fn latest_transformer_path(&self) -> Result<PathBuf> {
        self.latest_path(ArtifactKind::Transformer)
    }

    /// 最新标签编码器路径
    pub fn latest_target_encoder_path(&self) -> Result<PathBuf> {
        self.latest_path(ArtifactKind::TargetEncoder)
    }

    /// 一次列举解析出完整的最新三元组
    ///
    /// 读取方应优先使用此方法，避免两次调用之间有新版本写入导致混用版本。
    /// 注册表为空时报告 `NotAvailable(Transformer)`，即三元组中最先被读取的产物。
    pub fn latest_paths(&self) -> Result<ArtifactPaths> {
        let (version, name) = self
            .latest_entry()?
            .ok_or(RegistryError::NotAvailable(ArtifactKind::Transformer))?;
        Ok(ArtifactPaths::in_dir(version, &self.store.root().join(name)))
    }

    /// 分配并创建新的版本目录
    ///
    /// 没有版本时为 `0`，否则为最新版本加一；最新版本已是 `u64::MAX` 时返回
    /// [`RegistryError::VersionOverflow`]，不会回绕覆盖旧版本。
    pub fn new_save_dir(&self) -> Result<PathBuf> {
        Ok(self.allocate_version()?.1)
    }

    fn allocate_version(&self) -> Result<(u64, PathBuf)> {
        let version = match self.latest_version()? {
            None => 0,
            Some(latest) => latest
                .checked_add(1)
                .ok_or(RegistryError::VersionOverflow(latest))?,
        };
        let dir = self.store.create_version(version)?;
        tracing::debug!("Allocated model version {} at {}", version, dir.display());
        Ok((version, dir))
    }

    /// 为完整三元组分配保存路径
    ///
    /// 只调用一次 [`new_save_dir`](Self::new_save_dir)，三个路径必然位于同一版本目录。
    /// 保存一组产物时应使用此方法。
    pub fn new_save_paths(&self) -> Result<ArtifactPaths> {
        let (version, dir) = self.allocate_version()?;
        Ok(ArtifactPaths::in_dir(version, &dir))
    }

    /// 为单个产物分配保存路径
    ///
    /// 每次调用都会分配一个新版本。只适用于单独保存一个产物的场景；
    /// 用多次调用拼凑一组产物会让三者落入不同版本，属于调用方错误。
    pub fn new_save_path(&self, kind: ArtifactKind) -> Result<PathBuf> {
        Ok(self.new_save_dir()?.join(kind.file_name()))
    }

    /// 单独保存模型时的路径，见 [`new_save_path`](Self::new_save_path)
    pub fn new_save_model_path(&self) -> Result<PathBuf> {
        self.new_save_path(ArtifactKind::Model)
    }

    /// 单独保存特征转换器时的路径，见 [`new_save_path`](Self::new_save_path)
    pub fn new_save_transformer_path(&self) -> Result<PathBuf> {
        self.new_save_path(ArtifactKind::Transformer)
    }

    /// 单独保存标签编码器时的路径，见 [`new_save_path`](Self::new_save_path)
    pub fn new_save_target_encoder_path(&self) -> Result<PathBuf> {
        self.new_save_path(ArtifactKind::TargetEncoder)
    }
}
