//! 版本存储
//!
//! 注册表的“数据库”就是根目录下的版本子目录。这里把列举和创建抽象为
//! [`VersionStore`]，生产环境使用文件系统实现，测试可使用内存实现。

use crate::error::RegistryError;
use crate::models::types::ArtifactKind;
use std::path::{Path, PathBuf};

/// 版本存储 trait - 定义注册表对底层存储的全部操作
pub trait VersionStore: Send + Sync {
    /// 注册表根目录
    fn root(&self) -> &Path;

    /// 列出根目录下的原始条目名称（不做任何过滤）
    fn list_entries(&self) -> Result<Vec<String>, RegistryError>;

    /// 创建版本目录，已存在时不报错
    fn create_version(&self, version: u64) -> Result<PathBuf, RegistryError>;

    /// 版本目录路径
    fn version_dir(&self, version: u64) -> PathBuf {
        self.root().join(version.to_string())
    }

    /// 某版本内某产物的路径
    fn path_for(&self, version: u64, kind: ArtifactKind) -> PathBuf {
        self.version_dir(version).join(kind.file_name())
    }
}

/// 文件系统存储实现
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    base_path: PathBuf,
}

impl FileSystemStore {
    /// 创建新的文件系统存储
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// 确保根目录存在
    pub fn ensure_base_path(&self) -> Result<(), RegistryError> {
        std::fs::create_dir_all(&self.base_path)?;
        Ok(())
    }
}

impl VersionStore for FileSystemStore {
    fn root(&self) -> &Path {
        &self.base_path
    }

    fn list_entries(&self) -> Result<Vec<String>, RegistryError> {
        let mut names = Vec::new();

        for entry in std::fs::read_dir(&self.base_path)? {
            let entry = entry?;
            // 只有目录才可能是版本
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }

    fn create_version(&self, version: u64) -> Result<PathBuf, RegistryError> {
        let dir = self.version_dir(version);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
