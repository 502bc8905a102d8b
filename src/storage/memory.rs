//! 内存版本存储
//!
//! 用于在不触碰磁盘的情况下测试解析逻辑。

use crate::error::RegistryError;
use crate::storage::store::VersionStore;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// 内存存储实现，条目名称保存在有序集合中
#[derive(Debug, Default)]
pub struct MemoryStore {
    root: PathBuf,
    entries: RwLock<BTreeSet<String>>,
}

impl MemoryStore {
    /// 创建空的内存存储
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            entries: RwLock::new(BTreeSet::new()),
        }
    }

    /// 使用预置条目创建（可包含非数字名称）
    pub fn with_entries<I, S>(root: impl AsRef<Path>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new(root);
        store.insert_all(entries);
        store
    }

    /// 模拟外部写入一个条目
    pub fn insert(&self, name: impl Into<String>) {
        self.write_entries().insert(name.into());
    }

    fn insert_all<I, S>(&self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut guard = self.write_entries();
        guard.extend(entries.into_iter().map(Into::into));
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, BTreeSet<String>> {
        // 锁中毒时集合本身仍然完整
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl VersionStore for MemoryStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_entries(&self) -> Result<Vec<String>, RegistryError> {
        let guard = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.iter().cloned().collect())
    }

    fn create_version(&self, version: u64) -> Result<PathBuf, RegistryError> {
        self.insert(version.to_string());
        Ok(self.version_dir(version))
    }
}
