use crate::config::Config;
use crate::storage::{ModelResolver, VersionStore};
use crate::Result;

/// 列出注册表中的版本
pub fn list(config: &Config) -> Result<()> {
    tracing::info!("Listing model versions in {}", config.registry.root.display());

    let resolver = ModelResolver::new(&config.registry.root)?;
    let versions = resolver.list_versions()?;
    if versions.is_empty() {
        println!("No model versions saved yet.");
        return Ok(());
    }

    for version in versions {
        println!("{}", resolver.store().version_dir(version).display());
    }
    Ok(())
}
