use crate::config::Config;
use crate::storage::ModelResolver;
use crate::Result;

/// 显示最新版本
pub fn latest(config: &Config) -> Result<()> {
    let resolver = ModelResolver::new(&config.registry.root)?;
    let paths = resolver.latest_paths()?;

    println!("version:        {}", paths.version);
    println!("transformer:    {}", paths.transformer.display());
    println!("model:          {}", paths.model.display());
    println!("target_encoder: {}", paths.target_encoder.display());
    Ok(())
}
