use crate::config::Config;
use crate::pipeline::{ModelPusher, TrainedArtifacts};
use crate::storage::ModelResolver;
use crate::Result;

/// 推送训练产物
pub fn push(config: &Config, trained: TrainedArtifacts) -> Result<()> {
    let resolver = ModelResolver::new(&config.registry.root)?;
    let pusher = ModelPusher::new(config.pusher.clone(), resolver);
    let artifact = pusher.push(&trained)?;

    println!(
        "Pushed version {} to {}",
        artifact.saved.version,
        artifact.saved_model_dir.display()
    );
    Ok(())
}
