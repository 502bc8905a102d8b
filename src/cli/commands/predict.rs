use crate::config::Config;
use crate::pipeline::BatchPredictor;
use crate::storage::ModelResolver;
use crate::Result;
use std::path::Path;

/// 批量预测
pub fn predict(config: &Config, input: &Path) -> Result<()> {
    tracing::info!("Creating model resolver object");
    let resolver = ModelResolver::new(&config.registry.root)?;
    let predictor: BatchPredictor<_> = BatchPredictor::new(
        resolver,
        config.registry.format,
        &config.prediction.output_dir,
    );

    let output = predictor.predict_file(input)?;
    println!("{}", output.display());
    Ok(())
}
