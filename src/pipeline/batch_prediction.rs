//! 批量预测
//!
//! 读取输入 CSV，用注册表中最新版本的转换器、模型和标签编码器打分，
//! 并把结果写入预测目录。每次运行文件名带时间戳，不会相互覆盖。

use crate::error::DataError;
use crate::models::traits::{Classifier, FeatureTransformer, TargetDecoder};
use crate::models::{FittedTransformer, NearestCentroid, TargetEncoder};
use crate::pipeline::ingest::SensorFrame;
use crate::storage::{ArtifactFormat, ModelResolver, VersionStore};
use crate::Result;
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// 预测文件名中时间戳的格式
pub const PREDICTION_TIMESTAMP_FORMAT: &str = "%m%d%Y__%H%M%S";

/// 编码类别列名
pub const PREDICTION_COLUMN: &str = "prediction";
/// 解码后标签列名
pub const CATEGORY_PREDICTION_COLUMN: &str = "cat_prediction";

/// 由输入文件名和时间生成预测文件名
///
/// `sensors.csv` 在 2026-10-17 14:25:01 得到 `sensors10172026__142501.csv`。
pub fn prediction_file_name(input: &Path, now: NaiveDateTime) -> Result<String> {
    let base = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DataError::InvalidInput(format!("no file name in {}", input.display())))?;
    let stamp = now.format(PREDICTION_TIMESTAMP_FORMAT).to_string();

    let name = match base.strip_suffix(".csv") {
        Some(stem) => format!("{}{}.csv", stem, stamp),
        None => format!("{}{}.csv", base, stamp),
    };
    Ok(name)
}

/// 批量预测器
///
/// 三类产物的具体类型可替换，默认使用本仓库提供的实现。
pub struct BatchPredictor<S, T = FittedTransformer, M = NearestCentroid, E = TargetEncoder> {
    resolver: ModelResolver<S>,
    format: ArtifactFormat,
    prediction_dir: PathBuf,
    _artifacts: PhantomData<fn() -> (T, M, E)>,
}

impl<S, T, M, E> BatchPredictor<S, T, M, E>
where
    S: VersionStore,
    T: FeatureTransformer + DeserializeOwned,
    M: Classifier + DeserializeOwned,
    E: TargetDecoder + DeserializeOwned,
{
    /// 创建批量预测器
    pub fn new(resolver: ModelResolver<S>, format: ArtifactFormat, prediction_dir: impl AsRef<Path>) -> Self {
        Self {
            resolver,
            format,
            prediction_dir: prediction_dir.as_ref().to_path_buf(),
            _artifacts: PhantomData,
        }
    }

    /// 对输入文件打分，使用当前本地时间命名输出文件
    pub fn predict_file(&self, input: &Path) -> Result<PathBuf> {
        self.predict_file_at(input, chrono::Local::now().naive_local())
    }

    /// 对输入文件打分，输出文件名使用给定时间
    pub fn predict_file_at(&self, input: &Path, now: NaiveDateTime) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.prediction_dir).map_err(|e| {
            DataError::WriteFailed(format!("{}: {}", self.prediction_dir.display(), e))
        })?;

        tracing::info!("Reading input file: {}", input.display());
        let mut frame = SensorFrame::from_csv_path(input)?;

        // 一次解析出同一版本的三元组
        let paths = self.resolver.latest_paths()?;
        tracing::info!("Using model version {}", paths.version);

        tracing::info!("Loading transformer to make prediction");
        let transformer: T = self.format.load_object(&paths.transformer)?;
        let raw = frame.feature_matrix(transformer.feature_names())?;
        let features = transformer.transform(&raw)?;

        tracing::info!("Loading model to make prediction");
        let model: M = self.format.load_object(&paths.model)?;
        let prediction = model.predict(&features)?;

        tracing::info!("Loading target encoder to convert predictions into categories");
        let target_encoder: E = self.format.load_object(&paths.target_encoder)?;
        let cat_prediction = target_encoder.inverse_transform(&prediction)?;

        frame.push_column(
            PREDICTION_COLUMN,
            prediction.iter().map(|p| p.to_string()).collect(),
        )?;
        frame.push_column(CATEGORY_PREDICTION_COLUMN, cat_prediction)?;

        let output = self.prediction_dir.join(prediction_file_name(input, now)?);
        frame.write_csv(&output)?;
        tracing::info!("Wrote {} predictions to {}", frame.len(), output.display());

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::SensorForgeError;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(14, 25, 1)
            .unwrap()
    }

    #[test]
    fn test_prediction_file_name() {
        assert_eq!(
            prediction_file_name(Path::new("data/sensors.csv"), at()).unwrap(),
            "sensors10172026__142501.csv"
        );
        assert_eq!(
            prediction_file_name(Path::new("batch"), at()).unwrap(),
            "batch10172026__142501.csv"
        );
        assert!(prediction_file_name(Path::new("/"), at()).is_err());
    }

    #[test]
    fn test_empty_registry_is_not_available() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("sensors.csv");
        std::fs::write(&input, "aa_000\n1\n").unwrap();

        let resolver = ModelResolver::new(temp_dir.path().join("saved_models")).unwrap();
        let predictor: BatchPredictor<_> =
            BatchPredictor::new(resolver, ArtifactFormat::Bincode, temp_dir.path().join("prediction"));

        let err = predictor.predict_file_at(&input, at()).unwrap_err();
        assert!(matches!(
            err,
            SensorForgeError::Registry(RegistryError::NotAvailable(_))
        ));
    }

    #[test]
    fn test_predict_file() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = ModelResolver::new(temp_dir.path().join("saved_models")).unwrap();
        let format = ArtifactFormat::Json;

        let paths = resolver.new_save_paths().unwrap();
        let transformer = FittedTransformer::passthrough(
            vec!["aa_000".to_string(), "ab_000".to_string()],
            vec![0.0, 0.0],
        )
        .unwrap();
        let model = NearestCentroid::new(vec![vec![0.0, 0.0], vec![100.0, 100.0]]).unwrap();
        let encoder = TargetEncoder::fit(["neg", "pos"]).unwrap();
        format.save_object(&paths.transformer, &transformer).unwrap();
        format.save_object(&paths.model, &model).unwrap();
        format.save_object(&paths.target_encoder, &encoder).unwrap();

        let input = temp_dir.path().join("sensors.csv");
        std::fs::write(&input, "class,ab_000,aa_000\nneg,1,na\npos,90,120\n").unwrap();

        let predictor: BatchPredictor<_> =
            BatchPredictor::new(resolver, format, temp_dir.path().join("prediction"));
        let output = predictor.predict_file_at(&input, at()).unwrap();

        assert_eq!(
            output,
            temp_dir.path().join("prediction").join("sensors10172026__142501.csv")
        );
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "class,ab_000,aa_000,prediction,cat_prediction\nneg,1,na,0,neg\npos,90,120,1,pos\n"
        );
    }
}
