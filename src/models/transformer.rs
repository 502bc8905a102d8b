//! 已拟合的特征转换器
//!
//! 先用每列的填充值补齐缺失值，再做标准化。

use crate::error::ModelError;
use crate::models::traits::{FeatureTransformer, RawRow};
use crate::{Result, SensorForgeError};
use serde::{Deserialize, Serialize};

/// 填充 + 标准化转换器
///
/// 反序列化时同样经过 [`FittedTransformer::new`] 的校验，参数长度不一致的产物无法加载。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransformerParams")]
pub struct FittedTransformer {
    /// 输入特征列名
    pub feature_names: Vec<String>,
    /// 缺失值填充值
    pub fill_values: Vec<f64>,
    /// 各列均值
    pub means: Vec<f64>,
    /// 各列缩放系数
    pub scales: Vec<f64>,
}

impl FittedTransformer {
    /// 由已知参数构造，并校验各参数长度一致
    pub fn new(
        feature_names: Vec<String>,
        fill_values: Vec<f64>,
        means: Vec<f64>,
        scales: Vec<f64>,
    ) -> Result<Self> {
        let transformer = Self {
            feature_names,
            fill_values,
            means,
            scales,
        };
        transformer.check_shape()?;
        Ok(transformer)
    }

    /// 恒等转换（只填充缺失值）
    pub fn passthrough(feature_names: Vec<String>, fill_values: Vec<f64>) -> Result<Self> {
        let n = feature_names.len();
        Self::new(feature_names, fill_values, vec![0.0; n], vec![1.0; n])
    }

    /// 各参数长度必须等于特征数，且至少有一个特征
    fn check_shape(&self) -> Result<()> {
        let expected = self.feature_names.len();
        if expected == 0 {
            return Err(ModelError::Empty("transformer has no features".to_string()).into());
        }
        for actual in [self.fill_values.len(), self.means.len(), self.scales.len()] {
            if actual != expected {
                return Err(ModelError::FeatureMismatch { expected, actual }.into());
            }
        }
        Ok(())
    }
}

/// 反序列化的原始参数，校验后才转换为 [`FittedTransformer`]
#[derive(Deserialize)]
struct TransformerParams {
    feature_names: Vec<String>,
    fill_values: Vec<f64>,
    means: Vec<f64>,
    scales: Vec<f64>,
}

impl TryFrom<TransformerParams> for FittedTransformer {
    type Error = SensorForgeError;

    fn try_from(params: TransformerParams) -> Result<Self> {
        Self::new(params.feature_names, params.fill_values, params.means, params.scales)
    }
}

impl FeatureTransformer for FittedTransformer {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn transform(&self, rows: &[RawRow]) -> Result<Vec<Vec<f64>>> {
        // 字段是公开的，构造后仍可能被改成不一致的长度
        self.check_shape()?;
        let expected = self.feature_names.len();
        rows.iter()
            .map(|row| -> Result<Vec<f64>> {
                if row.len() != expected {
                    return Err(ModelError::FeatureMismatch {
                        expected,
                        actual: row.len(),
                    }
                    .into());
                }
                Ok(row
                    .iter()
                    .enumerate()
                    .map(|(i, value)| {
                        let value = value.unwrap_or(self.fill_values[i]);
                        // 常数列缩放为 0 时不做缩放
                        let scale = if self.scales[i] == 0.0 { 1.0 } else { self.scales[i] };
                        (value - self.means[i]) / scale
                    })
                    .collect())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::ArtifactFormat;

    fn transformer() -> FittedTransformer {
        FittedTransformer::new(
            vec!["aa_000".to_string(), "ab_000".to_string()],
            vec![10.0, 0.0],
            vec![10.0, 2.0],
            vec![5.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_transform_imputes_and_scales() {
        let out = transformer()
            .transform(&[vec![Some(20.0), Some(3.0)], vec![None, None]])
            .unwrap();
        assert_eq!(out, vec![vec![2.0, 1.0], vec![0.0, -2.0]]);
    }

    #[test]
    fn test_transform_rejects_wrong_width() {
        let err = transformer().transform(&[vec![Some(1.0)]]).unwrap_err();
        assert!(matches!(
            err,
            SensorForgeError::Model(ModelError::FeatureMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_new_validates_lengths() {
        let err = FittedTransformer::new(
            vec!["a".to_string()],
            vec![0.0, 1.0],
            vec![0.0],
            vec![1.0],
        )
        .unwrap_err();
        assert!(matches!(err, SensorForgeError::Model(ModelError::FeatureMismatch { .. })));
        assert!(FittedTransformer::new(vec![], vec![], vec![], vec![]).is_err());
    }

    #[test]
    fn test_decode_rejects_mismatched_artifact() {
        let bytes = br#"{"feature_names":["a","b"],"fill_values":[0.0],"means":[0.0,0.0],"scales":[1.0,1.0]}"#;
        let err = ArtifactFormat::Json
            .decode::<FittedTransformer>(bytes)
            .unwrap_err();
        assert!(matches!(err, SensorForgeError::Storage(StorageError::InvalidFile(_))));

        let bincode_bytes = ArtifactFormat::Bincode
            .encode(&FittedTransformer {
                feature_names: vec!["a".to_string(), "b".to_string()],
                fill_values: vec![0.0],
                means: vec![0.0, 0.0],
                scales: vec![1.0, 1.0],
            })
            .unwrap();
        assert!(ArtifactFormat::Bincode
            .decode::<FittedTransformer>(&bincode_bytes)
            .is_err());
    }

    #[test]
    fn test_transform_rejects_mismatched_parameters() {
        let mut transformer = transformer();
        transformer.means.pop();
        let err = transformer
            .transform(&[vec![Some(1.0), Some(2.0)]])
            .unwrap_err();
        assert!(matches!(
            err,
            SensorForgeError::Model(ModelError::FeatureMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_transform_imputes_rows_read_as_nan() {
        use crate::models::{Classifier, NearestCentroid};
        use crate::pipeline::ingest::parse_cell;

        let transformer =
            FittedTransformer::passthrough(vec!["aa_000".to_string()], vec![100.0]).unwrap();
        let row = vec![parse_cell("NaN").unwrap()];
        let features = transformer.transform(&[row]).unwrap();
        assert_eq!(features, vec![vec![100.0]]);

        let model = NearestCentroid::new(vec![vec![0.0], vec![100.0]]).unwrap();
        assert_eq!(model.predict(&features).unwrap(), vec![1]);
    }
}
