//! 最近质心分类器

use crate::error::ModelError;
use crate::models::traits::Classifier;
use crate::Result;
use serde::{Deserialize, Serialize};

/// 每个编码类别一个质心，预测为平方距离最近的类别
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestCentroid {
    /// `centroids[class]` 为该类别的质心
    pub centroids: Vec<Vec<f64>>,
}

impl NearestCentroid {
    /// 构造分类器，所有质心维度必须一致
    pub fn new(centroids: Vec<Vec<f64>>) -> Result<Self> {
        let dim = match centroids.first() {
            Some(first) => first.len(),
            None => return Err(ModelError::Empty("classifier has no centroids".to_string()).into()),
        };
        if let Some(bad) = centroids.iter().find(|c| c.len() != dim) {
            return Err(ModelError::FeatureMismatch {
                expected: dim,
                actual: bad.len(),
            }
            .into());
        }
        Ok(Self { centroids })
    }

    fn dim(&self) -> usize {
        self.centroids.first().map(Vec::len).unwrap_or(0)
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

impl Classifier for NearestCentroid {
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>> {
        let dim = self.dim();
        features
            .iter()
            .map(|row| -> Result<usize> {
                if row.len() != dim {
                    return Err(ModelError::FeatureMismatch {
                        expected: dim,
                        actual: row.len(),
                    }
                    .into());
                }
                let mut best = 0;
                let mut best_distance = f64::INFINITY;
                for (class, centroid) in self.centroids.iter().enumerate() {
                    let distance = squared_distance(row, centroid);
                    // 距离相同时取编号较小的类别
                    if distance < best_distance {
                        best = class;
                        best_distance = distance;
                    }
                }
                Ok(best)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SensorForgeError;

    #[test]
    fn test_predict_nearest() {
        let model = NearestCentroid::new(vec![vec![0.0, 0.0], vec![10.0, 10.0]]).unwrap();
        let predictions = model
            .predict(&[vec![1.0, -1.0], vec![9.0, 8.0], vec![5.0, 5.0]])
            .unwrap();
        assert_eq!(predictions, vec![0, 1, 0]);
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let model = NearestCentroid::new(vec![vec![0.0, 0.0]]).unwrap();
        let err = model.predict(&[vec![1.0]]).unwrap_err();
        assert!(matches!(err, SensorForgeError::Model(ModelError::FeatureMismatch { .. })));
    }

    #[test]
    fn test_new_rejects_empty_and_ragged() {
        assert!(NearestCentroid::new(vec![]).is_err());
        assert!(NearestCentroid::new(vec![vec![0.0], vec![0.0, 1.0]]).is_err());
    }
}
