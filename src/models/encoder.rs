//! 标签编码器

use crate::error::ModelError;
use crate::models::traits::TargetDecoder;
use crate::Result;
use serde::{Deserialize, Serialize};

/// 字符串标签与连续编号之间的映射，编号按标签排序分配
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEncoder {
    /// `classes[id]` 为编号 `id` 对应的标签
    pub classes: Vec<String>,
}

impl TargetEncoder {
    /// 从标签样本拟合：去重并排序
    pub fn fit<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classes: Vec<String> = labels.into_iter().map(|s| s.as_ref().to_string()).collect();
        classes.sort();
        classes.dedup();
        if classes.is_empty() {
            return Err(ModelError::Empty("target encoder has no classes".to_string()).into());
        }
        Ok(Self { classes })
    }

    /// 标签编码
    pub fn transform<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        labels
            .iter()
            .map(|label| -> Result<usize> {
                let label = label.as_ref();
                self.classes
                    .binary_search_by(|c| c.as_str().cmp(label))
                    .map_err(|_| ModelError::UnknownClass(label.to_string()).into())
            })
            .collect()
    }
}

impl TargetDecoder for TargetEncoder {
    fn inverse_transform(&self, encoded: &[usize]) -> Result<Vec<String>> {
        encoded
            .iter()
            .map(|&id| -> Result<String> {
                self.classes
                    .get(id)
                    .cloned()
                    .ok_or_else(|| ModelError::UnknownLabel(id).into())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SensorForgeError;

    #[test]
    fn test_fit_sorts_and_dedups() {
        let encoder = TargetEncoder::fit(["pos", "neg", "neg", "pos"]).unwrap();
        assert_eq!(encoder.classes, vec!["neg".to_string(), "pos".to_string()]);
        assert_eq!(encoder.transform(&["pos", "neg"]).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_inverse_transform() {
        let encoder = TargetEncoder::fit(["neg", "pos"]).unwrap();
        assert_eq!(
            encoder.inverse_transform(&[0, 1, 1]).unwrap(),
            vec!["neg".to_string(), "pos".to_string(), "pos".to_string()]
        );

        let err = encoder.inverse_transform(&[2]).unwrap_err();
        assert!(matches!(err, SensorForgeError::Model(ModelError::UnknownLabel(2))));
    }

    #[test]
    fn test_unknown_class() {
        let encoder = TargetEncoder::fit(["neg"]).unwrap();
        assert!(encoder.transform(&["maybe"]).is_err());
        assert!(TargetEncoder::fit(Vec::<String>::new()).is_err());
    }
}
