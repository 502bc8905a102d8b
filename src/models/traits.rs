//! 模型 Trait 定义
//!
//! 批量预测流水线依赖的三种能力：特征转换、分类、标签解码。

use crate::Result;

/// 缺失值用 `None` 表示的原始特征行
pub type RawRow = Vec<Option<f64>>;

/// 特征转换器 trait
///
/// 已拟合的转换器记录它期望的输入特征列名和顺序。
pub trait FeatureTransformer {
    /// 输入特征列名（按顺序）
    fn feature_names(&self) -> &[String];

    /// 将原始行转换为稠密特征矩阵
    fn transform(&self, rows: &[RawRow]) -> Result<Vec<Vec<f64>>>;
}

/// 分类器 trait
pub trait Classifier {
    /// 预测每行的编码类别
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>>;
}

/// 标签解码 trait
pub trait TargetDecoder {
    /// 编码类别还原为原始标签
    fn inverse_transform(&self, encoded: &[usize]) -> Result<Vec<String>>;
}
