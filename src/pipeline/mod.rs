//! 批处理流水线
//!
//! 注册表之外的薄 I/O 层：数据读取、批量预测、模型推送和记录导出。

pub mod batch_prediction;
pub mod dump;
pub mod ingest;
pub mod model_pusher;

pub use batch_prediction::{prediction_file_name, BatchPredictor};
pub use ingest::SensorFrame;
pub use model_pusher::{ModelPusher, PusherArtifact, TrainedArtifacts};
