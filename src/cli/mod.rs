pub mod commands;

use crate::storage::ArtifactFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SensorForge CLI
#[derive(Parser)]
#[command(name = "sensorforge")]
#[command(about = "Batch sensor fault prediction with a versioned model registry")]
#[command(version)]
pub struct Cli {
    /// 配置文件路径
    #[arg(short, long, global = true, env = "SENSORFORGE_CONFIG")]
    pub config: Option<String>,

    /// 产物编码格式（bincode 或 json），覆盖配置中的 registry.format
    #[arg(long, global = true)]
    pub format: Option<ArtifactFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI 命令
#[derive(Subcommand)]
pub enum Command {
    /// 推送训练好的产物到推送目录和注册表新版本
    Push {
        /// 特征转换器文件
        #[arg(long)]
        transformer: PathBuf,
        /// 模型文件
        #[arg(long)]
        model: PathBuf,
        /// 标签编码器文件
        #[arg(long)]
        target_encoder: PathBuf,
    },
    /// 使用最新版本对 CSV 批量预测
    Predict {
        /// 输入 CSV 文件
        input: PathBuf,
    },
    /// 显示最新版本的产物路径
    Latest,
    /// 列出注册表中的所有版本
    List,
    /// 将 CSV 导出为 JSON 记录
    Dump {
        /// 输入 CSV 文件
        input: PathBuf,
        /// 输出 JSON 文件
        #[arg(short, long)]
        output: PathBuf,
    },
    /// 打印生效的配置
    Config,
}
