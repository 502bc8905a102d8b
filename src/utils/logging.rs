//! 日志系统
//!
//! 基于 tracing 的日志初始化，支持：
//! - 可配置的日志级别（`RUST_LOG` 优先）
//! - 多种日志格式（json、pretty、compact）
//! - 输出到 stdout、stderr 或追加到文件

use crate::config::settings::LoggingConfig;
use crate::error::ConfigError;
use crate::Result;
use std::path::Path;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 初始化日志系统
///
/// 只使用第一个输出目标；配置了多个时在 stderr 给出提示。
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level);
    let primary_output = config
        .output
        .first()
        .map(|s| s.as_str())
        .unwrap_or("stdout");

    if config.output.len() > 1 {
        // 此时日志系统尚未初始化，只能直接写 stderr
        eprintln!(
            "Warning: Multiple log outputs specified, only the first one ({}) will be used",
            primary_output
        );
    }

    match primary_output {
        "stdout" => init_subscriber(&config.format, filter, std::io::stdout)?,
        "stderr" => init_subscriber(&config.format, filter, std::io::stderr)?,
        file_path => {
            let file = open_log_file(Path::new(file_path))?;
            init_subscriber(&config.format, filter, file)?;
        }
    }

    tracing::debug!(
        "Logging initialized: level={}, format={}, output={}",
        config.level,
        config.format,
        primary_output
    );

    Ok(())
}

/// `RUST_LOG` 优先，否则使用配置的级别，级别无效时回退到 info
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(level).unwrap_or_else(|_| {
            eprintln!("Warning: Invalid log level '{}', using 'info' as default", level);
            EnvFilter::new("info")
        })
    })
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Invalid(format!("Failed to create log directory: {}", e))
        })?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ConfigError::Invalid(format!("Failed to open log file {}: {}", path.display(), e))
        })?;
    Ok(file)
}

fn init_subscriber<W>(format: &str, filter: EnvFilter, writer: W) -> Result<()>
where
    W: for<'writer> fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = match format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .with_writer(writer)
            .json()
            .with_target(true)
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        "pretty" | "human" => fmt::layer()
            .with_writer(writer)
            .pretty()
            .with_target(true)
            .with_level(true)
            .boxed(),
        _ => fmt::layer()
            .with_writer(writer)
            .compact()
            .with_target(true)
            .with_level(true)
            .boxed(),
    };

    Registry::default()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| ConfigError::Invalid(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("sensorforge.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
