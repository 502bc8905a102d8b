use clap::Parser;
use sensorforge::cli::{commands, Cli, Command};
use sensorforge::pipeline::TrainedArtifacts;
use sensorforge::utils::logging::init_logging;
use sensorforge::{Config, Result};

fn main() {
    if let Err(e) = run() {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(format) = cli.format {
        config.registry.format = format;
    }

    // 初始化日志
    init_logging(&config.logging)?;

    match cli.command {
        Command::Push {
            transformer,
            model,
            target_encoder,
        } => commands::push(
            &config,
            TrainedArtifacts {
                transformer_path: transformer,
                model_path: model,
                target_encoder_path: target_encoder,
            },
        ),
        Command::Predict { input } => commands::predict(&config, &input),
        Command::Latest => commands::latest(&config),
        Command::List => commands::list(&config),
        Command::Dump { input, output } => commands::dump(&input, &output),
        Command::Config => commands::show_config(&config),
    }
}
