use crate::config::Config;
use crate::Result;

/// 打印生效的配置
pub fn show_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
