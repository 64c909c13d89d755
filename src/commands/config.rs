//! config 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::Application;
use crate::cli::OutputFormat;
use crate::domain::error::{DomainError, Result};
use crate::infrastructure::config::BootstrapConfig;

/// config show 命令
pub struct ConfigShowCommand<'a> {
    app: &'a Application,
    format: OutputFormat,
}

impl<'a> ConfigShowCommand<'a> {
    pub fn new(app: &'a Application, format: OutputFormat) -> Self {
        Self { app, format }
    }
}

impl CommandHandler for ConfigShowCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let (config, sources) = self.app.load_config()?;

        if ctx.verbose {
            if sources.is_empty() {
                eprintln!("# 来源: 内置默认值");
            }
            for source in &sources {
                eprintln!("# 来源: {}", source.display());
            }
        }

        let text = match self.format {
            OutputFormat::Toml => config.to_toml()?,
            OutputFormat::Json => config.to_json()?,
        };
        println!("{}", text.trim_end());
        Ok(())
    }
}

/// config init 命令
pub struct ConfigInitCommand<'a> {
    app: &'a Application,
    force: bool,
}

impl<'a> ConfigInitCommand<'a> {
    pub fn new(app: &'a Application, force: bool) -> Self {
        Self { app, force }
    }
}

impl CommandHandler for ConfigInitCommand<'_> {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let path = self.app.workspace.project_config_path();
        if path.exists() && !self.force {
            return Err(DomainError::Config(format!(
                "{} 已存在，使用 --force 覆盖",
                path.display()
            )));
        }

        let content = format!(
            "# project-bootstrap 项目级配置\n\n{}",
            BootstrapConfig::default().to_toml()?
        );
        std::fs::write(&path, content)?;
        println!("✓ 配置文件: {}", path.display());
        Ok(())
    }
}
