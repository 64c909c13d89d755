//! 应用程序容器
//!
//! 负责把端口接到真实的适配器上

use crate::application::services::Bootstrapper;
use crate::domain::error::Result;
use crate::infrastructure::config::BootstrapConfig;
use crate::infrastructure::console::Console;
use crate::infrastructure::identity::SystemIdentity;
use crate::infrastructure::paths::Workspace;
use crate::infrastructure::process::ProcessRunner;
use std::path::PathBuf;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub verbose: bool,
    pub root: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

/// 应用程序容器
pub struct Application {
    pub workspace: Workspace,
    pub console: Console,
    pub runner: ProcessRunner,
    pub identity: SystemIdentity,
    config_path: Option<PathBuf>,
}

impl Application {
    /// 创建应用程序实例
    pub fn new(config: AppConfig) -> Result<Self> {
        let workspace = match config.root {
            Some(root) => Workspace::new(root),
            None => Workspace::current()?,
        };
        let console = Console::new(config.verbose);
        let runner = ProcessRunner::new(workspace.root(), console);

        Ok(Self {
            workspace,
            console,
            runner,
            identity: SystemIdentity,
            config_path: config.config_path,
        })
    }

    /// 加载分层配置，返回配置和读取过的文件
    pub fn load_config(&self) -> Result<(BootstrapConfig, Vec<PathBuf>)> {
        BootstrapConfig::load(&self.workspace, self.config_path.as_deref())
    }

    /// 使用给定配置构建引导服务
    pub fn bootstrapper(&self, config: BootstrapConfig) -> Bootstrapper<'_> {
        Bootstrapper::new(
            config,
            self.workspace.clone(),
            &self.runner,
            &self.identity,
            self.console,
        )
    }
}
