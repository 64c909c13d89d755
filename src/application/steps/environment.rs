//! 运行时环境与依赖安装

use super::{Step, StepContext, StepOutcome};
use crate::domain::error::Result;
use crate::domain::ports::CommandSpec;

/// 在固定目录中创建隔离的运行时环境
///
/// 目录已存在时跳过，除非配置了 `recreate_environment`（此时清空重建）。
pub struct CreateEnvironment;

impl Step for CreateEnvironment {
    fn name(&self) -> &'static str {
        "create-environment"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome> {
        let env_dir = &ctx.config.env_dir;
        let exists = ctx.workspace.exists(env_dir);

        if exists && !ctx.config.recreate_environment {
            return Ok(StepOutcome::Skipped(format!("运行时环境 {} 已存在", env_dir)));
        }

        ctx.console.step(&format!("正在 {} 中创建虚拟环境...", env_dir));

        let mut args = vec!["-m".to_string(), "venv".to_string()];
        if exists {
            args.push("--clear".to_string());
        }
        args.push(env_dir.clone());

        ctx.run_checked(&CommandSpec::new(ctx.platform.python(), args))?;
        Ok(StepOutcome::Done)
    }
}

/// 按依赖清单安装依赖
pub struct InstallDependencies;

impl Step for InstallDependencies {
    fn name(&self) -> &'static str {
        "install-dependencies"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome> {
        let manifest = &ctx.config.requirements;
        ctx.console.step(&format!("正在从 {} 安装依赖...", manifest));

        // 程序路径相对于项目根目录，不依赖进程自身的工作目录
        let pip = ctx
            .workspace
            .resolve(ctx.platform.pip_path(&ctx.config.env_dir));
        ctx.run_checked(&CommandSpec::new(
            &pip.to_string_lossy(),
            ["install", "-r", manifest.as_str()],
        ))?;
        Ok(StepOutcome::Done)
    }
}
