//! 收尾脚本

use super::{Step, StepContext, StepOutcome};
use crate::domain::error::{DomainError, Result};
use crate::domain::models::Platform;
use crate::domain::ports::CommandSpec;

/// 调用仅在 Windows 上可用的收尾脚本
///
/// 其它平台上直接失败，不尝试任何替代方案。
pub struct PostSetup;

impl Step for PostSetup {
    fn name(&self) -> &'static str {
        "post-setup"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome> {
        let script = ctx.config.post_setup_script.as_str();
        ctx.console.step(&format!("正在运行 {}...", script));

        match ctx.platform {
            Platform::Windows => {
                ctx.run_checked(&CommandSpec::new("powershell", ["-File", script]))?;
                Ok(StepOutcome::Done)
            }
            Platform::Unix => Err(DomainError::UnsupportedPlatform(format!(
                "{}（{} 仅适用于 Windows）",
                self.name(),
                script
            ))),
        }
    }
}
