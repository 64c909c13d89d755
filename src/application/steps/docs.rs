//! 文档生成

use super::{Step, StepContext, StepOutcome};
use crate::domain::error::Result;
use crate::domain::models::Platform;
use crate::domain::ports::CommandSpec;

/// 在文档目录中调用文档生成器
pub struct GenerateDocs;

impl GenerateDocs {
    fn command(platform: Platform, docs_dir: &str) -> CommandSpec {
        let spec = match platform {
            Platform::Windows => CommandSpec::new("cmd", ["/C", "make.bat", "html"]),
            Platform::Unix => CommandSpec::new("make", ["html"]),
        };
        spec.in_dir(docs_dir)
    }
}

impl Step for GenerateDocs {
    fn name(&self) -> &'static str {
        "generate-docs"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome> {
        ctx.console.step("正在生成 Sphinx 文档...");
        ctx.run_checked(&Self::command(ctx.platform, &ctx.config.docs_dir))?;
        Ok(StepOutcome::Done)
    }
}
