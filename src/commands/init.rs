//! init 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::Application;
use crate::application::services::StepStatus;
use crate::domain::error::Result;
use std::io::BufRead;

const NAME_PROMPT: &str = "请输入新项目名称: ";
const URL_PROMPT: &str =
    "请输入新的 GitHub 仓库地址 (例如 https://github.com/username/repo.git): ";

/// init 命令
pub struct InitCommand<'a> {
    app: &'a Application,
    skip_docs: bool,
}

impl<'a> InitCommand<'a> {
    pub fn new(app: &'a Application, skip_docs: bool) -> Self {
        Self { app, skip_docs }
    }

    /// 从给定输入流读取两项输入并运行
    pub fn execute_with<R: BufRead>(&self, ctx: &CommandContext, input: &mut R) -> Result<()> {
        let console = self.app.console;
        let name = console.prompt(input, NAME_PROMPT)?;
        let url = console.prompt(input, URL_PROMPT)?;

        let (mut config, _) = self.app.load_config()?;
        if self.skip_docs {
            config.generate_docs = false;
        }

        let report = self.app.bootstrapper(config).run(&name, &url)?;

        if ctx.verbose {
            println!("\n步骤汇总:");
            for record in &report.steps {
                let mark = match &record.status {
                    StepStatus::Done => "✓".to_string(),
                    StepStatus::Skipped(reason) => format!("○ ({})", reason),
                    StepStatus::Tolerated(err) => format!("⚠️  ({})", err),
                };
                println!("  {:<22} {}", record.name, mark);
            }
        }
        println!("\n✅ 项目 '{}' 初始化完成", name);
        Ok(())
    }
}

impl CommandHandler for InitCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let stdin = std::io::stdin();
        self.execute_with(ctx, &mut stdin.lock())
    }
}
