//! docs 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::Application;
use crate::domain::error::Result;

/// docs 命令
pub struct DocsCommand<'a> {
    app: &'a Application,
}

impl<'a> DocsCommand<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }
}

impl CommandHandler for DocsCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let (config, _) = self.app.load_config()?;
        let bootstrapper = self.app.bootstrapper(config);
        bootstrapper.build_docs()?;
        if ctx.verbose {
            println!("✓ 文档已生成于 {}", bootstrapper.config().docs_dir);
        }
        Ok(())
    }
}
