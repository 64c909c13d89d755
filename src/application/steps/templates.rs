//! 模板替换

use super::{Step, StepContext, StepOutcome};
use crate::domain::error::Result;
use crate::domain::models::ProjectInputs;
use crate::domain::template::{self, TEMPLATE_FILES, needs_identity, standard_targets};
use std::path::Path;

/// 在固定的模板文件集合中替换占位符
///
/// 每个文件都是可选的：不存在则不碰，也不报错。改写是原地进行的，不保留备份。
pub struct SubstituteTemplates {
    inputs: ProjectInputs,
}

impl SubstituteTemplates {
    pub fn new(inputs: ProjectInputs) -> Self {
        Self { inputs }
    }
}

impl Step for SubstituteTemplates {
    fn name(&self) -> &'static str {
        "substitute-templates"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome> {
        let mut present = Vec::new();
        for file in TEMPLATE_FILES {
            match ctx.workspace.read_optional(file)? {
                Some(content) => present.push((file, content)),
                None => ctx.console.skipped(&format!("{} 不存在，跳过", file)),
            }
        }

        if present.is_empty() {
            return Ok(StepOutcome::Skipped("没有找到任何模板文件".to_string()));
        }

        // 只有需要作者名的文件存在时才查询用户名
        let user = if present.iter().any(|(file, _)| needs_identity(file)) {
            ctx.identity.username()?
        } else {
            String::new()
        };
        let targets = standard_targets(&self.inputs, &ctx.config.placeholders, &user);

        for (file, content) in &present {
            let Some(target) = targets.iter().find(|t| t.path == Path::new(file)) else {
                continue;
            };
            let updated = template::substitute(content, &target.replacements);
            ctx.workspace.write(&target.path, &updated)?;
            ctx.console.success(&target.summary);
        }
        Ok(StepOutcome::Done)
    }
}
