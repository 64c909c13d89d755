//! 环境配置文件

use super::{Step, StepContext, StepOutcome};
use crate::domain::error::Result;

/// 渲染环境配置文件内容
#[must_use]
pub fn render_env_file(project_name: &str) -> String {
    format!(
        "# Environment variables for the project\n\
         PROJECT_NAME={}\n\
         # Add other environment variables here\n\
         # EXAMPLE_API_KEY=your_api_key_here\n\
         # DATABASE_URL=your_database_url_here\n",
        project_name
    )
}

/// 写入环境配置文件，已存在时从不覆盖
pub struct WriteEnvFile {
    project_name: String,
}

impl WriteEnvFile {
    pub fn new(project_name: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
        }
    }
}

impl Step for WriteEnvFile {
    fn name(&self) -> &'static str {
        "write-env-file"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome> {
        let env_file = &ctx.config.env_file;
        if ctx.workspace.exists(env_file) {
            return Ok(StepOutcome::Skipped(format!("{} 已存在", env_file)));
        }

        ctx.console.step(&format!("正在创建 {}...", env_file));
        ctx.workspace
            .write_if_absent(env_file, &render_env_file(&self.project_name))?;
        ctx.console
            .success(&format!("已使用默认配置创建 {}", env_file));
        Ok(StepOutcome::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dotenv;
    use crate::test_utils::Harness;

    #[test]
    fn test_rendered_content_is_exact() {
        assert_eq!(
            render_env_file("demo"),
            "# Environment variables for the project\n\
             PROJECT_NAME=demo\n\
             # Add other environment variables here\n\
             # EXAMPLE_API_KEY=your_api_key_here\n\
             # DATABASE_URL=your_database_url_here\n"
        );
    }

    #[test]
    fn test_only_project_name_is_active() {
        let vars = dotenv::parse(&render_env_file("demo")).unwrap();
        assert_eq!(vars, vec![("PROJECT_NAME".to_string(), "demo".to_string())]);
    }

    #[test]
    fn test_writes_when_absent() {
        let h = Harness::new();
        let outcome = WriteEnvFile::new("demo").run(&h.ctx()).unwrap();
        assert_eq!(outcome, StepOutcome::Done);
        assert_eq!(h.project.read(".env"), render_env_file("demo"));
    }

    #[test]
    fn test_second_run_does_not_overwrite() {
        let h = Harness::new();
        h.project.file(".env", "PROJECT_NAME=original\nSECRET=keep\n");

        let outcome = WriteEnvFile::new("other").run(&h.ctx()).unwrap();

        assert!(matches!(outcome, StepOutcome::Skipped(_)));
        assert_eq!(h.project.read(".env"), "PROJECT_NAME=original\nSECRET=keep\n");
    }
}
