//! doctor 命令处理器

use super::{CommandContext, CommandHandler};
use crate::app::Application;
use crate::domain::error::Result;
use crate::domain::models::Platform;
use crate::domain::template::TEMPLATE_FILES;
use crate::infrastructure::dotenv;

/// doctor 命令
pub struct DoctorCommand<'a> {
    app: &'a Application,
}

impl<'a> DoctorCommand<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }

    /// 需要检查的外部工具
    fn tools(platform: Platform) -> Vec<(&'static str, Vec<&'static str>)> {
        let mut tools = vec![
            (platform.python(), vec!["--version"]),
            ("git", vec!["--version"]),
        ];
        match platform {
            Platform::Windows => {
                tools.push(("cmd", vec!["/C", "ver"]));
                tools.push(("powershell", vec!["-NoProfile", "-Command", "exit"]));
            }
            Platform::Unix => tools.push(("make", vec!["--version"])),
        }
        tools
    }
}

impl CommandHandler for DoctorCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let ws = &self.app.workspace;
        let platform = Platform::current();

        println!("🔍 项目初始化诊断工具\n");
        println!("平台: {} | 工作目录: {}", platform, ws.root().display());
        println!("──────────────────────────────────────────────\n");

        let mut issues = 0;
        let mut warnings = 0;

        // 1. 配置
        println!("⚙️  1. 配置");
        let config = match self.app.load_config() {
            Ok((config, sources)) => {
                if sources.is_empty() {
                    println!("   ○ 使用内置默认配置");
                }
                for source in sources {
                    println!("   ✓ {}", source.display());
                }
                config
            }
            Err(e) => {
                println!("   ❌ {}", e);
                issues += 1;
                Default::default()
            }
        };
        println!();

        // 2. 外部工具
        println!("🧰 2. 外部工具");
        for (program, args) in Self::tools(platform) {
            if self.app.runner.can_launch(program, &args) {
                println!("   ✓ {}", program);
            } else {
                println!("   ❌ {}: 无法启动", program);
                issues += 1;
            }
        }
        if platform == Platform::Unix {
            println!("   ⚠️  收尾脚本 {} 仅支持 Windows", config.post_setup_script);
            warnings += 1;
        }
        println!();

        // 3. 工作目录
        println!("📁 3. 工作目录");
        let env_state = if ws.exists(&config.env_dir) {
            "存在（将跳过创建）"
        } else {
            "不存在"
        };
        println!("   {}: {}", config.env_dir, env_state);

        if ws.exists(&config.requirements) {
            println!("   ✓ {}", config.requirements);
        } else {
            println!("   ❌ {}: 不存在，依赖安装将失败", config.requirements);
            issues += 1;
        }

        if config.generate_docs && !ws.exists(&config.docs_dir) {
            println!("   ⚠️  {}: 不存在，文档生成将失败", config.docs_dir);
            warnings += 1;
        }

        match ws.read_optional(&config.env_file)? {
            Some(content) => match dotenv::lookup(&content, "PROJECT_NAME")? {
                Some(name) => println!("   ✓ {}: PROJECT_NAME={}", config.env_file, name),
                None => println!("   ✓ {}: 未设置 PROJECT_NAME", config.env_file),
            },
            None => println!("   ○ {}: 不存在（将被创建）", config.env_file),
        }

        if ws.has_repository() {
            println!("   ○ .git: 已存在（将跳过初始化）");
        } else {
            println!("   ○ .git: 不存在（将初始化）");
        }
        println!();

        // 4. 模板文件
        println!("📄 4. 模板文件");
        for file in TEMPLATE_FILES {
            match ws.read_optional(file)? {
                Some(content) => {
                    let marked = content.contains(&config.placeholders.project)
                        || content.contains(&config.placeholders.author);
                    if marked {
                        println!("   ✓ {}: 包含占位符", file);
                    } else {
                        println!("   ○ {}: 没有占位符", file);
                    }
                }
                None => println!("   ○ {}: 不存在", file),
            }
        }
        println!();

        // 总结
        println!("──────────────────────────────────────────────");
        if issues == 0 && warnings == 0 {
            println!("✅ 所有检查通过");
        } else {
            if issues > 0 {
                println!("❌ 发现 {} 个问题需要修复", issues);
            }
            if warnings > 0 {
                println!("⚠️  发现 {} 个警告", warnings);
            }
            if !ctx.verbose {
                println!("提示：使用 --verbose 查看详细信息");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_tools_include_make() {
        let names: Vec<_> = DoctorCommand::tools(Platform::Unix)
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert_eq!(names, vec!["python3", "git", "make"]);
    }

    #[test]
    fn test_windows_tools_include_powershell() {
        let names: Vec<_> = DoctorCommand::tools(Platform::Windows)
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert!(names.contains(&"powershell"));
        assert!(!names.contains(&"make"));
    }
}
