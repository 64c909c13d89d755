//! 外部世界接口定义（输出端口）
//!
//! 进程调用与系统身份都通过这里注入，核心流程因此可以脱离真实
//! 文件系统和真实用户进行测试。

use crate::domain::error::Result;
use std::fmt;
use std::path::PathBuf;

/// 一次外部命令调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// 相对于工作目录根的子目录
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// 在子目录中执行
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(dir) = &self.cwd {
            write!(f, "cd {} && ", dir.display())?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// 命令执行结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// 外部命令执行器
pub trait CommandRunner {
    /// 执行命令并捕获输出
    ///
    /// 只有命令无法启动时才返回 `Err`；非零退出码体现在
    /// [`CommandOutput::success`] 中，由调用方决定失败策略。
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput>;
}

/// 系统身份提供者
pub trait IdentityProvider {
    /// 当前登录用户名
    fn username(&self) -> Result<String>;
}
