//! 跨平台命令执行器
//!
//! 子进程输出被捕获：stdout 回显到控制台，stderr 留给调用方组织错误信息。
//! 没有超时，挂起的子进程会挂起整个运行。

use crate::domain::error::{DomainError, Result};
use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec};
use crate::infrastructure::console::Console;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// 基于 `std::process` 的命令执行器
pub struct ProcessRunner {
    root: PathBuf,
    console: Console,
}

impl ProcessRunner {
    pub fn new(root: impl Into<PathBuf>, console: Console) -> Self {
        Self {
            root: root.into(),
            console,
        }
    }

    /// 检查程序是否可以启动（诊断用）
    pub fn can_launch(&self, program: &str, args: &[&str]) -> bool {
        Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let cwd = match &spec.cwd {
            Some(dir) => self.root.join(dir),
            None => self.root.clone(),
        };

        // 工作目录缺失时 spawn 同样报 NotFound，先排除它
        if !cwd.is_dir() {
            return Err(DomainError::Io(format!(
                "工作目录不存在: {} (执行 {})",
                cwd.display(),
                spec.program
            )));
        }

        self.console.trace(&format!("$ {}", spec));

        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => DomainError::CommandNotFound(format!(
                    "{}: {} (请确保命令在 PATH 中或使用完整路径)",
                    spec.program, e
                )),
                _ => DomainError::Io(format!("无法启动 {}: {}", spec.program, e)),
            })?;

        let result = CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        self.console.command_output(&result.stdout);

        Ok(result)
    }
}
