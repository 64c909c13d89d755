//! 控制台输出与交互输入
//!
//! 默认只打印进度行和命令输出；`--verbose` 时额外打印命令行和跳过原因。

use crate::domain::error::{DomainError, Result};
use std::io::{BufRead, Write};

/// 控制台
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    verbose: bool,
}

impl Console {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// 非详细模式
    pub fn quiet() -> Self {
        Self::new(false)
    }

    /// 打印提示并读取一行
    ///
    /// 输入流结束时返回空字符串，交由输入校验处理。
    pub fn prompt<R: BufRead>(&self, reader: &mut R, message: &str) -> Result<String> {
        print!("{}", message);
        std::io::stdout()
            .flush()
            .map_err(|e| DomainError::Io(e.to_string()))?;

        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|e| DomainError::Io(e.to_string()))?;
        Ok(line.trim().to_string())
    }

    /// 步骤开始
    pub fn step(&self, message: &str) {
        println!("{}", message);
    }

    pub fn success(&self, message: &str) {
        println!("✓ {}", message);
    }

    pub fn skipped(&self, message: &str) {
        if self.verbose {
            println!("○ {}", message);
        }
    }

    /// 仅详细模式输出
    pub fn trace(&self, message: &str) {
        if self.verbose {
            println!("  {}", message);
        }
    }

    /// 回显子进程 stdout
    pub fn command_output(&self, stdout: &str) {
        let trimmed = stdout.trim_end();
        if !trimmed.is_empty() {
            println!("{}", trimmed);
        }
    }
}
