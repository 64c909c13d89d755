//! 领域层错误类型

use miette::Diagnostic;
use std::error::Error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
///
/// 分类是平的：输入校验错误与外部命令失败，其余为基础设施错误。
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}不能为空")]
    #[diagnostic(code(bootstrap::empty_input), help("项目名称和仓库地址都必须填写"))]
    EmptyInput(String),

    #[error("命令 '{command}' 执行失败: {stderr}")]
    #[diagnostic(code(bootstrap::command_failed))]
    CommandFailed { command: String, stderr: String },

    #[error("命令未找到: {0}")]
    #[diagnostic(code(bootstrap::command_not_found), help("确保命令在 PATH 中"))]
    CommandNotFound(String),

    #[error("当前平台不支持步骤 {0}")]
    #[diagnostic(
        code(bootstrap::unsupported_platform),
        help("该脚本仅适用于 Windows，请在其它平台上手动完成")
    )]
    UnsupportedPlatform(String),

    #[error("IO 错误: {0}")]
    #[diagnostic(code(bootstrap::io))]
    Io(String),

    #[error("配置错误: {0}")]
    #[diagnostic(code(bootstrap::config))]
    Config(String),

    #[error("解析错误: {0}")]
    #[diagnostic(code(bootstrap::parse))]
    Parse(String),

    #[error("序列化错误: {0}")]
    #[diagnostic(code(bootstrap::serialization))]
    Serialization(String),
}

impl DomainError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 错误码、帮助信息与错误链
    /// verbose = false: 关键信息
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);
            if let Some(code) = self.code() {
                eprintln!("  ├─ 代码: {}", code);
            }
            if let Some(help) = self.help() {
                eprintln!("  ├─ 提示: {}", help);
            }
            let mut current = self.source();
            while let Some(next) = current {
                eprintln!("  └─ 原因: {}", next);
                current = next.source();
            }
        } else {
            match self {
                DomainError::CommandFailed { command, stderr } => {
                    eprintln!("命令执行失败 '{}': {}", command, stderr.trim_end())
                }
                _ => eprintln!("错误: {}", self),
            }
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for DomainError {
    fn from(err: toml::ser::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
