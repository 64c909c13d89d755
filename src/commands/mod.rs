//! 命令处理器
//!
//! 每个子命令一个模块，实现 CommandHandler trait

use crate::domain::error::Result;

pub mod config;
pub mod docs;
pub mod doctor;
pub mod init;

pub use config::{ConfigInitCommand, ConfigShowCommand};
pub use docs::DocsCommand;
pub use doctor::DoctorCommand;
pub use init::InitCommand;

/// 命令上下文
#[derive(Debug)]
pub struct CommandContext {
    pub verbose: bool,
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
