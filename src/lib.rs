//! project-bootstrap - 从项目模板初始化新项目
//!
//! 分层结构：
//! - domain: 输入、占位符替换、端口与错误
//! - application: 有名字的引导步骤和串联它们的服务
//! - infrastructure: 文件系统、子进程、身份、配置与控制台适配器

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

#[cfg(test)]
mod test_utils;

// 重新导出常用类型
pub use application::services::{Bootstrapper, RunReport};
pub use domain::{DomainError, ProjectInputs, Result};
