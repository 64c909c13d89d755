//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: 领域实体（输入、平台、模板目标）
//! - template: 纯文本占位符替换
//! - ports: 外部世界接口（输出端口）
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod ports;
pub mod template;

pub use error::{DomainError, Result};
pub use models::{Platform, ProjectInputs, Replacement, TemplateTarget};
pub use ports::{CommandOutput, CommandRunner, CommandSpec, IdentityProvider};
