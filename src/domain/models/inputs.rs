//! 用户输入实体

use crate::domain::error::{DomainError, Result};
use serde::Serialize;

/// 一次引导运行的全部输入
///
/// 只能通过 [`ProjectInputs::new`] 构造，保证两个字段在去除首尾空白后非空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInputs {
    name: String,
    repo_url: String,
}

impl ProjectInputs {
    /// 校验并创建输入
    pub fn new(name: &str, repo_url: &str) -> Result<Self> {
        let name = name.trim();
        let repo_url = repo_url.trim();

        if name.is_empty() {
            return Err(DomainError::EmptyInput("项目名称".to_string()));
        }
        if repo_url.is_empty() {
            return Err(DomainError::EmptyInput("仓库地址".to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            repo_url: repo_url.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }
}
