//! .env 格式解析器
//!
//! 规则：
//! - 忽略空行和以 # 开头的注释行
//! - 格式：KEY=VALUE，等号两侧空白会被去除
//! - 不符合格式的行被跳过

use crate::domain::error::{DomainError, Result};
use regex::Regex;

/// 解析 .env 内容为有序键值对
pub fn parse(content: &str) -> Result<Vec<(String, String)>> {
    let re = Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*?)\s*$")
        .map_err(|e| DomainError::Parse(e.to_string()))?;

    let mut vars = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();

        // 跳过空行和注释
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(caps) = re.captures(trimmed) {
            vars.push((caps[1].to_string(), caps[2].to_string()));
        }
    }

    Ok(vars)
}

/// 查找单个键
pub fn lookup(content: &str, key: &str) -> Result<Option<String>> {
    Ok(parse(content)?
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v))
}
