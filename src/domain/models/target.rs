//! 模板替换目标

use serde::Serialize;
use std::path::PathBuf;

/// 一条字面量替换规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub placeholder: String,
    pub value: String,
}

impl Replacement {
    pub fn new(placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: value.into(),
        }
    }
}

/// 一个可选的模板文件及其替换规则
///
/// `path` 相对于工作目录根；文件不存在时整个目标被跳过。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateTarget {
    pub path: PathBuf,
    pub replacements: Vec<Replacement>,
    /// 成功后打印的说明
    pub summary: String,
}
