//! 占位符替换
//!
//! 全部替换都是大小写敏感的字面量子串替换，不做任何转义。

use crate::domain::models::{ProjectInputs, Replacement, TemplateTarget};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const README_FILE: &str = "README.md";
pub const DOCS_CONF_FILE: &str = "docs/source/conf.py";
pub const PACKAGE_MANIFEST_FILE: &str = "pyproject.toml";
pub const LICENSE_FILE: &str = "LICENSE";

/// 参与替换的全部模板文件
pub const TEMPLATE_FILES: [&str; 4] = [
    README_FILE,
    DOCS_CONF_FILE,
    PACKAGE_MANIFEST_FILE,
    LICENSE_FILE,
];

/// 模板仓库里预置的占位符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatePlaceholders {
    /// 模板项目名
    pub project: String,
    /// 模板作者名
    pub author: String,
    /// 模板作者邮箱（仅出现在打包清单的 authors 行）
    pub author_email: String,
    /// 模板主页地址
    pub homepage: String,
}

impl Default for TemplatePlaceholders {
    fn default() -> Self {
        Self {
            project: "project-template".to_string(),
            author: "ChubbyChuckles".to_string(),
            author_email: "christian.rickert.1989@gmail.com".to_string(),
            homepage: "https://github.com/ChubbyChuckles/project-template".to_string(),
        }
    }
}

/// 模板文件的替换规则是否用到当前用户名（README 只换项目名）
#[must_use]
pub fn needs_identity(file: &str) -> bool {
    file != README_FILE
}

/// 对内容依次应用替换规则
///
/// 每条规则替换全部出现位置；后一条规则作用于前一条的结果。
/// 占位符为空的规则不生效，否则会在每个字符之间插入替换值。
#[must_use]
pub fn substitute(content: &str, replacements: &[Replacement]) -> String {
    replacements
        .iter()
        .filter(|r| !r.placeholder.is_empty())
        .fold(content.to_string(), |acc, r| acc.replace(&r.placeholder, &r.value))
}

/// 构建固定的四个模板目标
#[must_use]
pub fn standard_targets(
    inputs: &ProjectInputs,
    placeholders: &TemplatePlaceholders,
    user: &str,
) -> Vec<TemplateTarget> {
    let name = inputs.name();
    let p = placeholders;

    vec![
        TemplateTarget {
            path: PathBuf::from(README_FILE),
            replacements: vec![Replacement::new(&p.project, name)],
            summary: format!("已将 README.md 中的项目名更新为 '{}'", name),
        },
        TemplateTarget {
            path: PathBuf::from(DOCS_CONF_FILE),
            replacements: vec![
                Replacement::new(
                    format!("project = '{}'", p.project),
                    format!("project = '{}'", name),
                ),
                Replacement::new(
                    format!("author = '{}'", p.author),
                    format!("author = '{}'", user),
                ),
            ],
            summary: "已更新 docs/source/conf.py 中的项目名和作者".to_string(),
        },
        TemplateTarget {
            path: PathBuf::from(PACKAGE_MANIFEST_FILE),
            replacements: vec![
                Replacement::new(
                    format!("name = \"{}\"", p.project),
                    format!("name = \"{}\"", name),
                ),
                Replacement::new(
                    format!("Homepage = \"{}\"", p.homepage),
                    format!("Homepage = \"{}\"", inputs.repo_url()),
                ),
                Replacement::new(
                    format!(
                        "authors = [{{name = \"{}\", email = \"{}\"}}]",
                        p.author, p.author_email
                    ),
                    format!("authors = [{{name = \"{}\", email = \"\"}}]", user),
                ),
            ],
            summary: "已更新 pyproject.toml 中的项目名、主页和作者".to_string(),
        },
        TemplateTarget {
            path: PathBuf::from(LICENSE_FILE),
            replacements: vec![Replacement::new(&p.author, user)],
            summary: "已更新 LICENSE 中的版权所有者".to_string(),
        },
    ]
}
