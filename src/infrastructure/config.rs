//! 引导配置
//!
//! 分层合并（后者覆盖前者）：
//! 1. 内置默认值
//! 2. 用户级 `~/.project-bootstrap/config.toml`
//! 3. 项目级 `<root>/bootstrap.toml`
//! 4. `--config` 指定的文件（必须存在）

use crate::domain::error::{DomainError, Result};
use crate::domain::template::TemplatePlaceholders;
use crate::infrastructure::paths::{self, Workspace};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 生效的完整配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// 运行时环境目录
    pub env_dir: String,
    /// 依赖清单
    pub requirements: String,
    /// 文档目录
    pub docs_dir: String,
    /// 环境配置文件
    pub env_file: String,
    /// 设置完成后切换到的分支
    pub branch: String,
    pub remote: String,
    pub commit_message: String,
    /// 仅 Windows 可用的收尾脚本
    pub post_setup_script: String,
    /// 运行时环境已存在时是否重建
    pub recreate_environment: bool,
    pub generate_docs: bool,
    pub placeholders: TemplatePlaceholders,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            env_dir: ".venv".to_string(),
            requirements: "requirements.txt".to_string(),
            docs_dir: "docs".to_string(),
            env_file: ".env".to_string(),
            branch: "develop".to_string(),
            remote: "origin".to_string(),
            commit_message: "Initial commit for new project".to_string(),
            post_setup_script: "scripts\\commit-push.ps1".to_string(),
            recreate_environment: false,
            generate_docs: true,
            placeholders: TemplatePlaceholders::default(),
        }
    }
}

/// 单个配置文件中的部分配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub env_dir: Option<String>,
    pub requirements: Option<String>,
    pub docs_dir: Option<String>,
    pub env_file: Option<String>,
    pub branch: Option<String>,
    pub remote: Option<String>,
    pub commit_message: Option<String>,
    pub post_setup_script: Option<String>,
    pub recreate_environment: Option<bool>,
    pub generate_docs: Option<bool>,
    pub placeholders: Option<PlaceholderLayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderLayer {
    pub project: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub homepage: Option<String>,
}

impl PlaceholderLayer {
    /// 第一个为空的占位符字段名
    fn first_empty(&self) -> Option<&'static str> {
        [
            ("project", &self.project),
            ("author", &self.author),
            ("author_email", &self.author_email),
            ("homepage", &self.homepage),
        ]
        .into_iter()
        .find(|(_, value)| value.as_deref().is_some_and(|v| v.trim().is_empty()))
        .map(|(key, _)| key)
    }
}

impl ConfigLayer {
    /// 解析 TOML 内容
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let layer: Self = toml::from_str(content)
            .map_err(|e| DomainError::Config(format!("{}: {}", origin.display(), e)))?;

        if let Some(key) = layer.placeholders.as_ref().and_then(PlaceholderLayer::first_empty) {
            return Err(DomainError::Config(format!(
                "{}: placeholders.{} 不能为空",
                origin.display(),
                key
            )));
        }
        Ok(layer)
    }

    /// 读取文件；不存在时返回 `None`
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| DomainError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content, path).map(Some)
    }
}

impl BootstrapConfig {
    /// 用一个配置层覆盖当前值
    pub fn apply(&mut self, layer: ConfigLayer) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut self.env_dir, layer.env_dir);
        set(&mut self.requirements, layer.requirements);
        set(&mut self.docs_dir, layer.docs_dir);
        set(&mut self.env_file, layer.env_file);
        set(&mut self.branch, layer.branch);
        set(&mut self.remote, layer.remote);
        set(&mut self.commit_message, layer.commit_message);
        set(&mut self.post_setup_script, layer.post_setup_script);
        set(&mut self.recreate_environment, layer.recreate_environment);
        set(&mut self.generate_docs, layer.generate_docs);

        if let Some(p) = layer.placeholders {
            set(&mut self.placeholders.project, p.project);
            set(&mut self.placeholders.author, p.author);
            set(&mut self.placeholders.author_email, p.author_email);
            set(&mut self.placeholders.homepage, p.homepage);
        }
    }

    /// 按层级加载配置，返回配置和实际读取的文件
    pub fn load(workspace: &Workspace, explicit: Option<&Path>) -> Result<(Self, Vec<PathBuf>)> {
        let user = paths::get_user_config_path().ok();
        Self::load_from(user.as_deref(), workspace, explicit)
    }

    /// 与 [`BootstrapConfig::load`] 相同，但用户级路径由调用方给出
    pub fn load_from(
        user_path: Option<&Path>,
        workspace: &Workspace,
        explicit: Option<&Path>,
    ) -> Result<(Self, Vec<PathBuf>)> {
        let mut config = Self::default();
        let mut sources = Vec::new();

        let project_path = workspace.project_config_path();
        for path in user_path.into_iter().chain(std::iter::once(project_path.as_path())) {
            if let Some(layer) = ConfigLayer::load_optional(path)? {
                config.apply(layer);
                sources.push(path.to_path_buf());
            }
        }

        if let Some(path) = explicit {
            let layer = ConfigLayer::load_optional(path)?.ok_or_else(|| {
                DomainError::Config(format!("配置文件不存在: {}", path.display()))
            })?;
            config.apply(layer);
            sources.push(path.to_path_buf());
        }

        Ok((config, sources))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
