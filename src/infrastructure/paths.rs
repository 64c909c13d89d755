//! 路径管理工具
//!
//! 所有文件访问都相对于注入的工作目录根进行。

use crate::domain::error::{DomainError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 版本控制仓库标记目录
pub const REPOSITORY_MARKER: &str = ".git";

/// 用户级配置目录名
const USER_CONFIG_DIR: &str = ".project-bootstrap";

/// 项目级配置文件名
pub const PROJECT_CONFIG_FILE: &str = "bootstrap.toml";

/// 工作目录根
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 以当前目录为根
    pub fn current() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| DomainError::Io(e.to_string()))?;
        Ok(Self::new(cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 解析相对路径
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.resolve(relative).exists()
    }

    pub fn has_repository(&self) -> bool {
        self.exists(REPOSITORY_MARKER)
    }

    /// 读取文件；不存在时返回 `None`
    pub fn read_optional(&self, relative: impl AsRef<Path>) -> Result<Option<String>> {
        let path = self.resolve(relative);
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| DomainError::Io(format!("{}: {}", path.display(), e)))?;
        Ok(Some(content))
    }

    /// 原地覆盖写入
    pub fn write(&self, relative: impl AsRef<Path>, content: &str) -> Result<()> {
        let path = self.resolve(relative);
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| DomainError::Io(e.to_string()))?;
        }
        fs::write(&path, content)
            .map_err(|e| DomainError::Io(format!("{}: {}", path.display(), e)))
    }

    /// 仅当文件不存在时写入，返回是否写入
    pub fn write_if_absent(&self, relative: impl AsRef<Path>, content: &str) -> Result<bool> {
        let relative = relative.as_ref();
        if self.exists(relative) {
            return Ok(false);
        }
        self.write(relative, content)?;
        Ok(true)
    }

    pub fn project_config_path(&self) -> PathBuf {
        self.resolve(PROJECT_CONFIG_FILE)
    }
}

/// 获取用户级配置目录
pub fn get_user_config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(USER_CONFIG_DIR))
        .ok_or_else(|| DomainError::Config("无法确定主目录".to_string()))
}

/// 用户级配置文件路径
pub fn get_user_config_path() -> Result<PathBuf> {
    Ok(get_user_config_dir()?.join("config.toml"))
}
