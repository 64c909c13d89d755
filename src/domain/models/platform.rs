//! 宿主平台

use serde::Serialize;
use std::fmt;

/// 决定外部命令调用方式的宿主平台
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// 当前编译目标的平台
    #[must_use]
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// 创建运行时环境使用的解释器
    #[must_use]
    pub fn python(&self) -> &'static str {
        match self {
            Platform::Windows => "python",
            Platform::Unix => "python3",
        }
    }

    /// 运行时环境中包安装器的相对路径
    #[must_use]
    pub fn pip_path(&self, env_dir: &str) -> String {
        match self {
            Platform::Windows => format!("{}\\Scripts\\pip.exe", env_dir),
            Platform::Unix => format!("{}/bin/pip", env_dir),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Unix => write!(f, "unix"),
        }
    }
}
