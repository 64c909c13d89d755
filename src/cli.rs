//! CLI 参数定义

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bootstrap - 项目初始化工具
#[derive(Parser, Debug)]
#[command(
    name = "bootstrap",
    version,
    about = "从项目模板初始化新项目",
    long_about = "交互式读取项目名称和仓库地址，创建运行时环境、安装依赖、替换模板占位符并初始化 Git 仓库"
)]
pub struct Cli {
    /// 不指定时执行 init
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 工作目录根（默认当前目录）
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// 额外的配置文件
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// 交互式初始化项目
    Init {
        /// 跳过文档生成
        #[arg(long)]
        skip_docs: bool,
    },

    /// 只生成文档
    Docs,

    /// 诊断当前工作目录
    Doctor,

    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommands),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Init { skip_docs: false }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// 显示生效的配置
    Show {
        /// 输出格式 (toml/json)
        #[arg(short, long, default_value = "toml")]
        format: String,
    },
    /// 在工作目录写入默认配置文件
    Init {
        #[arg(short, long)]
        force: bool,
    },
}

/// 输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "j" => OutputFormat::Json,
            _ => OutputFormat::Toml,
        }
    }
}
