//! Infrastructure Layer - 端口适配器
//!
//! 文件系统、子进程、系统身份、配置与控制台

pub mod config;
pub mod console;
pub mod dotenv;
pub mod identity;
pub mod paths;
pub mod process;
