//! 系统身份

use crate::domain::error::{DomainError, Result};
use crate::domain::ports::IdentityProvider;

/// 按顺序检查的登录名环境变量
const LOGIN_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// 从进程环境读取登录名，环境变量都未设置时回退到 passwd 条目
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentity;

impl SystemIdentity {
    fn from_env() -> Option<String> {
        LOGIN_VARS
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|v| !v.trim().is_empty())
    }
}

/// 当前有效用户 ID 对应的 passwd 用户名
#[cfg(unix)]
fn passwd_name() -> Option<String> {
    // SAFETY: getpwuid 返回指向静态存储的指针或空指针；在下一次调用前立即复制出名字
    unsafe {
        let entry = libc::getpwuid(libc::getuid());
        if entry.is_null() || (*entry).pw_name.is_null() {
            return None;
        }
        std::ffi::CStr::from_ptr((*entry).pw_name)
            .to_str()
            .ok()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

#[cfg(not(unix))]
fn passwd_name() -> Option<String> {
    None
}

impl IdentityProvider for SystemIdentity {
    fn username(&self) -> Result<String> {
        Self::from_env().or_else(passwd_name).ok_or_else(|| {
            DomainError::Config(format!(
                "无法确定当前用户名（已检查 {} 和 passwd）",
                LOGIN_VARS.join(", ")
            ))
        })
    }
}
